//! Flashcard deck definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Front side.
    pub question: String,
    /// Back side.
    pub answer: String,
}

impl Flashcard {
    /// Creates a new flashcard.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Errors raised when building a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A deck needs at least one card.
    #[error("a deck needs at least one card")]
    Empty,
}

/// A fixed, ordered, non-empty list of flashcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    /// Creates a deck from `cards`.
    pub fn new(cards: Vec<Flashcard>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { cards })
    }

    /// The built-in web fundamentals deck.
    pub fn builtin() -> Self {
        Self {
            cards: vec![
                Flashcard::new("What does HTML stand for?", "HyperText Markup Language"),
                Flashcard::new(
                    "What is the purpose of CSS?",
                    "CSS (Cascading Style Sheets) is used to style and layout web pages.",
                ),
                Flashcard::new("What is a Variable?", "A container for storing data values."),
                Flashcard::new(
                    "What is an Array?",
                    "A special variable, which can hold more than one value at a time.",
                ),
                Flashcard::new(
                    "What is the DOM?",
                    "The Document Object Model. It represents the page so programs can change the document structure, style, and content.",
                ),
            ],
        }
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; decks are never empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`.
    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    /// All cards in order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::builtin()
    }
}
