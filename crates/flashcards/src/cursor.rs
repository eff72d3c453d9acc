//! Cursor and flip state over a deck.

use serde::{Deserialize, Serialize};

use crate::{Deck, Flashcard};

/// Notice shown when trying to move past the last card.
pub const END_OF_DECK_NOTICE: &str = "You've reached the end!";

/// Result of [`FlashcardCursor::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// Moved to the following card.
    Advanced,
    /// Already on the last card; nothing changed.
    EndOfDeck,
}

/// What a client needs to render the current card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Front side.
    pub question: String,
    /// Back side.
    pub answer: String,
    /// Zero-based position in the deck.
    pub position: usize,
    /// Number of cards in the deck.
    pub total: usize,
    /// Whether the answer side is showing.
    pub flipped: bool,
    /// Human readable position, e.g. "Card 1 of 5".
    pub counter: String,
}

/// A position in a deck plus whether the current card is flipped.
///
/// Starts on the first card, question side up. Moving to another card always
/// turns it question side up again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardCursor {
    deck: Deck,
    index: usize,
    flipped: bool,
}

impl FlashcardCursor {
    /// Creates a cursor on the first card of `deck`.
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            index: 0,
            flipped: false,
        }
    }

    /// Zero-based index of the current card.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the current card shows its answer.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// The current card.
    pub fn current(&self) -> &Flashcard {
        // `index` stays within the non-empty deck.
        &self.deck.cards()[self.index]
    }

    /// Turns the current card over.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Moves to the next card, or reports the end of the deck.
    pub fn next(&mut self) -> NextOutcome {
        if self.index + 1 < self.deck.len() {
            self.index += 1;
            self.flipped = false;
            NextOutcome::Advanced
        } else {
            NextOutcome::EndOfDeck
        }
    }

    /// Moves to the previous card. Does nothing on the first card.
    pub fn prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
        }
    }

    /// Snapshot of the current card for display.
    pub fn view(&self) -> CardView {
        let card = self.current();
        CardView {
            question: card.question.clone(),
            answer: card.answer.clone(),
            position: self.index,
            total: self.deck.len(),
            flipped: self.flipped,
            counter: format!("Card {} of {}", self.index + 1, self.deck.len()),
        }
    }
}

impl Default for FlashcardCursor {
    fn default() -> Self {
        Self::new(Deck::builtin())
    }
}
