//! Flashcard viewer API endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use flashcards::{END_OF_DECK_NOTICE, NextOutcome};
use record_store::DocumentStore;
use rpc_protocol::responses::FlashcardResponse;

use crate::state::AppState;

/// Gets the card currently shown.
pub async fn current_card<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<FlashcardResponse> {
    let cursor = state.flashcards.read().await;

    Json(FlashcardResponse {
        card: cursor.view(),
        end_of_deck: false,
        notice: None,
    })
}

/// Turns the current card over.
pub async fn flip_card<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<FlashcardResponse> {
    let mut cursor = state.flashcards.write().await;
    cursor.flip();

    Json(FlashcardResponse {
        card: cursor.view(),
        end_of_deck: false,
        notice: None,
    })
}

/// Moves to the next card.
pub async fn next_card<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<FlashcardResponse> {
    let mut cursor = state.flashcards.write().await;
    let end_of_deck = cursor.next() == NextOutcome::EndOfDeck;

    Json(FlashcardResponse {
        card: cursor.view(),
        end_of_deck,
        notice: end_of_deck.then(|| END_OF_DECK_NOTICE.to_string()),
    })
}

/// Moves to the previous card.
pub async fn prev_card<S: DocumentStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<FlashcardResponse> {
    let mut cursor = state.flashcards.write().await;
    cursor.prev();

    Json(FlashcardResponse {
        card: cursor.view(),
        end_of_deck: false,
        notice: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;

    #[tokio::test]
    async fn test_flashcard_navigation() {
        let state = test_state().await;

        let Json(start) = current_card(State(state.clone())).await;
        assert_eq!(start.card.position, 0);
        assert_eq!(start.card.counter, "Card 1 of 5");

        let Json(flipped) = flip_card(State(state.clone())).await;
        assert!(flipped.card.flipped);

        let Json(moved) = next_card(State(state.clone())).await;
        assert_eq!(moved.card.position, 1);
        assert!(!moved.card.flipped);

        let Json(back) = prev_card(State(state.clone())).await;
        assert_eq!(back.card.position, 0);
        let Json(still) = prev_card(State(state.clone())).await;
        assert_eq!(still.card.position, 0);

        for _ in 0..4 {
            next_card(State(state.clone())).await;
        }
        let Json(end) = next_card(State(state)).await;
        assert!(end.end_of_deck);
        assert_eq!(end.card.position, 4);
        assert_eq!(end.notice.as_deref(), Some(END_OF_DECK_NOTICE));
    }
}
