//! Flashcard deck and flip cursor for StudyDesk.
//!
//! A fixed, ordered deck of question/answer cards browsed one at a time.
//! Nothing here is persisted.

mod cursor;
mod deck;

pub use cursor::*;
pub use deck::*;
