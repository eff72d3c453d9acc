//! Document storage for StudyDesk
//!
//! This crate provides the capability surface the study backend needs from a
//! document database: insert with a generated id, equality-filtered query,
//! partial update, delete, and full-collection enumeration. It ships an
//! in-memory store and, behind the `sqlx` feature, a SQLite store.

mod error;
mod memory;
#[cfg(feature = "sqlx")]
mod sqlite;
mod traits;
pub mod typed;

pub use error::*;
pub use memory::*;
#[cfg(feature = "sqlx")]
pub use sqlite::*;
pub use traits::*;
