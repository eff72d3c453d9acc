//! Session identity for StudyDesk.
//!
//! This crate provides:
//! - Persisted key/value storage for the current user identity
//! - The [`Session`] context object that gates record operations

mod error;
mod session;
mod session_store;

pub use error::*;
pub use session::*;
pub use session_store::*;

/// Storage key under which the current user id is persisted.
pub const SESSION_KEY: &str = "student_user_id";

/// Entry point clients are sent to when no user is signed in.
pub const LOGIN_ENTRY_POINT: &str = "/index.html";
