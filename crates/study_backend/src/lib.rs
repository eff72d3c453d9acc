//! Study backend for StudyDesk
//!
//! Ties together the typed records, the document store and the session
//! identity: email login, task / study-session / reflection CRUD, and the
//! dashboard aggregation.

mod backend;
mod error;

pub use backend::*;
pub use error::*;
