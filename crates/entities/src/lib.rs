//! Core record definitions for StudyDesk.
//!
//! This crate defines the typed records persisted by the study backend
//! (users, tasks, study sessions and reflections), the validation rules
//! enforced when they are constructed, and the dashboard aggregation over
//! already-fetched records.

mod dashboard;
mod record;
mod reflection;
mod study_session;
mod task;
mod user;
mod validation;

pub use dashboard::*;
pub use record::*;
pub use reflection::*;
pub use study_session::*;
pub use task::*;
pub use user::*;
pub use validation::*;
