//! HTTP API definitions for StudyDesk
//!
//! This crate defines the JSON bodies exchanged between the StudyDesk server
//! and its clients, along with the error envelope and error codes.

mod error;
pub mod requests;
pub mod responses;

pub use error::*;
