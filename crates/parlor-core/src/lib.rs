//! Core session domain for the parlor chat client.
//!
//! A [`session::ChatSession`] mediates between user input and a single
//! question/answer backend endpoint: it keeps the transcript, serializes
//! submissions through an in-flight guard, and collapses request failures
//! into one fixed assistant reply. The wire lives behind the
//! [`session::ChatBackend`] trait so the contract is testable without a
//! server.

pub mod config;
pub mod error;
pub mod session;

// Re-export common error type
pub use error::{ParlorError, Result};
