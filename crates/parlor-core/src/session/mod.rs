//! Session domain module.
//!
//! This module contains the session-related domain models, the backend
//! seam, and the session manager.
//!
//! # Module Structure
//!
//! - `message`: Transcript message types (`MessageRole`, `ChatMessage`)
//! - `transcript`: Ordered message history (`Transcript`)
//! - `state`: Send-state machine (`SendState`)
//! - `backend`: Backend trait for answering questions (`ChatBackend`)
//! - `manager`: The conversation manager (`ChatSession`)

mod backend;
mod manager;
mod message;
mod state;
mod transcript;

// Re-export public API
pub use backend::ChatBackend;
pub use manager::{ChatSession, SubmitOutcome, FAILURE_REPLY};
pub use message::{ChatMessage, MessageRole};
pub use state::SendState;
pub use transcript::Transcript;
