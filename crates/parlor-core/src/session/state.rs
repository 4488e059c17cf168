//! Send-state types for session state management.

use serde::{Deserialize, Serialize};

/// Represents the per-submission state of a session.
///
/// `Sending` is entered only from `Idle`, and both the success and the
/// failure path return to `Idle` unconditionally. While `Sending`, new
/// submissions are rejected rather than queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendState {
    /// The session is waiting for user input.
    #[default]
    Idle,
    /// One request is in flight; the session is waiting for the reply.
    Sending,
}

impl SendState {
    /// Returns `true` when a request is in flight.
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}
