use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::backend::ChatBackend;
use super::message::ChatMessage;
use super::state::SendState;
use super::transcript::Transcript;

/// Fixed assistant reply shown when a request fails for any reason.
///
/// Network failures and non-success statuses are collapsed into this single
/// message; no status code or detail is surfaced to the user.
pub const FAILURE_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The exchange completed. The transcript gained exactly two entries,
    /// the user turn and the assistant turn (the reply body on success,
    /// [`FAILURE_REPLY`] on failure).
    Replied,
    /// Input was empty after trimming; nothing was sent or recorded.
    Empty,
    /// Another request is in flight; the attempt was dropped, not queued.
    Busy,
}

/// Mutable session state guarded by the manager's lock.
#[derive(Debug)]
struct SessionState {
    /// Opaque conversation identifier. Assigned at construction, cleared by
    /// a confirmed reset, never sent on the wire.
    conversation_id: Option<String>,
    /// Endpoint path used by subsequent submits.
    selected_endpoint: String,
    /// The in-flight guard.
    send_state: SendState,
    /// Rendered conversation history.
    transcript: Transcript,
}

/// A single chat conversation against a question/answer backend.
///
/// `ChatSession` is responsible for:
/// - Appending user and assistant turns to the transcript
/// - Serializing submissions through the in-flight guard
/// - Collapsing request failures into the fixed assistant reply
/// - Endpoint selection and conversation reset
///
/// State lives behind a `tokio::sync::RwLock`, so handlers take `&self` and
/// the session can be shared between the input loop and renderers.
pub struct ChatSession {
    state: RwLock<SessionState>,
    backend: Arc<dyn ChatBackend>,
}

impl ChatSession {
    /// Creates a new session with a fresh conversation id.
    ///
    /// # Arguments
    ///
    /// * `backend` - The backend used to answer questions
    /// * `default_endpoint` - The initially selected endpoint path
    pub fn new(backend: Arc<dyn ChatBackend>, default_endpoint: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(SessionState {
                conversation_id: Some(uuid::Uuid::new_v4().to_string()),
                selected_endpoint: default_endpoint.into(),
                send_state: SendState::Idle,
                transcript: Transcript::new(),
            }),
            backend,
        }
    }

    /// Submits user input as a question to the selected endpoint.
    ///
    /// Empty (after trimming) input and input submitted while a request is
    /// already in flight are rejected without touching the transcript or the
    /// network. Otherwise the user turn is appended, one request is issued,
    /// and the assistant turn is appended with either the raw response body
    /// or [`FAILURE_REPLY`].
    ///
    /// The in-flight guard is released on every exit path, so no failure is
    /// fatal to the session.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let question = text.trim();
        if question.is_empty() {
            return SubmitOutcome::Empty;
        }

        // Acquire the guard and record the user turn atomically.
        let endpoint = {
            let mut state = self.state.write().await;
            if state.send_state.is_sending() {
                debug!("submit rejected: a request is already in flight");
                return SubmitOutcome::Busy;
            }
            state.send_state = SendState::Sending;
            state.transcript.push(ChatMessage::user(question));
            state.selected_endpoint.clone()
        };

        info!(endpoint = %endpoint, "sending question");
        let reply = match self.backend.ask(&endpoint, question).await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "request failed, substituting fixed reply");
                FAILURE_REPLY.to_string()
            }
        };

        // Both the success and the failure arm land here: append the
        // assistant turn and return the session to Idle.
        let mut state = self.state.write().await;
        state.transcript.push(ChatMessage::assistant(reply));
        state.send_state = SendState::Idle;
        SubmitOutcome::Replied
    }

    /// Selects the endpoint path used by subsequent submits.
    ///
    /// The path is not validated against the configured set, and a request
    /// already in flight is unaffected.
    pub async fn select_endpoint(&self, path: impl Into<String>) {
        let path = path.into();
        info!(path = %path, "endpoint selected");
        let mut state = self.state.write().await;
        state.selected_endpoint = path;
    }

    /// Resets the conversation, clearing the transcript and the
    /// conversation id.
    ///
    /// The caller is expected to have asked the user first; `confirmed ==
    /// false` leaves everything untouched. No server-side notification is
    /// sent, and a request already in flight is not aborted (its reply will
    /// land in the fresh transcript).
    ///
    /// Returns `true` when the reset was applied.
    pub async fn reset_conversation(&self, confirmed: bool) -> bool {
        if !confirmed {
            debug!("conversation reset declined");
            return false;
        }
        let mut state = self.state.write().await;
        state.conversation_id = None;
        state.transcript.clear();
        info!("conversation reset");
        true
    }

    /// Returns a snapshot of the transcript.
    pub async fn transcript(&self) -> Transcript {
        self.state.read().await.transcript.clone()
    }

    /// Returns the currently selected endpoint path.
    pub async fn selected_endpoint(&self) -> String {
        self.state.read().await.selected_endpoint.clone()
    }

    /// Returns the conversation id, if one is set.
    pub async fn conversation_id(&self) -> Option<String> {
        self.state.read().await.conversation_id.clone()
    }

    /// Returns `true` while a request is in flight.
    pub async fn is_sending(&self) -> bool {
        self.state.read().await.send_state.is_sending()
    }
}
