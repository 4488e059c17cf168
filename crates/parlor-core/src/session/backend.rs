//! Backend trait for answering user questions.

use async_trait::async_trait;

use crate::error::Result;

/// Answers a single question against a selected endpoint path.
///
/// This is the seam between the session and the wire: `parlor-interaction`
/// provides the HTTP implementation, and tests use in-memory mocks so the
/// submit contract can be exercised without a live server.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends `question` to `endpoint` and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `ParlorError::Network` when the request could not be sent or
    /// the response could not be read, and `ParlorError::Server` when the
    /// backend answered with a non-success status.
    async fn ask(&self, endpoint: &str, question: &str) -> Result<String>;
}
