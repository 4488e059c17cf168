//! Form-encoded HTTP backend.

use async_trait::async_trait;
use parlor_core::session::ChatBackend;
use parlor_core::{ParlorError, Result};
use reqwest::Client;
use tracing::debug;

/// Talks to the question/answer backend.
///
/// The wire contract is a single `POST <base_url><endpoint>` with an
/// `application/x-www-form-urlencoded` body carrying one `question` field.
/// Any success status is treated as a reply; everything else is an error
/// for the session to collapse. No auth headers, no request timeout.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a backend for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn ask(&self, endpoint: &str, question: &str) -> Result<String> {
        let url = self.url_for(endpoint);
        debug!(url = %url, "posting question");

        let response = self
            .client
            .post(&url)
            .form(&[("question", question)])
            .send()
            .await
            .map_err(|e| ParlorError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParlorError::server(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ParlorError::network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url_and_endpoint() {
        let backend = HttpBackend::new("http://localhost:8080/");
        assert_eq!(
            backend.url_for("/api/chat"),
            "http://localhost:8080/api/chat"
        );
        assert_eq!(
            backend.url_for("api/chat"),
            "http://localhost:8080/api/chat"
        );
    }
}
