//! HTTP transport for the parlor chat client.
//!
//! Provides [`HttpBackend`], the `ChatBackend` implementation that posts
//! form-encoded questions to the configured backend.

mod http;

pub use http::HttpBackend;
