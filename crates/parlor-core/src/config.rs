//! Client configuration.
//!
//! All fields are defaulted so a missing config file yields a working
//! session against a local backend.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ParlorError, Result};

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default chat endpoint path (in-memory chat memory).
pub const DEFAULT_CHAT_PATH: &str = "/api/chat";
/// Vector-store chat memory endpoint path.
pub const DEFAULT_VECTOR_PATH: &str = "/api/chat/vector";

/// One selectable endpoint: a display label and the path posted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointChoice {
    pub label: String,
    pub path: String,
}

/// Configuration for the chat client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL the endpoint paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// The fixed set of selectable endpoints.
    #[serde(default = "default_endpoints", rename = "endpoint")]
    pub endpoints: Vec<EndpointChoice>,
    /// The endpoint path selected at startup.
    #[serde(default = "default_chat_path")]
    pub default_path: String,
    /// Whether backend replies are rendered verbatim. When false (the
    /// default) markup is stripped before display; the transcript always
    /// stores the raw body either way.
    #[serde(default)]
    pub trust_markup: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_chat_path() -> String {
    DEFAULT_CHAT_PATH.to_string()
}

fn default_endpoints() -> Vec<EndpointChoice> {
    vec![
        EndpointChoice {
            label: "In-Memory".to_string(),
            path: DEFAULT_CHAT_PATH.to_string(),
        },
        EndpointChoice {
            label: "Vector Store".to_string(),
            path: DEFAULT_VECTOR_PATH.to_string(),
        },
    ]
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoints: default_endpoints(),
            default_path: default_chat_path(),
            trust_markup: false,
        }
    }
}

impl ChatConfig {
    /// Loads configuration from `path`, or from the default location when
    /// no path is given.
    ///
    /// A missing file at the default location falls back to defaults; an
    /// explicitly given path that does not exist is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// explicit path does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if explicit {
                return Err(ParlorError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Returns the default config file location, e.g.
    /// `~/.config/parlor/config.toml` on Linux.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("parlor").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_both_memory_backends() {
        let config = ChatConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_path, DEFAULT_CHAT_PATH);
        assert_eq!(config.endpoints.len(), 2);
        assert_eq!(config.endpoints[1].path, DEFAULT_VECTOR_PATH);
        assert!(!config.trust_markup);
    }

    #[test]
    fn loads_full_config_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
base_url = "https://chat.example.com"
default_path = "/ask"
trust_markup = true

[[endpoint]]
label = "Default"
path = "/ask"

[[endpoint]]
label = "Recall"
path = "/ask/recall"
"#
        )
        .unwrap();

        let config = ChatConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "https://chat.example.com");
        assert_eq!(config.default_path, "/ask");
        assert!(config.trust_markup);
        assert_eq!(config.endpoints[1].label, "Recall");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"base_url = "http://10.0.0.2:9090""#).unwrap();

        let config = ChatConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:9090");
        assert_eq!(config.default_path, DEFAULT_CHAT_PATH);
        assert_eq!(config.endpoints.len(), 2);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChatConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ParlorError::Config(_)));
    }

    #[test]
    fn invalid_toml_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "base_url = [not toml").unwrap();

        let err = ChatConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ParlorError::Serialization { .. }));
    }
}
