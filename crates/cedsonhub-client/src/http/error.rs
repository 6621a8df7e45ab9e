/*
[INPUT]:  Error sources (HTTP, transport, serialization, configuration, credential)
[OUTPUT]: Structured error type consumed by the API facade
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the CedsonHub client
///
/// Operations never hand these to callers of [`crate::CedsonHubApi`]; the
/// facade turns every one of them into a "not responding" outcome. They
/// surface directly only from construction and configuration loading.
#[derive(Error, Debug)]
pub enum CedsonHubError {
    /// HTTP request failed (connect, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport reported a failure without a reqwest error behind it
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// API key shorter than the minimum length
    #[error("Invalid api key: expected at least {min} characters, got {length}")]
    InvalidApiKey { length: usize, min: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CedsonHubError {
    /// Check if the error happened while talking to the server
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            CedsonHubError::Http(_)
                | CedsonHubError::Transport(_)
                | CedsonHubError::Serialization(_)
                | CedsonHubError::UrlParse(_)
        )
    }

    /// Check if error comes from client setup rather than a call
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CedsonHubError::InvalidApiKey { .. }
                | CedsonHubError::Config(_)
                | CedsonHubError::ConfigFile(_)
                | CedsonHubError::Io(_)
        )
    }
}

/// Result type alias for CedsonHub operations
pub type Result<T> = std::result::Result<T, CedsonHubError>;
