//! Error types for ghorg

use thiserror::Error;

/// Result type alias for ghorg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Errors raised while fetching or reading API payloads
#[derive(Debug, Error)]
pub enum ApiError {
    /// A key along a nested path was absent at its level.
    #[error("Missing key: {0:?}")]
    MissingKey(String),

    /// Transport failure, kept exactly as reqwest reported it.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected value at {key:?}: expected {expected}")]
    UnexpectedType { key: String, expected: &'static str },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(ApiError::Transport(err))
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "Organization not specified. Pass one as an argument or run `ghorg config set-org <ORG>`."
    )]
    MissingOrg,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl Error {
    /// The key named by a `MissingKey` failure, if this is one.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Error::Api(ApiError::MissingKey(key)) => Some(key),
            _ => None,
        }
    }
}
