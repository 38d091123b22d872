use std::{path::PathBuf, time::Duration};

/// Terminal failures of a single fetch. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// DNS, TLS, refused connection, or the transport's own timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx status or a body that does not match the expected schema.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("request did not complete within {0:?}")]
    DeadlineExceeded(Duration),
}

impl FetchError {
    pub fn is_deadline(&self) -> bool {
        matches!(self, FetchError::DeadlineExceeded(_))
    }
}

/// Problems with the local setup, detected before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "no API key provided.\n\
         Hint: set OPENWEATHERMAP_API_KEY or pass --api-key."
    )]
    MissingApiKey,

    #[error(
        "no location given and no default location configured.\n\
         Hint: pass --location <LOC> or run `weather --set-default-location <LOC>`."
    )]
    MissingLocation,

    #[error("could not determine platform config directory")]
    NoConfigDir,

    #[error("failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("failed to write config file {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
