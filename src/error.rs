use thiserror::Error;

/// Errors that can occur while talking to the recipe service
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Transport-level failure (connection, TLS, timeout, body read)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not a valid meals envelope
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Search term was empty after trimming
    #[error("Search term cannot be empty")]
    EmptyQuery,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Terminal or export I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecipeError {
    /// Whether this error came from the network round trip rather than local input.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RecipeError::Request(_) | RecipeError::Status { .. } | RecipeError::Decode(_)
        )
    }
}
