use thiserror::Error;

/// Errors that can occur while talking to the recipe API or driving the page
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The search box was empty or whitespace only
    #[error("Please enter a search term")]
    EmptySearchTerm,

    /// The API answered without a result collection
    #[error("No recipes found for \"{0}\"")]
    NotFound(String),

    /// Failed to reach the API
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    StatusError(u16),

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read input or write rendered output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BrowserError {
    /// True for network, status and decode failures, as opposed to
    /// input errors and empty results.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BrowserError::FetchError(_) | BrowserError::StatusError(_) | BrowserError::DecodeError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
