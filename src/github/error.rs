//! Tracker API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    /// Caller-supplied input failed a precondition. Always raised before any
    /// network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The upstream request returned a non-success status. Carries the status
    /// text for diagnostics; a missing issue surfaces here as "Not Found".
    #[error("Failed to {action}: {status}")]
    Fetch { action: &'static str, status: String },

    #[error("Missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;
