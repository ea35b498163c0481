//! Error types for the case client.

use thiserror::Error;

/// Errors that can occur while querying cases.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Endpoint URL could not be parsed.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Network request failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("failed to fetch cases: HTTP {status}")]
    Status { status: u16, message: String },

    /// Response body was not a case payload.
    #[error("invalid case response: {0}")]
    Decode(#[from] case_model::ModelError),
}

impl ClientError {
    /// Returns a short message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidEndpoint { .. } => "The case endpoint URL is not valid.",
            Self::Network(_) => "Could not reach the case endpoint.",
            Self::Status { .. } => "Failed to fetch cases.",
            Self::Decode(_) => "The case endpoint returned an unexpected response.",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
