//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the 42Nexus API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401: the token is missing, expired, or revoked.
    #[error("not authorized: run `nexus auth login`")]
    Unauthorized {
        /// Server `detail`, if the body carried one.
        detail: Option<String>,
    },

    /// The API returned another non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// FastAPI `detail` message, if present.
        detail: Option<String>,
        /// `detail` when present, the raw response body otherwise.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The server's human-readable message, when it sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Api { detail, .. } => detail.as_deref(),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}
