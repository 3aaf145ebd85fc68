//! Cross-cutting error types for the 42Nexus client.
//!
//! Transport and storage errors live in their own crates (`ApiError`,
//! `AuthError`, `ConfigError`). `nexus-cli` converges them through `anyhow`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required form field was left empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A poll was submitted with fewer than two non-empty options.
    #[error("At least 2 options required")]
    TooFewOptions { provided: usize },

    /// A value could not be parsed into one of the domain enums.
    #[error("invalid {field} '{value}'")]
    InvalidValue { field: &'static str, value: String },
}
