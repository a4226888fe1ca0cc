//! Error types shared by the site crates.

use thiserror::Error;

/// Failures raised while wiring or running site behaviour.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SiteError {
    /// Configuration could not be decoded.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// A required collaborator is absent from the markup.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),

    /// Audio output could not be produced.
    #[error("audio unavailable: {0}")]
    Audio(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// A single form field failed validation. Carries the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0}")]
    Required(String),

    #[error("{0}")]
    InvalidEmail(String),
}

impl FieldError {
    pub fn message(&self) -> &str {
        match self {
            FieldError::Required(msg) | FieldError::InvalidEmail(msg) => msg,
        }
    }
}
