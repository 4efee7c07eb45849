//! Error type shared by the API helpers, the auth service and the controllers.
//! Every failure is scoped to a single request; nothing here is fatal to the
//! process.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Local input check failed; no request was sent.
    #[error("{0}")]
    Validation(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    /// The owning view was torn down before the request settled.
    #[error("Request cancelled")]
    Cancelled,
}

impl AppError {
    /// Maps the error to the text shown to the user.
    /// Server-supplied and validation messages are shown as-is.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::Http { message, .. } => message.clone(),
            _ => self.to_string(),
        }
    }
}
