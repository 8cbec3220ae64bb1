// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status
    #[error(
        "Request failed with status {status}: {}",
        .message.as_deref().unwrap_or("no details")
    )]
    Api { status: u16, message: Option<String> },
    /// A 2xx body that does not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
    /// Rejected locally, no request was sent
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// Message to show the user: the server's own text for API errors, the
    /// validation text for local rejections, `fallback` otherwise.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            DomainError::Api {
                message: Some(message),
                ..
            } => message,
            DomainError::Validation(message) => message,
            _ => fallback,
        }
    }
}
