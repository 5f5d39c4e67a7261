//! Error types for sending mail

use gmailer_auth::AuthError;
use thiserror::Error;

/// Result type for send operations
pub type SmtpResult<T> = Result<T, SmtpError>;

/// A required send parameter was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email sender is missing")]
    MissingSender,

    #[error("Missing recipients")]
    MissingRecipients,

    #[error("Direct recipient is missing(to)")]
    MissingTo,

    #[error("Email subject is missing")]
    MissingSubject,

    #[error("Email content is missing")]
    MissingContent,
}

/// Failure reported by a transport, carrying its raw detail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

/// Errors that can occur while sending mail
#[derive(Debug, Error)]
pub enum SmtpError {
    /// Credential set was incomplete
    #[error(transparent)]
    Credentials(#[from] AuthError),

    /// Send request was incomplete
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport accepted the request but failed to deliver it
    #[error("Can not send email. Stack trace: {0}")]
    Delivery(#[from] TransportError),

    /// Transport could not be created
    #[error("Failed to connect to SMTP server: {0}")]
    ConnectionFailed(String),
}
