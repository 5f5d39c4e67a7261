//! Error types for the auth module

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur while assembling an OAuth2 credential set
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user (email identity) was supplied
    #[error("OAuth2 user is missing")]
    MissingUser,

    /// No OAuth2 client id was supplied
    #[error("OAuth2 client id is missing")]
    MissingClientId,

    /// No OAuth2 client secret was supplied
    #[error("OAuth2 client secret is missing")]
    MissingClientSecret,

    /// No access token was supplied
    #[error("OAuth2 access token is missing.")]
    MissingAccessToken,

    /// No refresh token was supplied
    #[error("OAuth2 refresh token is missing. Please obtain refresh token and put in your configuration")]
    MissingRefreshToken,

    /// Credential configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for AuthError {
    fn from(e: serde_json::Error) -> Self {
        AuthError::InvalidConfig(e.to_string())
    }
}
