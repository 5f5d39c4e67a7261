//! Authentication module for Gmailer
//!
//! Holds the OAuth2 credential set used to send mail through Gmail and
//! loads it from configuration.

mod config;
mod credentials;
mod error;

pub use config::{CredentialsConfig, ENV_PREFIX};
pub use credentials::OAuth2Credentials;
pub use error::{AuthError, AuthResult};

/// Gmail OAuth2 configuration
pub mod gmail {
    /// Transport service name for Gmail
    pub const SERVICE: &str = "gmail";

    /// Gmail SMTP server
    pub const SMTP_HOST: &str = "smtp.gmail.com";
    pub const SMTP_PORT: u16 = 587;
}
