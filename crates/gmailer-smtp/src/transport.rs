//! Transport seam
//!
//! `MailClient` never talks to a mail server itself. It builds a
//! [`TransportConfig`], asks a [`TransportFactory`] for a [`Transport`] and
//! hands it one [`OutgoingMessage`].

use crate::{OutgoingMessage, SmtpResult, TransportError};
use async_trait::async_trait;
use gmailer_auth::{gmail, OAuth2Credentials};
use std::fmt;

/// Authentication scheme requested from the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    OAuth2,
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthKind::OAuth2 => write!(f, "OAuth2"),
        }
    }
}

/// Auth block of a transport configuration
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub kind: AuthKind,
    pub user: String,
    pub client_id: String,
    pub client_secret: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthConfig {
    /// OAuth2 auth block carrying every credential field
    pub fn oauth2(credentials: &OAuth2Credentials) -> Self {
        Self {
            kind: AuthKind::OAuth2,
            user: credentials.user().to_string(),
            client_id: credentials.client_id().to_string(),
            client_secret: credentials.client_secret().to_string(),
            access_token: credentials.access_token().to_string(),
            refresh_token: credentials.refresh_token().to_string(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("kind", &self.kind)
            .field("user", &self.user)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// Configuration a transport is created from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Mail service name (e.g., "gmail")
    pub service: String,
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port
    pub port: u16,
    pub auth: AuthConfig,
}

impl TransportConfig {
    /// Gmail over SMTP, authenticated with the given OAuth2 credentials
    pub fn gmail(credentials: &OAuth2Credentials) -> Self {
        Self {
            service: gmail::SERVICE.to_string(),
            host: gmail::SMTP_HOST.to_string(),
            port: gmail::SMTP_PORT,
            auth: AuthConfig::oauth2(credentials),
        }
    }
}

/// Result of a successful delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendInfo {
    /// Message-ID of the sent message
    pub message_id: String,
    /// Final server response, if the transport reports one
    pub response: Option<String>,
}

impl SendInfo {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            response: None,
        }
    }
}

/// Something that can deliver one message
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver the message, resolving once the transport reports completion
    async fn send_mail(&self, message: &OutgoingMessage) -> Result<SendInfo, TransportError>;
}

/// Creates transports from a configuration
#[cfg_attr(test, mockall::automock)]
pub trait TransportFactory: Send + Sync {
    fn create_transport(&self, config: &TransportConfig) -> SmtpResult<Box<dyn Transport>>;
}
