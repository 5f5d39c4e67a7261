//! Gmail client: credential holder and mail sender

use crate::{
    LettreTransportFactory, OutgoingMessage, Recipients, SendInfo, SmtpError, SmtpResult,
    TransportConfig, TransportFactory,
};
use gmailer_auth::OAuth2Credentials;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sends mail through Gmail on behalf of one OAuth2 identity
#[derive(Clone)]
pub struct MailClient {
    credentials: OAuth2Credentials,
    transports: Arc<dyn TransportFactory>,
}

impl MailClient {
    /// Create a client, failing on the first missing credential.
    ///
    /// Mail is delivered through [`LettreTransportFactory`].
    pub fn new(
        user: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> SmtpResult<Self> {
        let credentials =
            OAuth2Credentials::new(user, client_id, client_secret, access_token, refresh_token)?;
        Ok(Self::from_credentials(credentials))
    }

    /// Create a client from an already validated credential set
    pub fn from_credentials(credentials: OAuth2Credentials) -> Self {
        Self::with_transport_factory(credentials, Arc::new(LettreTransportFactory))
    }

    /// Create a client that obtains its transports from `transports`
    pub fn with_transport_factory(
        credentials: OAuth2Credentials,
        transports: Arc<dyn TransportFactory>,
    ) -> Self {
        Self {
            credentials,
            transports,
        }
    }

    pub fn credentials(&self) -> &OAuth2Credentials {
        &self.credentials
    }

    pub fn user(&self) -> &str {
        self.credentials.user()
    }

    pub fn client_id(&self) -> &str {
        self.credentials.client_id()
    }

    pub fn client_secret(&self) -> &str {
        self.credentials.client_secret()
    }

    pub fn access_token(&self) -> &str {
        self.credentials.access_token()
    }

    pub fn refresh_token(&self) -> &str {
        self.credentials.refresh_token()
    }

    /// Send one HTML email.
    ///
    /// Parameters are checked before anything else happens, in order:
    /// sender, recipients, direct recipients, subject, content. Each list in
    /// `recipients` is joined with `", "` and left out when empty.
    ///
    /// A transport failure is returned as [`SmtpError::Delivery`].
    pub async fn send_email(
        &self,
        sender: &str,
        recipients: Option<&Recipients>,
        subject: &str,
        content: &str,
    ) -> SmtpResult<SendInfo> {
        let message = OutgoingMessage::build(sender, recipients, subject, content)?;

        let config = TransportConfig::gmail(&self.credentials);
        let transport = self.transports.create_transport(&config)?;

        debug!("Sending email from {} to {}", message.from, message.to);
        match transport.send_mail(&message).await {
            Ok(sent) => {
                info!("Message sent: {}", sent.message_id);
                Ok(sent)
            }
            Err(e) => {
                warn!("Email delivery failed: {}", e);
                Err(SmtpError::Delivery(e))
            }
        }
    }
}

impl std::fmt::Debug for MailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailClient")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
