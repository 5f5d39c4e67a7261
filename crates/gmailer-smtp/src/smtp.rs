//! SMTP transport backed by lettre, authenticating with XOAUTH2

use crate::{
    AuthKind, OutgoingMessage, SendInfo, SmtpError, SmtpResult, Transport, TransportConfig,
    TransportError, TransportFactory,
};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, Mailboxes},
    transport::smtp::authentication::{Credentials, Mechanism},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

/// Creates lettre SMTP transports
#[derive(Debug, Clone, Copy, Default)]
pub struct LettreTransportFactory;

impl TransportFactory for LettreTransportFactory {
    fn create_transport(&self, config: &TransportConfig) -> SmtpResult<Box<dyn Transport>> {
        let mechanism = match config.auth.kind {
            AuthKind::OAuth2 => Mechanism::Xoauth2,
        };
        debug!(
            "Creating {} transport {}:{} ({})",
            config.service, config.host, config.port, config.auth.kind
        );

        // lettre's Xoauth2 mechanism expects the access token directly -
        // it constructs and encodes the XOAUTH2 string internally
        let inner = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| SmtpError::ConnectionFailed(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.auth.user.clone(),
                config.auth.access_token.clone(),
            ))
            .authentication(vec![mechanism])
            .build();

        Ok(Box::new(LettreTransport { inner }))
    }
}

/// One SMTP transport created by [`LettreTransportFactory`]
pub struct LettreTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

#[async_trait]
impl Transport for LettreTransport {
    async fn send_mail(&self, message: &OutgoingMessage) -> Result<SendInfo, TransportError> {
        let (lettre_message, message_id) = build_lettre_message(message)?;

        let response = self
            .inner
            .send(lettre_message)
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let lines: Vec<&str> = response.message().collect();
        debug!("SMTP server accepted {}: {}", message_id, response.code());

        Ok(SendInfo {
            message_id,
            response: Some(format!("{} {}", response.code(), lines.join(" "))),
        })
    }
}

/// Build a lettre Message from an OutgoingMessage.
///
/// Returns the message together with the Message-ID stamped on it.
pub fn build_lettre_message(msg: &OutgoingMessage) -> Result<(Message, String), TransportError> {
    let from: Mailbox = msg
        .from
        .parse()
        .map_err(|e| TransportError::new(format!("Invalid email address {}: {}", msg.from, e)))?;
    let message_id = generate_message_id(&from);

    let mut builder = Message::builder()
        .from(from)
        .subject(&msg.subject)
        .message_id(Some(message_id.clone()));

    for mailbox in parse_mailboxes(&msg.to)? {
        builder = builder.to(mailbox);
    }

    if let Some(ref cc) = msg.cc {
        for mailbox in parse_mailboxes(cc)? {
            builder = builder.cc(mailbox);
        }
    }

    if let Some(ref bcc) = msg.bcc {
        for mailbox in parse_mailboxes(bcc)? {
            builder = builder.bcc(mailbox);
        }
    }

    let message = builder
        .header(ContentType::TEXT_HTML)
        .body(msg.html.clone())
        .map_err(|e| TransportError::new(format!("Failed to build message: {}", e)))?;

    Ok((message, message_id))
}

/// Parse a comma-separated recipient list
fn parse_mailboxes(list: &str) -> Result<Mailboxes, TransportError> {
    list.parse()
        .map_err(|e| TransportError::new(format!("Invalid email address {}: {}", list, e)))
}

fn generate_message_id(from: &Mailbox) -> String {
    format!("<{}@{}>", uuid::Uuid::new_v4(), from.email.domain())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> OutgoingMessage {
        OutgoingMessage {
            from: "jane@gmail.com".to_string(),
            to: "a@x.com, b@x.com".to_string(),
            cc: Some("c@x.com".to_string()),
            bcc: Some("d@x.com, e@x.com".to_string()),
            subject: "Merged pull requests in last 24h".to_string(),
            html: "<h1>Foobar</h1>".to_string(),
        }
    }

    #[test]
    fn test_every_recipient_reaches_the_envelope() {
        let (lettre_message, _) = build_lettre_message(&message()).unwrap();
        assert_eq!(lettre_message.envelope().to().len(), 5);
    }

    #[test]
    fn test_message_id_uses_sender_domain() {
        let (_, message_id) = build_lettre_message(&message()).unwrap();
        assert!(message_id.starts_with('<'));
        assert!(message_id.ends_with("@gmail.com>"));
    }

    #[test]
    fn test_html_body() {
        let (lettre_message, _) = build_lettre_message(&message()).unwrap();
        let formatted = String::from_utf8(lettre_message.formatted()).unwrap();
        assert!(formatted.contains("Content-Type: text/html"));
        assert!(formatted.contains("<h1>Foobar</h1>"));
    }

    #[test]
    fn test_invalid_sender() {
        let mut msg = message();
        msg.from = "not an address".to_string();
        let err = build_lettre_message(&msg).unwrap_err();
        assert!(err.to_string().starts_with("Invalid email address not an address"));
    }

    #[test]
    fn test_invalid_cc() {
        let mut msg = message();
        msg.cc = Some("c@x.com, @@".to_string());
        assert!(build_lettre_message(&msg).is_err());
    }

    #[tokio::test]
    async fn test_factory_builds_oauth2_transport() {
        let credentials = gmailer_auth::OAuth2Credentials::new(
            "jane@gmail.com",
            "clientId",
            "clientSecret",
            "accessToken",
            "refreshToken",
        )
        .unwrap();
        let config = TransportConfig::gmail(&credentials);

        assert!(LettreTransportFactory.create_transport(&config).is_ok());
    }
}
