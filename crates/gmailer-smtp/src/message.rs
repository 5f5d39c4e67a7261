//! Outgoing message object and send-parameter validation

use crate::recipients::{format_recipients, Recipients};
use crate::ValidationError;
use serde::Serialize;

/// Message handed to a transport.
///
/// Recipient lists are already formatted; `cc` and `bcc` are `None` when
/// the caller supplied no addresses for them and are then left out of the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    pub subject: String,
    /// HTML body
    pub html: String,
}

impl OutgoingMessage {
    /// Validate send parameters and build the message object.
    ///
    /// Parameters are checked in order: sender, recipients, direct
    /// recipients, subject, content. The first missing one is reported.
    pub fn build(
        sender: &str,
        recipients: Option<&Recipients>,
        subject: &str,
        content: &str,
    ) -> Result<Self, ValidationError> {
        if sender.is_empty() {
            return Err(ValidationError::MissingSender);
        }
        let recipients = recipients.ok_or(ValidationError::MissingRecipients)?;
        let to = format_recipients(recipients.to.as_deref()).ok_or(ValidationError::MissingTo)?;
        if subject.is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        if content.is_empty() {
            return Err(ValidationError::MissingContent);
        }

        Ok(Self {
            from: sender.to_string(),
            to,
            cc: format_recipients(recipients.cc.as_deref()),
            bcc: format_recipients(recipients.bcc.as_deref()),
            subject: subject.to_string(),
            html: content.to_string(),
        })
    }
}
