//! Mail sending for Gmailer
//!
//! Validates a send request, formats its recipient lists and hands the
//! resulting message to an SMTP transport authenticated with XOAUTH2.

mod client;
mod error;
mod message;
mod recipients;
mod smtp;
mod transport;

pub use client::MailClient;
pub use error::{SmtpError, SmtpResult, TransportError, ValidationError};
pub use message::OutgoingMessage;
pub use recipients::{format_recipients, Recipients, ADDRESS_SEPARATOR};
pub use smtp::{build_lettre_message, LettreTransport, LettreTransportFactory};
pub use transport::{AuthConfig, AuthKind, SendInfo, Transport, TransportConfig, TransportFactory};
