//! Delivery through a plain SMTP relay

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{Message, SmtpTransport, Transport};

use super::{Mailer, Notification};
use crate::config::Settings;
use crate::error::{VeeamrunError, VeeamrunResult};

/// Sends notifications through an unauthenticated, unencrypted relay
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.smtp_host.clone(), settings.smtp_port)
    }
}

fn mailbox(address: &str) -> VeeamrunResult<Mailbox> {
    address
        .parse()
        .map_err(|e| VeeamrunError::Mail(format!("Invalid address '{}': {}", address, e)))
}

/// Build the RFC 5322 message for a notification
pub fn build_message(notification: &Notification) -> VeeamrunResult<Message> {
    Message::builder()
        .from(mailbox(&notification.from)?)
        .to(mailbox(&notification.to)?)
        .subject(notification.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(notification.body.clone())
        .map_err(|e| VeeamrunError::Mail(format!("Failed to build message: {}", e)))
}

impl Mailer for SmtpMailer {
    fn send(&self, notification: &Notification) -> VeeamrunResult<()> {
        let message = build_message(notification)?;
        let transport = SmtpTransport::builder_dangerous(self.host.as_str())
            .port(self.port)
            .build();

        transport.send(&message).map_err(|e| {
            VeeamrunError::Mail(format!(
                "Failed to send mail through {}:{}: {}",
                self.host, self.port, e
            ))
        })?;

        Ok(())
    }
}
