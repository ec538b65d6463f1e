//! Mail delivery of the rendered dashboard.

use crate::utils::config::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT, MAIL_BODY, MAIL_SUBJECT};
use crate::utils::error::NotifyError;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::{debug, info};
use std::path::Path;

/// Something that can deliver the rendered dashboard to a person
pub trait Notifier {
    /// Send `attachment` to `recipient`
    fn notify(&self, attachment: &Path, recipient: &str) -> Result<(), NotifyError>;
}

/// SMTP notifier over implicit TLS
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    host: String,
    port: u16,
    sender: String,
    password: Option<String>,
    send: bool,
}

impl SmtpNotifier {
    /// Create a notifier for `sender`; nothing is sent until `with_send(true)`
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            sender: sender.into(),
            password: None,
            send: false,
        }
    }

    pub fn with_server(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    pub fn with_send(mut self, send: bool) -> Self {
        self.send = send;
        self
    }

    /// Build the message without sending it
    ///
    /// **Public** - exposed so the message layout can be inspected
    ///
    /// # Errors
    /// * `NotifyError::Address` - Sender or recipient is not a valid address
    /// * `NotifyError::Attachment` - The attachment cannot be read
    pub fn build_message(&self, attachment: &Path, recipient: &str) -> Result<Message, NotifyError> {
        let from: Mailbox = self.sender.parse()?;
        let to: Mailbox = recipient.parse()?;

        let bytes = std::fs::read(attachment)?;
        let filename = attachment
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "feedlog.png".to_string());
        let content_type = ContentType::parse("application/octet-stream")
            .map_err(|e| NotifyError::ContentType(e.to_string()))?;

        debug!("Attaching {} ({} bytes)", filename, bytes.len());

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(MAIL_SUBJECT)
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(MAIL_BODY.to_string()))
                    .singlepart(Attachment::new(filename).body(bytes, content_type)),
            )?;

        Ok(message)
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, attachment: &Path, recipient: &str) -> Result<(), NotifyError> {
        let message = self.build_message(attachment, recipient)?;

        if !self.send {
            info!(
                "Mail sending disabled, skipping delivery of {} to {}",
                attachment.display(),
                recipient
            );
            return Ok(());
        }

        let password = self
            .password
            .clone()
            .ok_or(NotifyError::MissingCredentials)?;

        info!("Sending mail to {} via {}:{}", recipient, self.host, self.port);

        let mailer = SmtpTransport::relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(self.sender.clone(), password))
            .build();
        mailer.send(&message)?;

        info!("Mail sent to {}", recipient);
        Ok(())
    }
}
