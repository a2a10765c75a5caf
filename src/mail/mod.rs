//! Mail dispatch behind an object-safe trait so the HTTP layer and tests
//! never touch a live SMTP transport directly.

pub mod templates;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use rand::{Rng, distr::Alphanumeric};

use crate::config::AppConfig;

#[derive(Debug)]
pub enum MailError {
    /// The message itself could not be assembled (bad address, bad header).
    Build(String),
    /// The provider refused or the relay was unreachable.
    Transport(String),
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Build(e) => write!(f, "Failed to build email: {e}"),
            MailError::Transport(e) => write!(f, "Failed to send email: {e}"),
        }
    }
}

/// One send per call, no batching, no retry. Returns the message id handed
/// back in the HTTP response.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        to: &str,
        from: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, MailError>;
}

/// Compact alphanumeric message id (22 chars, URL-safe).
fn message_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(22)
        .map(char::from)
        .collect()
}

/// Live SMTP dispatcher (STARTTLS relay with credentials).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the transport from configuration. The 15 second timeout bounds
    /// how long a single dispatch can hold a request open.
    pub fn new(config: &AppConfig) -> Result<SmtpMailer, MailError> {
        let creds = Credentials::new(config.email_user.clone(), config.email_pass.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(creds)
            .timeout(Some(Duration::from_secs(15)))
            .build();
        Ok(SmtpMailer { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(
        &self,
        to: &str,
        from: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, MailError> {
        let email = Message::builder()
            .from(from.parse().map_err(|e| MailError::Build(format!("{e}")))?)
            .to(to.parse().map_err(|e| MailError::Build(format!("{e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        let id = message_id();
        log::info!("Email sent: {id} (to: {to})");
        Ok(id)
    }
}

/// Credential-less fallback: logs the email instead of sending it, so a
/// development box can exercise the whole pipeline.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(
        &self,
        to: &str,
        _from: &str,
        subject: &str,
        html: &str,
    ) -> Result<String, MailError> {
        let id = message_id();
        log::info!("[LogMailer] Would send {id} to {to}: {subject}\n{html}");
        Ok(id)
    }
}
