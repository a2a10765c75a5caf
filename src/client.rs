//! HTTP submission client — the form controller's path to the email API.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;

use crate::forms::record::FormRecord;

/// Successful dispatch as reported by the server.
#[derive(Debug, Clone)]
pub struct Submission {
    pub message: String,
    pub message_id: Option<String>,
}

/// Why a submission did not go through.
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// The server answered with an error status; carries its message.
    Rejected(String),
    /// The endpoint could not be reached at all.
    Transport(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected(msg) => write!(f, "{msg}"),
            SubmitError::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

/// One-shot form submission. Exactly one attempt per call; whether and when
/// to retry is the caller's decision.
#[async_trait]
pub trait SubmitClient: Send + Sync {
    async fn submit(&self, record: &FormRecord) -> Result<Submission, SubmitError>;
}

#[derive(Deserialize)]
struct ApiEnvelope {
    #[allow(dead_code)]
    status: Option<String>,
    message: Option<String>,
    message_id: Option<String>,
}

/// Client against the real `/api/send-email` endpoint.
pub struct ApiClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>) -> ApiClient {
        ApiClient {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SubmitClient for ApiClient {
    async fn submit(&self, record: &FormRecord) -> Result<Submission, SubmitError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let envelope: ApiEnvelope = response
                .json()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            return Ok(Submission {
                message: envelope
                    .message
                    .unwrap_or_else(|| "Email sent successfully.".to_string()),
                message_id: envelope.message_id,
            });
        }

        // Prefer the server's own message; fall back to the bare status when
        // the body is not the expected envelope.
        let message = match response.json::<ApiEnvelope>().await {
            Ok(envelope) => envelope
                .message
                .unwrap_or_else(|| format!("API request failed with status: {}", status.as_u16())),
            Err(_) => format!("API request failed with status: {}", status.as_u16()),
        };
        Err(SubmitError::Rejected(message))
    }
}
