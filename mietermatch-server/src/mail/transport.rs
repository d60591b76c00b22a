//! Brevo transactional mail client
//!
//! Direct REST integration with `POST /v3/smtp/email`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Mail transport error
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("mail provider rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Sender identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sender {
    pub name: String,
    pub email: String,
}

/// Single recipient; `email` is forwarded as given, even when missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub email: Option<String>,
}

/// Request body for the transactional email endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEmail {
    pub sender: Sender,
    pub to: Vec<Recipient>,
    pub subject: String,
    pub html_content: String,
}

/// Delivers a single email to the provider.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), MailError>;
}

/// Brevo HTTP transport
#[derive(Debug, Clone)]
pub struct BrevoTransport {
    client: Client,
    api_url: String,
}

impl BrevoTransport {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl MailTransport for BrevoTransport {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", api_key)
            .header("content-type", "application/json")
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Provider error bodies can echo request data; keep logs short
            let body = if body.len() > 500 {
                let mut end = 500;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                format!("{}...", &body[..end])
            } else {
                body
            };
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
