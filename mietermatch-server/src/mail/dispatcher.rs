//! Verification dispatcher
//!
//! Without a provider credential every send is a no-op that reports demo
//! mode. With a credential the message is handed to the transport and the
//! outcome is logged but not returned.

use std::sync::Arc;

use super::transport::{BrevoTransport, MailTransport, OutboundEmail, Recipient, Sender};
use crate::config::MailerConfig;

/// Subject line of verification mails
pub const VERIFICATION_SUBJECT: &str = "Dein Verifizierungscode";

/// Diagnostic marker returned when no credential is configured
pub const DEMO_MODE_DETAILS: &str = "Demo-Modus";

/// What a dispatch call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handed to the provider (delivery not confirmed)
    Submitted,
    /// No credential configured; nothing sent
    DemoMode,
    /// Accepted without side effect
    Skipped,
}

impl DispatchOutcome {
    /// Diagnostic detail for API responses, if any
    pub fn details(self) -> Option<&'static str> {
        match self {
            Self::DemoMode => Some(DEMO_MODE_DETAILS),
            Self::Submitted | Self::Skipped => None,
        }
    }
}

/// Sends verification codes through a [`MailTransport`]
#[derive(Clone)]
pub struct VerificationDispatcher {
    api_key: Option<String>,
    sender: Sender,
    transport: Arc<dyn MailTransport>,
}

impl VerificationDispatcher {
    /// Build a dispatcher backed by the Brevo HTTP transport
    pub fn from_config(config: &MailerConfig) -> Self {
        Self::with_transport(config, Arc::new(BrevoTransport::new(&config.api_url)))
    }

    /// Build a dispatcher with an explicit transport (for testing)
    pub fn with_transport(config: &MailerConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            api_key: config.api_key.clone(),
            sender: Sender {
                name: config.sender_name.clone(),
                email: config.sender_email.clone(),
            },
            transport,
        }
    }

    /// Whether a provider credential is configured
    pub fn is_active(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the verification message. The code is embedded verbatim.
    pub fn verification_email(&self, email: Option<&str>, code: Option<&str>) -> OutboundEmail {
        OutboundEmail {
            sender: self.sender.clone(),
            to: vec![Recipient {
                email: email.map(str::to_owned),
            }],
            subject: VERIFICATION_SUBJECT.to_string(),
            html_content: format!("<h1>{}</h1>", code.unwrap_or_default()),
        }
    }

    /// Send a one-time code to `email`.
    ///
    /// Never fails: provider errors are logged and swallowed.
    pub async fn send_verification(
        &self,
        email: Option<&str>,
        code: Option<&str>,
    ) -> DispatchOutcome {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::info!(email = ?email, "no mail credential configured, skipping verification mail");
            return DispatchOutcome::DemoMode;
        };

        let message = self.verification_email(email, code);
        match self.transport.send(api_key, &message).await {
            Ok(()) => tracing::info!(email = ?email, "verification mail submitted"),
            Err(e) => tracing::warn!(email = ?email, error = %e, "verification mail failed"),
        }

        DispatchOutcome::Submitted
    }

    /// Offer notification. Accepted and ignored.
    pub async fn send_offer(&self, email: Option<&str>, property_title: Option<&str>) -> DispatchOutcome {
        tracing::debug!(email = ?email, property_title = ?property_title, "offer notification ignored");
        DispatchOutcome::Skipped
    }
}

impl std::fmt::Debug for VerificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationDispatcher")
            .field("active", &self.is_active())
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}
