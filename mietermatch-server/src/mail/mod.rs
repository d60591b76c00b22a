//! Verification mail dispatch via the Brevo transactional mail API
//!
//! The dispatcher decides whether to send (credential configured) and builds
//! the message; the transport performs the HTTP call. Provider failures are
//! logged and never surfaced to API callers.

pub mod dispatcher;
pub mod transport;

pub use dispatcher::{DispatchOutcome, VerificationDispatcher, DEMO_MODE_DETAILS};
pub use transport::{BrevoTransport, MailError, MailTransport, OutboundEmail, Recipient, Sender};
