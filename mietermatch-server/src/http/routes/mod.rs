//! Route handlers organized by resource

pub mod health;
pub mod landlords;
pub mod notifications;
pub mod status;
pub mod tenants;

use serde::Serialize;

/// `{success: true}` acknowledgment, optionally with a diagnostic detail
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'static str>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            success: true,
            details: None,
        }
    }

    pub fn with_details(details: Option<&'static str>) -> Self {
        Self {
            success: true,
            details,
        }
    }
}
