//! Configuration - mail provider and store settings
//!
//! Configuration is loaded from environment variables once at startup:
//! - `BREVO_API_KEY`: provider credential (unset or empty = demo mode)
//! - `BREVO_SENDER_NAME`: sender display name (default: MieterMatch)
//! - `BREVO_SENDER_EMAIL`: sender address (default: no-reply@propertymind.online)
//! - `BREVO_API_URL`: transactional mail endpoint (default: Brevo v3 smtp/email)
//! - `MIETERMATCH_DB`: SQLite file path (default: mietermatch.db)

use std::path::PathBuf;

pub const DEFAULT_SENDER_NAME: &str = "MieterMatch";
pub const DEFAULT_SENDER_EMAIL: &str = "no-reply@propertymind.online";
pub const DEFAULT_BREVO_API_URL: &str = "https://api.brevo.com/v3/smtp/email";
pub const DEFAULT_DB_PATH: &str = "mietermatch.db";

/// Default maximum connections for the store pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Mail provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    /// Brevo API key; `None` disables outbound mail
    pub api_key: Option<String>,
    pub sender_name: String,
    pub sender_email: String,
    pub api_url: String,
}

impl MailerConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable source (for testing)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup("BREVO_API_KEY").filter(|key| !key.trim().is_empty()),
            sender_name: lookup("BREVO_SENDER_NAME")
                .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string()),
            sender_email: lookup("BREVO_SENDER_EMAIL")
                .unwrap_or_else(|| DEFAULT_SENDER_EMAIL.to_string()),
            api_url: lookup("BREVO_API_URL").unwrap_or_else(|| DEFAULT_BREVO_API_URL.to_string()),
        }
    }

    /// Whether a provider credential is configured
    pub fn is_active(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the SQLite database file
    pub path: PathBuf,
    pub max_connections: u32,
}

impl StoreConfig {
    /// Config for the given database file with the default pool size
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = MailerConfig::default();

        assert_eq!(config.api_key, None);
        assert!(!config.is_active());
        assert_eq!(config.sender_name, "MieterMatch");
        assert_eq!(config.sender_email, "no-reply@propertymind.online");
        assert_eq!(config.api_url, "https://api.brevo.com/v3/smtp/email");
    }

    #[test]
    fn api_key_activates_mailer() {
        let config = MailerConfig::from_lookup(lookup_from(&[
            ("BREVO_API_KEY", "xkeysib-123"),
            ("BREVO_SENDER_NAME", "Hausverwaltung"),
        ]));

        assert!(config.is_active());
        assert_eq!(config.api_key.as_deref(), Some("xkeysib-123"));
        assert_eq!(config.sender_name, "Hausverwaltung");
        assert_eq!(config.sender_email, DEFAULT_SENDER_EMAIL);
    }

    #[test]
    fn empty_api_key_counts_as_unset() {
        let config = MailerConfig::from_lookup(lookup_from(&[("BREVO_API_KEY", "  ")]));
        assert!(!config.is_active());
    }

    #[test]
    fn store_config_with_path() {
        let config = StoreConfig::with_path("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
