//! mietermatch-server: HTTP backend for the MieterMatch rental platform
//!
//! Persists landlord and tenant records in a local SQLite file, exposes
//! list/upsert endpoints, and forwards verification codes to the Brevo
//! transactional mail API.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod mail;
pub mod models;
pub mod status;

pub use config::{MailerConfig, StoreConfig};
pub use error::{ServerError, ServerResult};
pub use http::{build_router, run_server, AppState, ServerConfig};
