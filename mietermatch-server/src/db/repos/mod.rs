//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - list returns rows in storage order, no pagination
//! - upsert is a single `INSERT OR REPLACE` (full row replacement)

pub mod landlords;
pub mod tenants;

pub use landlords::LandlordRepo;
pub use tenants::TenantRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("stored {column} of {table} '{id}' is not valid JSON: {source}")]
    CorruptJson {
        table: &'static str,
        column: &'static str,
        id: String,
        source: serde_json::Error,
    },

    #[error("failed to encode {column}: {source}")]
    Encode {
        column: &'static str,
        source: serde_json::Error,
    },
}
