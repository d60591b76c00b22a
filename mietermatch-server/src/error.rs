//! Error types for mietermatch-server

use std::net::SocketAddr;

use thiserror::Error;

use crate::db::DbError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Errors raised while starting or running the server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for ServerError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(DbError::from(e))
    }
}
