//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (any origin, GET/POST/OPTIONS, fixed header list)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
