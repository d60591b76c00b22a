//! Database layer - SQLite connection pool and record repositories
//!
//! # Design Principles
//!
//! - Connection pool instead of per-request open/close
//! - One statement per write, committed on its own (no cross-call transactions)
//! - Upserts replace whole rows via `INSERT OR REPLACE`

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
