//! System status endpoint
//!
//! GET /api/system-status - store file presence and mail activation flag

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::server::AppState;
use crate::status::{system_status, SystemStatus};

/// GET /api/system-status
async fn status(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    Json(system_status(&state.db_path, state.dispatcher.is_active()))
}

/// Status routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/system-status", get(status))
}
