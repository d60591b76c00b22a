//! Tenant endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::Ack;
use crate::db::TenantRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Tenant;

/// GET /api/tenants
async fn list_tenants(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Tenant>>, ApiError> {
    let tenants = TenantRepo::new(&state.pool).list().await?;
    Ok(Json(tenants))
}

/// POST /api/tenants
async fn upsert_tenant(
    State(state): State<Arc<AppState>>,
    Json(tenant): Json<Tenant>,
) -> Result<Json<Ack>, ApiError> {
    TenantRepo::new(&state.pool).upsert(&tenant).await?;
    Ok(Json(Ack::ok()))
}

/// Tenant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tenants", get(list_tenants).post(upsert_tenant))
}
