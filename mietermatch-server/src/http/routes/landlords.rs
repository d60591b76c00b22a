//! Landlord endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::Ack;
use crate::db::LandlordRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Landlord;

/// GET /api/landlords - all landlord records
async fn list_landlords(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Landlord>>, ApiError> {
    let landlords = LandlordRepo::new(&state.pool).list().await?;
    Ok(Json(landlords))
}

/// POST /api/landlords - insert or replace by id
async fn upsert_landlord(
    State(state): State<Arc<AppState>>,
    Json(landlord): Json<Landlord>,
) -> Result<Json<Ack>, ApiError> {
    LandlordRepo::new(&state.pool).upsert(&landlord).await?;
    Ok(Json(Ack::ok()))
}

/// Landlord routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/landlords", get(list_landlords).post(upsert_landlord))
}
