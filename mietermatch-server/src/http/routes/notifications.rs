//! Mail endpoints
//!
//! Both always answer `{success: true}`; see [`crate::mail`].

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Deserialize;

use super::Ack;
use crate::http::server::AppState;
use crate::models::coerce;

/// Send verification request
#[derive(Debug, Default, Deserialize)]
pub struct VerificationRequest {
    #[serde(default, deserialize_with = "coerce::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub code: Option<String>,
}

/// Offer notification request, as sent by the web client
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequest {
    #[serde(default, deserialize_with = "coerce::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub property_title: Option<String>,
}

/// POST /api/send-verification
async fn send_verification(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerificationRequest>,
) -> Json<Ack> {
    let outcome = state
        .dispatcher
        .send_verification(req.email.as_deref(), req.code.as_deref())
        .await;

    Json(Ack::with_details(outcome.details()))
}

/// POST /api/send-offer - body is optional and not validated
async fn send_offer(State(state): State<Arc<AppState>>, body: Bytes) -> Json<Ack> {
    let req: OfferRequest = serde_json::from_slice(&body).unwrap_or_default();
    let outcome = state
        .dispatcher
        .send_offer(req.email.as_deref(), req.property_title.as_deref())
        .await;

    Json(Ack::with_details(outcome.details()))
}

/// Mail routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/send-verification", post(send_verification))
        .route("/send-offer", post(send_offer))
}
