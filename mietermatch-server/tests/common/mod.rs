//! Shared helpers for router-level tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use mietermatch_server::db::{create_pool, schema};
use mietermatch_server::mail::{MailError, MailTransport, OutboundEmail, VerificationDispatcher};
use mietermatch_server::{build_router, AppState, MailerConfig};

/// Transport that records instead of sending
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<(String, OutboundEmail)>>,
}

impl RecordingTransport {
    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((api_key.to_string(), email.clone()));
        Ok(())
    }
}

/// Router backed by a fresh database in a temp dir
pub struct TestApp {
    pub dir: TempDir,
    pub router: Router,
    pub transport: Arc<RecordingTransport>,
}

impl TestApp {
    pub async fn new(api_key: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("mietermatch.db");
        let pool = create_pool(&db_path).await.unwrap();
        schema::init(&pool).await.unwrap();

        let config = MailerConfig {
            api_key: api_key.map(str::to_owned),
            ..MailerConfig::default()
        };
        let transport = Arc::new(RecordingTransport::default());
        let dispatcher = VerificationDispatcher::with_transport(&config, transport.clone());

        let router = build_router(AppState::new(pool, db_path, dispatcher));
        Self {
            dir,
            router,
            transport,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}
