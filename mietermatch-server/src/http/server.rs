//! Axum server setup
//!
//! Server skeleton with:
//! - CORS open to any origin (the web client is served from arbitrary hosts)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, Method};
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::{MailerConfig, StoreConfig};
use crate::db::{create_pool_with_options, schema};
use crate::error::{ServerError, ServerResult};
use crate::mail::VerificationDispatcher;

/// Request body cap for the API; records carry photos inline as data URIs
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
        }
    }
}

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Database file, reported by the status endpoint
    pub db_path: PathBuf,
    pub dispatcher: VerificationDispatcher,
}

impl AppState {
    pub fn new(pool: SqlitePool, db_path: PathBuf, dispatcher: VerificationDispatcher) -> Self {
        Self {
            pool,
            db_path,
            dispatcher,
        }
    }

    /// Open the store (creating file and tables if needed) and build the
    /// Brevo-backed dispatcher.
    pub async fn open(store: &StoreConfig, mailer: &MailerConfig) -> ServerResult<Self> {
        tracing::info!("Opening database at {}", store.path.display());
        let pool = create_pool_with_options(&store.path, store.max_connections).await?;
        schema::init(&pool).await?;

        let dispatcher = VerificationDispatcher::from_config(mailer);
        if dispatcher.is_active() {
            tracing::info!(sender = %mailer.sender_email, "Brevo mail dispatch active");
        } else {
            tracing::warn!("BREVO_API_KEY not set - verification mails run in demo mode");
        }

        Ok(Self::new(pool, store.path.clone(), dispatcher))
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
        ])
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::status::router())
        .merge(routes::landlords::router())
        .merge(routes::tenants::router())
        .merge(routes::notifications::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    Router::new()
        .merge(routes::health::router())
        .nest("/api", api)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let store = StoreConfig::with_path("mietermatch.db");
/// let state = AppState::open(&store, &MailerConfig::from_env()).await?;
/// run_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
