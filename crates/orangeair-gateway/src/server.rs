// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use dashmap::DashMap;
use orangeair_core::OrangeairError;
use orangeair_workflow::{BookingWorkflow, Session};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Photos travel base64-encoded inside action bodies.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Health state for the unauthenticated health endpoint.
#[derive(Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live sessions by id; each guarded by its own mutex.
    pub sessions: Arc<DashMap<String, Arc<Mutex<Session>>>>,
    pub workflow: Arc<BookingWorkflow>,
    pub health: HealthState,
}

impl AppState {
    pub fn new(workflow: Arc<BookingWorkflow>) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            workflow,
            health: HealthState {
                start_time: Instant::now(),
            },
        }
    }

    /// The session's lock handle. The map guard is released before returning
    /// so callers never hold it across an await.
    pub fn session(&self, id: &str) -> Result<Arc<Mutex<Session>>, OrangeairError> {
        self.sessions
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| OrangeairError::SessionNotFound(id.to_string()))
    }
}

/// Gateway server configuration (mirrors `ServerConfig` from orangeair-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// All routes with tracing and CORS layers applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/v1/sessions", post(handlers::create_session))
        .route(
            "/v1/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/v1/sessions/{id}/actions", post(handlers::post_action))
        .route(
            "/v1/sessions/{id}/availability",
            get(handlers::get_availability),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server and serve until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn start_server(
    config: &ServerConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), OrangeairError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| OrangeairError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| OrangeairError::Internal(format!("gateway server error: {e}")))?;

    tracing::info!("Gateway server stopped");
    Ok(())
}
