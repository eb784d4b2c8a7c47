// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the session API.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use orangeair_core::OrangeairError;
use orangeair_workflow::{Action, DayAvailability, ScreenView};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::server::AppState;

/// `?ref=` on session creation and retrieval.
#[derive(Debug, Default, Deserialize)]
pub struct ReferralQuery {
    #[serde(rename = "ref")]
    pub referral: Option<String>,
}

/// `?date=YYYY-MM-DD` on the availability endpoint.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Binary version.
    pub version: String,
    pub uptime_secs: u64,
    /// Sessions currently held in memory.
    pub sessions: usize,
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
        sessions: state.sessions.len(),
    })
}

/// POST /v1/sessions
///
/// Creates a session on the main screen.
pub async fn create_session(
    State(state): State<AppState>,
    query: Result<Query<ReferralQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<ScreenView>), ApiError> {
    let Query(query) = query?;
    let (session, view) = state.workflow.start(query.referral.as_deref());
    state
        .sessions
        .insert(session.id().0.clone(), Arc::new(Mutex::new(session)));
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /v1/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<ReferralQuery>, QueryRejection>,
) -> Result<Json<ScreenView>, ApiError> {
    let Query(query) = query?;
    let session = state.session(&id)?;
    let mut session = session.lock().await;
    Ok(Json(
        state.workflow.show(&mut session, query.referral.as_deref()),
    ))
}

/// DELETE /v1/sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.sessions.remove(&id) {
        Some(_) => {
            tracing::info!(session_id = %id, "session removed");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(OrangeairError::SessionNotFound(id).into()),
    }
}

/// POST /v1/sessions/{id}/actions
///
/// Holds the session lock for the whole action, so a second request for the
/// same session waits until the first one (calendar read, email send) is done.
/// A body that does not parse as an action is a validation error.
pub async fn post_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
    action: Result<Json<Action>, JsonRejection>,
) -> Result<Json<ScreenView>, ApiError> {
    let Json(action) = action?;
    let session = state.session(&id)?;
    let mut session = session.lock().await;
    let view = state.workflow.apply(&mut session, action).await?;
    Ok(Json(view))
}

/// GET /v1/sessions/{id}/availability
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<DayAvailability>, ApiError> {
    let Query(query) = query?;
    let session = state.session(&id)?;
    let mut session = session.lock().await;
    let day = state.workflow.availability(&mut session, query.date).await?;
    Ok(Json(day))
}
