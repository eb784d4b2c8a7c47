// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping from domain errors to HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orangeair_core::OrangeairError;
use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An [`OrangeairError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub OrangeairError);

impl From<OrangeairError> for ApiError {
    fn from(err: OrangeairError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(OrangeairError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(OrangeairError::Validation(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            OrangeairError::Validation(_) => StatusCode::BAD_REQUEST,
            OrangeairError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            OrangeairError::InvalidTransition { .. } => StatusCode::CONFLICT,
            OrangeairError::Image { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            OrangeairError::CalendarAuth { .. }
            | OrangeairError::Calendar { .. }
            | OrangeairError::Mail { .. } => StatusCode::BAD_GATEWAY,
            OrangeairError::Config(_) | OrangeairError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "request rejected");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
