// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Orange Air consultation service.

use thiserror::Error;

/// The primary error type used across all adapters and the booking workflow.
///
/// External-service failures (`CalendarAuth`, `Calendar`, `Mail`) and image
/// decode failures are fatal to the action that triggered them. Nothing in the
/// workspace retries them.
#[derive(Debug, Error)]
pub enum OrangeairError {
    /// Configuration errors (invalid TOML, missing credentials, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// User input rejected by a form constraint.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested action is not allowed from the session's current step.
    #[error("action `{action}` is not allowed on the {from} screen")]
    InvalidTransition { from: String, action: String },

    /// No session exists with the given identifier.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// The calendar provider rejected our credentials.
    #[error("calendar authentication failed: {message}")]
    CalendarAuth { message: String },

    /// Calendar read failed (network, unexpected status, malformed payload).
    #[error("calendar error: {message}")]
    Calendar {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Building or delivering a notification email failed.
    #[error("mail error: {message}")]
    Mail {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An uploaded image could not be decoded or re-encoded.
    #[error("image `{filename}` could not be processed: {message}")]
    Image { filename: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl OrangeairError {
    /// Returns true for failures of an external service (calendar or SMTP relay).
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            OrangeairError::CalendarAuth { .. }
                | OrangeairError::Calendar { .. }
                | OrangeairError::Mail { .. }
        )
    }
}
