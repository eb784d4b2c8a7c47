// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Google OAuth token endpoint and Calendar v3 API.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

/// Default OAuth token endpoint when the key file does not name one.
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The subset of a Google service-account key file the client needs.
#[derive(Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub private_key: SecretString,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn deserialize_secret<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<SecretString, D::Error> {
    String::deserialize(deserializer).map(SecretString::from)
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"[redacted]")
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

/// Claims of the RS256 assertion exchanged for an access token.
#[derive(Debug, Serialize)]
pub(crate) struct AssertionClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

/// Successful response of the token endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Response body of `events.list`. Only the fields used for bucketing.
#[derive(Debug, Default, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub items: Vec<Event>,
}

/// A single calendar event.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<String>,
    pub start: EventTime,
}

/// Event start: `date_time` for timed events, `date` for all-day events.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiErrorDetail {
    /// Calendar API: `{"error": {"code": 401, "message": "..."}}`.
    Structured { message: String },
    /// OAuth endpoint: `{"error": "invalid_grant", ...}`.
    Code(String),
}

impl ApiErrorDetail {
    pub fn message(&self) -> &str {
        match self {
            ApiErrorDetail::Structured { message } => message,
            ApiErrorDetail::Code(code) => code,
        }
    }
}
