// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Calendar availability checker for the Orange Air consultation service.
//!
//! Reads already-booked appointments from the shared business calendar,
//! reduces each to a `(date, time bucket)` pair, and decides which options the
//! reservation screen may still offer.

pub mod auth;
pub mod availability;
pub mod bucket;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use orangeair_config::model::CalendarConfig;
use orangeair_core::{
    Adapter, AdapterType, CalendarAdapter, HealthStatus, OrangeairError, ReservedSlot,
};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use tracing::{debug, warn};

pub use auth::TokenProvider;
pub use availability::{DateWindow, DayAvailability, is_disabled, offered_options};
pub use bucket::{bucket_for_hour, slot_for_event};
pub use types::ServiceAccountKey;

use crate::types::{ApiErrorResponse, EventList};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only Google Calendar client authenticated as a service account.
#[derive(Debug)]
pub struct GoogleCalendar {
    http: reqwest::Client,
    tokens: TokenProvider,
    api_base_url: String,
    window_days: u32,
    max_results: u32,
}

impl GoogleCalendar {
    /// Builds a client from an already-parsed service-account key.
    pub fn new(key: &ServiceAccountKey, config: &CalendarConfig) -> Result<Self, OrangeairError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| OrangeairError::Calendar {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        let tokens = TokenProvider::new(http.clone(), key)?;

        Ok(Self {
            http,
            tokens,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            window_days: config.window_days,
            max_results: config.max_results,
        })
    }

    /// Builds a client from `calendar.credentials` or `calendar.credentials_file`.
    pub async fn from_config(config: &CalendarConfig) -> Result<Self, OrangeairError> {
        let key = load_service_account(config).await?;
        Self::new(&key, config)
    }

    fn events_url(&self, calendar_id: &str) -> String {
        format!(
            "{}/calendars/{}/events",
            self.api_base_url,
            urlencoding::encode(calendar_id)
        )
    }
}

/// Reads and parses the service-account JSON named by the configuration.
pub async fn load_service_account(
    config: &CalendarConfig,
) -> Result<ServiceAccountKey, OrangeairError> {
    let raw = match (&config.credentials, &config.credentials_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path).await.map_err(|e| {
            OrangeairError::Config(format!(
                "cannot read calendar credentials file `{path}`: {e}"
            ))
        })?,
        (None, None) => {
            return Err(OrangeairError::Config(
                "calendar credentials are not configured; set calendar.credentials_file \
                 or ORANGEAIR_CALENDAR_CREDENTIALS"
                    .to_string(),
            ));
        }
    };

    serde_json::from_str(&raw).map_err(|e| {
        OrangeairError::Config(format!("calendar credentials are not a service account key: {e}"))
    })
}

#[async_trait]
impl Adapter for GoogleCalendar {
    fn name(&self) -> &str {
        "google-calendar"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Calendar
    }

    async fn health_check(&self) -> Result<HealthStatus, OrangeairError> {
        match self.tokens.last_failure().await {
            None => Ok(HealthStatus::Healthy),
            Some(message) => Ok(HealthStatus::Unhealthy(message)),
        }
    }
}

#[async_trait]
impl CalendarAdapter for GoogleCalendar {
    async fn reserved_slots(&self, calendar_id: &str) -> Result<Vec<ReservedSlot>, OrangeairError> {
        let token = self.tokens.access_token().await?;

        let now = Utc::now();
        let until = now + chrono::Duration::days(i64::from(self.window_days));
        let time_min = now.to_rfc3339_opts(SecondsFormat::Secs, true);
        let time_max = until.to_rfc3339_opts(SecondsFormat::Secs, true);
        let max_results = self.max_results.to_string();

        debug!(calendar_id, %time_min, %time_max, "listing calendar events");
        let response = self
            .http
            .get(self.events_url(calendar_id))
            .bearer_auth(token.expose_secret())
            .query(&[
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("maxResults", max_results.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ])
            .send()
            .await
            .map_err(|e| OrangeairError::Calendar {
                message: format!("events request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message().to_string())
                .unwrap_or(body);
            warn!(%status, calendar_id, "calendar API rejected events request");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => OrangeairError::CalendarAuth {
                    message: format!("calendar API returned {status}: {detail}"),
                },
                _ => OrangeairError::Calendar {
                    message: format!("calendar API returned {status}: {detail}"),
                    source: None,
                },
            });
        }

        let events: EventList = response.json().await.map_err(|e| OrangeairError::Calendar {
            message: format!("failed to parse events response: {e}"),
            source: Some(Box::new(e)),
        })?;

        let slots = bucket::slots_from_events(&events.items)?;
        debug!(
            events = events.items.len(),
            slots = slots.len(),
            "reserved slots loaded"
        );
        Ok(slots)
    }
}
