// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Orange Air consultation service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level Orange Air configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to the values the service shipped with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OrangeairConfig {
    /// HTTP listener and logging settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Business identity: public domain and notification mailbox.
    #[serde(default)]
    pub business: BusinessConfig,

    /// Outbound SMTP relay settings.
    #[serde(default)]
    pub smtp: SmtpConfig,

    /// Shared appointment calendar settings.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Base prices per equipment type.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Photo upload limits and re-encoding parameters.
    #[serde(default)]
    pub uploads: UploadConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port to bind the HTTP server to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Business identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessConfig {
    /// Display name used in email headers.
    #[serde(default = "default_business_name")]
    pub name: String,

    /// Public domain that referral links point at (no scheme, no path).
    #[serde(default = "default_service_domain")]
    pub service_domain: String,

    /// Mailbox that receives both booking and support notifications.
    #[serde(default = "default_notification_recipient")]
    pub notification_recipient: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            service_domain: default_service_domain(),
            notification_recipient: default_notification_recipient(),
        }
    }
}

fn default_business_name() -> String {
    "Orange Air".to_string()
}

fn default_service_domain() -> String {
    "airconbot.com".to_string()
}

fn default_notification_recipient() -> String {
    "orangeair2025@gmail.com".to_string()
}

/// SMTP relay configuration. The relay is always reached over implicit TLS.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SmtpConfig {
    /// Relay hostname.
    #[serde(default = "default_smtp_host")]
    pub host: String,

    /// Relay port (465 for implicit TLS).
    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// Login name. `None` requires the `ORANGEAIR_SMTP_USERNAME` env var.
    #[serde(default)]
    pub username: Option<String>,

    /// Application password. `None` requires the `ORANGEAIR_SMTP_PASSWORD` env var.
    #[serde(default)]
    pub password: Option<String>,

    /// Sender address. Defaults to `username` when unset.
    #[serde(default)]
    pub from: Option<String>,

    /// Connection and command timeout in seconds.
    #[serde(default = "default_smtp_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: None,
            password: None,
            from: None,
            timeout_secs: default_smtp_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("from", &self.from)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_smtp_timeout_secs() -> u64 {
    30
}

/// Google Calendar read configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Identifier of the shared appointment calendar.
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,

    /// Inline service-account JSON. Mutually exclusive with `credentials_file`.
    #[serde(default)]
    pub credentials: Option<String>,

    /// Path to a service-account JSON file.
    #[serde(default)]
    pub credentials_file: Option<String>,

    /// How many days ahead reserved slots are read.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Maximum number of events read per request.
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Calendar API base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar_id: default_calendar_id(),
            credentials: None,
            credentials_file: None,
            window_days: default_window_days(),
            max_results: default_max_results(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl std::fmt::Debug for CalendarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarConfig")
            .field("calendar_id", &self.calendar_id)
            .field("credentials", &self.credentials.as_ref().map(|_| "[redacted]"))
            .field("credentials_file", &self.credentials_file)
            .field("window_days", &self.window_days)
            .field("max_results", &self.max_results)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn default_calendar_id() -> String {
    "10cef97013e86d8ea27c14b12285e096af036f9c015e6b05f60a78eb1370a748@group.calendar.google.com"
        .to_string()
}

fn default_window_days() -> u32 {
    90
}

fn default_max_results() -> u32 {
    100
}

fn default_api_base_url() -> String {
    "https://www.googleapis.com/calendar/v3".to_string()
}

/// Price table configuration, in KRW.
///
/// `base_prices` is keyed by the equipment type's machine name
/// (`wall-mounted`, `floor-standing`, ...). Types without an entry are
/// charged `default_base_price`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Fallback base price for types missing from `base_prices`.
    #[serde(default = "default_base_price")]
    pub default_base_price: u64,

    /// Base price per unit for each equipment type.
    #[serde(default = "default_base_prices")]
    pub base_prices: BTreeMap<String, u64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_base_price: default_base_price(),
            base_prices: default_base_prices(),
        }
    }
}

fn default_base_price() -> u64 {
    50_000
}

fn default_base_prices() -> BTreeMap<String, u64> {
    [
        ("wall-mounted", 70_000),
        ("floor-standing", 120_000),
        ("two-in-one", 180_000),
        ("one-way", 80_000),
        ("two-way", 90_000),
        ("four-way", 130_000),
    ]
    .into_iter()
    .map(|(name, price)| (name.to_string(), price))
    .collect()
}

/// Photo upload and compression configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UploadConfig {
    /// Photos attached per email; later uploads are dropped.
    #[serde(default = "default_max_photos")]
    pub max_photos: usize,

    /// Maximum output width in pixels.
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Maximum output height in pixels.
    #[serde(default = "default_max_height")]
    pub max_height: u32,

    /// JPEG quality of re-encoded photos (1-100).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Accepted file extensions, compared case-insensitively.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_photos: default_max_photos(),
            max_width: default_max_width(),
            max_height: default_max_height(),
            jpeg_quality: default_jpeg_quality(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_max_photos() -> usize {
    5
}

fn default_max_width() -> u32 {
    1280
}

fn default_max_height() -> u32 {
    960
}

fn default_jpeg_quality() -> u8 {
    85
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
}
