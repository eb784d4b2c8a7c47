// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that serde attributes cannot express, such
//! as a parseable bind address, known equipment types in the price table, and
//! a JPEG quality within range.

use std::str::FromStr;

use orangeair_core::EquipmentType;

use crate::diagnostic::{ConfigError, suggest_key};
use crate::model::OrangeairConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Upper bound imposed by the calendar API on `maxResults`.
const MAX_CALENDAR_RESULTS: u32 = 2500;

/// Emails never carry more attachments than this.
const MAX_ATTACHMENTS: usize = 5;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or every collected error
/// (does not fail fast).
pub fn validate_config(config: &OrangeairConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let addr = config.server.bind_address.trim();
    if addr.is_empty() {
        fail("server.bind_address must not be empty".to_string());
    } else {
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            fail(format!(
                "server.bind_address `{addr}` is not a valid IP address or hostname"
            ));
        }
    }

    if !LOG_LEVELS.contains(&config.server.log_level.as_str()) {
        fail(format!(
            "server.log_level `{}` must be one of {}",
            config.server.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    let domain = config.business.service_domain.trim();
    if domain.is_empty() || domain.contains("://") || domain.contains('/') {
        fail(format!(
            "business.service_domain `{domain}` must be a bare domain such as `airconbot.com`"
        ));
    }

    if !config.business.notification_recipient.contains('@') {
        fail(format!(
            "business.notification_recipient `{}` is not an email address",
            config.business.notification_recipient
        ));
    }

    if config.smtp.host.trim().is_empty() {
        fail("smtp.host must not be empty".to_string());
    }
    if config.smtp.port == 0 {
        fail("smtp.port must not be 0".to_string());
    }
    if config.smtp.timeout_secs == 0 {
        fail("smtp.timeout_secs must be at least 1".to_string());
    }

    if config.calendar.calendar_id.trim().is_empty() {
        fail("calendar.calendar_id must not be empty".to_string());
    }
    if config.calendar.credentials.is_some() && config.calendar.credentials_file.is_some() {
        fail("set only one of calendar.credentials and calendar.credentials_file".to_string());
    }
    if config.calendar.window_days == 0 {
        fail("calendar.window_days must be at least 1".to_string());
    }
    if !(1..=MAX_CALENDAR_RESULTS).contains(&config.calendar.max_results) {
        fail(format!(
            "calendar.max_results must be between 1 and {MAX_CALENDAR_RESULTS}, got {}",
            config.calendar.max_results
        ));
    }

    if config.pricing.default_base_price == 0 {
        fail("pricing.default_base_price must be positive".to_string());
    }
    let known: Vec<String> = EquipmentType::KNOWN.iter().map(|t| t.to_string()).collect();
    let known_refs: Vec<&str> = known.iter().map(String::as_str).collect();
    for (name, price) in &config.pricing.base_prices {
        match EquipmentType::from_str(name) {
            Ok(EquipmentType::Other) | Err(_) => {
                let hint = suggest_key(name, &known_refs)
                    .map(|s| format!(" (did you mean `{s}`?)"))
                    .unwrap_or_default();
                fail(format!(
                    "pricing.base_prices has unknown equipment type `{name}`{hint}"
                ));
            }
            Ok(_) if *price == 0 => {
                fail(format!("pricing.base_prices.{name} must be positive"));
            }
            Ok(_) => {}
        }
    }

    if !(1..=MAX_ATTACHMENTS).contains(&config.uploads.max_photos) {
        fail(format!(
            "uploads.max_photos must be between 1 and {MAX_ATTACHMENTS}, got {}",
            config.uploads.max_photos
        ));
    }
    if config.uploads.max_width == 0 || config.uploads.max_height == 0 {
        fail("uploads.max_width and uploads.max_height must be positive".to_string());
    }
    if !(1..=100).contains(&config.uploads.jpeg_quality) {
        fail(format!(
            "uploads.jpeg_quality must be between 1 and 100, got {}",
            config.uploads.jpeg_quality
        ));
    }
    if config.uploads.allowed_extensions.is_empty() {
        fail("uploads.allowed_extensions must list at least one extension".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
