// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./orangeair.toml` > `~/.config/orangeair/orangeair.toml`
//! > `/etc/orangeair/orangeair.toml`, with environment variable overrides via
//! the `ORANGEAIR_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::OrangeairConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/orangeair/orangeair.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "orangeair.toml";

/// Top-level sections, used to map `ORANGEAIR_<SECTION>_<KEY>` onto `section.key`.
const SECTIONS: &[&str] = &["server", "business", "smtp", "calendar", "pricing", "uploads"];

/// Returns the per-user configuration file path, if a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("orangeair").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/orangeair/orangeair.toml` (system-wide)
/// 3. `~/.config/orangeair/orangeair.toml` (user XDG config)
/// 4. `./orangeair.toml` (local directory)
/// 5. `ORANGEAIR_*` environment variables
pub fn load_config() -> Result<OrangeairConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<OrangeairConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OrangeairConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<OrangeairConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OrangeairConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(OrangeairConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping only the leading section name to a dot.
///
/// `ORANGEAIR_SMTP_PASSWORD` maps to `smtp.password` and
/// `ORANGEAIR_CALENDAR_CREDENTIALS_FILE` to `calendar.credentials_file`;
/// splitting on every underscore would break keys that contain one.
fn env_provider() -> Env {
    Env::prefixed("ORANGEAIR_").map(|key| map_env_key(key.as_str()).into())
}

fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
