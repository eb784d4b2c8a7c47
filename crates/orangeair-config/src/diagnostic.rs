// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Turns Figment deserialization errors and validation failures into miette
//! diagnostics that point at the offending line of `orangeair.toml` and
//! suggest the closest valid key.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
///
/// Catches typos like `pasword` -> `password` and `max_foto` -> `max_photos`.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(orangeair::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// Comma-separated valid keys for the section.
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(orangeair::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// Dotted path of the key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(orangeair::config::missing_key),
        help("add `{key} = <value>` to your orangeair.toml")
    )]
    MissingKey {
        /// The missing key name.
        key: String,
    },

    /// A value parsed but violates a semantic constraint.
    #[error("validation error: {message}")]
    #[diagnostic(code(orangeair::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(orangeair::config::other))]
    Other(String),
}

fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a `figment::Error` (which may carry several errors) into diagnostics.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(field, expected) => {
                let valid_keys: Vec<&str> = expected.to_vec();
                let (span, src) = locate_key(&error, field, toml_sources);
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion: suggest_key(field, &valid_keys),
                    valid_keys: valid_keys.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: field.clone().into_owned(),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("found {actual}, expected {expected}"),
                expected: expected.to_string(),
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

/// Find the source file and span of an unknown key, when it came from a file.
fn locate_key(
    error: &figment::error::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let source_path = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    let Some((path, content)) = source_path.as_ref().and_then(|path| {
        toml_sources
            .iter()
            .find(|(p, _)| p == path)
            .map(|(p, content)| (p.as_str(), content.as_str()))
    }) else {
        return (None, None);
    };

    match find_key_offset(content, &error.path, field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(path, content.to_string())),
        ),
        None => (None, None),
    }
}

/// Find the byte offset of `field` inside the table named by `path`.
///
/// `path = ["smtp"]` searches after the `[smtp]` header and
/// `path = ["pricing", "base_prices"]` after `[pricing.base_prices]`. The search
/// stops at the next table header so a key of the same name in a later
/// section is never reported.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = if path.is_empty() {
        0
    } else {
        let header = format!("[{}]", path.join("."));
        content.find(&header).map(|pos| pos + header.len())?
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if !path.is_empty() && trimmed.starts_with('[') {
            return None;
        }
        if let Some(after) = trimmed.strip_prefix(field)
            && matches!(after.chars().next(), Some(' ' | '\t' | '='))
        {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }

    None
}

/// Suggest the most similar valid key (Jaro-Winkler above the threshold).
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|&key| (key, strsim::jaro_winkler(unknown, key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key.to_string())
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_password_for_pasword() {
        let valid = &["host", "port", "username", "password", "from", "timeout_secs"];
        assert_eq!(suggest_key("pasword", valid), Some("password".to_string()));
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        let valid = &["bind_address", "port", "log_level"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn find_key_offset_in_section() {
        let content = "[server]\nprot = 80\n";
        let path = vec!["server".to_string()];
        let o = find_key_offset(content, &path, "prot").unwrap();
        assert_eq!(&content[o..o + 4], "prot");
    }

    #[test]
    fn find_key_offset_in_nested_table() {
        let content = "[pricing]\ndefault_base_price = 1\n\n[pricing.base_prices]\n  wal = 3\n";
        let path = vec!["pricing".to_string(), "base_prices".to_string()];
        let o = find_key_offset(content, &path, "wal").unwrap();
        assert_eq!(&content[o..o + 3], "wal");
    }

    #[test]
    fn find_key_offset_stops_at_next_section() {
        let content = "[server]\nport = 1\n[smtp]\nhots = \"x\"\n";
        let path = vec!["server".to_string()];
        assert_eq!(find_key_offset(content, &path, "hots"), None);
    }

    #[test]
    fn find_key_offset_requires_full_key() {
        let content = "[smtp]\nportal = 1\nport = 2\n";
        let path = vec!["smtp".to_string()];
        let o = find_key_offset(content, &path, "port").unwrap();
        assert_eq!(&content[o..o + 8], "port = 2");
    }
}
