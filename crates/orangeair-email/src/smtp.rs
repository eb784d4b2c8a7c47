// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SMTP delivery over implicit TLS.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use orangeair_config::model::SmtpConfig;
use orangeair_core::{
    Adapter, AdapterType, HealthStatus, MailAdapter, OrangeairError, OutboundEmail,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, warn};

use crate::message::{build_message, parse_sender};

/// Mail adapter sending through an authenticated SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
}

impl SmtpMailer {
    /// Builds the transport. Fails when username or password is missing.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, OrangeairError> {
        let username = config.username.clone().ok_or_else(|| {
            OrangeairError::Config(
                "smtp.username is not set (or ORANGEAIR_SMTP_USERNAME)".to_string(),
            )
        })?;
        let password = config
            .password
            .clone()
            .map(SecretString::from)
            .ok_or_else(|| {
                OrangeairError::Config(
                    "smtp.password is not set (or ORANGEAIR_SMTP_PASSWORD)".to_string(),
                )
            })?;

        let from = sender_for(config, &username)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| OrangeairError::Mail {
                message: format!("cannot configure SMTP relay `{}`: {e}", config.host),
                source: Some(Box::new(e)),
            })?
            .port(config.port)
            .credentials(Credentials::new(
                username,
                password.expose_secret().to_owned(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        info!(host = %config.host, port = config.port, "SMTP mailer configured");
        Ok(Self {
            transport,
            from,
            host: config.host.clone(),
        })
    }
}

/// `smtp.from` when set, otherwise the login name.
fn sender_for(config: &SmtpConfig, username: &str) -> Result<Mailbox, OrangeairError> {
    parse_sender(config.from.as_deref().unwrap_or(username))
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.host)
            .field("from", &self.from.to_string())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Adapter for SmtpMailer {
    fn name(&self) -> &str {
        "smtp"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Mail
    }

    async fn health_check(&self) -> Result<HealthStatus, OrangeairError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl MailAdapter for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), OrangeairError> {
        let subject = email.subject.clone();
        let attachments = email.attachments.len();
        let message = build_message(&self.from, email)?;

        debug!(%subject, attachments, "sending notification");
        let response = self.transport.send(message).await.map_err(|e| {
            warn!(host = %self.host, error = %e, "SMTP delivery failed");
            OrangeairError::Mail {
                message: format!("SMTP delivery failed: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        info!(%subject, code = %response.code(), "notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            username: Some("bot@orangeair.example".to_string()),
            password: Some("app-password".to_string()),
            ..SmtpConfig::default()
        }
    }

    #[test]
    fn missing_password_is_a_config_error() {
        let mut cfg = config();
        cfg.password = None;
        let err = SmtpMailer::from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("smtp.password"));
    }

    #[test]
    fn missing_username_is_a_config_error() {
        let mut cfg = config();
        cfg.username = None;
        let err = SmtpMailer::from_config(&cfg).unwrap_err();
        assert!(matches!(err, OrangeairError::Config(_)));
    }

    #[test]
    fn sender_defaults_to_username() {
        let cfg = config();
        let from = sender_for(&cfg, "bot@orangeair.example").unwrap();
        assert_eq!(from.email.to_string(), "bot@orangeair.example");

        let cfg = SmtpConfig {
            from: Some("Orange Air <booking@orangeair.example>".to_string()),
            ..config()
        };
        let from = sender_for(&cfg, "bot@orangeair.example").unwrap();
        assert_eq!(from.name.as_deref(), Some("Orange Air"));
        assert_eq!(from.email.to_string(), "booking@orangeair.example");
    }
}
