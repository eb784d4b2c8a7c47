// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock mail adapter that captures outgoing email for assertions.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use orangeair_core::OrangeairError;
use orangeair_core::traits::adapter::Adapter;
use orangeair_core::traits::mail::MailAdapter;
use orangeair_core::types::{AdapterType, HealthStatus, OutboundEmail};

/// A mailer that records every email instead of delivering it.
///
/// With [`rejecting`](Self::rejecting) it fails every send like a relay that
/// refused the login.
pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    reject_with: Option<String>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            reject_with: None,
        }
    }

    /// A mailer whose every send fails with a mail error.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            reject_with: Some(message.into()),
        }
    }

    /// Get all emails passed to `send()`.
    pub async fn sent_emails(&self) -> Vec<OutboundEmail> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Adapter for MockMailer {
    fn name(&self) -> &str {
        "mock-mailer"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Mail
    }

    async fn health_check(&self) -> Result<HealthStatus, OrangeairError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl MailAdapter for MockMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), OrangeairError> {
        if let Some(message) = &self.reject_with {
            return Err(OrangeairError::Mail {
                message: message.clone(),
                source: None,
            });
        }
        self.sent.lock().await.push(email);
        Ok(())
    }
}
