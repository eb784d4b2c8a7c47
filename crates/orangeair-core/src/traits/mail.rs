// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mail adapter trait for delivering notification emails to the business.

use async_trait::async_trait;

use crate::error::OrangeairError;
use crate::traits::adapter::Adapter;
use crate::types::OutboundEmail;

/// Synchronous-from-the-caller's-view email delivery.
#[async_trait]
pub trait MailAdapter: Adapter {
    /// Sends one message. Returns only after the relay accepted it.
    async fn send(&self, email: OutboundEmail) -> Result<(), OrangeairError>;
}
