// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that all external adapters implement.

use async_trait::async_trait;

use crate::error::OrangeairError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for calendar and mail adapters.
///
/// Provides identity and a cheap health check that never contacts the
/// remote service.
#[async_trait]
pub trait Adapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the kind of adapter.
    fn adapter_type(&self) -> AdapterType;

    /// Reports whether the adapter is configured well enough to be used.
    async fn health_check(&self) -> Result<HealthStatus, OrangeairError>;
}
