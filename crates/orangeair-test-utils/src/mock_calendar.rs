// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock calendar adapter for deterministic testing.
//!
//! `MockCalendar` implements `CalendarAdapter` with a fixed slot list or a
//! scripted failure, and counts how often it was read.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use orangeair_core::traits::adapter::Adapter;
use orangeair_core::traits::calendar::CalendarAdapter;
use orangeair_core::types::{AdapterType, HealthStatus, ReservedSlot};
use orangeair_core::OrangeairError;

/// Failure a [`MockCalendar`] returns instead of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarFailure {
    /// Rejected credentials (`CalendarAuth`).
    Auth(String),
    /// Unreachable or failing API (`Calendar`).
    Unavailable(String),
}

/// A calendar whose reserved slots are set by the test.
pub struct MockCalendar {
    slots: Arc<Mutex<Vec<ReservedSlot>>>,
    failure: Arc<Mutex<Option<CalendarFailure>>>,
    calls: AtomicUsize,
}

impl MockCalendar {
    /// Create a calendar with no appointments.
    pub fn new() -> Self {
        Self::with_slots(Vec::new())
    }

    /// Create a calendar pre-loaded with reserved slots.
    pub fn with_slots(slots: Vec<ReservedSlot>) -> Self {
        Self {
            slots: Arc::new(Mutex::new(slots)),
            failure: Arc::new(Mutex::new(None)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a calendar that fails every read.
    pub fn failing(failure: CalendarFailure) -> Self {
        Self {
            slots: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(Some(failure))),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the reserved slots returned by later reads.
    pub async fn set_slots(&self, slots: Vec<ReservedSlot>) {
        *self.slots.lock().await = slots;
    }

    /// Make later reads fail, or succeed again with `None`.
    pub async fn set_failure(&self, failure: Option<CalendarFailure>) {
        *self.failure.lock().await = failure;
    }

    /// Number of `reserved_slots` calls so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCalendar {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Adapter for MockCalendar {
    fn name(&self) -> &str {
        "mock-calendar"
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Calendar
    }

    async fn health_check(&self) -> Result<HealthStatus, OrangeairError> {
        Ok(match &*self.failure.lock().await {
            None => HealthStatus::Healthy,
            Some(CalendarFailure::Auth(message) | CalendarFailure::Unavailable(message)) => {
                HealthStatus::Unhealthy(message.clone())
            }
        })
    }
}

#[async_trait]
impl CalendarAdapter for MockCalendar {
    async fn reserved_slots(&self, calendar_id: &str) -> Result<Vec<ReservedSlot>, OrangeairError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(calendar_id, "mock calendar read");
        match self.failure.lock().await.clone() {
            Some(CalendarFailure::Auth(message)) => Err(OrangeairError::CalendarAuth { message }),
            Some(CalendarFailure::Unavailable(message)) => Err(OrangeairError::Calendar {
                message,
                source: None,
            }),
            None => Ok(self.slots.lock().await.clone()),
        }
    }
}
