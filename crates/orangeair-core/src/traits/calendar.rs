// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar adapter trait for reading already-booked appointment slots.

use async_trait::async_trait;

use crate::error::OrangeairError;
use crate::traits::adapter::Adapter;
use crate::types::ReservedSlot;

/// Read-only access to the shared appointment calendar.
#[async_trait]
pub trait CalendarAdapter: Adapter {
    /// Returns the slots reserved in `calendar_id` from now through the
    /// configured look-ahead window, ordered by start time.
    ///
    /// Authentication and network failures are returned as errors; an empty
    /// list always means "no conflicting appointments".
    async fn reserved_slots(&self, calendar_id: &str) -> Result<Vec<ReservedSlot>, OrangeairError>;
}
