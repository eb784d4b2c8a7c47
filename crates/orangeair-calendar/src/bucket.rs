// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping of calendar events onto coarse appointment buckets.

use chrono::{DateTime, Timelike};
use orangeair_core::{OrangeairError, ReservedSlot, TimeBucket};

use crate::types::Event;

/// Buckets an hour of day (0..=23).
///
/// Boundaries: [0,12) morning, [12,15) early afternoon, [15,18) late
/// afternoon, [18,24) evening. Never returns `AnyTime`.
pub fn bucket_for_hour(hour: u32) -> TimeBucket {
    match hour {
        0..12 => TimeBucket::Morning,
        12..15 => TimeBucket::EarlyAfternoon,
        15..18 => TimeBucket::LateAfternoon,
        _ => TimeBucket::Evening,
    }
}

/// Converts one event into the slot it occupies.
///
/// The date and hour are read in the event's own UTC offset, not the
/// server's. All-day events yield `Ok(None)`.
pub fn slot_for_event(event: &Event) -> Result<Option<ReservedSlot>, OrangeairError> {
    let Some(raw) = event.start.date_time.as_deref() else {
        return Ok(None);
    };

    let start = DateTime::parse_from_rfc3339(raw).map_err(|e| OrangeairError::Calendar {
        message: format!(
            "event {} has an unparseable start time `{raw}`",
            event.id.as_deref().unwrap_or("<unknown>")
        ),
        source: Some(Box::new(e)),
    })?;

    Ok(Some(ReservedSlot {
        date: start.date_naive(),
        bucket: bucket_for_hour(start.hour()),
    }))
}

/// Converts a page of events into reserved slots, preserving order.
pub fn slots_from_events(events: &[Event]) -> Result<Vec<ReservedSlot>, OrangeairError> {
    let mut slots = Vec::with_capacity(events.len());
    for event in events {
        if let Some(slot) = slot_for_event(event)? {
            slots.push(slot);
        }
    }
    Ok(slots)
}
