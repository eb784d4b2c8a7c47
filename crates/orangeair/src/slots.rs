// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `orangeair reserved-slots`: prints the booked slots the reservation screen disables.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use orangeair_calendar::GoogleCalendar;
use orangeair_config::model::OrangeairConfig;
use orangeair_core::{CalendarAdapter, OrangeairError, ReservedSlot, TimeBucket};

/// Reads the calendar once and prints one line per booked date.
pub async fn run_reserved_slots(config: &OrangeairConfig) -> Result<(), OrangeairError> {
    let calendar = GoogleCalendar::from_config(&config.calendar).await?;
    let slots = calendar.reserved_slots(&config.calendar.calendar_id).await?;

    if slots.is_empty() {
        println!(
            "No appointments in the next {} days.",
            config.calendar.window_days
        );
        return Ok(());
    }
    for line in format_slots(&slots) {
        println!("{line}");
    }
    Ok(())
}

/// `2025-06-01  morning, late afternoon`, one line per date in date order.
fn format_slots(slots: &[ReservedSlot]) -> Vec<String> {
    let mut by_date: BTreeMap<NaiveDate, Vec<TimeBucket>> = BTreeMap::new();
    for slot in slots {
        let buckets = by_date.entry(slot.date).or_default();
        if !buckets.contains(&slot.bucket) {
            buckets.push(slot.bucket);
        }
    }
    by_date
        .into_iter()
        .map(|(date, buckets)| {
            let labels: Vec<String> = buckets.iter().map(ToString::to_string).collect();
            format!("{date}  {}", labels.join(", "))
        })
        .collect()
}
