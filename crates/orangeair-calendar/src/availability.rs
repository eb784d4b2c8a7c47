// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slot-disabling rule for the reservation screen.

use chrono::{Days, NaiveDate};
use orangeair_core::{ReservedSlot, TimeBucket};
use serde::Serialize;

/// True when an existing appointment occupies exactly `(date, bucket)`.
///
/// `AnyTime` never conflicts.
pub fn is_disabled(reserved: &[ReservedSlot], date: NaiveDate, bucket: TimeBucket) -> bool {
    bucket != TimeBucket::AnyTime
        && reserved
            .iter()
            .any(|slot| slot.date == date && slot.bucket == bucket)
}

/// The options a customer may pick for `date`, in display order.
pub fn offered_options(reserved: &[ReservedSlot], date: NaiveDate) -> Vec<TimeBucket> {
    TimeBucket::OPTIONS
        .into_iter()
        .filter(|bucket| !is_disabled(reserved, date, *bucket))
        .collect()
}

/// Per-date availability returned to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub offered: Vec<TimeBucket>,
    pub disabled: Vec<TimeBucket>,
}

impl DayAvailability {
    pub fn for_date(reserved: &[ReservedSlot], date: NaiveDate) -> Self {
        let (disabled, offered): (Vec<_>, Vec<_>) = TimeBucket::OPTIONS
            .into_iter()
            .partition(|bucket| is_disabled(reserved, date, *bucket));
        Self {
            date,
            offered,
            disabled,
        }
    }
}

/// Inclusive range of dates the reservation screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DateWindow {
    /// `today` through `today + days`.
    pub fn starting(today: NaiveDate, days: u32) -> Self {
        let last = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        Self { first: today, last }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first..=self.last).contains(&date)
    }
}
