// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking and support form payloads and their validation.

use chrono::NaiveDate;
use orangeair_calendar::{DateWindow, is_disabled};
use orangeair_core::{OrangeairError, Parking, PhotoUpload, ReservedSlot, TimeBucket};
use serde::{Deserialize, Serialize};

/// A booking always names exactly this many preferred slots.
pub const REQUIRED_PREFERENCES: usize = 3;

/// One preferred appointment date and time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredSlot {
    pub date: NaiveDate,
    pub bucket: TimeBucket,
}

/// Fields entered on the reservation screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingForm {
    pub preferences: Vec<PreferredSlot>,
    pub address: String,
    pub parking: Parking,
    #[serde(default)]
    pub notes: String,
    pub name: String,
    pub phone: String,
}

impl BookingForm {
    /// Checks the preferences against the offered window and the reserved slots.
    ///
    /// Free-text fields are accepted as typed.
    pub fn validate(
        &self,
        window: DateWindow,
        reserved: &[ReservedSlot],
    ) -> Result<(), OrangeairError> {
        if self.preferences.len() != REQUIRED_PREFERENCES {
            return Err(OrangeairError::Validation(format!(
                "exactly {REQUIRED_PREFERENCES} preferred dates are required, got {}",
                self.preferences.len()
            )));
        }

        for (i, slot) in self.preferences.iter().enumerate() {
            let n = i + 1;
            if !window.contains(slot.date) {
                return Err(OrangeairError::Validation(format!(
                    "preferred date {n} ({}) must be between {} and {}",
                    slot.date, window.first, window.last
                )));
            }
            if is_disabled(reserved, slot.date, slot.bucket) {
                return Err(OrangeairError::Validation(format!(
                    "preferred slot {n} ({} {}) is already booked",
                    slot.date, slot.bucket
                )));
            }
        }
        Ok(())
    }
}

/// Fields entered on the support (AS) screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportForm {
    pub region: String,
    pub phone: String,
    /// Prior visit date as the customer remembers it (free text).
    #[serde(default)]
    pub visit_date: String,
    pub symptoms: String,
    #[serde(default)]
    pub photos: Vec<PhotoUpload>,
}
