// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Orange Air consultation service.
//!
//! This crate provides the error type, the domain types shared by every other
//! crate, and the adapter traits the booking workflow calls through.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::OrangeairError;
pub use types::{
    AdapterType, Attachment, Brand, EquipmentEntry, EquipmentType, HealthStatus, OutboundEmail,
    Parking, PhotoUpload, ReservedSlot, SessionId, TimeBucket, UsageType,
};

pub use traits::{Adapter, CalendarAdapter, MailAdapter};
