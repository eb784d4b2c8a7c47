// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking workflow for the Orange Air consultation service.
//!
//! Sessions move between screens through an explicit transition table
//! ([`step::transition`]). [`BookingWorkflow`] applies customer actions,
//! awaiting the calendar, image compressor, and mailer before it mutates a
//! session.

pub mod pricing;
pub mod referral;
pub mod screen;
pub mod session;
pub mod step;
pub mod submission;
pub mod workflow;

pub use orangeair_calendar::{DateWindow, DayAvailability};
pub use pricing::{MAX_UNITS_PER_ENTRY, PriceListing, PriceTable};
pub use referral::{REFERRAL_INSTRUCTIONS, referral_link};
pub use screen::{BULK_DISCOUNT_NOTICE, BrandOption, BucketOption, Screen, ScreenView};
pub use session::Session;
pub use step::{Action, ServiceChoice, Step, TransitionContext, transition};
pub use submission::{BookingForm, PreferredSlot, REQUIRED_PREFERENCES, SupportForm};
pub use workflow::{BOOKING_RECEIVED, BookingWorkflow, SUPPORT_RECEIVED};
