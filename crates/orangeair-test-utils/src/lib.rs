// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Orange Air integration tests.
//!
//! Provides mock adapters and a harness that wires them into a
//! [`BookingWorkflow`](orangeair_workflow::BookingWorkflow), so workflow and
//! gateway tests run without a calendar or SMTP server.
//!
//! # Components
//!
//! - [`MockCalendar`] - Calendar with pre-configured reserved slots or a scripted failure
//! - [`MockMailer`] - Mail adapter that captures outgoing email
//! - [`TestHarness`] - Workflow assembled from the mocks with a fixed clock

pub mod fixtures;
pub mod harness;
pub mod mock_calendar;
pub mod mock_mailer;

pub use fixtures::sample_png;
pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_calendar::{CalendarFailure, MockCalendar};
pub use mock_mailer::MockMailer;
