// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for workflow and gateway integration tests.
//!
//! `TestHarness` assembles a [`BookingWorkflow`] from default configuration,
//! a [`MockCalendar`] and a [`MockMailer`], with the clock pinned to
//! [`TestHarness::today`] so reservation windows are reproducible.

use std::sync::Arc;

use chrono::NaiveDate;
use orangeair_config::model::OrangeairConfig;
use orangeair_core::{OrangeairError, ReservedSlot};
use orangeair_workflow::{BookingWorkflow, Session};

use crate::mock_calendar::{CalendarFailure, MockCalendar};
use crate::mock_mailer::MockMailer;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 30).unwrap_or_default()
}

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    config: OrangeairConfig,
    slots: Vec<ReservedSlot>,
    calendar_failure: Option<CalendarFailure>,
    mail_rejection: Option<String>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            config: OrangeairConfig::default(),
            slots: Vec::new(),
            calendar_failure: None,
            mail_rejection: None,
        }
    }

    /// Use a custom configuration instead of the defaults.
    pub fn with_config(mut self, config: OrangeairConfig) -> Self {
        self.config = config;
        self
    }

    /// Slots the mock calendar reports as already booked.
    pub fn with_reserved(mut self, slots: Vec<ReservedSlot>) -> Self {
        self.slots = slots;
        self
    }

    /// Make every calendar read fail.
    pub fn with_calendar_failure(mut self, failure: CalendarFailure) -> Self {
        self.calendar_failure = Some(failure);
        self
    }

    /// Make every email send fail.
    pub fn with_mail_rejection(mut self, message: impl Into<String>) -> Self {
        self.mail_rejection = Some(message.into());
        self
    }

    pub fn build(self) -> Result<TestHarness, OrangeairError> {
        let calendar = Arc::new(match self.calendar_failure {
            Some(failure) => MockCalendar::failing(failure),
            None => MockCalendar::with_slots(self.slots),
        });
        let mailer = Arc::new(match self.mail_rejection {
            Some(message) => MockMailer::rejecting(message),
            None => MockMailer::new(),
        });

        let workflow = BookingWorkflow::new(&self.config, calendar.clone(), mailer.clone())?
            .with_today(fixed_today);

        Ok(TestHarness {
            workflow: Arc::new(workflow),
            calendar,
            mailer,
        })
    }
}

/// A workflow wired to mock adapters.
pub struct TestHarness {
    pub workflow: Arc<BookingWorkflow>,
    pub calendar: Arc<MockCalendar>,
    pub mailer: Arc<MockMailer>,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// The date the harness workflow treats as today: 2025-05-30.
    pub fn today() -> NaiveDate {
        fixed_today()
    }

    /// Starts a session on the main screen, discarding the initial view.
    pub fn start(&self, referral: Option<&str>) -> Session {
        self.workflow.start(referral).0
    }
}
