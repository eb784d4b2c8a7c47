// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Applies customer actions to a session.
//!
//! Every action is resolved in three phases:
//! 1. the pure transition table decides the next step (or rejects the action),
//! 2. inputs are validated and external calls (calendar, image compression,
//!    SMTP) are awaited,
//! 3. only then is the session mutated and the step advanced.
//!
//! A failure in phase 1 or 2 therefore leaves the session exactly as it was.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use orangeair_calendar::{DateWindow, DayAvailability};
use orangeair_config::model::OrangeairConfig;
use orangeair_core::{
    CalendarAdapter, EquipmentEntry, MailAdapter, OrangeairError, PhotoUpload, SessionId,
    UsageType,
};
use orangeair_email::{BookingNotice, NotificationComposer, SupportNotice};
use orangeair_imaging::{ImageCompressor, has_allowed_extension};
use tracing::{debug, info, warn};

use crate::pricing::{MAX_UNITS_PER_ENTRY, PriceTable};
use crate::referral::referral_link;
use crate::screen::{ScreenContext, ScreenView};
use crate::session::Session;
use crate::step::{Action, ServiceChoice, Step, transition};
use crate::submission::{BookingForm, SupportForm};

/// Shown after a booking email has been delivered.
pub const BOOKING_RECEIVED: &str =
    "Your booking request has been received! Join the friend referral event.";

/// Shown on the main screen after a support email has been delivered.
pub const SUPPORT_RECEIVED: &str = "Your AS request has been received.";

/// Drives sessions through the booking flow.
///
/// Holds no per-session state; one instance serves every session.
pub struct BookingWorkflow {
    calendar: Arc<dyn CalendarAdapter>,
    mailer: Arc<dyn MailAdapter>,
    prices: PriceTable,
    compressor: ImageCompressor,
    composer: NotificationComposer,
    calendar_id: String,
    window_days: u32,
    allowed_extensions: Vec<String>,
    service_domain: String,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl BookingWorkflow {
    pub fn new(
        config: &OrangeairConfig,
        calendar: Arc<dyn CalendarAdapter>,
        mailer: Arc<dyn MailAdapter>,
    ) -> Result<Self, OrangeairError> {
        Ok(Self {
            calendar,
            mailer,
            prices: PriceTable::from_config(&config.pricing)?,
            compressor: ImageCompressor::from_config(&config.uploads),
            composer: NotificationComposer::new(&config.business.notification_recipient)?,
            calendar_id: config.calendar.calendar_id.clone(),
            window_days: config.calendar.window_days,
            allowed_extensions: config.uploads.allowed_extensions.clone(),
            service_domain: config.business.service_domain.clone(),
            today: local_today,
        })
    }

    /// Replaces the clock used for the reservation date window.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Dates the reservation screen currently offers.
    pub fn date_window(&self) -> DateWindow {
        DateWindow::starting((self.today)(), self.window_days)
    }

    /// Creates a session on the main screen.
    pub fn start(&self, referral: Option<&str>) -> (Session, ScreenView) {
        let mut session = Session::new(SessionId::generate());
        session.set_recommender(referral);
        info!(
            session_id = %session.id(),
            recommender = session.recommender(),
            "session started"
        );
        let view = self.view(&session);
        (session, view)
    }

    /// Current screen of `session`.
    ///
    /// Viewing the main screen stores `referral` as the recommender code,
    /// overwriting the previous one.
    pub fn show(&self, session: &mut Session, referral: Option<&str>) -> ScreenView {
        if session.step() == Step::Main {
            session.set_recommender(referral);
        }
        self.view(session)
    }

    pub fn view(&self, session: &Session) -> ScreenView {
        let ctx = ScreenContext {
            prices: &self.prices,
            max_photos: self.compressor.max_photos(),
            dates: self.date_window(),
        };
        ScreenView::render(session, &ctx)
    }

    /// Applies one customer action and returns the screen to show next.
    pub async fn apply(
        &self,
        session: &mut Session,
        action: Action,
    ) -> Result<ScreenView, OrangeairError> {
        let from = session.step();
        let name = action.name();
        let next = transition(from, &action, session.transition_context())?;

        let notice = match self.perform(session, action).await {
            Ok(notice) => notice,
            Err(e) => {
                warn!(
                    session_id = %session.id(),
                    step = %from,
                    action = name,
                    error = %e,
                    "action failed"
                );
                return Err(e);
            }
        };

        session.set_step(next);
        session.set_notice(notice);
        info!(
            session_id = %session.id(),
            from = %from,
            to = %next,
            action = name,
            "action applied"
        );
        Ok(self.view(session))
    }

    /// Offered and disabled time buckets for `date`, from a fresh calendar read.
    pub async fn availability(
        &self,
        session: &mut Session,
        date: NaiveDate,
    ) -> Result<DayAvailability, OrangeairError> {
        let window = self.date_window();
        if !window.contains(date) {
            return Err(OrangeairError::Validation(format!(
                "date {date} must be between {} and {}",
                window.first, window.last
            )));
        }
        let reserved = self.calendar.reserved_slots(&self.calendar_id).await?;
        let availability = DayAvailability::for_date(&reserved, date);
        session.set_reserved(reserved);
        Ok(availability)
    }

    /// Runs the side effects of an already-accepted action.
    ///
    /// Returns the notice to show on the next screen.
    async fn perform(
        &self,
        session: &mut Session,
        action: Action,
    ) -> Result<Option<String>, OrangeairError> {
        match action {
            Action::ChooseService { service } => {
                match service {
                    ServiceChoice::Residential => session.set_usage(UsageType::Residential),
                    ServiceChoice::Commercial => session.set_usage(UsageType::Commercial),
                    ServiceChoice::Support | ServiceChoice::Referral => {}
                }
                Ok(None)
            }
            Action::AddUnit {
                brand,
                equipment_type,
                count,
                photos,
            } => {
                if !(1..=MAX_UNITS_PER_ENTRY).contains(&count) {
                    return Err(OrangeairError::Validation(format!(
                        "count must be between 1 and {MAX_UNITS_PER_ENTRY}, got {count}"
                    )));
                }
                self.check_extensions(&photos)?;
                let price = self.prices.price(equipment_type, count);
                debug!(%brand, %equipment_type, count, price, "unit added");
                session.add_unit(
                    EquipmentEntry {
                        brand,
                        equipment_type,
                        count,
                        price,
                    },
                    photos,
                    self.compressor.max_photos(),
                );
                Ok(None)
            }
            Action::ResetUnits => {
                session.reset_units();
                Ok(None)
            }
            Action::Proceed => {
                let reserved = self.calendar.reserved_slots(&self.calendar_id).await?;
                debug!(reserved = reserved.len(), "reserved slots fetched");
                session.set_reserved(reserved);
                Ok(None)
            }
            Action::SubmitBooking(form) => {
                self.submit_booking(session, form).await?;
                session.set_referral_prompt(true);
                Ok(Some(BOOKING_RECEIVED.to_string()))
            }
            Action::AcceptReferral => {
                session.set_referral_prompt(false);
                Ok(None)
            }
            Action::SubmitSupport(form) => {
                self.submit_support(form).await?;
                Ok(Some(SUPPORT_RECEIVED.to_string()))
            }
            Action::GenerateReferral { phone } => {
                session.set_referral_link(referral_link(&self.service_domain, &phone));
                Ok(None)
            }
            Action::Back | Action::ReturnToMain => Ok(None),
        }
    }

    async fn submit_booking(
        &self,
        session: &Session,
        form: BookingForm,
    ) -> Result<(), OrangeairError> {
        form.validate(self.date_window(), session.reserved())?;

        let attachments = self.compressor.compress_all(session.photos().to_vec()).await?;
        let notice = BookingNotice {
            name: form.name,
            phone: form.phone,
            address: form.address,
            parking: form.parking,
            units: session.units().to_vec(),
            total: session.total(),
            preferences: form
                .preferences
                .iter()
                .map(|slot| (slot.date, slot.bucket))
                .collect(),
            notes: form.notes,
            recommender: session.recommender().to_string(),
        };
        let email = self.composer.booking_email(&notice, attachments)?;
        info!(
            session_id = %session.id(),
            units = notice.units.len(),
            total = notice.total,
            attachments = email.attachments.len(),
            "sending booking request"
        );
        self.mailer.send(email).await
    }

    async fn submit_support(&self, form: SupportForm) -> Result<(), OrangeairError> {
        self.check_extensions(&form.photos)?;

        let attachments = self.compressor.compress_all(form.photos).await?;
        let notice = SupportNotice {
            region: form.region,
            phone: form.phone,
            visit_date: form.visit_date,
            symptoms: form.symptoms,
        };
        let email = self.composer.support_email(&notice, attachments)?;
        info!(attachments = email.attachments.len(), "sending support request");
        self.mailer.send(email).await
    }

    fn check_extensions(&self, photos: &[PhotoUpload]) -> Result<(), OrangeairError> {
        match photos
            .iter()
            .find(|photo| !has_allowed_extension(&photo.filename, &self.allowed_extensions))
        {
            Some(photo) => Err(OrangeairError::Validation(format!(
                "unsupported photo `{}`, allowed extensions: {}",
                photo.filename,
                self.allowed_extensions.join(", ")
            ))),
            None => Ok(()),
        }
    }
}
