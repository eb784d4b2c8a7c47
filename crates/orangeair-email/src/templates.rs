// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML bodies for booking and support notifications.
//!
//! Templates are named `*.html` so minijinja auto-escapes every interpolated
//! value; customer free text can never inject markup.

use chrono::NaiveDate;
use minijinja::{Environment, Value, context};
use orangeair_core::{
    Attachment, EquipmentEntry, OrangeairError, OutboundEmail, Parking, TimeBucket,
};
use serde::Serialize;

use crate::links::{format_won, kakao_map_url, naver_map_url, tel_url};

pub const BOOKING_SUBJECT: &str = "[Air conditioner booking request]";
pub const SUPPORT_SUBJECT: &str = "[Air conditioner AS request]";

const BOOKING_TEMPLATE: &str = "booking.html";
const SUPPORT_TEMPLATE: &str = "support.html";

/// Everything the business needs to schedule a cleaning visit.
#[derive(Debug, Clone)]
pub struct BookingNotice {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub parking: Parking,
    pub units: Vec<EquipmentEntry>,
    pub total: u64,
    pub preferences: Vec<(NaiveDate, TimeBucket)>,
    pub notes: String,
    pub recommender: String,
}

/// An after-service (AS) request.
#[derive(Debug, Clone)]
pub struct SupportNotice {
    pub region: String,
    pub phone: String,
    pub visit_date: String,
    pub symptoms: String,
}

#[derive(Serialize)]
struct UnitLine {
    brand: String,
    equipment_type: &'static str,
    count: u8,
    price: u64,
}

/// `2025/06/01 (Sunday) morning`.
pub fn preference_line(date: NaiveDate, bucket: TimeBucket) -> String {
    format!("{} {bucket}", date.format("%Y/%m/%d (%A)"))
}

/// Renders notices into [`OutboundEmail`]s addressed to the business mailbox.
pub struct NotificationComposer {
    env: Environment<'static>,
    recipient: String,
}

impl NotificationComposer {
    pub fn new(recipient: impl Into<String>) -> Result<Self, OrangeairError> {
        let mut env = Environment::new();
        env.add_filter("won", format_won);
        env.add_template(BOOKING_TEMPLATE, include_str!("../templates/booking.html"))
            .map_err(template_error)?;
        env.add_template(SUPPORT_TEMPLATE, include_str!("../templates/support.html"))
            .map_err(template_error)?;

        Ok(Self {
            env,
            recipient: recipient.into(),
        })
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn booking_email(
        &self,
        notice: &BookingNotice,
        attachments: Vec<Attachment>,
    ) -> Result<OutboundEmail, OrangeairError> {
        let units: Vec<UnitLine> = notice
            .units
            .iter()
            .map(|unit| UnitLine {
                brand: unit.brand.to_string(),
                equipment_type: unit.equipment_type.label(),
                count: unit.count,
                price: unit.price,
            })
            .collect();
        let preferences: Vec<Value> = notice
            .preferences
            .iter()
            .map(|(date, bucket)| Value::from_safe_string(preference_line(*date, *bucket)))
            .collect();

        let html_body = self.render(
            BOOKING_TEMPLATE,
            context! {
                name => notice.name,
                phone => notice.phone,
                tel_url => link(tel_url(&notice.phone)),
                address => notice.address,
                naver_map_url => link(naver_map_url(&notice.address)),
                kakao_map_url => link(kakao_map_url(&notice.address)),
                parking => notice.parking.to_string(),
                units,
                total => notice.total,
                preferences,
                notes => notice.notes,
                recommender => notice.recommender,
            },
        )?;

        Ok(OutboundEmail {
            subject: BOOKING_SUBJECT.to_string(),
            html_body,
            recipient: self.recipient.clone(),
            attachments,
        })
    }

    pub fn support_email(
        &self,
        notice: &SupportNotice,
        attachments: Vec<Attachment>,
    ) -> Result<OutboundEmail, OrangeairError> {
        let html_body = self.render(
            SUPPORT_TEMPLATE,
            context! {
                region => notice.region,
                naver_map_url => link(naver_map_url(&notice.region)),
                kakao_map_url => link(kakao_map_url(&notice.region)),
                phone => notice.phone,
                tel_url => link(tel_url(&notice.phone)),
                visit_date => notice.visit_date,
                symptoms => notice.symptoms,
            },
        )?;

        Ok(OutboundEmail {
            subject: SUPPORT_SUBJECT.to_string(),
            html_body,
            recipient: self.recipient.clone(),
            attachments,
        })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, OrangeairError> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(template_error)
    }
}

impl std::fmt::Debug for NotificationComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationComposer")
            .field("recipient", &self.recipient)
            .finish_non_exhaustive()
    }
}

/// Links are fully percent-encoded, so they carry no markup characters.
fn link(url: String) -> Value {
    Value::from_safe_string(url)
}

fn template_error(e: minijinja::Error) -> OrangeairError {
    OrangeairError::Mail {
        message: format!("failed to render email template: {e}"),
        source: Some(Box::new(e)),
    }
}
