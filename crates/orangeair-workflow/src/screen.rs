// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serializable screen models handed to whatever front end renders them.

use orangeair_calendar::DateWindow;
use orangeair_core::{Brand, EquipmentEntry, ReservedSlot, SessionId, TimeBucket, UsageType};
use serde::Serialize;

use crate::pricing::{MAX_UNITS_PER_ENTRY, PriceListing, PriceTable};
use crate::referral::REFERRAL_INSTRUCTIONS;
use crate::session::Session;
use crate::step::{ServiceChoice, Step};
use crate::submission::REQUIRED_PREFERENCES;

/// Shown on the commercial equipment screen once units are listed.
pub const BULK_DISCOUNT_NOTICE: &str = "Bulk discounts for many units are negotiated by phone.";

/// Response to every session request: which screen to show and its data.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenView {
    pub session_id: SessionId,
    pub step: Step,
    /// Receipt or prompt produced by the action that led here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub screen: Screen,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandOption {
    pub brand: Brand,
    pub label: String,
}

impl BrandOption {
    pub fn all() -> Vec<BrandOption> {
        Brand::ALL
            .into_iter()
            .map(|brand| BrandOption {
                brand,
                label: brand.to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketOption {
    pub bucket: TimeBucket,
    pub label: String,
}

impl BucketOption {
    pub fn all() -> Vec<BucketOption> {
        TimeBucket::OPTIONS
            .into_iter()
            .map(|bucket| BucketOption {
                bucket,
                label: bucket.to_string(),
            })
            .collect()
    }
}

/// Per-screen content.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Main {
        services: Vec<ServiceChoice>,
        recommender: String,
    },
    EquipmentEntry {
        usage: UsageType,
        brands: Vec<BrandOption>,
        equipment_types: Vec<PriceListing>,
        max_count: u8,
        max_photos: usize,
        units: Vec<EquipmentEntry>,
        total: u64,
        photos: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        bulk_discount_notice: Option<&'static str>,
    },
    Reservation {
        dates: DateWindow,
        preferences_required: usize,
        time_options: Vec<BucketOption>,
        reserved: Vec<ReservedSlot>,
        units: Vec<EquipmentEntry>,
        total: u64,
        recommender: String,
        referral_prompt: bool,
    },
    Support {
        max_photos: usize,
    },
    Recommend {
        #[serde(skip_serializing_if = "Option::is_none")]
        referral_link: Option<String>,
        instructions: Vec<&'static str>,
    },
}

/// Settings a screen needs beyond the session itself.
pub(crate) struct ScreenContext<'a> {
    pub prices: &'a PriceTable,
    pub max_photos: usize,
    pub dates: DateWindow,
}

impl ScreenView {
    pub(crate) fn render(session: &Session, ctx: &ScreenContext<'_>) -> Self {
        let screen = match session.step() {
            Step::Main => Screen::Main {
                services: ServiceChoice::ALL.to_vec(),
                recommender: session.recommender().to_string(),
            },
            Step::EquipmentEntry(usage) => Screen::EquipmentEntry {
                usage,
                brands: BrandOption::all(),
                equipment_types: ctx.prices.listings(),
                max_count: MAX_UNITS_PER_ENTRY,
                max_photos: ctx.max_photos,
                units: session.units().to_vec(),
                total: session.total(),
                photos: session.photos().len(),
                bulk_discount_notice: (usage == UsageType::Commercial
                    && !session.units().is_empty())
                .then_some(BULK_DISCOUNT_NOTICE),
            },
            Step::Reservation => Screen::Reservation {
                dates: ctx.dates,
                preferences_required: REQUIRED_PREFERENCES,
                time_options: BucketOption::all(),
                reserved: session.reserved().to_vec(),
                units: session.units().to_vec(),
                total: session.total(),
                recommender: session.recommender().to_string(),
                referral_prompt: session.referral_prompt(),
            },
            Step::Support => Screen::Support {
                max_photos: ctx.max_photos,
            },
            Step::Recommend => {
                let referral_link = session.referral_link().map(str::to_string);
                let instructions = if referral_link.is_some() {
                    REFERRAL_INSTRUCTIONS.to_vec()
                } else {
                    Vec::new()
                };
                Screen::Recommend {
                    referral_link,
                    instructions,
                }
            }
        };

        ScreenView {
            session_id: session.id().clone(),
            step: session.step(),
            notice: session.notice().map(str::to_string),
            screen,
        }
    }
}
