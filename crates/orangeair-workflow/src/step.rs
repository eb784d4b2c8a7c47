// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Screens, user actions, and the transition table between them.
//!
//! [`transition`] is pure: it decides where an action leads without touching
//! the session, so a rejected action can never leave partial state behind.

use orangeair_core::{Brand, EquipmentType, OrangeairError, PhotoUpload, UsageType};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::submission::{BookingForm, SupportForm};

/// The screen a session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", content = "usage", rename_all = "snake_case")]
pub enum Step {
    Main,
    EquipmentEntry(UsageType),
    Reservation,
    Support,
    Recommend,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Main => write!(f, "main"),
            Step::EquipmentEntry(usage) => write!(f, "equipment entry ({usage})"),
            Step::Reservation => write!(f, "reservation"),
            Step::Support => write!(f, "support"),
            Step::Recommend => write!(f, "recommend"),
        }
    }
}

/// Services offered on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ServiceChoice {
    Residential,
    Commercial,
    Support,
    Referral,
}

impl ServiceChoice {
    pub const ALL: [ServiceChoice; 4] = [
        ServiceChoice::Residential,
        ServiceChoice::Commercial,
        ServiceChoice::Support,
        ServiceChoice::Referral,
    ];
}

/// Something the customer did on the current screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ChooseService {
        service: ServiceChoice,
    },
    AddUnit {
        brand: Brand,
        equipment_type: EquipmentType,
        count: u8,
        #[serde(default)]
        photos: Vec<PhotoUpload>,
    },
    ResetUnits,
    Proceed,
    Back,
    SubmitBooking(BookingForm),
    AcceptReferral,
    SubmitSupport(SupportForm),
    GenerateReferral {
        phone: String,
    },
    ReturnToMain,
}

impl Action {
    /// Wire name of the action, used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::ChooseService { .. } => "choose_service",
            Action::AddUnit { .. } => "add_unit",
            Action::ResetUnits => "reset_units",
            Action::Proceed => "proceed",
            Action::Back => "back",
            Action::SubmitBooking(_) => "submit_booking",
            Action::AcceptReferral => "accept_referral",
            Action::SubmitSupport(_) => "submit_support",
            Action::GenerateReferral { .. } => "generate_referral",
            Action::ReturnToMain => "return_to_main",
        }
    }
}

/// Session facts the transition table depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionContext {
    /// Usage chosen on the main screen, if any.
    pub usage: Option<UsageType>,
    /// Set after a successful booking until the customer follows it.
    pub referral_prompt: bool,
}

/// Where `action` leads from `from`, or `InvalidTransition`.
pub fn transition(
    from: Step,
    action: &Action,
    ctx: TransitionContext,
) -> Result<Step, OrangeairError> {
    let next = match (from, action) {
        (Step::Main, Action::ChooseService { service }) => match service {
            ServiceChoice::Residential => Step::EquipmentEntry(UsageType::Residential),
            ServiceChoice::Commercial => Step::EquipmentEntry(UsageType::Commercial),
            ServiceChoice::Support => Step::Support,
            ServiceChoice::Referral => Step::Recommend,
        },

        (Step::EquipmentEntry(usage), Action::AddUnit { .. } | Action::ResetUnits) => {
            Step::EquipmentEntry(usage)
        }
        (Step::EquipmentEntry(_), Action::Proceed) => Step::Reservation,
        (Step::EquipmentEntry(_), Action::Back) => Step::Main,

        (Step::Reservation, Action::SubmitBooking(_)) => Step::Reservation,
        (Step::Reservation, Action::AcceptReferral) if ctx.referral_prompt => Step::Recommend,
        (Step::Reservation, Action::Back) => {
            Step::EquipmentEntry(ctx.usage.unwrap_or(UsageType::Residential))
        }

        (Step::Support, Action::SubmitSupport(_) | Action::Back) => Step::Main,

        (Step::Recommend, Action::GenerateReferral { .. }) => Step::Recommend,
        (Step::Recommend, Action::ReturnToMain) => Step::Main,

        (from, action) => {
            return Err(OrangeairError::InvalidTransition {
                from: from.to_string(),
                action: action.name().to_string(),
            });
        }
    };
    Ok(next)
}
