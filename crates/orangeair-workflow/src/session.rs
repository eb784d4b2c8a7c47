// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-customer booking session state.

use chrono::{DateTime, Utc};
use orangeair_core::{EquipmentEntry, PhotoUpload, ReservedSlot, SessionId, UsageType};

use crate::step::{Step, TransitionContext};

/// Everything collected from one customer across screens.
///
/// Fields are private so the running total can only change together with
/// the entry list it summarizes.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    step: Step,
    usage: Option<UsageType>,
    recommender: String,
    units: Vec<EquipmentEntry>,
    photos: Vec<PhotoUpload>,
    total: u64,
    referral_prompt: bool,
    reserved: Vec<ReservedSlot>,
    referral_link: Option<String>,
    notice: Option<String>,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            step: Step::Main,
            usage: None,
            recommender: String::new(),
            units: Vec::new(),
            photos: Vec::new(),
            total: 0,
            referral_prompt: false,
            reserved: Vec::new(),
            referral_link: None,
            notice: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn usage(&self) -> Option<UsageType> {
        self.usage
    }

    pub fn recommender(&self) -> &str {
        &self.recommender
    }

    pub fn units(&self) -> &[EquipmentEntry] {
        &self.units
    }

    pub fn photos(&self) -> &[PhotoUpload] {
        &self.photos
    }

    /// Sum of the prices of [`units`](Self::units).
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn referral_prompt(&self) -> bool {
        self.referral_prompt
    }

    /// Slots fetched the last time the reservation screen was entered.
    pub fn reserved(&self) -> &[ReservedSlot] {
        &self.reserved
    }

    pub fn referral_link(&self) -> Option<&str> {
        self.referral_link.as_deref()
    }

    /// One-shot message from the last action (e.g. a submission receipt).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn transition_context(&self) -> TransitionContext {
        TransitionContext {
            usage: self.usage,
            referral_prompt: self.referral_prompt,
        }
    }

    /// Appends an entry and its photos, keeping the total in step.
    ///
    /// At most `max_photos` photos are held per session; later ones are dropped.
    pub fn add_unit(
        &mut self,
        entry: EquipmentEntry,
        photos: Vec<PhotoUpload>,
        max_photos: usize,
    ) {
        self.total += entry.price;
        self.units.push(entry);
        let room = max_photos.saturating_sub(self.photos.len());
        self.photos.extend(photos.into_iter().take(room));
    }

    /// Clears entries and photos and zeroes the total. There is no partial reset.
    pub fn reset_units(&mut self) {
        self.units.clear();
        self.photos.clear();
        self.total = 0;
    }

    pub(crate) fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    pub(crate) fn set_usage(&mut self, usage: UsageType) {
        self.usage = Some(usage);
    }

    /// Stores the `ref` parameter of the main screen, blank when absent.
    pub(crate) fn set_recommender(&mut self, code: Option<&str>) {
        self.recommender = code.map(str::trim).unwrap_or_default().to_string();
    }

    pub(crate) fn set_reserved(&mut self, slots: Vec<ReservedSlot>) {
        self.reserved = slots;
    }

    pub(crate) fn set_referral_prompt(&mut self, shown: bool) {
        self.referral_prompt = shown;
    }

    pub(crate) fn set_referral_link(&mut self, link: Option<String>) {
        self.referral_link = link;
    }

    pub(crate) fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }
}
