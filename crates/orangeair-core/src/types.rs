// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared by the workflow, the adapters, and the HTTP gateway.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a booking session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generates a fresh random session identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of external adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Calendar,
    Mail,
}

/// Whether the customer books for a household or a business.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UsageType {
    Residential,
    Commercial,
}

/// Air-conditioner manufacturer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    #[strum(serialize = "Samsung")]
    Samsung,
    #[strum(serialize = "LG")]
    Lg,
    #[strum(serialize = "Carrier")]
    Carrier,
    #[strum(serialize = "Daewoo")]
    Daewoo,
    #[strum(serialize = "Other brand")]
    Other,
}

impl Brand {
    /// All brands in the order the equipment screen lists them.
    pub const ALL: [Brand; 5] = [
        Brand::Samsung,
        Brand::Lg,
        Brand::Carrier,
        Brand::Daewoo,
        Brand::Other,
    ];
}

/// Kind of indoor unit. The machine name (kebab-case) keys the price table.
///
/// Any type name the service does not know deserializes to `Other`, which is
/// priced at the default base price.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EquipmentType {
    WallMounted,
    FloorStanding,
    TwoInOne,
    OneWay,
    TwoWay,
    FourWay,
    #[serde(other)]
    Other,
}

impl EquipmentType {
    /// Known types in the order the equipment screen lists them.
    pub const KNOWN: [EquipmentType; 6] = [
        EquipmentType::WallMounted,
        EquipmentType::FloorStanding,
        EquipmentType::TwoInOne,
        EquipmentType::OneWay,
        EquipmentType::TwoWay,
        EquipmentType::FourWay,
    ];

    /// Human-readable label used in emails and screen listings.
    pub fn label(self) -> &'static str {
        match self {
            EquipmentType::WallMounted => "wall-mounted",
            EquipmentType::FloorStanding => "floor-standing",
            EquipmentType::TwoInOne => "two-in-one (wall + floor)",
            EquipmentType::OneWay => "1-way cassette",
            EquipmentType::TwoWay => "2-way cassette",
            EquipmentType::FourWay => "4-way cassette",
            EquipmentType::Other => "other",
        }
    }
}

/// One unit line added on the equipment screen. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub brand: Brand,
    pub equipment_type: EquipmentType,
    pub count: u8,
    /// Line price in KRW (base price times count).
    pub price: u64,
}

/// Whether the technician can park at the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parking {
    #[strum(serialize = "available")]
    Available,
    #[strum(serialize = "unavailable (parking fee may apply)")]
    Unavailable,
}

/// Coarse appointment time bucket.
///
/// The first four map to hour ranges of calendar events; `AnyTime` is the
/// customer's "no preference" option and never conflicts with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    #[strum(serialize = "morning")]
    Morning,
    #[strum(serialize = "early afternoon")]
    EarlyAfternoon,
    #[strum(serialize = "late afternoon")]
    LateAfternoon,
    #[strum(serialize = "evening (wall-mounted only)")]
    Evening,
    #[strum(serialize = "any time")]
    AnyTime,
}

impl TimeBucket {
    /// Every option offered on the reservation screen, in display order.
    pub const OPTIONS: [TimeBucket; 5] = [
        TimeBucket::Morning,
        TimeBucket::EarlyAfternoon,
        TimeBucket::LateAfternoon,
        TimeBucket::Evening,
        TimeBucket::AnyTime,
    ];
}

/// A calendar date and bucket already taken by an existing appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservedSlot {
    pub date: NaiveDate,
    pub bucket: TimeBucket,
}

/// A raw file uploaded by the customer. Travels base64-encoded over JSON.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUpload {
    pub filename: String,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl std::fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("filename", &self.filename)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// A compressed image ready to be attached to an email.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("filename", &self.filename)
            .field("bytes", &self.content.len())
            .finish()
    }
}

/// A fully rendered notification handed to a [`MailAdapter`](crate::MailAdapter).
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub subject: String,
    pub html_body: String,
    pub recipient: String,
    pub attachments: Vec<Attachment>,
}

mod base64_bytes {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
