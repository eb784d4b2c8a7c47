// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cleaning price table.

use std::collections::HashMap;
use std::str::FromStr;

use orangeair_config::model::PricingConfig;
use orangeair_core::{EquipmentType, OrangeairError};
use serde::Serialize;

/// Most units of one type a single entry may list.
pub const MAX_UNITS_PER_ENTRY: u8 = 10;

/// Base price per equipment type, with a fallback for unknown types.
#[derive(Debug, Clone)]
pub struct PriceTable {
    base: HashMap<EquipmentType, u64>,
    default_base: u64,
}

/// One row of the equipment picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceListing {
    pub equipment_type: EquipmentType,
    pub label: &'static str,
    pub base_price: u64,
}

impl PriceTable {
    pub fn from_config(config: &PricingConfig) -> Result<Self, OrangeairError> {
        let mut base = HashMap::with_capacity(config.base_prices.len());
        for (name, price) in &config.base_prices {
            let ty = EquipmentType::from_str(name).map_err(|_| {
                OrangeairError::Config(format!("unknown equipment type `{name}` in pricing"))
            })?;
            base.insert(ty, *price);
        }
        Ok(Self {
            base,
            default_base: config.default_base_price,
        })
    }

    pub fn base_price(&self, equipment_type: EquipmentType) -> u64 {
        self.base
            .get(&equipment_type)
            .copied()
            .unwrap_or(self.default_base)
    }

    /// `base_price * count`. Count bounds are checked by the caller.
    pub fn price(&self, equipment_type: EquipmentType, count: u8) -> u64 {
        self.base_price(equipment_type) * u64::from(count)
    }

    /// Known types with their labels and base prices, in picker order.
    pub fn listings(&self) -> Vec<PriceListing> {
        EquipmentType::KNOWN
            .into_iter()
            .map(|ty| PriceListing {
                equipment_type: ty,
                label: ty.label(),
                base_price: self.base_price(ty),
            })
            .collect()
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        let config = PricingConfig::default();
        let base = config
            .base_prices
            .iter()
            .filter_map(|(name, price)| {
                EquipmentType::from_str(name)
                    .ok()
                    .map(|ty| (ty, *price))
            })
            .collect();
        Self {
            base,
            default_base: config.default_base_price,
        }
    }
}
