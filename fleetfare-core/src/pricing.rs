//! Tariffs offered for a vehicle class and tier.
//!
//! Monetary amounts travel as integers in thousandths of the currency unit
//! and are scaled with [`to_currency`] at the point of use.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// Divisor turning wire price units into currency.
pub const PRICE_UNIT_FACTOR: f64 = 1000.0;

/// Convert an integer price in wire units to currency.
///
/// # Examples
/// ```
/// use fleetfare_core::pricing::to_currency;
///
/// assert_eq!(to_currency(2_500), 2.5);
/// ```
#[must_use]
pub fn to_currency(units: i64) -> f64 {
    units as f64 / PRICE_UNIT_FACTOR
}

/// Rule selecting how travel is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FareRule {
    /// Charge driving minutes.
    Minute,
    /// Charge kilometres beyond the included allowance.
    Kilometer,
    /// Charge both minutes and kilometres.
    Smart,
    /// Unrecognised rule; travel is not charged.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A named tariff.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingModel {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model_type: String,
    /// Flat fee charged when the rental starts.
    #[serde(deserialize_with = "null_as_default")]
    pub unlock_fee: i64,
    /// Price per driving minute.
    #[serde(deserialize_with = "null_as_default")]
    pub minute_price: i64,
    /// Price per paused minute.
    #[serde(deserialize_with = "null_as_default")]
    pub pause_unit_price: i64,
    /// Price per kilometre beyond `included_kilometers`.
    #[serde(deserialize_with = "null_as_default")]
    pub kilometer_price: i64,
    /// Price per booking minute beyond the free allowance.
    #[serde(deserialize_with = "null_as_default")]
    pub book_unit_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hour_cap_price: i64,
    /// Ceiling on the total cost of a journey.
    #[serde(deserialize_with = "null_as_default")]
    pub day_cap_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub included_kilometers: i64,
    /// Fare rule discriminator.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub fare_rule: FareRule,
    #[serde(deserialize_with = "null_as_default")]
    pub move_unit_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub over_kilometer_price: i64,
}

/// Names of the three offers in a [`PricingOfferSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingPlanKind {
    /// Pay by the minute.
    PerMinute,
    /// Pay by the kilometre.
    PerKilometer,
    /// Hybrid minute and kilometre pricing.
    Smart,
}

impl PricingPlanKind {
    /// Stable name used in responses and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerMinute => "per-minute",
            Self::PerKilometer => "per-kilometer",
            Self::Smart => "smart",
        }
    }
}

impl fmt::Display for PricingPlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The offers available for one vehicle class and tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingOfferSet {
    #[serde(rename = "pricingPerMinute", deserialize_with = "null_as_default")]
    pub per_minute: PricingModel,
    #[serde(rename = "pricingPerKilometer", deserialize_with = "null_as_default")]
    pub per_kilometer: PricingModel,
    #[serde(rename = "smartPricing", deserialize_with = "null_as_default")]
    pub smart: PricingModel,
}

impl PricingOfferSet {
    /// Offers in evaluation order: per-minute, per-kilometre, smart.
    #[must_use]
    pub const fn offers(&self) -> [(PricingPlanKind, &PricingModel); 3] {
        [
            (PricingPlanKind::PerMinute, &self.per_minute),
            (PricingPlanKind::PerKilometer, &self.per_kilometer),
            (PricingPlanKind::Smart, &self.smart),
        ]
    }
}
