//! Priced journey plans.

use serde::{Deserialize, Serialize};

use crate::{Journey, PricingPlanKind, Vehicle};

/// Cost components of a plan, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Flat fee for starting the rental.
    pub unlock_fee: f64,
    /// Walking and waiting beyond the free booking allowance.
    pub booking_cost: f64,
    /// Driving charged under the tariff's fare rule.
    pub travel_cost: f64,
    /// Parked time, including any non-compliant parking penalty.
    pub pause_cost: f64,
    /// Walk from the journey start to the vehicle. Informational only.
    #[serde(rename = "walkingTimeMinutes")]
    pub walking_time_minutes: f64,
}

impl CostBreakdown {
    /// Sum of the charged components before any cap applies.
    #[must_use]
    pub fn uncapped_total(&self) -> f64 {
        self.unlock_fee + self.booking_cost + self.travel_cost + self.pause_cost
    }
}

/// The priced outcome of planning a journey with one vehicle and tariff.
///
/// `total_cost` is the breakdown's sum capped at the tariff's day cap, so it
/// may be lower than [`CostBreakdown::uncapped_total`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPlan {
    /// Vehicle the journey is planned with.
    pub vehicle: Vehicle,
    /// The journey as submitted.
    pub journey: Journey,
    /// Amount charged for the journey.
    pub total_cost: f64,
    pub cost_breakdown: CostBreakdown,
    /// Offer the plan was priced under.
    pub pricing_model: PricingPlanKind,
}
