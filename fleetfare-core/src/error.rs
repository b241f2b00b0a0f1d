//! Planning failures.

use thiserror::Error;

use crate::FleetSourceError;

/// Errors returned when no plan can be produced for a journey.
///
/// Every variant except the source failures is deterministic: planning the
/// same inputs again fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The journey has no legs.
    #[error("journey has no legs")]
    EmptyJourney,
    /// No eligible vehicle was reported.
    #[error("no vehicles available")]
    EmptyFleet,
    /// The fleet was non-empty but no vehicle could be selected.
    #[error("no vehicle found near the journey start")]
    NoEligibleVehicle,
    /// Every offered tariff rejected the journey.
    #[error("no valid pricing plan found")]
    NoValidPricingPlan,
    /// Fetching the fleet failed.
    #[error("failed to fetch vehicles: {0}")]
    Fleet(#[source] FleetSourceError),
    /// Fetching the pricing offers failed.
    #[error("failed to fetch pricing: {0}")]
    Pricing(#[source] FleetSourceError),
}
