//! Core planning logic for shared-vehicle journeys.
//!
//! Given a multi-leg [`Journey`], the planner selects the car closest to the
//! start, prices the trip under each tariff the provider offers for that
//! car's class and returns the cheapest [`JourneyPlan`]. Parking geofences
//! constrain where a journey may end and penalise pauses taken elsewhere.
//!
//! Everything here is pure computation over snapshots. Provider access goes
//! through the [`FleetSource`] trait, implemented over HTTP in
//! `fleetfare-data`.

mod error;
mod evaluator;
pub mod geodesy;
pub mod geozone;
mod journey;
mod location;
mod nullable;
mod optimizer;
mod plan;
mod planner;
pub mod pricing;
mod source;
pub mod vehicle;

#[doc(hidden)]
pub mod test_support;

pub use error::PlanError;
pub use evaluator::{
    Evaluation, FREE_BOOKING_MINUTES, NON_COMPLIANT_PAUSE_FACTOR, Rejection, evaluate,
};
pub use geozone::{Geozone, GeozoneItem, ZoneGeometry, is_in_parking_zone};
pub use journey::{Journey, TripLeg};
pub use location::Location;
pub use optimizer::optimize;
pub use plan::{CostBreakdown, JourneyPlan};
pub use planner::{JourneyPlanner, plan_journey};
pub use pricing::{PricingModel, PricingOfferSet, PricingPlanKind};
pub use source::{FleetSource, FleetSourceError};
pub use vehicle::{Vehicle, VehicleModel, find_closest, retain_cars};
