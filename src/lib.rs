//! Facade crate for the fleetfare journey planner.
//!
//! This crate re-exports the core domain types and planning operations, and
//! exposes the HTTP fleet source behind the default `http` feature.

#![forbid(unsafe_code)]

pub use fleetfare_core::{
    CostBreakdown, Evaluation, FleetSource, FleetSourceError, Geozone, GeozoneItem, Journey,
    JourneyPlan, JourneyPlanner, Location, PlanError, PricingModel, PricingOfferSet,
    PricingPlanKind, Rejection, TripLeg, Vehicle, VehicleModel, ZoneGeometry, evaluate,
    find_closest, geodesy, is_in_parking_zone, optimize, plan_journey, retain_cars,
};

#[cfg(feature = "http")]
pub use fleetfare_data::{HttpFleetSource, HttpFleetSourceConfig, ProviderBuildError};
