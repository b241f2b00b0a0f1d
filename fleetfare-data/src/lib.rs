//! Provider access for the fleetfare planner.
//!
//! Responsibilities:
//! - Implement [`fleetfare_core::FleetSource`] over the rental provider's
//!   HTTP API.
//! - Decode the provider's wire formats, including GeoJSON zone geometry.
//!
//! Boundaries:
//! - Do not encode pricing or selection rules (live in `fleetfare-core`).
//! - Keep blocking I/O off async executors.

pub mod api;

pub use api::{
    DEFAULT_BASE_URL, DEFAULT_CITY_ID, DEFAULT_USER_AGENT, HttpFleetSource, HttpFleetSourceConfig,
    ProviderBuildError,
};
