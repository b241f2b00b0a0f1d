//! HTTP access to the rental provider's public API.
//!
//! [`HttpFleetSource`] implements [`fleetfare_core::FleetSource`] by issuing
//! one `GET` per call against the provider:
//!
//! - `{base}/cities/{city}/vehicles` for the live fleet;
//! - `{base}/pricing/pay-per-use?modelType=..&tier=..` for the offers;
//! - `{base}/geozones/{vehicle}` for the zones applying to a vehicle.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use fleetfare_core::{FleetSource, FleetSourceError};
//! use fleetfare_data::api::{HttpFleetSource, HttpFleetSourceConfig};
//!
//! let config = HttpFleetSourceConfig::new("https://poppy.red/api/v3")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let source = HttpFleetSource::with_config(config)?;
//!
//! let fleet = source.fetch_fleet()?;
//! println!("{} vehicles available", fleet.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod wire;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_CITY_ID, DEFAULT_USER_AGENT, HttpFleetSource, HttpFleetSourceConfig,
    ProviderBuildError,
};
