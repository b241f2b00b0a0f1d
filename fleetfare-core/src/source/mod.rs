//! Upstream fleet, pricing and geozone data.
//!
//! The [`FleetSource`] trait abstracts the provider that reports the live
//! fleet, the tariffs offered for a vehicle class and the zones in which a
//! vehicle may be parked. The planning core itself performs no I/O; it only
//! consumes snapshots obtained through this trait.

mod error;

pub use error::FleetSourceError;

use crate::{Geozone, PricingOfferSet, Vehicle};

/// Read-only access to the rental provider's data.
///
/// Implementations must be `Send + Sync` so a planner can be shared across
/// threads. Every call is independent; a failed call leaves no state behind.
///
/// # Examples
///
/// ```rust
/// use fleetfare_core::{FleetSource, FleetSourceError, Geozone, PricingOfferSet, Vehicle};
///
/// struct EmptyProvider;
///
/// impl FleetSource for EmptyProvider {
///     fn fetch_fleet(&self) -> Result<Vec<Vehicle>, FleetSourceError> {
///         Ok(Vec::new())
///     }
///
///     fn fetch_pricing_offers(
///         &self,
///         _model_type: &str,
///         _tier: &str,
///     ) -> Result<PricingOfferSet, FleetSourceError> {
///         Ok(PricingOfferSet::default())
///     }
///
///     fn fetch_geozone(&self, _vehicle_uuid: &str) -> Result<Geozone, FleetSourceError> {
///         Ok(Geozone::default())
///     }
/// }
///
/// assert!(EmptyProvider.fetch_fleet()?.is_empty());
/// # Ok::<(), FleetSourceError>(())
/// ```
pub trait FleetSource: Send + Sync {
    /// Return every vehicle currently reported, of any class.
    fn fetch_fleet(&self) -> Result<Vec<Vehicle>, FleetSourceError>;

    /// Return the offers for a vehicle class and pricing tier.
    fn fetch_pricing_offers(
        &self,
        model_type: &str,
        tier: &str,
    ) -> Result<PricingOfferSet, FleetSourceError>;

    /// Return the zones that apply to a vehicle.
    fn fetch_geozone(&self, vehicle_uuid: &str) -> Result<Geozone, FleetSourceError>;
}

impl<S: FleetSource + ?Sized> FleetSource for Box<S> {
    fn fetch_fleet(&self) -> Result<Vec<Vehicle>, FleetSourceError> {
        (**self).fetch_fleet()
    }

    fn fetch_pricing_offers(
        &self,
        model_type: &str,
        tier: &str,
    ) -> Result<PricingOfferSet, FleetSourceError> {
        (**self).fetch_pricing_offers(model_type, tier)
    }

    fn fetch_geozone(&self, vehicle_uuid: &str) -> Result<Geozone, FleetSourceError> {
        (**self).fetch_geozone(vehicle_uuid)
    }
}
