//! In-memory fixtures shared by unit, behaviour and doc tests.

use std::sync::{Mutex, PoisonError};

use geo::{LineString, Polygon};

use crate::{
    FleetSource, FleetSourceError, Geozone, GeozoneItem, Journey, Location, PricingModel,
    PricingOfferSet, TripLeg, Vehicle, VehicleModel, ZoneGeometry,
    geozone::PARKING_FENCING_TYPE, pricing::FareRule, vehicle::CAR_MODEL_TYPE,
};

/// A call made against a [`StubFleetSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRequest {
    /// [`FleetSource::fetch_fleet`].
    Fleet,
    /// [`FleetSource::fetch_pricing_offers`].
    PricingOffers { model_type: String, tier: String },
    /// [`FleetSource::fetch_geozone`].
    Geozone { vehicle_uuid: String },
}

/// `FleetSource` serving fixed snapshots and recording every call.
///
/// Geozone requests fail unless a zone collection is configured, so planning
/// runs without a parking constraint by default.
#[derive(Debug)]
pub struct StubFleetSource {
    fleet: Result<Vec<Vehicle>, FleetSourceError>,
    offers: Result<PricingOfferSet, FleetSourceError>,
    geozone: Result<Geozone, FleetSourceError>,
    requests: Mutex<Vec<SourceRequest>>,
}

impl Default for StubFleetSource {
    fn default() -> Self {
        Self::new(Vec::new(), PricingOfferSet::default())
    }
}

impl StubFleetSource {
    /// Serve `fleet` and `offers` with no zone data.
    #[must_use]
    pub fn new(fleet: Vec<Vehicle>, offers: PricingOfferSet) -> Self {
        Self {
            fleet: Ok(fleet),
            offers: Ok(offers),
            geozone: Err(FleetSourceError::HttpError {
                url: "stub://geozones".into(),
                status: 404,
                message: "no zone data".into(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serve `geozone` for every vehicle.
    #[must_use]
    pub fn with_geozone(mut self, geozone: Geozone) -> Self {
        self.geozone = Ok(geozone);
        self
    }

    /// Fail every geozone request with `err`.
    #[must_use]
    pub fn with_geozone_error(mut self, err: FleetSourceError) -> Self {
        self.geozone = Err(err);
        self
    }

    /// Fail every fleet request with `err`.
    #[must_use]
    pub fn with_fleet_error(mut self, err: FleetSourceError) -> Self {
        self.fleet = Err(err);
        self
    }

    /// Fail every pricing request with `err`.
    #[must_use]
    pub fn with_pricing_error(mut self, err: FleetSourceError) -> Self {
        self.offers = Err(err);
        self
    }

    /// Calls received so far, oldest first.
    pub fn requests(&self) -> Vec<SourceRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, request: SourceRequest) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }
}

impl FleetSource for StubFleetSource {
    fn fetch_fleet(&self) -> Result<Vec<Vehicle>, FleetSourceError> {
        self.record(SourceRequest::Fleet);
        self.fleet.clone()
    }

    fn fetch_pricing_offers(
        &self,
        model_type: &str,
        tier: &str,
    ) -> Result<PricingOfferSet, FleetSourceError> {
        self.record(SourceRequest::PricingOffers {
            model_type: model_type.to_owned(),
            tier: tier.to_owned(),
        });
        self.offers.clone()
    }

    fn fetch_geozone(&self, vehicle_uuid: &str) -> Result<Geozone, FleetSourceError> {
        self.record(SourceRequest::Geozone {
            vehicle_uuid: vehicle_uuid.to_owned(),
        });
        self.geozone.clone()
    }
}

/// A tier-S car parked at `location`.
#[must_use]
pub fn car(uuid: &str, location: Location) -> Vehicle {
    Vehicle {
        uuid: uuid.to_owned(),
        plate: format!("1-{}", uuid.to_uppercase()),
        location_latitude: location.lat,
        location_longitude: location.lng,
        model: VehicleModel {
            model_type: CAR_MODEL_TYPE.to_owned(),
            make: "Toyota".into(),
            name: "Yaris".into(),
            energy: "hybrid".into(),
            tier: "S".into(),
        },
        autonomy: 420.0,
        autonomy_percentage: 80.0,
        ..Vehicle::default()
    }
}

/// A square parking zone for `model_type` centred on `center`.
///
/// `half_size` is measured in degrees along both axes.
#[must_use]
pub fn parking_square(model_type: &str, center: Location, half_size: f64) -> GeozoneItem {
    let (west, east) = (center.lng - half_size, center.lng + half_size);
    let (south, north) = (center.lat - half_size, center.lat + half_size);
    let ring = LineString::from(vec![
        (west, south),
        (east, south),
        (east, north),
        (west, north),
        (west, south),
    ]);
    GeozoneItem {
        fencing_type: PARKING_FENCING_TYPE.to_owned(),
        model_type: model_type.to_owned(),
        geometry: ZoneGeometry::Polygon(Polygon::new(ring, vec![])),
    }
}

/// Offers resembling the provider's Brussels tariffs for tier-S cars.
#[must_use]
pub fn brussels_offers() -> PricingOfferSet {
    let base = PricingModel {
        tier: "S".into(),
        model_type: CAR_MODEL_TYPE.to_owned(),
        unlock_fee: 1_000,
        pause_unit_price: 190,
        book_unit_price: 190,
        hour_cap_price: 14_000,
        day_cap_price: 49_000,
        ..PricingModel::default()
    };
    PricingOfferSet {
        per_minute: PricingModel {
            uuid: "pricing-minute".into(),
            minute_price: 310,
            fare_rule: FareRule::Minute,
            ..base.clone()
        },
        per_kilometer: PricingModel {
            uuid: "pricing-kilometer".into(),
            kilometer_price: 350,
            fare_rule: FareRule::Kilometer,
            ..base.clone()
        },
        smart: PricingModel {
            uuid: "pricing-smart".into(),
            minute_price: 90,
            kilometer_price: 190,
            included_kilometers: 5,
            fare_rule: FareRule::Smart,
            ..base
        },
    }
}

/// Two Brussels legs with a two-hour pause after the first.
#[must_use]
pub fn two_stop_journey() -> Journey {
    Journey::new(vec![
        TripLeg::new(Location::new(50.8355, 4.3573), Location::new(50.8245, 4.3635), 120),
        TripLeg::new(Location::new(50.8245, 4.3635), Location::new(50.8275, 4.3745), 0),
    ])
}
