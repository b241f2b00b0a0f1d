//! End-to-end journey planning.
//!
//! [`plan_journey`] composes vehicle selection and tariff optimisation over
//! snapshots the caller already holds. [`JourneyPlanner`] fetches those
//! snapshots from a [`FleetSource`] first.

use log::{debug, warn};

use crate::{
    FleetSource, Geozone, Journey, JourneyPlan, PlanError, PricingOfferSet, Vehicle,
    find_closest, optimize, retain_cars,
};

/// Plan `journey` with the vehicle nearest to its start.
///
/// `fleet` is used as given; filter it to eligible vehicles beforehand.
///
/// # Errors
///
/// Returns [`PlanError::EmptyFleet`] or [`PlanError::EmptyJourney`] for empty
/// inputs, and [`PlanError::NoValidPricingPlan`] when every offer rejects the
/// journey.
pub fn plan_journey(
    journey: &Journey,
    fleet: &[Vehicle],
    offers: &PricingOfferSet,
    geozone: Option<&Geozone>,
) -> Result<JourneyPlan, PlanError> {
    if fleet.is_empty() {
        return Err(PlanError::EmptyFleet);
    }
    let start = journey.start().ok_or(PlanError::EmptyJourney)?;
    let vehicle = find_closest(start, fleet).ok_or(PlanError::NoEligibleVehicle)?;
    optimize(journey, vehicle, offers, geozone)
}

/// Plans journeys against live provider data.
///
/// # Examples
/// ```
/// use fleetfare_core::{Journey, JourneyPlanner, Location, TripLeg};
/// use fleetfare_core::test_support::{StubFleetSource, brussels_offers, car};
///
/// let source = StubFleetSource::new(vec![car("v1", Location::new(50.847, 4.393))], brussels_offers());
/// let planner = JourneyPlanner::new(source);
/// let journey = Journey::new(vec![TripLeg::new(
///     Location::new(50.8466, 4.3928),
///     Location::new(50.8098, 4.3542),
///     0,
/// )]);
///
/// let plan = planner.plan(&journey)?;
/// assert_eq!(plan.vehicle.uuid, "v1");
/// # Ok::<(), fleetfare_core::PlanError>(())
/// ```
#[derive(Debug)]
pub struct JourneyPlanner<S> {
    source: S,
}

impl<S: FleetSource> JourneyPlanner<S> {
    /// Create a planner reading from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying data source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetch fresh provider data and plan `journey`.
    ///
    /// Only cars are considered. Pricing is fetched for the selected vehicle's
    /// class and tier. A failed geozone fetch is logged and planning carries
    /// on without a parking constraint.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::EmptyJourney`] before any fetch when the journey
    /// has no legs, [`PlanError::Fleet`] or [`PlanError::Pricing`] when the
    /// provider fails, [`PlanError::EmptyFleet`] when no car is available and
    /// [`PlanError::NoValidPricingPlan`] when every offer rejects the journey.
    pub fn plan(&self, journey: &Journey) -> Result<JourneyPlan, PlanError> {
        let start = journey.start().ok_or(PlanError::EmptyJourney)?;
        let fleet = retain_cars(self.source.fetch_fleet().map_err(PlanError::Fleet)?);
        if fleet.is_empty() {
            return Err(PlanError::EmptyFleet);
        }
        let vehicle = find_closest(start, &fleet).ok_or(PlanError::NoEligibleVehicle)?;
        debug!(
            "selected vehicle {} ({}) out of {} cars",
            vehicle.uuid,
            vehicle.plate,
            fleet.len()
        );

        let offers = self
            .source
            .fetch_pricing_offers(&vehicle.model.model_type, &vehicle.model.tier)
            .map_err(PlanError::Pricing)?;
        let geozone = match self.source.fetch_geozone(&vehicle.uuid) {
            Ok(geozone) => Some(geozone),
            Err(err) => {
                warn!("failed to fetch geozone for vehicle {}: {err}", vehicle.uuid);
                None
            }
        };

        optimize(journey, vehicle, &offers, geozone.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SourceRequest, StubFleetSource, brussels_offers, car, parking_square};
    use crate::{FleetSourceError, Location, TripLeg, VehicleModel};
    use rstest::{fixture, rstest};

    #[fixture]
    fn journey() -> Journey {
        Journey::new(vec![TripLeg::new(
            Location::new(50.8466, 4.3928),
            Location::new(50.8098, 4.3542),
            0,
        )])
    }

    #[fixture]
    fn fleet() -> Vec<Vehicle> {
        vec![
            car("far", Location::new(50.90, 4.50)),
            car("near", Location::new(50.847, 4.393)),
        ]
    }

    fn scooter(uuid: &str, location: Location) -> Vehicle {
        Vehicle {
            model: VehicleModel {
                model_type: "scooter".into(),
                ..VehicleModel::default()
            },
            ..car(uuid, location)
        }
    }

    #[rstest]
    fn plan_journey_rejects_empty_fleet(journey: Journey) {
        let err = plan_journey(&journey, &[], &brussels_offers(), None).expect_err("empty fleet");
        assert_eq!(err, PlanError::EmptyFleet);
    }

    #[rstest]
    fn plan_journey_rejects_empty_journey(fleet: Vec<Vehicle>) {
        let err = plan_journey(&Journey::default(), &fleet, &brussels_offers(), None)
            .expect_err("empty journey");
        assert_eq!(err, PlanError::EmptyJourney);
    }

    #[rstest]
    fn plan_journey_uses_nearest_vehicle(journey: Journey, fleet: Vec<Vehicle>) {
        let plan = plan_journey(&journey, &fleet, &brussels_offers(), None).expect("a plan");
        assert_eq!(plan.vehicle.uuid, "near");
    }

    #[rstest]
    fn planner_checks_legs_before_fetching(fleet: Vec<Vehicle>) {
        let planner = JourneyPlanner::new(StubFleetSource::new(fleet, brussels_offers()));
        let err = planner.plan(&Journey::default()).expect_err("empty journey");
        assert_eq!(err, PlanError::EmptyJourney);
        assert!(planner.source().requests().is_empty());
    }

    #[rstest]
    fn planner_ignores_non_car_vehicles(journey: Journey) {
        let fleet = vec![
            scooter("scooter", Location::new(50.8466, 4.3928)),
            car("car", Location::new(50.86, 4.40)),
        ];
        let planner = JourneyPlanner::new(StubFleetSource::new(fleet, brussels_offers()));
        let plan = planner.plan(&journey).expect("a plan");
        assert_eq!(plan.vehicle.uuid, "car");
    }

    #[rstest]
    fn planner_fails_when_no_cars(journey: Journey) {
        let fleet = vec![scooter("scooter", Location::new(50.8466, 4.3928))];
        let planner = JourneyPlanner::new(StubFleetSource::new(fleet, brussels_offers()));
        let err = planner.plan(&journey).expect_err("no cars");
        assert_eq!(err, PlanError::EmptyFleet);
    }

    #[rstest]
    fn planner_fetches_pricing_and_zone_for_selected_vehicle(journey: Journey, fleet: Vec<Vehicle>) {
        let planner = JourneyPlanner::new(StubFleetSource::new(fleet, brussels_offers()));
        planner.plan(&journey).expect("a plan");
        assert_eq!(
            planner.source().requests(),
            vec![
                SourceRequest::Fleet,
                SourceRequest::PricingOffers {
                    model_type: "car".into(),
                    tier: "S".into(),
                },
                SourceRequest::Geozone {
                    vehicle_uuid: "near".into(),
                },
            ]
        );
    }

    #[rstest]
    fn planner_propagates_fleet_failure(journey: Journey, fleet: Vec<Vehicle>) {
        let failure = FleetSourceError::NetworkError {
            url: "https://example.com".into(),
            message: "connection refused".into(),
        };
        let source = StubFleetSource::new(fleet, brussels_offers()).with_fleet_error(failure.clone());
        let err = JourneyPlanner::new(source).plan(&journey).expect_err("fleet failure");
        assert_eq!(err, PlanError::Fleet(failure));
    }

    #[rstest]
    fn planner_propagates_pricing_failure(journey: Journey, fleet: Vec<Vehicle>) {
        let failure = FleetSourceError::HttpError {
            url: "https://example.com/pricing".into(),
            status: 503,
            message: "unavailable".into(),
        };
        let source =
            StubFleetSource::new(fleet, brussels_offers()).with_pricing_error(failure.clone());
        let err = JourneyPlanner::new(source).plan(&journey).expect_err("pricing failure");
        assert_eq!(err, PlanError::Pricing(failure));
    }

    #[rstest]
    fn planner_degrades_when_geozone_is_unavailable(journey: Journey, fleet: Vec<Vehicle>) {
        let source = StubFleetSource::new(fleet, brussels_offers()).with_geozone_error(
            FleetSourceError::ParseError {
                message: "unexpected token".into(),
            },
        );
        let plan = JourneyPlanner::new(source).plan(&journey).expect("degraded plan");
        assert_eq!(plan.vehicle.uuid, "near");
    }

    #[rstest]
    fn planner_enforces_known_geozone(journey: Journey, fleet: Vec<Vehicle>) {
        let elsewhere = Geozone::new(vec![parking_square("car", Location::new(51.2, 4.4), 0.01)]);
        let source = StubFleetSource::new(fleet, brussels_offers()).with_geozone(elsewhere);
        let err = JourneyPlanner::new(source).plan(&journey).expect_err("unparkable");
        assert_eq!(err, PlanError::NoValidPricingPlan);
    }
}
