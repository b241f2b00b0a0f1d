//! Pricing one journey under one tariff.
//!
//! The evaluator walks the journey leg by leg starting from the vehicle,
//! accumulating booking, driving, distance and pause totals, then prices
//! them with the tariff's fare rule and caps the result at the day cap.

use crate::{
    CostBreakdown, Geozone, Journey, JourneyPlan, Location, PricingModel, PricingPlanKind, Vehicle,
    geodesy::{distance_km, driving_minutes, walking_minutes},
    geozone::is_in_parking_zone,
    pricing::{FareRule, to_currency},
};

/// Booking minutes that are never charged.
pub const FREE_BOOKING_MINUTES: f64 = 15.0;
/// Multiplier applied to pauses taken outside a parking zone.
pub const NON_COMPLIANT_PAUSE_FACTOR: f64 = 1.5;

/// Why a tariff produced no plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The journey has no legs.
    EmptyJourney,
    /// Zone data lists zones and the journey ends outside every parking zone.
    UnparkableDestination,
}

/// Outcome of pricing a journey under one tariff.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The tariff accepted the journey.
    Priced(JourneyPlan),
    /// The tariff cannot be applied to the journey.
    Rejected(Rejection),
}

impl Evaluation {
    /// The plan, if the tariff accepted the journey.
    #[must_use]
    pub fn into_plan(self) -> Option<JourneyPlan> {
        match self {
            Self::Priced(plan) => Some(plan),
            Self::Rejected(_) => None,
        }
    }
}

/// Quantities accumulated over a journey before pricing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct JourneyTotals {
    booking_minutes: f64,
    travel_minutes: f64,
    distance_km: f64,
    pause_minutes: f64,
}

impl JourneyTotals {
    fn accumulate(
        journey: &Journey,
        vehicle_location: Location,
        geozone: Option<&Geozone>,
        model_type: &str,
    ) -> Self {
        let mut totals = Self::default();
        let mut current = vehicle_location;
        for leg in &journey.legs {
            totals.booking_minutes += walking_minutes(current, leg.start_location);
            totals.travel_minutes += driving_minutes(leg.start_location, leg.end_location);
            totals.distance_km += distance_km(leg.start_location, leg.end_location);
            if leg.pause_minutes > 0 {
                let pause = f64::from(leg.pause_minutes);
                totals.pause_minutes +=
                    if is_in_parking_zone(leg.end_location, geozone, model_type) {
                        pause
                    } else {
                        pause * NON_COMPLIANT_PAUSE_FACTOR
                    };
            }
            current = leg.end_location;
        }
        totals
    }
}

/// Price `journey` driven with `vehicle` under `pricing`.
///
/// Booking time is the walk from the vehicle to the first leg plus every walk
/// between consecutive legs; the first [`FREE_BOOKING_MINUTES`] are free.
/// Pauses ending outside a parking zone cost [`NON_COMPLIANT_PAUSE_FACTOR`]
/// times as much. When `geozone` holds at least one item the journey must end
/// inside a parking zone for the vehicle's class, otherwise the tariff is
/// rejected. An empty collection imposes no end constraint.
/// Intermediate legs ending outside a zone are only penalised.
///
/// # Examples
/// ```
/// use fleetfare_core::{
///     Evaluation, Journey, Location, PricingModel, PricingPlanKind, TripLeg, Vehicle, evaluate,
///     pricing::FareRule,
/// };
///
/// let vehicle = Vehicle { location_latitude: 50.8466, location_longitude: 4.3928, ..Vehicle::default() };
/// let journey = Journey::new(vec![TripLeg::new(
///     Location::new(50.8466, 4.3928),
///     Location::new(50.8098, 4.3542),
///     0,
/// )]);
/// let tariff = PricingModel {
///     unlock_fee: 1_000,
///     minute_price: 300,
///     day_cap_price: 60_000,
///     fare_rule: FareRule::Minute,
///     ..PricingModel::default()
/// };
///
/// let Evaluation::Priced(plan) = evaluate(&journey, &vehicle, PricingPlanKind::PerMinute, &tariff, None) else {
///     panic!("journey without zone data is always priced");
/// };
/// assert!(plan.total_cost > 1.0);
/// ```
#[must_use]
pub fn evaluate(
    journey: &Journey,
    vehicle: &Vehicle,
    kind: PricingPlanKind,
    pricing: &PricingModel,
    geozone: Option<&Geozone>,
) -> Evaluation {
    let (Some(start), Some(destination)) = (journey.start(), journey.destination()) else {
        return Evaluation::Rejected(Rejection::EmptyJourney);
    };
    let vehicle_location = vehicle.location();
    let model_type = vehicle.model.model_type.as_str();

    let totals = JourneyTotals::accumulate(journey, vehicle_location, geozone, model_type);

    let known_zones = geozone.filter(|zones| !zones.is_empty());
    if known_zones.is_some() && !is_in_parking_zone(destination, known_zones, model_type) {
        return Evaluation::Rejected(Rejection::UnparkableDestination);
    }

    let cost_breakdown = CostBreakdown {
        unlock_fee: to_currency(pricing.unlock_fee),
        booking_cost: (totals.booking_minutes - FREE_BOOKING_MINUTES).max(0.0)
            * to_currency(pricing.book_unit_price),
        travel_cost: travel_cost(pricing, &totals),
        pause_cost: totals.pause_minutes * to_currency(pricing.pause_unit_price),
        walking_time_minutes: walking_minutes(start, vehicle_location),
    };
    let day_cap = to_currency(pricing.day_cap_price);
    let uncapped = cost_breakdown.uncapped_total();
    let total_cost = if uncapped > day_cap { day_cap } else { uncapped };

    Evaluation::Priced(JourneyPlan {
        vehicle: vehicle.clone(),
        journey: journey.clone(),
        total_cost,
        cost_breakdown,
        pricing_model: kind,
    })
}

fn travel_cost(pricing: &PricingModel, totals: &JourneyTotals) -> f64 {
    match pricing.fare_rule {
        FareRule::Minute => minute_cost(pricing, totals),
        FareRule::Kilometer => kilometre_cost(pricing, totals),
        FareRule::Smart => minute_cost(pricing, totals) + kilometre_cost(pricing, totals),
        FareRule::Unknown => 0.0,
    }
}

fn minute_cost(pricing: &PricingModel, totals: &JourneyTotals) -> f64 {
    totals.travel_minutes * to_currency(pricing.minute_price)
}

fn kilometre_cost(pricing: &PricingModel, totals: &JourneyTotals) -> f64 {
    let included = pricing.included_kilometers as f64;
    (totals.distance_km - included).max(0.0) * to_currency(pricing.kilometer_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeozoneItem, TripLeg, test_support};
    use rstest::{fixture, rstest};

    const EPSILON: f64 = 1.0e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    /// A car parked exactly at the start of the journey.
    #[fixture]
    fn vehicle() -> Vehicle {
        test_support::car("v1", Location::new(50.8355, 4.3573))
    }

    #[fixture]
    fn journey() -> Journey {
        Journey::new(vec![
            TripLeg::new(Location::new(50.8355, 4.3573), Location::new(50.8245, 4.3635), 120),
            TripLeg::new(Location::new(50.8245, 4.3635), Location::new(50.8275, 4.3745), 0),
        ])
    }

    fn tariff(fare_rule: FareRule) -> PricingModel {
        PricingModel {
            unlock_fee: 1_000,
            minute_price: 300,
            pause_unit_price: 100,
            kilometer_price: 400,
            book_unit_price: 200,
            day_cap_price: 100_000,
            included_kilometers: 1,
            fare_rule,
            ..PricingModel::default()
        }
    }

    fn evaluate_with(
        journey: &Journey,
        vehicle: &Vehicle,
        pricing: &PricingModel,
        geozone: Option<&Geozone>,
    ) -> Evaluation {
        evaluate(journey, vehicle, PricingPlanKind::Smart, pricing, geozone)
    }

    fn price(journey: &Journey, vehicle: &Vehicle, pricing: &PricingModel) -> JourneyPlan {
        evaluate_with(journey, vehicle, pricing, None)
            .into_plan()
            .expect("journey without zone data should be priced")
    }

    fn journey_distance(journey: &Journey) -> f64 {
        journey
            .legs
            .iter()
            .map(|leg| distance_km(leg.start_location, leg.end_location))
            .sum()
    }

    fn journey_driving(journey: &Journey) -> f64 {
        journey
            .legs
            .iter()
            .map(|leg| driving_minutes(leg.start_location, leg.end_location))
            .sum()
    }

    #[rstest]
    fn empty_journey_is_rejected(vehicle: Vehicle) {
        let evaluation = evaluate_with(&Journey::default(), &vehicle, &tariff(FareRule::Minute), None);
        assert_eq!(evaluation, Evaluation::Rejected(Rejection::EmptyJourney));
    }

    #[rstest]
    fn plan_carries_offer_kind(vehicle: Vehicle, journey: Journey) {
        let plan = evaluate(
            &journey,
            &vehicle,
            PricingPlanKind::PerKilometer,
            &tariff(FareRule::Kilometer),
            None,
        )
        .into_plan()
        .expect("priced");
        assert_eq!(plan.pricing_model, PricingPlanKind::PerKilometer);
    }

    #[rstest]
    fn minute_rule_charges_driving_minutes(vehicle: Vehicle, journey: Journey) {
        let plan = price(&journey, &vehicle, &tariff(FareRule::Minute));
        assert_close(plan.cost_breakdown.travel_cost, journey_driving(&journey) * 0.3);
    }

    #[rstest]
    fn kilometre_rule_charges_distance_beyond_allowance(vehicle: Vehicle, journey: Journey) {
        let plan = price(&journey, &vehicle, &tariff(FareRule::Kilometer));
        let expected = (journey_distance(&journey) - 1.0).max(0.0) * 0.4;
        assert_close(plan.cost_breakdown.travel_cost, expected);
    }

    #[rstest]
    fn kilometre_rule_is_free_within_allowance(vehicle: Vehicle, journey: Journey) {
        let generous = PricingModel {
            included_kilometers: 50,
            ..tariff(FareRule::Kilometer)
        };
        let plan = price(&journey, &vehicle, &generous);
        assert_eq!(plan.cost_breakdown.travel_cost, 0.0);
    }

    #[rstest]
    fn smart_rule_charges_minutes_and_kilometres(vehicle: Vehicle, journey: Journey) {
        let smart = price(&journey, &vehicle, &tariff(FareRule::Smart));
        let minute = price(&journey, &vehicle, &tariff(FareRule::Minute));
        let kilometre = price(&journey, &vehicle, &tariff(FareRule::Kilometer));
        assert_close(
            smart.cost_breakdown.travel_cost,
            minute.cost_breakdown.travel_cost + kilometre.cost_breakdown.travel_cost,
        );
    }

    #[rstest]
    fn unknown_rule_charges_no_travel(vehicle: Vehicle, journey: Journey) {
        let plan = price(&journey, &vehicle, &tariff(FareRule::Unknown));
        assert_eq!(plan.cost_breakdown.travel_cost, 0.0);
        assert!(plan.total_cost > 0.0);
    }

    #[rstest]
    fn booking_within_free_minutes_is_not_charged(vehicle: Vehicle, journey: Journey) {
        let plan = price(&journey, &vehicle, &tariff(FareRule::Minute));
        assert_eq!(plan.cost_breakdown.booking_cost, 0.0);
        assert_eq!(plan.cost_breakdown.walking_time_minutes, 0.0);
    }

    #[rstest]
    fn booking_beyond_free_minutes_is_charged(journey: Journey) {
        // 1.2 km north of the start: about 14.4 minutes on foot.
        let distant = test_support::car("far", Location::new(50.8463, 4.3573));
        // A gap between legs adds a second walk of about 3 minutes.
        let mut gapped = journey;
        gapped.legs[1].start_location = Location::new(50.8245, 4.3670);

        let plan = price(&gapped, &distant, &tariff(FareRule::Minute));

        let walked = walking_minutes(distant.location(), gapped.legs[0].start_location)
            + walking_minutes(gapped.legs[0].end_location, gapped.legs[1].start_location);
        assert!(walked > FREE_BOOKING_MINUTES);
        assert_close(
            plan.cost_breakdown.booking_cost,
            (walked - FREE_BOOKING_MINUTES) * 0.2,
        );
        assert_close(
            plan.cost_breakdown.walking_time_minutes,
            walking_minutes(gapped.legs[0].start_location, distant.location()),
        );
    }

    #[rstest]
    fn pause_outside_parking_zone_is_penalised(vehicle: Vehicle, journey: Journey) {
        let plan = price(&journey, &vehicle, &tariff(FareRule::Minute));
        assert_close(
            plan.cost_breakdown.pause_cost,
            120.0 * NON_COMPLIANT_PAUSE_FACTOR * 0.1,
        );
    }

    #[rstest]
    fn pause_inside_parking_zone_is_charged_at_face_value(vehicle: Vehicle, journey: Journey) {
        let zones = Geozone::new(vec![test_support::parking_square(
            "car",
            Location::new(50.83, 4.365),
            0.05,
        )]);
        let plan = evaluate_with(&journey, &vehicle, &tariff(FareRule::Minute), Some(&zones))
            .into_plan()
            .expect("destination is parkable");
        assert_close(plan.cost_breakdown.pause_cost, 120.0 * 0.1);
    }

    #[rstest]
    fn intermediate_stop_outside_zone_is_penalised_not_rejected(vehicle: Vehicle, journey: Journey) {
        // Covers the final destination but not the end of the first leg.
        let zones = Geozone::new(vec![test_support::parking_square(
            "car",
            Location::new(50.8275, 4.3745),
            0.001,
        )]);
        let plan = evaluate_with(&journey, &vehicle, &tariff(FareRule::Minute), Some(&zones))
            .into_plan()
            .expect("destination is parkable");
        assert_close(
            plan.cost_breakdown.pause_cost,
            120.0 * NON_COMPLIANT_PAUSE_FACTOR * 0.1,
        );
    }

    #[rstest]
    fn unparkable_destination_is_rejected(vehicle: Vehicle, journey: Journey) {
        let zones = Geozone::new(vec![test_support::parking_square(
            "car",
            Location::new(51.2, 4.4),
            0.01,
        )]);
        let evaluation = evaluate_with(&journey, &vehicle, &tariff(FareRule::Minute), Some(&zones));
        assert_eq!(evaluation, Evaluation::Rejected(Rejection::UnparkableDestination));
    }

    #[rstest]
    fn empty_zone_collection_imposes_no_end_constraint(vehicle: Vehicle, journey: Journey) {
        let zones = Geozone::default();
        let plan = evaluate_with(&journey, &vehicle, &tariff(FareRule::Minute), Some(&zones))
            .into_plan()
            .expect("empty zone data does not reject");
        assert_close(
            plan.cost_breakdown.pause_cost,
            120.0 * NON_COMPLIANT_PAUSE_FACTOR * 0.1,
        );
    }

    #[rstest]
    fn zone_for_other_vehicle_class_does_not_count(vehicle: Vehicle, journey: Journey) {
        let zones = Geozone::new(vec![GeozoneItem {
            model_type: "scooter".into(),
            ..test_support::parking_square("car", Location::new(50.83, 4.365), 0.05)
        }]);
        let evaluation = evaluate_with(&journey, &vehicle, &tariff(FareRule::Minute), Some(&zones));
        assert_eq!(evaluation, Evaluation::Rejected(Rejection::UnparkableDestination));
    }

    #[rstest]
    fn day_cap_limits_expensive_journeys(vehicle: Vehicle, journey: Journey) {
        let capped = PricingModel {
            day_cap_price: 2_000,
            ..tariff(FareRule::Smart)
        };
        let plan = price(&journey, &vehicle, &capped);
        assert!(plan.cost_breakdown.uncapped_total() > 2.0);
        assert_eq!(plan.total_cost, 2.0);
    }

    #[rstest]
    fn day_cap_never_raises_cheap_journeys(vehicle: Vehicle, journey: Journey) {
        let plan = price(&journey, &vehicle, &tariff(FareRule::Smart));
        assert_eq!(plan.total_cost, plan.cost_breakdown.uncapped_total());
        assert!(plan.total_cost < 100.0);
    }

    #[rstest]
    fn plan_echoes_inputs(vehicle: Vehicle, journey: Journey) {
        let plan = price(&journey, &vehicle, &tariff(FareRule::Smart));
        assert_eq!(plan.vehicle, vehicle);
        assert_eq!(plan.journey, journey);
        assert_close(plan.cost_breakdown.unlock_fee, 1.0);
    }
}
