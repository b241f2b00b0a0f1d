//! Choosing the cheapest tariff for a journey.

use log::debug;

use crate::{
    Evaluation, Geozone, Journey, JourneyPlan, PlanError, PricingOfferSet, Vehicle, evaluate,
};

/// Price `journey` under every offer and return the cheapest plan.
///
/// Offers are evaluated per-minute, per-kilometre, then smart. On an exact
/// tie the earlier offer wins. Each offer may reject the journey on its own;
/// only when all of them do is [`PlanError::NoValidPricingPlan`] returned.
///
/// # Errors
///
/// Returns [`PlanError::NoValidPricingPlan`] when every offer rejects the
/// journey.
pub fn optimize(
    journey: &Journey,
    vehicle: &Vehicle,
    offers: &PricingOfferSet,
    geozone: Option<&Geozone>,
) -> Result<JourneyPlan, PlanError> {
    offers
        .offers()
        .into_iter()
        .filter_map(
            |(kind, pricing)| match evaluate(journey, vehicle, kind, pricing, geozone) {
                Evaluation::Priced(plan) => {
                    debug!("{kind} offer priced journey at {:.2}", plan.total_cost);
                    Some(plan)
                }
                Evaluation::Rejected(reason) => {
                    debug!("{kind} offer rejected journey: {reason:?}");
                    None
                }
            },
        )
        .reduce(|cheapest, plan| {
            if plan.total_cost < cheapest.total_cost {
                plan
            } else {
                cheapest
            }
        })
        .ok_or(PlanError::NoValidPricingPlan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::FareRule;
    use crate::test_support::{brussels_offers, car, parking_square, two_stop_journey};
    use crate::{Location, PricingModel, PricingPlanKind, TripLeg};
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
    fn vehicle() -> Vehicle {
        car("v1", Location::new(50.8470, 4.3930))
    }

    fn flat(fare_rule: FareRule, unlock_fee: i64) -> PricingModel {
        PricingModel {
            unlock_fee,
            day_cap_price: 100_000,
            fare_rule,
            ..PricingModel::default()
        }
    }

    #[rstest]
    fn picks_lowest_total(journey: Journey, vehicle: Vehicle) {
        let offers = PricingOfferSet {
            per_minute: flat(FareRule::Minute, 3_000),
            per_kilometer: flat(FareRule::Kilometer, 1_000),
            smart: flat(FareRule::Smart, 2_000),
        };
        let plan = optimize(&journey, &vehicle, &offers, None).expect("a plan");
        assert_eq!(plan.pricing_model, PricingPlanKind::PerKilometer);
        assert!((plan.total_cost - 1.0).abs() < 1.0e-12);
    }

    #[rstest]
    fn earlier_offer_wins_ties(journey: Journey, vehicle: Vehicle) {
        let offers = PricingOfferSet {
            per_minute: flat(FareRule::Unknown, 1_000),
            per_kilometer: flat(FareRule::Unknown, 1_000),
            smart: flat(FareRule::Unknown, 1_000),
        };
        let plan = optimize(&journey, &vehicle, &offers, None).expect("a plan");
        assert_eq!(plan.pricing_model, PricingPlanKind::PerMinute);
    }

    #[rstest]
    fn later_offer_wins_when_strictly_cheaper(journey: Journey, vehicle: Vehicle) {
        let offers = PricingOfferSet {
            per_minute: flat(FareRule::Unknown, 2_000),
            per_kilometer: flat(FareRule::Unknown, 2_000),
            smart: flat(FareRule::Unknown, 1_999),
        };
        let plan = optimize(&journey, &vehicle, &offers, None).expect("a plan");
        assert_eq!(plan.pricing_model, PricingPlanKind::Smart);
    }

    #[rstest]
    fn unparkable_destination_fails_every_offer(journey: Journey, vehicle: Vehicle) {
        let elsewhere = Geozone::new(vec![parking_square("car", Location::new(51.2, 4.4), 0.01)]);
        let err = optimize(&journey, &vehicle, &brussels_offers(), Some(&elsewhere))
            .expect_err("no offer can end outside the zone");
        assert_eq!(err, PlanError::NoValidPricingPlan);
    }

    #[rstest]
    fn empty_zone_collection_still_yields_a_plan(vehicle: Vehicle) {
        let journey = two_stop_journey();
        let plan = optimize(&journey, &vehicle, &brussels_offers(), Some(&Geozone::default()))
            .expect("empty zone data leaves the destination unconstrained");
        assert!(plan.total_cost > 0.0);
    }

    #[rstest]
    fn empty_journey_fails_every_offer(vehicle: Vehicle) {
        let err = optimize(&Journey::default(), &vehicle, &brussels_offers(), None)
            .expect_err("empty journey");
        assert_eq!(err, PlanError::NoValidPricingPlan);
    }

    #[rstest]
    fn parkable_destination_is_priced(journey: Journey, vehicle: Vehicle) {
        let zone = Geozone::new(vec![parking_square("car", Location::new(50.83, 4.37), 0.05)]);
        let plan = optimize(&journey, &vehicle, &brussels_offers(), Some(&zone)).expect("a plan");
        assert!(plan.total_cost > 0.0);
    }
}
