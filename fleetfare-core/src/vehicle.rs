//! Shared vehicles and nearest-vehicle selection.

use serde::{Deserialize, Serialize};

use crate::{Location, geodesy::distance_km, nullable::null_as_default};

/// Model type of the vehicles eligible for journey planning.
pub const CAR_MODEL_TYPE: &str = "car";

/// Vehicle class and pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModel {
    /// Vehicle class, e.g. `"car"` or `"scooter"`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub model_type: String,
    /// Manufacturer name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub make: String,
    /// Commercial model name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Energy source, e.g. `"electric"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub energy: String,
    /// Pricing tier tag used to look up the offer set.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tier: String,
}

/// A rentable vehicle reported by the fleet provider.
///
/// Only the identity, position and model drive planning. The remaining
/// fields are carried so the chosen vehicle can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vehicle {
    /// Provider identifier, also used to look up the vehicle's geozone.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Licence plate shown to the renter.
    #[serde(deserialize_with = "null_as_default")]
    pub plate: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location_latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub location_longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub model: VehicleModel,
    /// Remaining range in kilometres.
    #[serde(deserialize_with = "null_as_default")]
    pub autonomy: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub autonomy_percentage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub discount_amount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub picture_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_elligible_for_fueling: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_elligible_for_charging: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fueling_reward: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub charging_reward: i64,
}

impl Vehicle {
    /// Current position of the vehicle.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.location_latitude, self.location_longitude)
    }

    /// Whether the vehicle is a car and therefore eligible for planning.
    #[must_use]
    pub fn is_car(&self) -> bool {
        self.model.model_type == CAR_MODEL_TYPE
    }
}

/// Keep only the vehicles eligible for planning.
///
/// # Examples
/// ```
/// use fleetfare_core::{Vehicle, VehicleModel, retain_cars};
///
/// let car = Vehicle {
///     uuid: "car".into(),
///     model: VehicleModel { model_type: "car".into(), ..VehicleModel::default() },
///     ..Vehicle::default()
/// };
/// let scooter = Vehicle {
///     uuid: "scooter".into(),
///     model: VehicleModel { model_type: "scooter".into(), ..VehicleModel::default() },
///     ..Vehicle::default()
/// };
///
/// let cars = retain_cars(vec![car.clone(), scooter]);
/// assert_eq!(cars, vec![car]);
/// ```
#[must_use]
pub fn retain_cars(vehicles: Vec<Vehicle>) -> Vec<Vehicle> {
    vehicles.into_iter().filter(Vehicle::is_car).collect()
}

/// Return the vehicle nearest to `point`, or `None` for an empty fleet.
///
/// Distances are great-circle kilometres. Only a strictly smaller distance
/// replaces the current best, so the first vehicle wins exact ties.
///
/// # Examples
/// ```
/// use fleetfare_core::{Location, Vehicle, find_closest};
///
/// let near = Vehicle { uuid: "near".into(), location_latitude: 50.845, location_longitude: 4.35, ..Vehicle::default() };
/// let far = Vehicle { uuid: "far".into(), location_latitude: 50.9, location_longitude: 4.4, ..Vehicle::default() };
/// let fleet = [far, near];
///
/// let closest = find_closest(Location::new(50.8466, 4.3528), &fleet);
/// assert_eq!(closest.map(|v| v.uuid.as_str()), Some("near"));
/// assert!(find_closest(Location::new(0.0, 0.0), &[]).is_none());
/// ```
#[must_use]
pub fn find_closest(point: Location, vehicles: &[Vehicle]) -> Option<&Vehicle> {
    let mut closest: Option<(&Vehicle, f64)> = None;
    for vehicle in vehicles {
        let distance = distance_km(point, vehicle.location());
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((vehicle, distance));
        }
    }
    closest.map(|(vehicle, _)| vehicle)
}
