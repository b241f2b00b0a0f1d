//! Great-circle distance and fixed-speed travel estimates.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Times assume constant average speeds; no road network
//! is consulted.

use crate::Location;

/// Mean Earth radius used for haversine distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Average walking speed.
pub const WALKING_SPEED_KMH: f64 = 5.0;
/// Average driving speed in urban traffic.
pub const DRIVING_SPEED_KMH: f64 = 25.0;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Great-circle distance between two locations in kilometres.
///
/// The result is symmetric and zero for identical inputs. The intermediate
/// haversine term is clamped to `[0, 1]` so antipodal points cannot produce
/// `NaN` through rounding.
///
/// # Examples
/// ```
/// use fleetfare_core::{Location, geodesy::distance_km};
///
/// let centre = Location::new(50.8466, 4.3528);
/// let dilbeek = Location::new(50.7847, 4.2461);
/// assert!((distance_km(centre, dilbeek) - 10.2).abs() < 0.5);
/// assert_eq!(distance_km(centre, centre), 0.0);
/// ```
#[must_use]
pub fn distance_km(from: Location, to: Location) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let haversine = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let haversine = haversine.clamp(0.0, 1.0);
    let central_angle = 2.0 * haversine.sqrt().atan2((1.0 - haversine).sqrt());
    EARTH_RADIUS_KM * central_angle
}

/// Minutes needed to walk between two locations.
#[must_use]
pub fn walking_minutes(from: Location, to: Location) -> f64 {
    minutes_at(distance_km(from, to), WALKING_SPEED_KMH)
}

/// Minutes needed to drive between two locations.
#[must_use]
pub fn driving_minutes(from: Location, to: Location) -> f64 {
    minutes_at(distance_km(from, to), DRIVING_SPEED_KMH)
}

fn minutes_at(distance_km: f64, speed_kmh: f64) -> f64 {
    distance_km / speed_kmh * MINUTES_PER_HOUR
}
