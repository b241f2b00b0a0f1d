//! Geographic positions in the `{ lat, lng }` wire shape.

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A WGS84 position expressed in degrees.
///
/// `(0.0, 0.0)` is an ordinary point here. Callers that use it as a "not
/// set" marker must filter it out before planning.
///
/// Planar conversions map `x = lng` and `y = lat`, matching the axis order
/// used by GeoJSON and the `geo` crate.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fleetfare_core::Location;
///
/// let louise = Location::new(50.8245, 4.3635);
/// let coord: Coord<f64> = louise.into();
/// assert_eq!(coord, Coord { x: 4.3635, y: 50.8245 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Location {
    /// Construct a location from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Location> for Coord<f64> {
    fn from(location: Location) -> Self {
        Self {
            x: location.lng,
            y: location.lat,
        }
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        Self::new(location.lng, location.lat)
    }
}

impl From<Coord<f64>> for Location {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}
