//! Parking geofences and point membership.
//!
//! Containment is planar: coordinates are treated as `(lng, lat)` on a flat
//! plane, which is accurate enough at city scale. Points on a polygon
//! boundary, including the boundary of a hole, count as inside.
//!
//! A strict point-in-polygon test treats a hole's ring as outside the
//! polygon. Here a stop on the ring of a hole is parkable, so the two only
//! disagree for points exactly on a hole edge.

use geo::{Intersects, MultiPolygon, Point, Polygon};

use crate::Location;

/// Fencing type of zones where a vehicle may be parked.
pub const PARKING_FENCING_TYPE: &str = "parking";

/// Area covered by a zone.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneGeometry {
    /// A single polygon, possibly with holes.
    Polygon(Polygon<f64>),
    /// Several disjoint polygons.
    MultiPolygon(MultiPolygon<f64>),
}

impl ZoneGeometry {
    /// Whether `location` lies inside or on the boundary of the area.
    ///
    /// # Examples
    /// ```
    /// use geo::{LineString, Polygon};
    /// use fleetfare_core::{Location, ZoneGeometry};
    ///
    /// let square = Polygon::new(
    ///     LineString::from(vec![(4.0, 50.0), (5.0, 50.0), (5.0, 51.0), (4.0, 51.0), (4.0, 50.0)]),
    ///     vec![],
    /// );
    /// let zone = ZoneGeometry::Polygon(square);
    /// assert!(zone.contains(Location::new(50.5, 4.5)));
    /// assert!(!zone.contains(Location::new(52.0, 4.5)));
    /// ```
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        let point: Point<f64> = location.into();
        match self {
            Self::Polygon(polygon) => polygon.intersects(&point),
            Self::MultiPolygon(polygons) => polygons.iter().any(|polygon| polygon.intersects(&point)),
        }
    }
}

/// One fenced area and the vehicles it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct GeozoneItem {
    /// Zone purpose, e.g. `"parking"`.
    pub fencing_type: String,
    /// Vehicle class the zone applies to.
    pub model_type: String,
    /// Area covered by the zone.
    pub geometry: ZoneGeometry,
}

impl GeozoneItem {
    /// Whether this zone allows parking for the given vehicle class.
    #[must_use]
    pub fn is_parking_for(&self, model_type: &str) -> bool {
        self.fencing_type == PARKING_FENCING_TYPE && self.model_type == model_type
    }
}

/// Unordered collection of zones known for a vehicle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geozone {
    items: Vec<GeozoneItem>,
}

impl Geozone {
    /// Construct a geozone from its items.
    #[must_use]
    pub const fn new(items: Vec<GeozoneItem>) -> Self {
        Self { items }
    }

    /// Zones in the collection.
    #[must_use]
    pub fn items(&self) -> &[GeozoneItem] {
        &self.items
    }

    /// Whether the collection holds no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<GeozoneItem> for Geozone {
    fn from_iter<I: IntoIterator<Item = GeozoneItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Whether `location` lies in a parking zone for vehicles of `model_type`.
///
/// An absent geozone, or one without matching parking zones, yields `false`.
/// Membership is the union of all matching zones, so evaluation stops at the
/// first hit.
#[must_use]
pub fn is_in_parking_zone(location: Location, geozone: Option<&Geozone>, model_type: &str) -> bool {
    geozone.is_some_and(|zones| {
        zones
            .items()
            .iter()
            .filter(|item| item.is_parking_for(model_type))
            .any(|item| item.geometry.contains(location))
    })
}
