//! Provider response types for the geozone service.
//!
//! Vehicles and pricing offers decode straight into the core domain types.
//! Geozones arrive as GeoJSON and are converted into planar `geo` polygons
//! here, with `x = lng` and `y = lat`.

use fleetfare_core::{FleetSourceError, Geozone, GeozoneItem, ZoneGeometry};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{Geometry, Value};
use log::warn;
use serde::Deserialize;

/// One entry of a geozone response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeozoneItemDto {
    /// Zone purpose, e.g. `"parking"`.
    #[serde(default)]
    pub geofencing_type: String,
    /// Vehicle class the zone applies to.
    #[serde(default)]
    pub model_type: String,
    pub geom: GeoFeatureDto,
}

/// Feature wrapper around the zone geometry.
#[derive(Debug, Deserialize)]
pub struct GeoFeatureDto {
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl GeozoneItemDto {
    /// Convert into a zone, or `None` when the geometry is not areal.
    fn into_item(self) -> Result<Option<GeozoneItem>, FleetSourceError> {
        let Some(geometry) = self.geom.geometry else {
            warn!(
                "dropping {} zone for {} without geometry",
                self.geofencing_type, self.model_type
            );
            return Ok(None);
        };
        let geometry = match &geometry.value {
            Value::Polygon(rings) => ZoneGeometry::Polygon(polygon(rings)?),
            Value::MultiPolygon(polygons) => ZoneGeometry::MultiPolygon(MultiPolygon::new(
                polygons
                    .iter()
                    .map(|rings| polygon(rings))
                    .collect::<Result<_, _>>()?,
            )),
            other => {
                warn!(
                    "dropping {} zone for {} with {} geometry",
                    self.geofencing_type,
                    self.model_type,
                    kind_name(other)
                );
                return Ok(None);
            }
        };
        Ok(Some(GeozoneItem {
            fencing_type: self.geofencing_type,
            model_type: self.model_type,
            geometry,
        }))
    }
}

/// Convert a geozone response into the domain collection.
///
/// # Errors
///
/// Returns [`FleetSourceError::InvalidGeometry`] when a polygon has no rings
/// or a position has fewer than two coordinates.
pub fn into_geozone(items: Vec<GeozoneItemDto>) -> Result<Geozone, FleetSourceError> {
    items
        .into_iter()
        .filter_map(|item| item.into_item().transpose())
        .collect::<Result<Vec<_>, _>>()
        .map(Geozone::new)
}

fn polygon(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>, FleetSourceError> {
    let (exterior, interiors) = rings.split_first().ok_or_else(|| invalid("polygon has no rings"))?;
    let interiors = interiors
        .iter()
        .map(|ring| line_string(ring))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(line_string(exterior)?, interiors))
}

fn line_string(ring: &[Vec<f64>]) -> Result<LineString<f64>, FleetSourceError> {
    ring.iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(invalid("position needs a longitude and a latitude")),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::new)
}

fn invalid(message: &str) -> FleetSourceError {
    FleetSourceError::InvalidGeometry {
        message: message.to_owned(),
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
