use geojson::{Geometry, Position, Value};
use proj4rs::{proj::Proj as Proj4, transform::transform};
use thiserror::Error;
use tracing::warn;

use crate::geom::Crs;

/// WGS84 geographic target (degrees ↔ radians handled in code).
const WGS84_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

/// Failures of the coordinate transform. Per-coordinate variants are recovered by
/// [`Reprojector::reproject_geometry`]; only [`ReprojectError::Definition`] escapes.
#[derive(Debug, Error)]
pub enum ReprojectError {
    #[error("failed to build PROJ.4 definition for {crs}: {message}")]
    Definition { crs: Crs, message: String },

    #[error("position has {0} ordinate(s), expected at least 2")]
    Malformed(usize),

    #[error("position ({x}, {y}) is not finite")]
    NonFinite { x: f64, y: f64 },

    #[error("transform of ({x}, {y}) failed: {message}")]
    Transform { x: f64, y: f64, message: String },
}

/// Converts positions from a local projected system into WGS84 longitude/latitude.
pub struct Reprojector {
    crs: Crs,
    from: Proj4,
    to: Proj4,
}

impl Reprojector {
    pub fn new(crs: Crs) -> Result<Self, ReprojectError> {
        let definition = |proj_string: &str| Proj4::from_proj_string(proj_string)
            .map_err(|e| ReprojectError::Definition { crs, message: e.to_string() });

        Ok(Self { crs, from: definition(crs.proj4())?, to: definition(WGS84_PROJ4)? })
    }

    #[inline]
    pub fn crs(&self) -> Crs { self.crs }

    /// Project a single `[x, y, ..]` position to `[lon, lat]` in degrees.
    pub fn project(&self, position: &[f64]) -> Result<[f64; 2], ReprojectError> {
        let (x, y) = match position {
            [x, y, ..] => (*x, *y),
            _ => return Err(ReprojectError::Malformed(position.len())),
        };
        if !x.is_finite() || !y.is_finite() { return Err(ReprojectError::NonFinite { x, y }) }

        // Meters in, radians out.
        let mut point = (x, y, 0.0);
        transform(&self.from, &self.to, &mut point)
            .map_err(|e| ReprojectError::Transform { x, y, message: e.to_string() })?;

        let (lon, lat) = (point.0.to_degrees(), point.1.to_degrees());
        if !lon.is_finite() || !lat.is_finite() {
            return Err(ReprojectError::Transform { x, y, message: "non-finite result".into() })
        }
        Ok([lon, lat])
    }

    /// Best-effort in-place conversion: on failure the original position is kept.
    /// Ordinates past the second (elevation) are left untouched.
    /// Returns whether the position was converted.
    pub fn reproject_position(&self, position: &mut Position) -> bool {
        match self.project(position) {
            Ok([lon, lat]) => {
                position[0] = lon;
                position[1] = lat;
                true
            }
            Err(err) => {
                warn!(crs = %self.crs, %err, "keeping unconverted coordinate");
                false
            }
        }
    }

    /// Reproject every position of a geometry, keeping its nesting shape.
    /// Returns the number of positions that could not be converted.
    pub fn reproject_geometry(&self, geometry: &mut Geometry) -> usize {
        // Stale bbox would be in the source system.
        geometry.bbox = None;
        self.reproject_value(&mut geometry.value)
    }

    fn reproject_value(&self, value: &mut Value) -> usize {
        let ring = |ring: &mut Vec<Position>| ring.iter_mut()
            .map(|position| usize::from(!self.reproject_position(position)))
            .sum::<usize>();

        match value {
            Value::Point(position) => usize::from(!self.reproject_position(position)),
            Value::MultiPoint(positions) | Value::LineString(positions) => ring(positions),
            Value::MultiLineString(rings) | Value::Polygon(rings) => rings.iter_mut().map(ring).sum::<usize>(),
            Value::MultiPolygon(polygons) => polygons.iter_mut()
                .flat_map(|rings| rings.iter_mut())
                .map(ring)
                .sum(),
            Value::GeometryCollection(geometries) => geometries.iter_mut()
                .map(|geometry| self.reproject_geometry(geometry))
                .sum(),
        }
    }
}
