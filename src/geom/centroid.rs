use geo::{BoundingRect, Coord, LineString, Rect};
use geojson::{Geometry, Position, Value};

/// Exterior ring (or the single position of a point) used for marker placement.
/// Polygons use their first ring; multipolygons the first ring of their first polygon.
fn first_ring(geometry: &Geometry) -> Option<LineString<f64>> {
    let positions: &[Position] = match &geometry.value {
        Value::Point(position) => std::slice::from_ref(position),
        Value::Polygon(rings) => rings.first()?.as_slice(),
        Value::MultiPolygon(polygons) => polygons.first()?.first()?.as_slice(),
        _ => return None,
    };

    let coords: Vec<Coord<f64>> = positions.iter()
        .filter_map(|position| match position.as_slice() {
            [x, y, ..] if x.is_finite() && y.is_finite() => Some(Coord { x: *x, y: *y }),
            _ => None,
        })
        .collect();

    (!coords.is_empty()).then(|| LineString(coords))
}

/// Arithmetic mean of the first ring's positions, as `[lon, lat]`.
/// Positions that are not numeric pairs are skipped.
pub fn ring_centroid(geometry: &Geometry) -> Option<[f64; 2]> {
    let ring = first_ring(geometry)?;
    let n = ring.0.len() as f64;
    let (sum_x, sum_y) = ring.coords().fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
    Some([sum_x / n, sum_y / n])
}

/// Bounding box of the first ring.
pub fn ring_bounds(geometry: &Geometry) -> Option<Rect<f64>> {
    first_ring(geometry)?.bounding_rect()
}
