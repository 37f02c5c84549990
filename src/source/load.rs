use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::de::Error as _;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::geom::{Crs, ReprojectError};
use crate::habitat::{counties_of, enrich_collection, HabitatCollection};
use crate::index::{HabitatIndex, INDEX_FILE, UNKNOWN_COUNTY};
use crate::source::DataSource;

/// Failures of the runtime data-loading interface.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {path}: {message}")]
    Fetch { path: String, message: String },

    #[error("failed to parse {path}: {source}")]
    Parse { path: String, #[source] source: serde_json::Error },

    #[error("no shard is mapped for county {0:?}")]
    UnknownCounty(String),

    #[error(transparent)]
    Reproject(#[from] ReprojectError),
}

fn fetch(source: &dyn DataSource, path: &str) -> Result<std::sync::Arc<[u8]>, LoadError> {
    source.get(path)
        .map_err(|err| LoadError::Fetch { path: path.to_string(), message: format!("{err:#}") })
}

/// Fetch and parse the index written by the partitioner.
pub fn load_index(source: &dyn DataSource) -> Result<HabitatIndex, LoadError> {
    let bytes = fetch(source, INDEX_FILE)?;
    let index: HabitatIndex = serde_json::from_slice(&bytes)
        .map_err(|source| LoadError::Parse { path: INDEX_FILE.to_string(), source })?;

    info!(counties = index.counties.len(), genera = index.genera.len(), "loaded habitat index");
    Ok(index)
}

/// Fetch one county's shard and run it through the enrichment pipeline.
///
/// Only the top-level structure of the shard must be valid. A feature whose
/// geometry cannot be read is kept without geometry.
pub fn load_county(
    source: &dyn DataSource,
    county: &str,
    index: &HabitatIndex,
    crs: Crs,
) -> Result<HabitatCollection, LoadError> {
    let (name, path) = index.resolve(county)
        .ok_or_else(|| LoadError::UnknownCounty(county.to_string()))?;

    debug!(county = name, path, "loading shard");
    let bytes = fetch(source, path)?;
    let mut raw = parse_shard(path, &bytes)?;

    if index.shares_shard(name) {
        let before = raw.features.len();
        raw.features.retain(|feature| belongs_to(feature, name));
        debug!(county = name, dropped = before - raw.features.len(), "skipped features of colliding counties");
    }

    let collection = enrich_collection(raw, crs)?;
    info!(county = name, features = collection.len(), "loaded county");
    Ok(collection)
}

fn belongs_to(feature: &Feature, county: &str) -> bool {
    let counties = counties_of(feature.properties.as_ref());
    if county == UNKNOWN_COUNTY && counties.is_empty() { return true }
    counties.iter().any(|c| c == county)
}

/// Parse a shard feature by feature.
fn parse_shard(path: &str, bytes: &[u8]) -> Result<FeatureCollection, LoadError> {
    let malformed = |source| LoadError::Parse { path: path.to_string(), source };

    let raw: JsonValue = serde_json::from_slice(bytes).map_err(malformed)?;
    let JsonValue::Object(mut object) = raw else {
        return Err(malformed(serde_json::Error::custom("expected a FeatureCollection object")))
    };
    if object.get("type").and_then(JsonValue::as_str) != Some("FeatureCollection") {
        return Err(malformed(serde_json::Error::custom("expected type \"FeatureCollection\"")))
    }
    let Some(JsonValue::Array(entries)) = object.remove("features") else {
        return Err(malformed(serde_json::Error::custom("\"features\" is missing or not an array")))
    };

    let features = entries.into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match entry {
            JsonValue::Object(entry) => Some(shard_feature(path, position, entry)),
            _ => {
                warn!(path, position, "skipping shard entry that is not an object");
                None
            }
        })
        .collect();

    Ok(FeatureCollection { bbox: None, features, foreign_members: None })
}

fn shard_feature(path: &str, position: usize, mut object: JsonObject) -> Feature {
    let geometry = match object.remove("geometry") {
        None | Some(JsonValue::Null) => None,
        Some(raw) => read_geometry(raw).unwrap_or_else(|err| {
            warn!(path, position, %err, "keeping feature without its unreadable geometry");
            None
        }),
    };
    let properties = match object.remove("properties") {
        Some(JsonValue::Object(properties)) => Some(properties),
        _ => None,
    };
    let id = match object.remove("id") {
        Some(JsonValue::String(id)) => Some(Id::String(id)),
        Some(JsonValue::Number(id)) => Some(Id::Number(id)),
        _ => None,
    };

    // Reprojection invalidates any bbox.
    object.remove("bbox");
    object.remove("type");
    let foreign_members = (!object.is_empty()).then_some(object);

    Feature { bbox: None, geometry, id, properties, foreign_members }
}

/// Positions are read as plain number arrays, so a short position is left for the
/// reprojector to skip instead of failing the whole geometry.
fn read_geometry(raw: JsonValue) -> Result<Option<Geometry>, String> {
    let mut object = match raw {
        JsonValue::Object(object) => object,
        other => return Err(format!("expected an object, found {other}")),
    };

    let kind = object.get("type").and_then(JsonValue::as_str).unwrap_or_default().to_string();
    let build: fn(JsonValue) -> serde_json::Result<Value> = match kind.as_str() {
        "Point" => |c| serde_json::from_value(c).map(Value::Point),
        "MultiPoint" => |c| serde_json::from_value(c).map(Value::MultiPoint),
        "LineString" => |c| serde_json::from_value(c).map(Value::LineString),
        "MultiLineString" => |c| serde_json::from_value(c).map(Value::MultiLineString),
        "Polygon" => |c| serde_json::from_value(c).map(Value::Polygon),
        "MultiPolygon" => |c| serde_json::from_value(c).map(Value::MultiPolygon),
        _ => return Geometry::from_json_value(JsonValue::Object(object)).map(Some).map_err(|err| err.to_string()),
    };

    let coordinates = object.remove("coordinates").ok_or_else(|| format!("{kind} without coordinates"))?;
    build(coordinates)
        .map(|value| Some(Geometry::new(value)))
        .map_err(|err| format!("{kind}: {err}"))
}
