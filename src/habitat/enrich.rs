use geojson::{Feature, FeatureCollection, Geometry};
use tracing::{debug, warn};

use crate::geom::{ring_centroid, Crs, ReprojectError, Reprojector};
use crate::habitat::{raw_species, EnrichedFeature, HabitatCollection, HabitatSummary};
use crate::species::clean_species;
use crate::style::genus_of;

/// Reproject and classify one raw feature. Features without geometry keep
/// their (absent) geometry and get no centroid, as do features with any
/// coordinate left in the source system.
pub fn enrich_feature(mut feature: Feature, reprojector: &Reprojector) -> EnrichedFeature {
    let mut centroid = None;
    if let Some(geometry) = feature.geometry.as_mut() {
        let failed = reprojector.reproject_geometry(geometry);
        centroid = projected_centroid(geometry, failed);
        if failed > 0 {
            warn!(failed, id = ?feature.id, "feature kept with unconverted coordinates and no centroid");
        }
    }

    let cleaned_species = clean_species(raw_species(feature.properties.as_ref()));
    let genus = genus_of(&cleaned_species);

    EnrichedFeature::new(feature, cleaned_species, genus, centroid)
}

/// No centroid unless every position was converted.
fn projected_centroid(geometry: &Geometry, failed: usize) -> Option<[f64; 2]> {
    if failed > 0 { return None }
    ring_centroid(geometry)
}

fn log_summary(summary: &HabitatSummary) {
    debug!(features = summary.features, species = ?summary.species, "species frequency");
    debug!(geometry_types = ?summary.geometry_types, "geometry types");
}

/// Enrich every feature of a raw shard, in order, with a prepared reprojector.
pub fn enrich_features(raw: FeatureCollection, reprojector: &Reprojector) -> HabitatCollection {
    let collection = HabitatCollection::new(raw.features.into_iter()
        .map(|feature| enrich_feature(feature, reprojector))
        .collect());

    if tracing::enabled!(tracing::Level::DEBUG) {
        log_summary(&collection.summary());
    }

    collection
}

/// Enrich a raw shard delivered in `crs`.
pub fn enrich_collection(raw: FeatureCollection, crs: Crs) -> Result<HabitatCollection, ReprojectError> {
    let reprojector = Reprojector::new(crs)?;
    Ok(enrich_features(raw, &reprojector))
}

/// [`enrich_collection`] plus the summary it logs.
pub fn enrich_collection_with_summary(
    raw: FeatureCollection,
    crs: Crs,
) -> Result<(HabitatCollection, HabitatSummary), ReprojectError> {
    let reprojector = Reprojector::new(crs)?;
    let collection = HabitatCollection::new(raw.features.into_iter()
        .map(|feature| enrich_feature(feature, &reprojector))
        .collect());

    let summary = collection.summary();
    log_summary(&summary);
    Ok((collection, summary))
}

#[cfg(test)]
mod tests {
    use geojson::{JsonObject, Value};
    use serde_json::json;

    use super::*;
    use crate::species::UNKNOWN_SPECIES;

    fn feature(properties: serde_json::Value, geometry: Option<Value>) -> Feature {
        Feature {
            geometry: geometry.map(Geometry::new),
            properties: properties.as_object().cloned(),
            bbox: None,
            id: None,
            foreign_members: None,
        }
    }

    fn dublin_square() -> Value {
        Value::Polygon(vec![vec![
            vec![315_000.0, 234_000.0],
            vec![316_000.0, 234_000.0],
            vec![316_000.0, 235_000.0],
            vec![315_000.0, 235_000.0],
            vec![315_000.0, 234_000.0],
        ]])
    }

    #[test]
    fn enriches_species_genus_and_centroid() {
        let proj = Reprojector::new(Crs::IrishGrid).unwrap();
        let enriched = enrich_feature(
            feature(json!({ "SPECIES": "Q. robur", "COUNTY": "Dublin" }), Some(dublin_square())),
            &proj,
        );

        assert_eq!(enriched.cleaned_species(), "Quercus robur");
        assert_eq!(enriched.genus(), Some("Quercus"));
        let [lon, lat] = enriched.centroid().unwrap();
        assert!((-6.4..-6.1).contains(&lon) && (53.2..53.5).contains(&lat));
    }

    #[test]
    fn undetermined_species_becomes_unknown() {
        let proj = Reprojector::new(Crs::IrishGrid).unwrap();
        let enriched = enrich_feature(feature(json!({ "SPECIES": "Not Determined" }), Some(dublin_square())), &proj);
        assert_eq!(enriched.cleaned_species(), UNKNOWN_SPECIES);
        assert_eq!(enriched.genus(), None);
    }

    #[test]
    fn missing_geometry_is_kept_without_centroid() {
        let proj = Reprojector::new(Crs::IrishGrid).unwrap();
        let enriched = enrich_feature(feature(json!({ "DESCRIPTION": "Hazel" }), None), &proj);
        assert!(enriched.geometry().is_none());
        assert_eq!(enriched.centroid(), None);
        assert_eq!(enriched.cleaned_species(), "Corylus avellana");
    }

    #[test]
    fn missing_properties_still_enrich() {
        let proj = Reprojector::new(Crs::IrishGrid).unwrap();
        let enriched = enrich_feature(Feature { geometry: None, properties: None::<JsonObject>, bbox: None, id: None, foreign_members: None }, &proj);
        assert_eq!(enriched.cleaned_species(), UNKNOWN_SPECIES);
        assert_eq!(enriched.property_str("cleanedSpecies"), Some(UNKNOWN_SPECIES));
    }

    #[test]
    fn collection_order_and_length_are_preserved() {
        let raw = FeatureCollection {
            bbox: None,
            features: vec![
                feature(json!({ "SPECIES": "Rowan" }), Some(dublin_square())),
                feature(json!({ "SPECIES": "Alder" }), None),
                feature(json!({ "SPECIES": "Beech" }), Some(dublin_square())),
            ],
            foreign_members: None,
        };

        let collection = enrich_collection(raw, Crs::IrishGrid).unwrap();
        let species: Vec<_> = collection.iter().map(|f| f.cleaned_species()).collect();
        assert_eq!(species, ["Sorbus aucuparia", "Alnus glutinosa", "Fagus sylvatica"]);
    }

    #[test]
    fn centroid_is_dropped_when_any_coordinate_stayed_in_metres() {
        let geometry = Geometry::new(Value::Polygon(vec![vec![
            vec![-6.3, 53.3], vec![-6.2, 53.3], vec![-6.2, 53.4], vec![315_000.0, 234_000.0], vec![-6.3, 53.3],
        ]]));
        assert_eq!(projected_centroid(&geometry, 1), None);
        assert!(projected_centroid(&geometry, 0).is_some());
    }

    #[test]
    fn unconvertible_position_keeps_feature_without_centroid() {
        let proj = Reprojector::new(Crs::IrishGrid).unwrap();
        let geometry = Value::Polygon(vec![vec![
            vec![315_000.0, 234_000.0], vec![316_000.0], vec![316_000.0, 235_000.0], vec![315_000.0, 234_000.0],
        ]]);
        let enriched = enrich_feature(feature(json!({ "SPECIES": "Holly" }), Some(geometry)), &proj);

        assert_eq!(enriched.centroid(), None);
        assert_eq!(enriched.genus(), Some("Ilex"));
        let Value::Polygon(rings) = &enriched.geometry().unwrap().value else { panic!("geometry type changed") };
        assert_eq!(rings[0][1], vec![316_000.0]);
        assert!((-6.4..-6.1).contains(&rings[0][0][0]));
    }

    #[test]
    fn summary_matches_the_collection() {
        let raw = FeatureCollection {
            bbox: None,
            features: vec![
                feature(json!({ "SPECIES": "Q. robur", "COUNTY": "Cork" }), Some(dublin_square())),
                feature(json!({ "SPECIES": "Not Determined" }), None),
            ],
            foreign_members: None,
        };

        let (collection, summary) = enrich_collection_with_summary(raw, Crs::IrishGrid).unwrap();
        assert_eq!(summary, collection.summary());
        assert_eq!(summary.features, 2);
        assert_eq!(summary.species.get(UNKNOWN_SPECIES), Some(&1));
        assert_eq!(summary.counties.into_iter().collect::<Vec<_>>(), ["Cork"]);
    }
}
