use std::collections::{BTreeMap, BTreeSet};

use geo::{coord, Rect};
use geojson::{FeatureCollection, Value};

use crate::geom::ring_bounds;
use crate::habitat::EnrichedFeature;

/// Enriched features of one shard, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitatCollection {
    features: Vec<EnrichedFeature>,
}

impl HabitatCollection {
    pub fn new(features: Vec<EnrichedFeature>) -> Self { Self { features } }

    #[inline]
    pub fn len(&self) -> usize { self.features.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline]
    pub fn features(&self) -> &[EnrichedFeature] { &self.features }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedFeature> { self.features.iter() }

    /// Features whose genus is in `genera`; an empty selection keeps everything.
    pub fn filter_by_genera<'a, S: AsRef<str>>(&'a self, genera: &'a [S])
        -> impl Iterator<Item = &'a EnrichedFeature> + 'a
    {
        self.features.iter().filter(move |feature| genera.is_empty()
            || feature.genus().is_some_and(|genus| genera.iter().any(|g| g.as_ref() == genus)))
    }

    /// Features listing `county`, including multi-county sites.
    pub fn in_county<'a>(&'a self, county: &'a str) -> impl Iterator<Item = &'a EnrichedFeature> + 'a {
        self.features.iter().filter(move |feature| feature.in_county(county))
    }

    /// Sorted distinct genera present in the collection.
    pub fn available_genera(&self) -> Vec<&'static str> {
        self.features.iter()
            .filter_map(EnrichedFeature::genus)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn summary(&self) -> HabitatSummary {
        let mut summary = HabitatSummary { features: self.len(), ..Default::default() };

        for feature in &self.features {
            *summary.species.entry(feature.cleaned_species().to_string()).or_default() += 1;
            summary.counties.extend(feature.counties());
            summary.genera.extend(feature.genus());

            let Some(geometry) = feature.geometry() else { continue };
            *summary.geometry_types.entry(geometry_type(&geometry.value)).or_default() += 1;

            if let Some(rect) = ring_bounds(geometry) {
                summary.bounds = Some(match summary.bounds {
                    Some(bounds) => Rect::new(
                        coord! { x: bounds.min().x.min(rect.min().x), y: bounds.min().y.min(rect.min().y) },
                        coord! { x: bounds.max().x.max(rect.max().x), y: bounds.max().y.max(rect.max().y) },
                    ),
                    None => rect,
                });
            }
        }
        summary
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.features.iter().map(|f| f.as_feature().clone()).collect(),
            foreign_members: None,
        }
    }
}

impl IntoIterator for HabitatCollection {
    type Item = EnrichedFeature;
    type IntoIter = std::vec::IntoIter<EnrichedFeature>;

    fn into_iter(self) -> Self::IntoIter { self.features.into_iter() }
}

impl<'a> IntoIterator for &'a HabitatCollection {
    type Item = &'a EnrichedFeature;
    type IntoIter = std::slice::Iter<'a, EnrichedFeature>;

    fn into_iter(self) -> Self::IntoIter { self.features.iter() }
}

impl From<HabitatCollection> for FeatureCollection {
    fn from(collection: HabitatCollection) -> Self {
        FeatureCollection {
            bbox: None,
            features: collection.into_iter().map(Into::into).collect(),
            foreign_members: None,
        }
    }
}

/// Aggregate view of a collection, used for diagnostics and the CLI report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitatSummary {
    pub features: usize,
    pub counties: BTreeSet<String>,
    pub genera: BTreeSet<&'static str>,
    pub species: BTreeMap<String, usize>,
    pub geometry_types: BTreeMap<&'static str, usize>,
    /// Union of exterior-ring bounds, in the collection's coordinates.
    pub bounds: Option<Rect<f64>>,
}

pub(crate) fn geometry_type(value: &Value) -> &'static str {
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

#[cfg(test)]
mod tests {
    use geojson::{Feature, Geometry, Value};

    use super::*;

    fn enriched(species: &str, genus: Option<&'static str>, geometry: Option<Value>) -> EnrichedFeature {
        let feature = Feature {
            bbox: None,
            geometry: geometry.map(Geometry::new),
            id: None,
            properties: None,
            foreign_members: None,
        };
        EnrichedFeature::new(feature, species.into(), genus, None)
    }

    fn square(x0: f64, y0: f64) -> Value {
        Value::Polygon(vec![vec![
            vec![x0, y0], vec![x0 + 1.0, y0], vec![x0 + 1.0, y0 + 1.0], vec![x0, y0],
        ]])
    }

    #[test]
    fn summary_bounds_cover_every_ring() {
        let collection = HabitatCollection::new(vec![
            enriched("Quercus robur", Some("Quercus"), Some(square(-7.0, 53.0))),
            enriched("Unknown", None, None),
            enriched("Taxus baccata", Some("Taxus"), Some(square(-9.0, 51.5))),
        ]);

        let summary = collection.summary();
        let bounds = summary.bounds.unwrap();
        assert_eq!((bounds.min().x, bounds.min().y), (-9.0, 51.5));
        assert_eq!((bounds.max().x, bounds.max().y), (-6.0, 54.0));
        assert_eq!(summary.geometry_types.get("Polygon"), Some(&2));
        assert_eq!(summary.genera.into_iter().collect::<Vec<_>>(), ["Quercus", "Taxus"]);
    }

    #[test]
    fn empty_collection_has_empty_summary() {
        let summary = HabitatCollection::default().summary();
        assert_eq!(summary, HabitatSummary::default());
        assert!(HabitatCollection::default().available_genera().is_empty());
    }

    #[test]
    fn genus_filter_skips_unclassified_features_only_when_selecting() {
        let collection = HabitatCollection::new(vec![
            enriched("Quercus robur", Some("Quercus"), None),
            enriched("Bog cotton", None, None),
        ]);
        let all: &[String] = &[];
        assert_eq!(collection.filter_by_genera(all).count(), 2);
        assert_eq!(collection.filter_by_genera(&["Quercus".to_string()]).count(), 1);
    }
}
