use geojson::{Feature, Geometry, JsonObject, JsonValue};

/// Raw properties holding the species description, in lookup order.
pub const SPECIES_KEYS: [&str; 2] = ["SPECIES", "DESCRIPTION"];

/// Raw property holding the county: a string, or an array for multi-county sites.
pub const COUNTY_KEY: &str = "COUNTY";

pub(crate) const CLEANED_SPECIES_KEY: &str = "cleanedSpecies";
pub(crate) const GENUS_KEY: &str = "_genus";
pub(crate) const CENTROID_KEY: &str = "_centroid";

/// Raw species text: the first non-empty string among [`SPECIES_KEYS`], else `""`.
pub fn raw_species(properties: Option<&JsonObject>) -> &str {
    properties
        .and_then(|props| SPECIES_KEYS.iter()
            .filter_map(|key| props.get(*key).and_then(JsonValue::as_str))
            .find(|value| !value.is_empty()))
        .unwrap_or("")
}

/// Trimmed, non-empty county names of a feature.
pub fn counties_of(properties: Option<&JsonObject>) -> Vec<String> {
    let trimmed = |value: &JsonValue| value.as_str()
        .map(str::trim)
        .filter(|county| !county.is_empty())
        .map(str::to_string);

    match properties.and_then(|props| props.get(COUNTY_KEY)) {
        Some(JsonValue::Array(values)) => values.iter().filter_map(trimmed).collect(),
        Some(value) => trimmed(value).into_iter().collect(),
        None => Vec::new(),
    }
}

/// A habitat polygon in WGS84 with its derived species metadata.
/// The derived fields are mirrored into the GeoJSON properties for the map layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedFeature {
    feature: Feature,
    cleaned_species: String,
    genus: Option<&'static str>,
    centroid: Option<[f64; 2]>,
}

impl EnrichedFeature {
    pub(crate) fn new(
        mut feature: Feature,
        cleaned_species: String,
        genus: Option<&'static str>,
        centroid: Option<[f64; 2]>,
    ) -> Self {
        let props = feature.properties.get_or_insert_with(JsonObject::new);
        props.insert(CLEANED_SPECIES_KEY.into(), JsonValue::from(cleaned_species.as_str()));
        props.insert(GENUS_KEY.into(), genus.map_or(JsonValue::Null, JsonValue::from));
        if let Some([lon, lat]) = centroid {
            props.insert(CENTROID_KEY.into(), JsonValue::from(vec![lon, lat]));
        }

        Self { feature, cleaned_species, genus, centroid }
    }

    #[inline]
    pub fn cleaned_species(&self) -> &str { &self.cleaned_species }

    #[inline]
    pub fn genus(&self) -> Option<&'static str> { self.genus }

    /// `[lon, lat]` of the exterior ring's mean; `None` without usable geometry.
    #[inline]
    pub fn centroid(&self) -> Option<[f64; 2]> { self.centroid }

    #[inline]
    pub fn geometry(&self) -> Option<&Geometry> { self.feature.geometry.as_ref() }

    #[inline]
    pub fn properties(&self) -> Option<&JsonObject> { self.feature.properties.as_ref() }

    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties()?.get(key)?.as_str()
    }

    pub fn counties(&self) -> Vec<String> { counties_of(self.properties()) }

    /// Whether the feature lists `county`, for single- and multi-county sites alike.
    pub fn in_county(&self, county: &str) -> bool {
        let county = county.trim();
        self.counties().iter().any(|c| c == county)
    }

    #[inline]
    pub fn as_feature(&self) -> &Feature { &self.feature }

    pub fn into_feature(self) -> Feature { self.feature }
}

impl From<EnrichedFeature> for Feature {
    fn from(feature: EnrichedFeature) -> Self { feature.into_feature() }
}
