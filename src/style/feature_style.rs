use serde::Serialize;

use crate::habitat::EnrichedFeature;
use crate::style::{color_of, darker_shade_of};

/// CSS class the map layer adds while a feature is pulsing.
pub const PULSE_CLASS: &str = "habitat-pulse";

const BORDER_WEIGHT: f64 = 1.5;
const BORDER_OPACITY: f64 = 1.0;
const FILL_OPACITY: f64 = 0.6;

/// Path style handed to the map layer for one habitat polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    pub fill_color: &'static str,
    pub border_color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub emphasis_class: Option<&'static str>,
}

impl FeatureStyle {
    /// Style for a cleaned species label; `pulse` only toggles the emphasis class.
    pub fn for_species(species: &str, pulse: bool) -> Self {
        let fill_color = color_of(species);
        Self {
            fill_color,
            border_color: darker_shade_of(fill_color),
            weight: BORDER_WEIGHT,
            opacity: BORDER_OPACITY,
            fill_opacity: FILL_OPACITY,
            emphasis_class: pulse.then_some(PULSE_CLASS),
        }
    }
}

/// Style for an enriched feature, keyed on its cleaned species.
pub fn style_for(feature: &EnrichedFeature, pulse: bool) -> FeatureStyle {
    FeatureStyle::for_species(feature.cleaned_species(), pulse)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::style::{DEFAULT_COLOR, DEFAULT_SHADE};

    #[test]
    fn fill_is_genus_color_and_border_its_shade() {
        let style = FeatureStyle::for_species("Quercus robur", false);
        assert_eq!(style.fill_color, "#2e7d32");
        assert_eq!(style.border_color, "#1b5e20");
        assert_eq!(style.emphasis_class, None);
    }

    #[test]
    fn pulse_only_changes_emphasis() {
        let calm = FeatureStyle::for_species("Betula pendula", false);
        let pulsing = FeatureStyle::for_species("Betula pendula", true);
        assert_eq!(pulsing.emphasis_class, Some(PULSE_CLASS));
        assert_eq!(FeatureStyle { emphasis_class: None, ..pulsing }, calm);
    }

    #[test]
    fn unknown_species_gets_gray() {
        let style = FeatureStyle::for_species("Unknown", false);
        assert_eq!(style.fill_color, DEFAULT_COLOR);
        assert_ne!(style.border_color, DEFAULT_SHADE);
    }

    #[test]
    fn serializes_for_the_map_layer() {
        let value = serde_json::to_value(FeatureStyle::for_species("Ilex aquifolium", true)).unwrap();
        assert_eq!(value, json!({
            "fillColor": "#c62828",
            "borderColor": "#8e0000",
            "weight": 1.5,
            "opacity": 1.0,
            "fillOpacity": 0.6,
            "emphasisClass": "habitat-pulse",
        }));
    }
}
