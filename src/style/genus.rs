use crate::species::UNKNOWN_SPECIES;
use crate::style::palette::{DARKER_SHADES, DEFAULT_COLOR, DEFAULT_SHADE, GENUS_COLORS};

#[inline]
fn classify(species: &str) -> Option<(&'static str, &'static str)> {
    if species.is_empty() || species == UNKNOWN_SPECIES { return None }
    GENUS_COLORS.iter().find(|(genus, _)| species.contains(genus)).copied()
}

/// First genus (in palette order) whose name occurs in the species label.
pub fn genus_of(species: &str) -> Option<&'static str> {
    classify(species).map(|(genus, _)| genus)
}

/// Fill color for a species label; [`DEFAULT_COLOR`] when no genus matches.
pub fn color_of(species: &str) -> &'static str {
    classify(species).map_or(DEFAULT_COLOR, |(_, color)| color)
}

/// Border shade for a fill color; [`DEFAULT_SHADE`] for colors outside the palette.
pub fn darker_shade_of(color: &str) -> &'static str {
    DARKER_SHADES.iter()
        .find(|(fill, _)| *fill == color)
        .map_or(DEFAULT_SHADE, |(_, shade)| *shade)
}
