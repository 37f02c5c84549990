/// Fill for species without a recognised genus.
pub const DEFAULT_COLOR: &str = "#9e9e9e";

/// Border for fills missing from [`DARKER_SHADES`].
pub const DEFAULT_SHADE: &str = "#424242";

/// Genus → fill color, scanned in order when classifying a species label.
pub(crate) const GENUS_COLORS: &[(&str, &str)] = &[
    ("Quercus", "#2e7d32"),
    ("Fraxinus", "#9ccc65"),
    ("Betula", "#fdd835"),
    ("Alnus", "#26a69a"),
    ("Salix", "#80cbc4"),
    ("Corylus", "#a1887f"),
    ("Fagus", "#8d6e63"),
    ("Pinus", "#1565c0"),
    ("Taxus", "#6a1b9a"),
    ("Ilex", "#c62828"),
    ("Sorbus", "#ef6c00"),
    ("Crataegus", "#ec407a"),
    ("Acer", "#ffb300"),
    ("Picea", "#00838f"),
    ("Larix", "#cddc39"),
];

/// Fill color → border color.
pub(crate) const DARKER_SHADES: &[(&str, &str)] = &[
    ("#2e7d32", "#1b5e20"),
    ("#9ccc65", "#689f38"),
    ("#fdd835", "#f9a825"),
    ("#26a69a", "#00796b"),
    ("#80cbc4", "#4db6ac"),
    ("#a1887f", "#6d4c41"),
    ("#8d6e63", "#5d4037"),
    ("#1565c0", "#0d47a1"),
    ("#6a1b9a", "#4a148c"),
    ("#c62828", "#8e0000"),
    ("#ef6c00", "#e65100"),
    ("#ec407a", "#ad1457"),
    ("#ffb300", "#ff8f00"),
    ("#00838f", "#005662"),
    ("#cddc39", "#9e9d24"),
    (DEFAULT_COLOR, "#616161"),
];
