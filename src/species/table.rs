/// Raw survey spellings → canonical "Genus species" labels.
///
/// Order is significant: the substring fallback scans entries top to bottom and
/// takes the first hit, so longer and more specific spellings come first.
pub(crate) const SPECIES_MAP: &[(&str, &str)] = &[
    // Quercus
    ("Quercus robur", "Quercus robur"),
    ("Q. robur", "Quercus robur"),
    ("Q.robur", "Quercus robur"),
    ("Pedunculate oak", "Quercus robur"),
    ("Quercus petraea", "Quercus petraea"),
    ("Q. petraea", "Quercus petraea"),
    ("Q.petraea", "Quercus petraea"),
    ("Sessile oak", "Quercus petraea"),
    // Fraxinus
    ("Fraxinus excelsior", "Fraxinus excelsior"),
    ("F. excelsior", "Fraxinus excelsior"),
    // Betula
    ("Betula pubescens", "Betula pubescens"),
    ("B. pubescens", "Betula pubescens"),
    ("Downy birch", "Betula pubescens"),
    ("Betula pendula", "Betula pendula"),
    ("B. pendula", "Betula pendula"),
    ("Silver birch", "Betula pendula"),
    // Alnus
    ("Alnus glutinosa", "Alnus glutinosa"),
    ("A. glutinosa", "Alnus glutinosa"),
    // Salix
    ("Salix cinerea", "Salix cinerea"),
    ("S. cinerea", "Salix cinerea"),
    ("Grey willow", "Salix cinerea"),
    // Corylus
    ("Corylus avellana", "Corylus avellana"),
    ("C. avellana", "Corylus avellana"),
    // Fagus
    ("Fagus sylvatica", "Fagus sylvatica"),
    ("F. sylvatica", "Fagus sylvatica"),
    // Pinus
    ("Pinus sylvestris", "Pinus sylvestris"),
    ("P. sylvestris", "Pinus sylvestris"),
    ("Scots pine", "Pinus sylvestris"),
    // Taxus
    ("Taxus baccata", "Taxus baccata"),
    ("T. baccata", "Taxus baccata"),
    // Ilex
    ("Ilex aquifolium", "Ilex aquifolium"),
    ("I. aquifolium", "Ilex aquifolium"),
    // Sorbus
    ("Sorbus aucuparia", "Sorbus aucuparia"),
    ("S. aucuparia", "Sorbus aucuparia"),
    // Crataegus
    ("Crataegus monogyna", "Crataegus monogyna"),
    ("C. monogyna", "Crataegus monogyna"),
    // Acer
    ("Acer pseudoplatanus", "Acer pseudoplatanus"),
    ("A. pseudoplatanus", "Acer pseudoplatanus"),
    // Picea
    ("Picea sitchensis", "Picea sitchensis"),
    ("P. sitchensis", "Picea sitchensis"),
    ("Sitka spruce", "Picea sitchensis"),
    // Larix
    ("Larix decidua", "Larix decidua"),
    ("L. decidua", "Larix decidua"),
    // Common names last: short and prone to accidental substring hits.
    ("Alder", "Alnus glutinosa"),
    ("Hazel", "Corylus avellana"),
    ("Beech", "Fagus sylvatica"),
    ("Holly", "Ilex aquifolium"),
    ("Rowan", "Sorbus aucuparia"),
    ("Hawthorn", "Crataegus monogyna"),
    ("Sycamore", "Acer pseudoplatanus"),
    ("Larch", "Larix decidua"),
    ("Yew", "Taxus baccata"),
    ("Ash", "Fraxinus excelsior"),
];

/// Exact lookup in [`SPECIES_MAP`].
#[inline]
pub(crate) fn lookup(raw: &str) -> Option<&'static str> {
    SPECIES_MAP.iter().find(|(key, _)| *key == raw).map(|(_, label)| *label)
}
