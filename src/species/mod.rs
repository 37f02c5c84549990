mod normalize;
mod table;

pub use normalize::{clean_species, normalize_species, UNKNOWN_SPECIES};
