mod collection;
mod enrich;
mod feature;

pub use collection::{HabitatCollection, HabitatSummary};
pub use enrich::{enrich_collection, enrich_collection_with_summary, enrich_feature, enrich_features};
pub use feature::{counties_of, raw_species, EnrichedFeature, COUNTY_KEY, SPECIES_KEYS};
