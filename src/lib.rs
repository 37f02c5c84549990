#![doc = "Habitat map data pipeline public API"]
mod geom;
mod habitat;
mod index;
mod source;
mod species;
mod style;

#[doc(inline)]
pub use geom::{ring_bounds, ring_centroid, Crs, ReprojectError, Reprojector};

#[doc(inline)]
pub use species::{clean_species, normalize_species, UNKNOWN_SPECIES};

#[doc(inline)]
pub use style::{color_of, darker_shade_of, genus_of, style_for, FeatureStyle, DEFAULT_COLOR, DEFAULT_SHADE, PULSE_CLASS};

#[doc(inline)]
pub use habitat::{
    counties_of, enrich_collection, enrich_collection_with_summary, enrich_feature, enrich_features, raw_species,
    EnrichedFeature, HabitatCollection, HabitatSummary, COUNTY_KEY, SPECIES_KEYS,
};

#[doc(inline)]
pub use index::{
    run_partition, shard_file_name, HabitatIndex, Partition, PartitionConfig, INDEX_FILE, SHARD_DIR, UNKNOWN_COUNTY,
};

#[doc(inline)]
pub use source::{
    load_county, load_index, CountySelection, DataSink, DataSource, DiskSource, LoadError, MemSource, SelectionTicket,
};

#[cfg(feature = "download")]
#[doc(inline)]
pub use source::HttpSource;
