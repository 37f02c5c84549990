mod index;
mod partition;

pub use index::HabitatIndex;
pub use partition::{
    run_partition, shard_file_name, Partition, PartitionConfig, INDEX_FILE, SHARD_DIR, UNKNOWN_COUNTY,
};
