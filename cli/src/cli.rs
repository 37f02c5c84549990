use std::path::PathBuf;

use habitat_map::Crs;

/// Habitat map data tools
#[derive(clap::Parser, Debug)]
#[command(name = "habitat-map", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `partition` with default paths
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Split the raw habitat dataset into per-county shards plus an index
    Partition(PartitionArgs),

    /// Load and enrich one county's shard, then report on it
    Enrich(EnrichArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct PartitionArgs {
    /// Raw habitat feature collection, defaults to "data/habitats.geojson"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output data directory, defaults to "public/data"
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct EnrichArgs {
    /// County to load, as listed in the index
    pub county: String,

    /// Data directory holding the index and shards, defaults to "public/data"
    #[arg(short, long, value_hint = clap::ValueHint::DirPath, conflicts_with = "url")]
    pub data: Option<PathBuf>,

    /// Base URL serving the index and shards
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Coordinate system of the shard data (29903 or 2157)
    #[arg(long, default_value = "EPSG:29903")]
    pub crs: Crs,

    /// Only keep features of these genera (repeatable)
    #[arg(short, long = "genus")]
    pub genera: Vec<String>,

    /// Write the enriched features as GeoJSON
    #[arg(short = 'O', long, value_hint = clap::ValueHint::FilePath)]
    pub geojson: Option<PathBuf>,
}
