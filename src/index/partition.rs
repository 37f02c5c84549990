use std::{collections::{BTreeMap, BTreeSet}, path::{Path, PathBuf}, sync::LazyLock};

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::habitat::{counties_of, raw_species};
use crate::index::HabitatIndex;
use crate::source::{DataSink, DiskSource};
use crate::species::clean_species;
use crate::style::genus_of;

/// Index file name, relative to the output directory.
pub const INDEX_FILE: &str = "index.json";

/// Shard directory, relative to the output directory.
pub const SHARD_DIR: &str = "counties";

/// Bucket for features without a county. Gets a shard but is not listed.
pub const UNKNOWN_COUNTY: &str = "Unknown";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid non-word pattern"));

/// Locations for the offline partitioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionConfig {
    /// Raw habitat feature collection.
    pub input: PathBuf,
    /// Directory receiving the index and the shard directory.
    pub output_dir: PathBuf,
    pub index_file: String,
    pub shard_dir: String,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/habitats.geojson"),
            output_dir: PathBuf::from("public/data"),
            index_file: INDEX_FILE.to_string(),
            shard_dir: SHARD_DIR.to_string(),
        }
    }
}

/// Filesystem-safe shard name: whitespace runs become `_`, other non-word characters are dropped.
pub fn shard_file_name(county: &str) -> String {
    let underscored = WHITESPACE.replace_all(county.trim(), "_");
    let stem = NON_WORD.replace_all(&underscored, "");
    let stem = if stem.is_empty() { UNKNOWN_COUNTY } else { stem.as_ref() };
    format!("{stem}.geojson")
}

/// Raw features grouped by county, plus the index describing them.
/// Features are copied verbatim: no reprojection, no added properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub index: HabitatIndex,
    /// Shard path → features, in input order.
    pub shards: BTreeMap<String, Vec<Value>>,
}

impl Partition {
    /// Group a raw feature collection by county.
    ///
    /// Features listing several counties are placed in every listed county's shard;
    /// features without a county go to the [`UNKNOWN_COUNTY`] shard.
    /// Fails only when the top-level structure is not a feature collection.
    pub fn from_collection(raw: &Value, shard_dir: &str) -> Result<Self> {
        let features = feature_list(raw)?;

        let mut partition = Partition::default();
        let mut counties = BTreeSet::new();
        let mut genera = BTreeSet::new();

        for feature in features {
            let props = feature.get("properties").and_then(Value::as_object);

            let species = clean_species(raw_species(props));
            genera.extend(genus_of(&species));

            let mut feature_counties: BTreeSet<String> = counties_of(props).into_iter().collect();
            if feature_counties.is_empty() { feature_counties.insert(UNKNOWN_COUNTY.to_string()); }

            for county in feature_counties {
                let path = partition.index.files.entry(county.clone())
                    .or_insert_with(|| format!("{shard_dir}/{}", shard_file_name(&county)));
                partition.shards.entry(path.clone()).or_default().push(feature.clone());
                if county != UNKNOWN_COUNTY { counties.insert(county); }
            }
        }

        partition.index.counties = counties.into_iter().collect();
        partition.index.genera = genera.into_iter().map(str::to_string).collect();
        Ok(partition)
    }

    pub fn shard_bytes(features: &[Value]) -> Result<Vec<u8>> {
        serde_json::to_vec(&json!({ "type": "FeatureCollection", "features": features }))
            .context("Failed to serialize shard")
    }

    pub fn index_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(&self.index).context("Failed to serialize index")?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Write every shard, then the index.
    pub fn write(&self, sink: &mut dyn DataSink, index_file: &str) -> Result<()> {
        for (path, features) in &self.shards {
            debug!(%path, features = features.len(), "writing shard");
            sink.put(path, &Self::shard_bytes(features)?)?;
        }
        sink.put(index_file, &self.index_bytes()?)
    }
}

/// Top-level `features` array of a feature collection.
fn feature_list(raw: &Value) -> Result<&[Value]> {
    let Some(kind) = raw.get("type") else { bail!("Malformed input: missing \"type\"") };
    if *kind != "FeatureCollection" {
        bail!("Malformed input: expected type \"FeatureCollection\", found {kind}");
    }
    let Some(features) = raw.get("features") else { bail!("Malformed input: missing \"features\"") };
    features.as_array().map(Vec::as_slice)
        .context("Malformed input: \"features\" is not an array")
}

/// Read the raw dataset, shard it by county and write shards plus index.
/// Nothing is written if the input cannot be read or is malformed.
pub fn run_partition(config: &PartitionConfig) -> Result<HabitatIndex> {
    let bytes = read_input(&config.input)?;
    let raw: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse {}", config.input.display()))?;

    let partition = Partition::from_collection(&raw, &config.shard_dir)?;

    let mut sink = DiskSource::new(&config.output_dir);
    partition.write(&mut sink, &config.index_file)?;

    let unknown = partition.index.files.get(UNKNOWN_COUNTY)
        .and_then(|path| partition.shards.get(path))
        .map_or(0, Vec::len);
    info!(
        counties = partition.index.counties.len(),
        genera = partition.index.genera.len(),
        shards = partition.shards.len(),
        unknown,
        output = %config.output_dir.display(),
        "partitioned habitat features",
    );

    Ok(partition.index)
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read input {}", path.display()))
}
