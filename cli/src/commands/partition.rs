use anyhow::Result;
use habitat_map::{run_partition, PartitionConfig};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::PartitionArgs) -> Result<()> {
    let defaults = PartitionConfig::default();
    let config = PartitionConfig {
        input: args.input.clone().unwrap_or(defaults.input),
        output_dir: args.output.clone().unwrap_or(defaults.output_dir),
        ..defaults
    };

    tracing::info!(input = %config.input.display(), "[partition] reading raw habitats");
    let index = run_partition(&config)?;

    println!(
        "Wrote {} county shards ({} genera) -> {}",
        index.files.len(),
        index.genera.len(),
        config.output_dir.join(&config.index_file).display(),
    );
    Ok(())
}
