use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use habitat_map::{
    load_county, load_index, style_for, DataSource, DiskSource, EnrichedFeature, HabitatCollection, HttpSource,
};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::EnrichArgs) -> Result<()> {
    let source: Box<dyn DataSource> = match &args.url {
        Some(url) => Box::new(HttpSource::new(url.as_str())?),
        None => Box::new(DiskSource::new(args.data.clone().unwrap_or_else(|| PathBuf::from("public/data")))),
    };

    let index = load_index(source.as_ref())?;
    let collection = load_county(source.as_ref(), &args.county, &index, args.crs)
        .with_context(|| format!("Failed to load county {}", args.county))?;

    let selected: Vec<&EnrichedFeature> = collection.filter_by_genera(args.genera.as_slice()).collect();
    let summary = collection.summary();

    println!("[enrich] {} ({}): {} features, {} selected", args.county, args.crs, summary.features, selected.len());
    println!("  genera: {}", collection.available_genera().join(", "));
    if let Some(bounds) = summary.bounds {
        println!(
            "  bounds: [{:.5}, {:.5}] - [{:.5}, {:.5}]",
            bounds.min().x, bounds.min().y, bounds.max().x, bounds.max().y,
        );
    }
    if cli.verbose > 0 {
        for (species, count) in &summary.species {
            println!("  {count:>6}  {species}");
        }
    }

    if let Some(out_path) = &args.geojson {
        let styled = HabitatCollection::new(selected.into_iter().cloned().collect());
        write_geojson(&styled, out_path)?;
        println!("Wrote {} features -> {}", styled.len(), out_path.display());
    }

    Ok(())
}

/// Enriched features with their map style attached as a `style` property.
fn write_geojson(collection: &HabitatCollection, out_path: &Path) -> Result<()> {
    let mut features = collection.to_feature_collection();
    for (feature, enriched) in features.features.iter_mut().zip(collection) {
        let style = serde_json::to_value(style_for(enriched, false))?;
        feature.properties.get_or_insert_with(Default::default).insert("style".into(), style);
    }

    let bytes = serde_json::to_vec(&features).context("Failed to serialize features")?;
    std::fs::write(out_path, bytes).with_context(|| format!("Failed to write {}", out_path.display()))
}
