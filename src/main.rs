use anyhow::{Context, Result};
use clap::Parser;

use gold_vs_equities::utils::TimeUtils;
use gold_vs_equities::{AnalysisRequest, Cli, ComparisonEngine, Dataset};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load the dataset
    let raw = std::fs::read_to_string(&args.data)
        .with_context(|| format!("Failed to read dataset {}", args.data.display()))?;
    let dataset: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse dataset {}", args.data.display()))?;
    let engine = ComparisonEngine::new(dataset)
        .with_context(|| format!("Dataset {} is not date-ordered", args.data.display()))?;

    let Some(bounds) = engine.dataset.date_bounds() else {
        anyhow::bail!("Dataset {} has no points", args.data.display());
    };
    log::info!(
        "Loaded {} {} points from {} ({} to {})",
        engine.dataset.len(),
        engine
            .dataset
            .info
            .frequency()
            .map_or("undated".to_string(), |f| f.to_string()),
        engine.dataset.info.source_name,
        TimeUtils::format_date(bounds.from),
        TimeUtils::format_date(bounds.to)
    );

    // D. Run one analysis
    let request = AnalysisRequest::new(args.resolve_range(&bounds)?, args.window)?;
    let report = engine.run(&request);

    // E. Emit the report
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}
