use std::path::{Path, PathBuf};

use clap::Args;
use inc_core::config::{ScraperConfig, BASE_URL};
use inc_core::logging::Logger;
use inc_core::{PostSource, Result};
use inc_metrics::Metrics;
use inc_scrapers::{collect_incidents, CollectOptions, WordPressClient};
use inc_storage::{save, DatasetStorage};

use super::clean::clean_dataset;
use super::metrics::write_metrics;

#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Page ceiling per keyword and tag listing (default or 0: every page)
    #[arg(long)]
    pub max_pages: Option<u32>,
    /// Keep at most this many records, newest first
    #[arg(long)]
    pub limit: Option<usize>,
    /// Directory for incidents.json and metrics.json
    #[arg(long, default_value = "data")]
    pub output_dir: PathBuf,
    /// Directory the dashboard reads its data from
    #[arg(long, default_value = "dashboard/public/data")]
    pub dashboard_data: PathBuf,
    /// Home page of the WordPress site
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub collected: usize,
    pub kept: usize,
    pub metrics: Metrics,
}

/// Harvest, save, clean in place, measure, then copy both files to the dashboard.
pub async fn run_pipeline(
    source: &dyn PostSource,
    storage: &dyn DatasetStorage,
    options: &CollectOptions,
    output_dir: &Path,
    dashboard_dir: &Path,
) -> Result<PipelineSummary> {
    let logger = Logger::new().with_prefix("[pipeline]".to_string());

    let records = collect_incidents(source, options).await;
    let incidents_path = output_dir.join("incidents.json");
    save(storage, &incidents_path, &records).await?;
    logger.info(&format!("💾 Saved {} records to {}", records.len(), incidents_path.display()));

    logger.info("🧹 Cleaning dataset");
    let outcome = clean_dataset(storage, &incidents_path, None, false).await?;

    let metrics = write_metrics(storage, &incidents_path, &output_dir.join("metrics.json")).await?;

    save(storage, &dashboard_dir.join("incidents.json"), &outcome.kept).await?;
    save(storage, &dashboard_dir.join("metrics.json"), &metrics).await?;
    logger.info(&format!("📊 Dashboard data ready in {}", dashboard_dir.display()));

    Ok(PipelineSummary {
        collected: records.len(),
        kept: outcome.kept.len(),
        metrics,
    })
}

pub async fn run(storage: &dyn DatasetStorage, args: PipelineArgs) -> Result<()> {
    let config = ScraperConfig::default().with_base_url(&args.base_url);
    let client = WordPressClient::new(&config)?;
    let options = CollectOptions::from_config(&config)
        .with_max_pages(args.max_pages)
        .with_limit(args.limit);

    let summary = run_pipeline(&client, storage, &options, &args.output_dir, &args.dashboard_data).await?;
    tracing::info!(
        "✨ Pipeline done: {} collected, {} kept, {} in metrics",
        summary.collected,
        summary.kept,
        summary.metrics.totale_articoli
    );
    Ok(())
}
