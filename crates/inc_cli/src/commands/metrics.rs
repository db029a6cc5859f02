use std::path::{Path, PathBuf};

use clap::Args;
use inc_core::Result;
use inc_metrics::{build_metrics, Metrics};
use inc_storage::{load_records, save, DatasetStorage};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct MetricsArgs {
    /// Cleaned dataset
    #[arg(long, default_value = "data/incidents.json")]
    pub input: PathBuf,
    /// Metrics file to write
    #[arg(long, default_value = "data/metrics.json")]
    pub output: PathBuf,
}

pub async fn write_metrics(storage: &dyn DatasetStorage, input: &Path, output: &Path) -> Result<Metrics> {
    let records = load_records(storage, input).await?;
    let metrics = build_metrics(&records);
    save(storage, output, &metrics).await?;
    info!("📈 Metrics for {} articles written to {}", metrics.totale_articoli, output.display());
    Ok(metrics)
}

pub async fn run(storage: &dyn DatasetStorage, args: MetricsArgs) -> Result<()> {
    write_metrics(storage, &args.input, &args.output).await?;
    Ok(())
}
