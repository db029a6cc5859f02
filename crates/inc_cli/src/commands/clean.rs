use std::path::{Path, PathBuf};

use clap::Args;
use inc_classifier::report::year_distribution;
use inc_classifier::{clean, CleanOutcome};
use inc_core::Result;
use inc_storage::{load_records, removed_path_for, save, DatasetStorage};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Dataset to clean
    #[arg(long, default_value = "data/incidents.json")]
    pub input: PathBuf,
    /// Where to write the kept records (defaults to overwriting the input)
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Only report what would be removed
    #[arg(long)]
    pub dry_run: bool,
    /// Copy of the cleaned dataset read by the dashboard; empty to skip
    #[arg(long, default_value = "dashboard/public/data/incidents.json")]
    pub dashboard_data: String,
}

/// Loads `input`, classifies every record and, unless `dry_run`, writes the
/// kept set to `output` (or back to `input`) and the removed set next to it.
pub async fn clean_dataset(
    storage: &dyn DatasetStorage,
    input: &Path,
    output: Option<&Path>,
    dry_run: bool,
) -> Result<CleanOutcome> {
    let records = load_records(storage, input).await?;
    info!("🧹 Loaded {} records from {}", records.len(), input.display());
    for (year, count) in year_distribution(&records) {
        info!("  {}: {}", year, count);
    }

    let mut outcome = clean(records);
    let output = output.unwrap_or(input);
    outcome.report = outcome
        .report
        .with_dry_run(dry_run)
        .with_output((!dry_run).then(|| output.to_path_buf()));

    if !dry_run {
        save(storage, output, &outcome.kept).await?;
        save(storage, &removed_path_for(output), &outcome.removed).await?;
    }
    outcome.report.log();
    Ok(outcome)
}

/// Writes the kept and removed sets where the dashboard reads them.
pub async fn publish_to_dashboard(storage: &dyn DatasetStorage, outcome: &CleanOutcome, path: &Path) -> Result<()> {
    save(storage, path, &outcome.kept).await?;
    save(storage, &removed_path_for(path), &outcome.removed).await?;
    info!("📊 Dashboard data updated in {}", path.display());
    Ok(())
}

pub async fn run(storage: &dyn DatasetStorage, args: CleanArgs) -> Result<()> {
    let outcome = clean_dataset(storage, &args.input, args.output.as_deref(), args.dry_run).await?;
    if !args.dry_run && !args.dashboard_data.trim().is_empty() {
        publish_to_dashboard(storage, &outcome, Path::new(args.dashboard_data.trim())).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inc_core::{ArticleRecord, Error};
    use inc_storage::MemoryStorage;

    fn dataset() -> Vec<ArticleRecord> {
        vec![
            ArticleRecord::new(1, "Tamponamento sulla SP231, due feriti", "", "").with_date("2024-01-02"),
            ArticleRecord::new(2, "Nessun incidente a Pasquetta", "", "").with_date("2024-04-01"),
        ]
    }

    async fn seeded(path: &Path) -> MemoryStorage {
        let storage = MemoryStorage::new();
        save(&storage, path, &dataset()).await.unwrap();
        storage
    }

    #[tokio::test]
    async fn test_clean_overwrites_input_and_writes_removed() {
        let input = Path::new("data/incidents.json");
        let storage = seeded(input).await;

        let outcome = clean_dataset(&storage, input, None, false).await.unwrap();
        assert_eq!(outcome.report.kept, 1);
        assert_eq!(outcome.report.output.as_deref(), Some(input));

        let kept = load_records(&storage, input).await.unwrap();
        assert_eq!(kept.len(), 1);
        let removed = storage.read_json(Path::new("data/incidents_removed.json")).await.unwrap();
        assert_eq!(removed[0]["id"], 2);
        assert_eq!(removed[0]["removal_reason"], "nessun_incidente");
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let input = Path::new("data/incidents.json");
        let storage = seeded(input).await;

        let outcome = clean_dataset(&storage, input, Some(Path::new("data/clean.json")), true)
            .await
            .unwrap();
        assert!(outcome.report.dry_run);
        assert_eq!(outcome.report.removed, 1);
        assert_eq!(storage.paths().await, vec![PathBuf::from("data/incidents.json")]);
        assert_eq!(load_records(&storage, input).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_input() {
        let storage = MemoryStorage::new();
        let err = clean_dataset(&storage, Path::new("missing.json"), None, false)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
    }

    #[tokio::test]
    async fn test_run_publishes_to_dashboard() {
        let input = Path::new("data/incidents.json");
        let storage = seeded(input).await;
        let args = CleanArgs {
            input: input.to_path_buf(),
            output: Some(PathBuf::from("data/clean.json")),
            dry_run: false,
            dashboard_data: "dash/incidents.json".to_string(),
        };
        run(&storage, args).await.unwrap();

        assert_eq!(
            storage.paths().await,
            vec![
                PathBuf::from("dash/incidents.json"),
                PathBuf::from("dash/incidents_removed.json"),
                PathBuf::from("data/clean.json"),
                PathBuf::from("data/clean_removed.json"),
                PathBuf::from("data/incidents.json"),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_dashboard_path_skips_copy() {
        let input = Path::new("data/incidents.json");
        let storage = seeded(input).await;
        let args = CleanArgs {
            input: input.to_path_buf(),
            output: None,
            dry_run: false,
            dashboard_data: String::new(),
        };
        run(&storage, args).await.unwrap();
        assert_eq!(storage.paths().await.len(), 2);
    }
}
