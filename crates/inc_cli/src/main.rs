use clap::{Parser, Subcommand};
use inc_core::logging::init_logging;
use inc_storage::JsonFileStorage;

mod commands;

use commands::{CleanArgs, MetricsArgs, PipelineArgs};

/// Harvests coratolive.it accident news, cleans the dataset and computes metrics.
#[derive(Parser, Debug)]
#[command(name = "incidenti", author, version, about, long_about = None)]
pub struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Drop articles that do not report a current road accident
    Clean(CleanArgs),
    /// Compute descriptive metrics over a cleaned dataset
    Metrics(MetricsArgs),
    /// Fetch, clean, measure and export for the dashboard
    Pipeline(PipelineArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let storage = JsonFileStorage::new();

    match cli.command {
        Commands::Clean(args) => commands::clean::run(&storage, args).await?,
        Commands::Metrics(args) => commands::metrics::run(&storage, args).await?,
        Commands::Pipeline(args) => commands::pipeline::run(&storage, args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_clean_defaults() {
        let cli = Cli::parse_from(["incidenti", "clean"]);
        match cli.command {
            Commands::Clean(args) => {
                assert_eq!(args.input, PathBuf::from("data/incidents.json"));
                assert_eq!(args.output, None);
                assert!(!args.dry_run);
                assert_eq!(args.dashboard_data, "dashboard/public/data/incidents.json");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_pipeline_flags() {
        let cli = Cli::parse_from(["incidenti", "-v", "pipeline", "--max-pages", "2", "--limit", "50"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Pipeline(args) => {
                assert_eq!(args.max_pages, Some(2));
                assert_eq!(args.limit, Some(50));
                assert_eq!(args.output_dir, PathBuf::from("data"));
                assert_eq!(args.base_url, "https://coratolive.it");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
