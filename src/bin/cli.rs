//! Harvester CLI
//!
//! Local execution entry point. The default `run` command reproduces the
//! fixed resume-driven behavior; `letters` and `details` expose the two
//! harvest phases individually.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use harvester::{
    error::{AppError, Result},
    models::Config,
    pipeline,
    services::HttpFetcher,
    storage::DataStore,
};

/// Istrian dialect dictionary harvester
#[derive(Parser, Debug)]
#[command(
    name = "harvester",
    version,
    about = "Harvests the Istrian dialect dictionary into CSV tables"
)]
struct Cli {
    /// Path to the data directory holding config and harvest files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Harvest letters if no input files exist, then every pending input
    Run,

    /// Harvest word/link pairs for every letter
    Letters,

    /// Harvest dialect tables for one word/link file
    Details {
        /// Input file name inside the data directory
        input: String,

        /// Output file name (default: derived from the input name)
        #[arg(long)]
        output: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Harvester starting...");

    let config_path = cli.data_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    let store = DataStore::new(&cli.data_dir);

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let fetcher = HttpFetcher::new(&config.harvest)?;
            pipeline::run_resume(&config, &store, &fetcher).await?;
        }

        Command::Letters => {
            let fetcher = HttpFetcher::new(&config.harvest)?;
            let outcome = pipeline::run_letter_harvest(&config, &store, &fetcher).await?;
            log::info!("Found {} words", outcome.words.len());
        }

        Command::Details { input, output } => {
            let output = match output {
                Some(name) => name,
                None => pipeline::derive_output_name(&input).ok_or_else(|| {
                    AppError::config(format!(
                        "Cannot derive output name from '{input}'; pass --output"
                    ))
                })?,
            };

            let fetcher = HttpFetcher::new(&config.harvest)?;
            let outcome =
                pipeline::run_detail_harvest(&config, &store, &fetcher, &input, &output).await?;
            log::info!("Wrote {} rows ({} skipped)", outcome.processed, outcome.skipped);
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
        }
    }

    log::info!("Done!");

    Ok(())
}
