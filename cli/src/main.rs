mod commands;

use clap::{Parser, Subcommand};
use commands::*;
use config::ConfigError;
use gscores::config::GScoresConfig;
use gscores::{Block, HttpScoresClient};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(name = "gscores")]
#[command(about = "Query exam scores, statistics and rankings from a G-Scores API")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Base URL of the scoring API (overrides configuration)
    #[arg(long)]
    base_url: Option<String>,

    /// Print the raw response models as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up one candidate's scores by registration number
    Search {
        /// Registration number (SBD)
        sbd: String,
    },
    /// List the subjects the statistics endpoints know about
    Metadata,
    /// Score-level distribution per subject
    Stats {
        /// Comma-separated subject keys (default: every subject from metadata)
        #[arg(long)]
        subjects: Option<String>,

        /// Comma-separated levels: excellent, good, average, poor (default: all)
        #[arg(long)]
        levels: Option<String>,
    },
    /// Top 10 candidates for a block
    Top {
        /// Block A, B, C or D (default: dashboard.default_block)
        block: Option<Block>,
    },
}

fn load_config_from_args(args: &Args) -> Result<GScoresConfig, ConfigError> {
    let config = if let Some(config_path) = &args.config {
        GScoresConfig::load_with_file(Some(config_path))?
    } else {
        GScoresConfig::load()?
    };

    Ok(merge_args_into_config(config, args))
}

/// Merge command line arguments into the configuration
fn merge_args_into_config(mut config: GScoresConfig, args: &Args) -> GScoresConfig {
    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Commands::Top { block: Some(block) } = &args.command {
        config.dashboard.default_block = *block;
    }
    config
}

#[tokio::main]
async fn main() {
    // Initialize env_logger from environment variables (RUST_LOG)
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> CliResult {
    let config = load_config_from_args(args)
        .map_err(|e| format!("Failed to load configuration: {e}"))?;
    log::debug!("Using API at {}", config.api.base_url);

    let client = HttpScoresClient::from_config(&config.api);

    match &args.command {
        Commands::Search { sbd } => search_scores(&client, sbd, args.json).await,
        Commands::Metadata => show_metadata(&client, args.json).await,
        Commands::Stats { subjects, levels } => {
            show_statistics(&client, subjects.as_deref(), levels.as_deref(), args.json).await
        }
        Commands::Top { .. } => {
            show_top_students(&client, config.dashboard.default_block, args.json).await
        }
    }
}
