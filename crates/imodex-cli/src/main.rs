mod normalize;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use imodex_core::load_app_config;

#[derive(Debug, Parser)]
#[command(name = "imodex")]
#[command(about = "Portuguese real-estate listing normalizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize parsed-listing JSON into canonical records.
    Normalize(normalize::NormalizeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Normalize(args) => normalize::run(&config, args).await,
    }
}
