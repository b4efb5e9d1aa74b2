mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use fanstage_config::Config;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Inbox(args) => commands::inbox::handle(args, &config),
        cli::Commands::Recommend(args) => commands::recommend::handle(args, &config),
        cli::Commands::Names {
            letters,
            query,
            limit,
        } => commands::names::handle(&letters, &query, limit, &config),
        cli::Commands::Config => commands::config::handle(cli.config.as_deref(), &config),
    }
}
