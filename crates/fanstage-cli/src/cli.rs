use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use fanstage_core::{PlatformId, SortOption};

#[derive(Parser)]
#[command(name = "fanstage")]
#[command(about = "Sort, filter and play FAN:STAGE music letters", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "FANSTAGE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter, sort and page a letter collection
    Inbox(InboxArgs),

    /// Pick the platform "play all" should open for a letter
    Recommend(RecommendArgs),

    /// Suggest sender/recipient names for the name filter
    Names {
        /// JSON file holding an array of letters
        letters: PathBuf,

        /// Text typed so far
        query: String,

        /// Maximum suggestions (default from config: 5)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the config path and effective configuration
    Config,
}

#[derive(Args)]
pub struct InboxArgs {
    /// JSON file holding an array of letters
    pub letters: PathBuf,

    /// Sort order (default from config: date-desc)
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortOption>,

    /// Sender or recipient name contains
    #[arg(long)]
    pub name: Option<String>,

    /// Any track title contains
    #[arg(long)]
    pub track_title: Option<String>,

    /// Earliest letter date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest letter date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Page number, 1-indexed
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Letters per page (default from config: 20)
    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct RecommendArgs {
    /// JSON file holding a single letter
    pub letter: PathBuf,

    /// JSON file holding the listener's platform history
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Platform to use when the history is empty (default from config)
    #[arg(long, conflicts_with = "no_fallback")]
    pub fallback: Option<PlatformId>,

    /// Ignore the configured fallback platform
    #[arg(long)]
    pub no_fallback: bool,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_sort(raw: &str) -> Result<SortOption, String> {
    raw.parse().map_err(|e: fanstage_core::CoreError| e.to_string())
}
