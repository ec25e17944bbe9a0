use std::path::PathBuf;

use clap::Parser;
use shopkeep_core::Locale;

/// Command-line arguments for the shopkeep assistant
#[derive(Debug, Parser)]
#[command(name = "shopkeep", version, about = "Conversational catalog assistant")]
pub struct Cli {
    /// Configuration file (defaults to ~/.shopkeep/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog JSON file, overriding the configured one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Language for keywords and replies (english or spanish)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Answer these queries in order and exit instead of starting a session
    #[arg(short, long = "query", value_name = "TEXT")]
    pub queries: Vec<String>,

    /// Log routing decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
