//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for legalcompass
#[derive(Parser, Debug)]
#[command(name = "legalcompass")]
#[command(author, version, about = "Chat client for a legal-assistance gateway")]
#[command(long_about = r#"
LegalCompass talks to a remote legal-assistance backend: ask questions about
wills, trusts, and estates, upload PDFs for ingestion, and browse a random
sample of the lawyer directory on a map.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./compass.toml      Project-level config
3. ~/.config/legalcompass/config.toml   Global config

Example:
  legalcompass "What is a living trust?"
  legalcompass --chat
  legalcompass --upload will.pdf --upload trust.pdf "Summarize my documents"
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// PDFs to upload for ingestion before asking (can be repeated)
    #[arg(short, long, value_name = "PATH")]
    pub upload: Vec<PathBuf>,

    /// Override the gateway base URL
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Write a JSONL transcript of this session
    #[arg(long)]
    pub transcript: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
