use std::path::PathBuf;

use clap::Parser;

/// Conference schedule browser for the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "confetti", version, about)]
pub struct Cli {
    /// Config file (default: <config_dir>/confetti/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Open this conference directly, as a deep link would
    #[arg(long, value_name = "ID")]
    pub conference: Option<String>,

    /// Conference data JSON file, overrides [data].source
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Start the schedule tab in multi-pane mode
    #[arg(long)]
    pub multi_pane: bool,
}
