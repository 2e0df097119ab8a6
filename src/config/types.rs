use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal shell settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Width from which the layout switches to rail + grid (default: 120).
    #[serde(default = "default_expanded_min_columns")]
    pub expanded_min_columns: u16,
    /// Width from which the window counts as medium (default: 80).
    #[serde(default = "default_medium_min_columns")]
    pub medium_min_columns: u16,
    /// Open the schedule tab in multi-pane mode.
    #[serde(default)]
    pub multi_pane: bool,
}

/// Where conference data and the stored selection live.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON catalog file. The built-in sample is used when unset.
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Artificial delay added to every repository call.
    #[serde(default)]
    pub latency_ms: u64,
    /// Selection state file (default: `<config_dir>/confetti/state.toml`).
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file (default: `<config_dir>/confetti/confetti.log`).
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            config_dir.join("confetti").join("confetti.log")
        })
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_expanded_min_columns() -> u16 {
    120
}

fn default_medium_min_columns() -> u16 {
    80
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            expanded_min_columns: default_expanded_min_columns(),
            medium_min_columns: default_medium_min_columns(),
            multi_pane: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
