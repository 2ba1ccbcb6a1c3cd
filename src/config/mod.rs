//! Configuration Module - TOML-based Roster Configuration
//!
//! Loads and validates configuration from an optional `config.toml`.
//! Every field has a default, so the program runs with no config file
//! at all and reads/writes the three CSV tables in the working
//! directory.

pub mod loader;

use serde::Deserialize;

use crate::domain::ChartOptions;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Program identity and logging.
  pub app: AppSection,
  /// Where the three tables live.
  pub storage: StorageConfig,
  /// Menu loop behavior.
  pub menu: MenuConfig,
  /// Member-count chart layout.
  pub chart: ChartConfig,
}

/// Program identity and logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSection {
  /// Name shown in the welcome banner and farewell.
  pub name: String,
  /// Log level (trace, debug, info, warn, error). Logs go to stderr.
  pub log_level: String,
  /// Emit JSON log lines instead of human-readable ones.
  pub json_logs: bool,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: "Gym Management Software".to_string(),
      log_level: "warn".to_string(),
      json_logs: false,
    }
  }
}

/// Table file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
  /// Directory holding the table files.
  pub data_dir: String,
  /// Member table file name.
  pub members_file: String,
  /// Fee table file name.
  pub fees_file: String,
  /// Member-count log file name.
  pub member_count_file: String,
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      data_dir: ".".to_string(),
      members_file: "gym_data.csv".to_string(),
      fees_file: "fees_data.csv".to_string(),
      member_count_file: "member_count.csv".to_string(),
    }
  }
}

/// Menu loop configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
  /// Re-prompt on a malformed number. When false, a malformed number
  /// ends the session with an error.
  pub reprompt_on_invalid_input: bool,
  /// Wait for Enter after each action.
  pub pause_after_action: bool,
}

impl Default for MenuConfig {
  fn default() -> Self {
    Self {
      reprompt_on_invalid_input: true,
      pause_after_action: true,
    }
  }
}

/// Chart layout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
  /// Plot rows (>= 2).
  pub height: usize,
  /// Characters per data point (>= 1).
  pub column_width: usize,
}

impl Default for ChartConfig {
  fn default() -> Self {
    let options = ChartOptions::default();
    Self {
      height: options.height,
      column_width: options.column_width,
    }
  }
}

impl ChartConfig {
  /// Chart options with the default title and axis labels.
  pub fn to_options(&self) -> ChartOptions {
    ChartOptions {
      height: self.height,
      column_width: self.column_width,
      ..ChartOptions::default()
    }
  }
}
