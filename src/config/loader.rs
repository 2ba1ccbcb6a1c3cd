//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};

use super::AppConfig;

/// Where the active configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
  File,
  Defaults,
}

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content)
}

/// Load `path` if it exists, otherwise fall back to defaults.
///
/// A present but invalid file is still an error.
pub fn load_config_or_default(path: &str) -> Result<(AppConfig, ConfigSource)> {
  if Path::new(path).exists() {
    Ok((load_config(path)?, ConfigSource::File))
  } else {
    let config = AppConfig::default();
    validate_config(&config)?;
    Ok((config, ConfigSource::Defaults))
  }
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty, distinct table file names
/// - Usable chart dimensions
fn validate_config(config: &AppConfig) -> Result<()> {
  let storage = &config.storage;

  anyhow::ensure!(
    !storage.data_dir.is_empty(),
    "storage.data_dir must not be empty"
  );

  let files = [
    ("members_file", &storage.members_file),
    ("fees_file", &storage.fees_file),
    ("member_count_file", &storage.member_count_file),
  ];
  for (key, name) in &files {
    anyhow::ensure!(!name.is_empty(), "storage.{key} must not be empty");
  }
  for (i, (key_a, a)) in files.iter().enumerate() {
    for (key_b, b) in &files[i + 1..] {
      anyhow::ensure!(
        a != b,
        "storage.{key_a} and storage.{key_b} both point at {a:?}"
      );
    }
  }

  anyhow::ensure!(
    config.chart.height >= 2,
    "chart.height must be at least 2, got {}",
    config.chart.height
  );
  anyhow::ensure!(
    config.chart.column_width >= 1,
    "chart.column_width must be at least 1, got {}",
    config.chart.column_width
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_missing_file_falls_back_to_defaults() {
    let (config, source) = load_config_or_default("nonexistent.toml").unwrap();
    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(config.storage.members_file, "gym_data.csv");
    assert_eq!(config.storage.fees_file, "fees_data.csv");
    assert_eq!(config.storage.member_count_file, "member_count.csv");
    assert!(config.menu.reprompt_on_invalid_input);
  }

  #[test]
  fn test_partial_file_keeps_other_defaults() {
    let config = parse_config(
      r#"
      [storage]
      data_dir = "data"

      [menu]
      pause_after_action = false
      "#,
    )
    .unwrap();
    assert_eq!(config.storage.data_dir, "data");
    assert_eq!(config.storage.fees_file, "fees_data.csv");
    assert!(!config.menu.pause_after_action);
    assert!(config.menu.reprompt_on_invalid_input);
    assert_eq!(config.app.log_level, "warn");
  }

  #[test]
  fn test_rejects_shared_file_names() {
    let err = parse_config(
      r#"
      [storage]
      fees_file = "gym_data.csv"
      "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("members_file"), "{err}");
  }

  #[test]
  fn test_rejects_flat_chart() {
    assert!(parse_config("[chart]\nheight = 1\n").is_err());
    assert!(parse_config("[chart]\ncolumn_width = 0\n").is_err());
  }
}
