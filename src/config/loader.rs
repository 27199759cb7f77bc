//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::AppConfig;

/// Load the config file if one was given, defaults otherwise.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig> {
  match path {
    Some(path) => load_config(path),
    None => {
      let config = AppConfig::default();
      validate_config(&config)?;
      Ok(config)
    }
  }
}

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &Path) -> Result<AppConfig> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| format!("Failed to parse {}", path.display()))?;

  validate_config(&config)?;

  debug!(
    path = %path.display(),
    exchange = %config.exchange.name,
    timeout_ms = config.api.timeout_ms,
    "Configuration loaded"
  );

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty exchange name and env var names
/// - Positive, bounded timeout
/// - Absolute http(s) base URL when overridden
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.exchange.name.trim().is_empty(),
    "exchange.name must not be empty"
  );

  anyhow::ensure!(
    config.api.timeout_ms > 0 && config.api.timeout_ms <= 120_000,
    "api.timeout_ms must be in (0, 120000], got {}",
    config.api.timeout_ms
  );
  anyhow::ensure!(
    !config.api.api_key_env.is_empty() && !config.api.api_secret_env.is_empty(),
    "api.api_key_env and api.api_secret_env must name environment variables"
  );

  if let Some(base_url) = &config.api.base_url {
    let parsed = url::Url::parse(base_url)
      .with_context(|| format!("api.base_url is not a valid URL: {base_url}"))?;
    anyhow::ensure!(
      matches!(parsed.scheme(), "http" | "https"),
      "api.base_url must use http or https, got {}",
      parsed.scheme()
    );
    anyhow::ensure!(
      parsed.query().is_none(),
      "api.base_url must not carry a query string"
    );
  }

  anyhow::ensure!(
    !config.logging.level.trim().is_empty(),
    "logging.level must not be empty"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config(Path::new("nonexistent.toml"));
    assert!(result.is_err());
  }

  #[test]
  fn test_defaults_are_valid() {
    assert!(load_or_default(None).is_ok());
  }

  #[test]
  fn test_zero_timeout_is_rejected() {
    let mut config = AppConfig::default();
    config.api.timeout_ms = 0;
    assert!(validate_config(&config).is_err());
  }

  #[test]
  fn test_base_url_must_be_http() {
    let mut config = AppConfig::default();
    config.api.base_url = Some("ftp://example.com".to_string());
    assert!(validate_config(&config).is_err());

    config.api.base_url = Some("not a url".to_string());
    assert!(validate_config(&config).is_err());

    config.api.base_url = Some("http://127.0.0.1:8080".to_string());
    assert!(validate_config(&config).is_ok());
  }

  #[test]
  fn test_load_file_from_disk() {
    let path = std::env::temp_dir().join(format!("trading-cli-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[exchange]\nname = \"foxbit\"\n[logging]\njson = true\n").unwrap();
    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(config.logging.json);
  }
}
