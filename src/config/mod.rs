//! Configuration Module - TOML-based CLI Configuration
//!
//! Optional `config.toml` with defaults for every field, so the CLI runs
//! with no file at all. Secrets are never read from the file: only the
//! names of the environment variables holding them.

pub mod loader;

use std::time::Duration;

use serde::Deserialize;

use crate::adapters::OrderPolicy;
use crate::domain::TimeInForce;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
  /// Which venue adapter to use by default.
  pub exchange: ExchangeConfig,
  /// Venue API endpoint and credentials lookup.
  pub api: ApiConfig,
  /// Defaults applied to created orders.
  pub orders: OrderDefaultsConfig,
  /// Log level and format.
  pub logging: LoggingConfig,
}

/// Default venue selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExchangeConfig {
  /// Adapter name (e.g. "foxbit").
  pub name: String,
}

impl Default for ExchangeConfig {
  fn default() -> Self {
    Self {
      name: default_exchange(),
    }
  }
}

/// API endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
  /// Overrides the venue's built-in base URL.
  pub base_url: Option<String>,
  /// Request timeout in milliseconds.
  pub timeout_ms: u64,
  /// Environment variable holding the API key.
  pub api_key_env: String,
  /// Environment variable holding the API secret.
  pub api_secret_env: String,
}

impl ApiConfig {
  pub const fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: None,
      timeout_ms: default_timeout_ms(),
      api_key_env: default_api_key_env(),
      api_secret_env: default_api_secret_env(),
    }
  }
}

/// Order placement defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderDefaultsConfig {
  /// Post-only flag sent with every order.
  pub post_only: bool,
  /// Time in force sent with every order.
  pub time_in_force: TimeInForce,
}

impl Default for OrderDefaultsConfig {
  fn default() -> Self {
    let policy = OrderPolicy::default();
    Self {
      post_only: policy.post_only,
      time_in_force: policy.time_in_force,
    }
  }
}

impl From<&OrderDefaultsConfig> for OrderPolicy {
  fn from(config: &OrderDefaultsConfig) -> Self {
    Self {
      post_only: config.post_only,
      time_in_force: config.time_in_force,
    }
  }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
  pub level: String,
  /// Emit JSON lines instead of human-readable text.
  pub json: bool,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      json: false,
    }
  }
}

fn default_exchange() -> String {
  "foxbit".to_string()
}

const fn default_timeout_ms() -> u64 {
  10_000
}

fn default_api_key_env() -> String {
  "FOXBIT_API_KEY".to_string()
}

fn default_api_secret_env() -> String {
  "FOXBIT_API_SECRET".to_string()
}

fn default_log_level() -> String {
  "warn".to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_match_reference_behaviour() {
    let config = AppConfig::default();
    assert_eq!(config.exchange.name, "foxbit");
    assert_eq!(config.api.timeout(), Duration::from_secs(10));
    assert_eq!(config.api.api_key_env, "FOXBIT_API_KEY");
    assert_eq!(config.api.api_secret_env, "FOXBIT_API_SECRET");
    assert!(config.orders.post_only);
    assert_eq!(config.orders.time_in_force, TimeInForce::Gtc);
    assert_eq!(config.logging.level, "warn");
  }

  #[test]
  fn test_partial_file_keeps_other_defaults() {
    let config: AppConfig = toml::from_str(
      r#"
        [orders]
        time_in_force = "IOC"

        [api]
        timeout_ms = 2500
      "#,
    )
    .unwrap();
    assert!(config.orders.post_only);
    assert_eq!(config.orders.time_in_force, TimeInForce::Ioc);
    assert_eq!(config.api.timeout_ms, 2500);
    assert_eq!(config.exchange.name, "foxbit");
    assert_eq!(OrderPolicy::from(&config.orders).time_in_force, TimeInForce::Ioc);
  }

  #[test]
  fn test_unknown_keys_are_rejected() {
    let result = toml::from_str::<AppConfig>("[api]\napi_secret = \"oops\"\n");
    assert!(result.is_err());
  }
}
