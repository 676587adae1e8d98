// storefront-postgres/src/config.rs

use crate::error::SetupError;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgStoreConfig {
  pub database_url: String,
  pub max_connections: u32,
  pub acquire_timeout: Duration,
}

impl PgStoreConfig {
  /// Reads the configuration from the process environment, loading `.env` first
  /// if one is present.
  ///
  /// - `DATABASE_URL` (required)
  /// - `DB_MAX_CONNECTIONS` (default 5)
  /// - `DB_ACQUIRE_TIMEOUT_SECS` (default 30)
  pub fn from_env() -> Result<Self, SetupError> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Same as `from_env`, with variables resolved through `lookup`.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SetupError> {
    let database_url = lookup("DATABASE_URL")
      .filter(|url| !url.trim().is_empty())
      .ok_or_else(|| SetupError::Config("Missing environment variable 'DATABASE_URL'".to_string()))?;

    let max_connections = lookup("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|| "5".to_string())
      .parse::<u32>()
      .map_err(|e| SetupError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;
    if max_connections == 0 {
      return Err(SetupError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }

    let acquire_timeout_secs = lookup("DB_ACQUIRE_TIMEOUT_SECS")
      .unwrap_or_else(|| "30".to_string())
      .parse::<u64>()
      .map_err(|e| SetupError::Config(format!("Invalid DB_ACQUIRE_TIMEOUT_SECS: {}", e)))?;

    // DATABASE_URL can carry credentials: never log it.
    tracing::info!(max_connections, acquire_timeout_secs, "Database configuration loaded.");

    Ok(Self {
      database_url,
      max_connections,
      acquire_timeout: Duration::from_secs(acquire_timeout_secs),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use std::collections::HashMap;

  fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_only_the_url_is_set() {
    let config = PgStoreConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/shop")])).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/shop");
    assert_eq!(config.max_connections, 5);
    assert_eq!(config.acquire_timeout, Duration::from_secs(30));
  }

  #[test]
  fn missing_url_is_a_config_error() {
    let result = PgStoreConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "3")]));
    assert!(matches!(result, Err(SetupError::Config(msg)) if msg.contains("DATABASE_URL")));
  }

  #[test]
  fn invalid_numbers_are_rejected() {
    let bad_pool = PgStoreConfig::from_lookup(lookup_from(&[
      ("DATABASE_URL", "postgres://localhost/shop"),
      ("DB_MAX_CONNECTIONS", "many"),
    ]));
    assert!(matches!(bad_pool, Err(SetupError::Config(msg)) if msg.contains("DB_MAX_CONNECTIONS")));

    let zero_pool = PgStoreConfig::from_lookup(lookup_from(&[
      ("DATABASE_URL", "postgres://localhost/shop"),
      ("DB_MAX_CONNECTIONS", "0"),
    ]));
    assert!(matches!(zero_pool, Err(SetupError::Config(_))));

    let bad_timeout = PgStoreConfig::from_lookup(lookup_from(&[
      ("DATABASE_URL", "postgres://localhost/shop"),
      ("DB_ACQUIRE_TIMEOUT_SECS", "-1"),
    ]));
    assert!(matches!(bad_timeout, Err(SetupError::Config(msg)) if msg.contains("DB_ACQUIRE_TIMEOUT_SECS")));
  }

  #[test]
  #[serial]
  fn from_env_reads_process_variables() {
    env::set_var("DATABASE_URL", "postgres://env-host/shop");
    env::set_var("DB_MAX_CONNECTIONS", "12");
    env::remove_var("DB_ACQUIRE_TIMEOUT_SECS");

    let config = PgStoreConfig::from_env().unwrap();

    env::remove_var("DATABASE_URL");
    env::remove_var("DB_MAX_CONNECTIONS");
    assert_eq!(config.database_url, "postgres://env-host/shop");
    assert_eq!(config.max_connections, 12);
    assert_eq!(config.acquire_timeout, Duration::from_secs(30));
  }
}
