//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `HEARTHWOOD_DATA_DIR` - Directory for persisted snapshots (default: .hearthwood)
//! - `HEARTHWOOD_LOCALE` - Locale used when none is persisted (default: en)
//! - `HEARTHWOOD_AUTH_LATENCY_MS` - Simulated login/register delay (default: 1000)
//! - `HEARTHWOOD_CATALOG_LATENCY_MS` - Simulated catalog fetch delay (default: 500)
//! - `HEARTHWOOD_CHECKOUT_LATENCY_MS` - Simulated payment delay (default: 2000)
//! - `HEARTHWOOD_MAX_PRICE` - Upper bound of the price filter (default: 2000)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use hearthwood_core::Locale;

use crate::catalog::FilterCriteria;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Simulated network delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latencies {
    /// Login and register.
    pub auth: Duration,
    /// Product and promotion fetches.
    pub catalog: Duration,
    /// Payment processing at checkout.
    pub checkout: Duration,
}

impl Latencies {
    /// No delays at all.
    pub const ZERO: Self = Self {
        auth: Duration::ZERO,
        catalog: Duration::ZERO,
        checkout: Duration::ZERO,
    };
}

impl Default for Latencies {
    fn default() -> Self {
        Self {
            auth: Duration::from_millis(1000),
            catalog: Duration::from_millis(500),
            checkout: Duration::from_millis(2000),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding one `<key>.json` file per persisted store
    pub data_dir: PathBuf,
    /// Locale used until the user picks one
    pub default_locale: Locale,
    /// Simulated network delays
    pub latencies: Latencies,
    /// Upper bound of the catalog price filter
    pub max_price: Decimal,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".hearthwood"),
            default_locale: Locale::default(),
            latencies: Latencies::default(),
            max_price: FilterCriteria::DEFAULT_MAX_PRICE,
            sentry_dsn: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        let latencies = Latencies {
            auth: get_millis_or("HEARTHWOOD_AUTH_LATENCY_MS", defaults.latencies.auth)?,
            catalog: get_millis_or("HEARTHWOOD_CATALOG_LATENCY_MS", defaults.latencies.catalog)?,
            checkout: get_millis_or(
                "HEARTHWOOD_CHECKOUT_LATENCY_MS",
                defaults.latencies.checkout,
            )?,
        };

        let max_price = get_parsed_or("HEARTHWOOD_MAX_PRICE", defaults.max_price)?;
        if max_price <= Decimal::ZERO {
            return Err(ConfigError::InvalidEnvVar(
                "HEARTHWOOD_MAX_PRICE".to_string(),
                format!("must be positive (got {max_price})"),
            ));
        }

        Ok(Self {
            data_dir: get_optional_env("HEARTHWOOD_DATA_DIR")
                .map_or(defaults.data_dir, PathBuf::from),
            default_locale: get_parsed_or("HEARTHWOOD_LOCALE", defaults.default_locale)?,
            latencies,
            max_price,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
        })
    }

    /// Default configuration without simulated delays, for tests and demos.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            latencies: Latencies::ZERO,
            ..Self::default()
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an environment variable, or fall back to `default` when unset.
fn get_parsed_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Read a millisecond count as a `Duration`.
fn get_millis_or(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |value| {
        parse_value::<u64>(key, &value).map(Duration::from_millis)
    })
}
