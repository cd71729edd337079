//! # Storefront Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`AURUM_*`)
//! 2. Defaults (this file)
//!
//! Read-only after startup, so no lock.

use std::env;
use std::path::PathBuf;

use aurum_core::theme::Screen;
use aurum_core::DEFAULT_SESSION_ID;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// SQLite file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Key owning the persisted cart and wishlist.
    /// Default: "default"
    pub session_id: String,

    /// Display name, shown in the CLI header.
    pub store_name: String,

    /// Pool size.
    /// Default: 5
    pub db_max_connections: u32,

    /// Viewport the design tokens are scaled for.
    /// Default: 390 × 844
    pub screen: Screen,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            database_path: None,
            session_id: DEFAULT_SESSION_ID.to_string(),
            store_name: "Aurum Jewellers".to_string(),
            db_max_connections: 5,
            screen: Screen::BASE,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Tests pass a closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = StorefrontConfig::default();

        let session_id = lookup("AURUM_SESSION_ID").unwrap_or(defaults.session_id);
        if session_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue("AURUM_SESSION_ID".to_string()));
        }

        let db_max_connections: u32 = match lookup("AURUM_DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("AURUM_DB_MAX_CONNECTIONS".to_string()))?,
            None => defaults.db_max_connections,
        };
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "AURUM_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        let width = parse_dimension(&lookup, "AURUM_SCREEN_WIDTH", defaults.screen.width)?;
        let height = parse_dimension(&lookup, "AURUM_SCREEN_HEIGHT", defaults.screen.height)?;

        Ok(StorefrontConfig {
            database_path: lookup("AURUM_DB_PATH").map(PathBuf::from),
            session_id,
            store_name: lookup("AURUM_STORE_NAME").unwrap_or(defaults.store_name),
            db_max_connections,
            screen: Screen::new(width, height),
        })
    }
}

/// Parses a positive, finite screen dimension.
fn parse_dimension<F>(lookup: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory")]
    NoDataDirectory,

    #[error("Could not create data directory: {0}")]
    DataDirectory(#[from] std::io::Error),
}
