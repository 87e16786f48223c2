//! Configuration loading for the Workforce Tracking Engine.
//!
//! This module provides the [`AppConfig`] type, loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use worker_tracker::config::AppConfig;
//!
//! let config = AppConfig::load("./config/tracker.yaml").unwrap();
//! println!("Serving on {}", config.bind_addr);
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::DEFAULT_DAILY_RATE;

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_daily_rate() -> Decimal {
    DEFAULT_DAILY_RATE
}

fn default_currency_symbol() -> String {
    "\u{20b9}".to_string()
}

/// Application configuration.
///
/// Every field has a default, so a partial YAML file (or none at all, via
/// [`AppConfig::default`]) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Daily rate applied to workers created without a usable rate.
    #[serde(default = "default_daily_rate")]
    pub default_daily_rate: Decimal,
    /// Currency symbol used on presentation surfaces.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            default_daily_rate: default_daily_rate(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/tracker.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is missing
    /// or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TrackerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
