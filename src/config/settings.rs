//! Engine settings loading from config.toml
//!
//! This module loads the tunable parts of the engine: the waste observation window and
//! unit table, the community comparison band, the dashboard cache TTL, and the farm sensor
//! safe ranges. Every field has a default, so a partial file (or no file at all) is valid.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming the settings file
pub const CONFIG_PATH_ENV: &str = "PANTRY_CONFIG";
/// Settings file used when `PANTRY_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
/// Environment variable selecting the household the binary reports on
pub const HOUSEHOLD_ID_ENV: &str = "HOUSEHOLD_ID";
/// Household used when `HOUSEHOLD_ID` is not set
pub const DEFAULT_HOUSEHOLD_ID: i64 = 1;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Waste estimation settings
    pub waste: WasteSettings,
    /// Community comparison settings
    pub community: CommunitySettings,
    /// Dashboard settings
    pub dashboard: DashboardSettings,
    /// Farm sensor safe ranges
    pub sensor: SensorThresholds,
}

/// `[waste]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WasteSettings {
    /// Days of waste history used for projections
    pub observation_window_days: i64,
    /// Number of categories reported in the rollup
    pub top_categories: usize,
    /// Grams assumed for one unit of an unrecognised unit
    pub default_grams_per_unit: f64,
    /// Extra or overriding unit conversions (unit name to grams)
    pub units: HashMap<String, f64>,
}

impl Default for WasteSettings {
    fn default() -> Self {
        Self {
            observation_window_days: 30,
            top_categories: crate::core::waste::DEFAULT_TOP_CATEGORIES,
            default_grams_per_unit: crate::core::waste::DEFAULT_GRAMS_PER_UNIT,
            units: HashMap::new(),
        }
    }
}

/// `[community]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommunitySettings {
    /// Percentage band inside which a household counts as average
    pub threshold_pct: f64,
}

impl Default for CommunitySettings {
    fn default() -> Self {
        Self {
            threshold_pct: crate::core::community::DEFAULT_THRESHOLD_PCT,
        }
    }
}

/// `[dashboard]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// How long a generated dashboard may be served from cache
    pub cache_ttl_secs: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self { cache_ttl_secs: 300 }
    }
}

/// `[sensor]` section: safe ranges for field sensor metrics
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SensorThresholds {
    /// Minimum safe air temperature in °C
    pub temperature_min_c: f64,
    /// Maximum safe air temperature in °C
    pub temperature_max_c: f64,
    /// Minimum safe relative humidity in %
    pub humidity_min_pct: f64,
    /// Maximum safe relative humidity in %
    pub humidity_max_pct: f64,
    /// Minimum safe soil moisture in %
    pub soil_moisture_min_pct: f64,
    /// Maximum safe soil moisture in %
    pub soil_moisture_max_pct: f64,
    /// Minimum safe soil pH
    pub ph_min: f64,
    /// Maximum safe soil pH
    pub ph_max: f64,
}

impl Default for SensorThresholds {
    fn default() -> Self {
        Self {
            temperature_min_c: 5.0,
            temperature_max_c: 40.0,
            humidity_min_pct: 20.0,
            humidity_max_pct: 90.0,
            soil_moisture_min_pct: 20.0,
            soil_moisture_max_pct: 80.0,
            ph_min: 5.5,
            ph_max: 7.5,
        }
    }
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML is malformed or a field has the wrong type.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings: {e}"),
    })
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid settings TOML.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    debug!("Attempting to load settings from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_settings(&contents)
}

/// Loads settings from a TOML file, falling back to defaults when the file does not exist.
///
/// # Errors
/// Returns `Error::Io` if the file exists but cannot be read, or `Error::Config` if it
/// cannot be parsed.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_settings(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No settings file at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Path of the settings file: `PANTRY_CONFIG` or `./config.toml`.
#[must_use]
pub fn settings_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Resolves the household id from the result of reading `HOUSEHOLD_ID`.
///
/// Only an unset variable falls back to `DEFAULT_HOUSEHOLD_ID`.
///
/// # Errors
/// Returns `Error::EnvVar` if the value is not valid Unicode, or `Error::Config` if it is
/// not an integer.
pub fn resolve_household_id(var: std::result::Result<String, VarError>) -> Result<i64> {
    match var {
        Ok(raw) => raw.trim().parse::<i64>().map_err(|e| Error::Config {
            message: format!("{HOUSEHOLD_ID_ENV} must be an integer: {e}"),
        }),
        Err(VarError::NotPresent) => Ok(DEFAULT_HOUSEHOLD_ID),
        Err(e) => Err(e.into()),
    }
}
