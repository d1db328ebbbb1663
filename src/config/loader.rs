//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading settlement
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{SettlementError, SettlementResult};

use super::types::{RateConfig, SettlementConfig, SettlementMetadata};

/// Loads and validates settlement configuration.
///
/// # Directory Structure
///
/// ```text
/// config/pino/
/// ├── settlement.yaml  # Entry marker, honorifics, separator, report labels
/// └── rates.yaml       # Per-km rate, daily allowance, fallback leg distance
/// ```
///
/// # Example
///
/// ```no_run
/// use travel_settlement::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pino").unwrap();
/// println!("Loaded settlement: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SettlementConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds values the engine cannot work with (an empty marker or
    /// separator, negative rates).
    pub fn load<P: AsRef<Path>>(path: P) -> SettlementResult<Self> {
        let path = path.as_ref();

        let settlement_path = path.join("settlement.yaml");
        let metadata = Self::load_yaml::<SettlementMetadata>(&settlement_path)?;
        Self::validate_metadata(&metadata, &settlement_path)?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RateConfig>(&rates_path)?;
        Self::validate_rates(&rates, &rates_path)?;

        Ok(Self {
            config: SettlementConfig::new(metadata, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SettlementResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SettlementError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SettlementError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_metadata(metadata: &SettlementMetadata, path: &Path) -> SettlementResult<()> {
        if metadata.entry_marker.trim().is_empty() {
            return Err(Self::invalid(path, "entry_marker must not be empty"));
        }
        if metadata.waypoint_separator.is_empty() {
            return Err(Self::invalid(path, "waypoint_separator must not be empty"));
        }
        if metadata.honorific_suffixes.iter().any(|s| s.is_empty()) {
            return Err(Self::invalid(path, "honorific_suffixes must not contain empty entries"));
        }
        Ok(())
    }

    fn validate_rates(rates: &RateConfig, path: &Path) -> SettlementResult<()> {
        if rates.per_km < Decimal::ZERO {
            return Err(Self::invalid(path, "per_km must not be negative"));
        }
        if rates.daily_allowance < 0 {
            return Err(Self::invalid(path, "daily_allowance must not be negative"));
        }
        if rates.fallback_km_per_leg < Decimal::ZERO {
            return Err(Self::invalid(path, "fallback_km_per_leg must not be negative"));
        }
        Ok(())
    }

    fn invalid(path: &Path, message: &str) -> SettlementError {
        SettlementError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Returns the underlying settlement configuration.
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// Consumes the loader, returning the settlement configuration.
    pub fn into_config(self) -> SettlementConfig {
        self.config
    }

    /// Returns the settlement metadata.
    pub fn metadata(&self) -> &SettlementMetadata {
        self.config.metadata()
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RateConfig {
        self.config.rates()
    }
}
