//! Configuration loading and management for the Travel Settlement Engine.
//!
//! This module loads the recognizer settings, report labels and rates from
//! YAML files. [`SettlementConfig::default`] provides the built-in values
//! for callers that do not keep a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use travel_settlement::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pino").unwrap();
//! println!("Loaded settlement: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateConfig, ReportText, SettlementConfig, SettlementMetadata};
