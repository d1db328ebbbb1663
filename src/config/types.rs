//! Configuration types for travel settlement.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DEFAULT_DAILY_ALLOWANCE, DEFAULT_RATE_PER_KM};
use crate::parsing::{
    DEFAULT_ENTRY_MARKER, DEFAULT_HONORIFIC_SUFFIXES, DEFAULT_WAYPOINT_SEPARATOR,
    default_km_per_leg,
};

/// Fixed text printed on each person's settlement sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportText {
    /// Sheet title naming the fiscal window, shown after the person's name.
    pub title: String,
    /// Footnote describing when the amounts were paid out.
    pub note: String,
}

/// Settings from `settlement.yaml`.
///
/// Describes how entry lines are recognized and how the report is labelled.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementMetadata {
    /// The human-readable name of the settlement.
    pub name: String,
    /// The bracketed tag that starts every travel-entry line.
    pub entry_marker: String,
    /// Honorific suffixes stripped from the end of a person's name.
    #[serde(default)]
    pub honorific_suffixes: Vec<String>,
    /// The glyph separating successive stops within a route.
    pub waypoint_separator: String,
    /// Report labels.
    pub report: ReportText,
}

/// Rates from `rates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// Transportation fee per kilometer.
    pub per_km: Decimal,
    /// Flat allowance paid once per person per day.
    pub daily_allowance: i64,
    /// Distance credited per route leg when a line carries no explicit distance.
    pub fallback_km_per_leg: Decimal,
}

/// The complete settlement configuration.
#[derive(Debug, Clone)]
pub struct SettlementConfig {
    metadata: SettlementMetadata,
    rates: RateConfig,
}

impl SettlementConfig {
    /// Creates a new SettlementConfig from its component parts.
    pub fn new(metadata: SettlementMetadata, rates: RateConfig) -> Self {
        Self { metadata, rates }
    }

    /// Returns the settlement metadata.
    pub fn metadata(&self) -> &SettlementMetadata {
        &self.metadata
    }

    /// Returns the rate configuration.
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }
}

impl Default for SettlementConfig {
    /// The built-in PINO settlement values.
    fn default() -> Self {
        Self {
            metadata: SettlementMetadata {
                name: "PINO精算".to_string(),
                entry_marker: DEFAULT_ENTRY_MARKER.to_string(),
                honorific_suffixes: DEFAULT_HONORIFIC_SUFFIXES
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                waypoint_separator: DEFAULT_WAYPOINT_SEPARATOR.to_string(),
                report: ReportText {
                    title: "2024年12月25日～2025年1月 社内通貨（交通費）清算額".to_string(),
                    note: "※2025年1月分給与にて清算しました。".to_string(),
                },
            },
            rates: RateConfig {
                per_km: Decimal::from(DEFAULT_RATE_PER_KM),
                daily_allowance: DEFAULT_DAILY_ALLOWANCE,
                fallback_km_per_leg: default_km_per_leg(),
            },
        }
    }
}
