//! Settlement report models.
//!
//! This module contains the [`SettlementReport`] type handed to the
//! presentation layer, along with the per-person totals and the
//! diagnostics for entry lines that could not be read.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::parsing::SkipReason;

use super::DailyRecord;

/// Totals for one person across every day in the report.
///
/// Summed from [`DailyRecord`] figures; fees are never recomputed from the
/// distance total, so `transportation_fee` is the sum of the truncated
/// daily fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
    /// The person these totals belong to.
    pub person: String,
    /// Number of days with at least one route.
    pub days: usize,
    /// Sum of the daily distances in kilometers.
    pub total_distance: Decimal,
    /// Sum of the daily transportation fees.
    pub transportation_fee: i64,
    /// Sum of the daily allowances.
    pub allowance: i64,
    /// Sum of the daily totals.
    pub total: i64,
}

/// An entry-marker line that matched none of the recognized shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// The 1-based line number in the submitted text.
    pub line_number: usize,
    /// The trimmed line text.
    pub line: String,
    /// The part of the entry the line was missing.
    pub reason: SkipReason,
}

/// Everything the presentation layer needs to render a settlement.
///
/// # Example
///
/// ```
/// use travel_settlement::config::SettlementConfig;
/// use travel_settlement::build_report;
///
/// let report = build_report(
///     "【ピノ】山田 1/5(月)A→B→C 12.5km",
///     &SettlementConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(report.records.len(), 1);
/// assert_eq!(report.summaries[0].total, 387);
/// assert_eq!(report.grand_total, 387);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SettlementReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The configured settlement name.
    pub settlement_name: String,
    /// Sheet title naming the fiscal window.
    pub title: String,
    /// Footnote printed under each sheet.
    pub note: String,
    /// Daily records ordered by person, then date.
    pub records: Vec<DailyRecord>,
    /// Per-person totals in the same person order as `records`.
    pub summaries: Vec<PersonSummary>,
    /// Marker lines that were ignored.
    pub skipped_lines: Vec<SkippedLine>,
    /// Sum of every person's total.
    pub grand_total: i64,
}
