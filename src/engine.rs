//! The text-to-settlement pipeline.
//!
//! raw text → normalized lines → recognized entries → resolved distances →
//! daily records → sorted records → (optionally) a full report.
//!
//! A run either produces every record the text supports or fails as a
//! whole; partial record sets are never returned.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{aggregate_daily, sort_records, summarize_by_person};
use crate::config::SettlementConfig;
use crate::error::{SettlementError, SettlementResult};
use crate::models::{DailyRecord, SettlementReport, SkippedLine};
use crate::parsing::{EntryRecognizer, LineOutcome, normalize_lines, resolve_distance};

struct ParsedDocument {
    records: Vec<DailyRecord>,
    skipped_lines: Vec<SkippedLine>,
}

/// A settlement configuration with its entry recognizer compiled.
///
/// Immutable once built; share it behind an `Arc` to serve many documents.
///
/// # Example
///
/// ```
/// use travel_settlement::config::SettlementConfig;
/// use travel_settlement::SettlementEngine;
///
/// let engine = SettlementEngine::new(SettlementConfig::default()).unwrap();
/// let records = engine.parse("【ピノ】山田 1/5(月)A→B→C 12.5km").unwrap();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].total(), 387);
/// ```
pub struct SettlementEngine {
    config: SettlementConfig,
    recognizer: EntryRecognizer,
}

impl SettlementEngine {
    /// Compiles the recognizer for `config`.
    pub fn new(config: SettlementConfig) -> SettlementResult<Self> {
        let recognizer = EntryRecognizer::from_config(config.metadata())?;
        Ok(Self { config, recognizer })
    }

    /// Returns the configuration the engine was built with.
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// Parses a report into sorted daily records.
    ///
    /// `Ok` always holds at least one record; text without recognizable
    /// entries yields `NoDataFound`.
    pub fn parse(&self, text: &str) -> SettlementResult<Vec<DailyRecord>> {
        self.run(text).map(|document| document.records)
    }

    /// Parses a report and wraps the records with per-person totals,
    /// skipped-line diagnostics and the configured report labels.
    pub fn report(&self, text: &str) -> SettlementResult<SettlementReport> {
        let document = self.run(text)?;
        let summaries = summarize_by_person(&document.records)?;
        let grand_total = summaries
            .iter()
            .try_fold(0i64, |total, summary| total.checked_add(summary.total))
            .ok_or_else(|| SettlementError::CalculationError {
                message: "grand total overflows".to_string(),
            })?;

        let metadata = self.config.metadata();
        Ok(SettlementReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            settlement_name: metadata.name.clone(),
            title: metadata.report.title.clone(),
            note: metadata.report.note.clone(),
            records: document.records,
            summaries,
            skipped_lines: document.skipped_lines,
            grand_total,
        })
    }

    fn run(&self, text: &str) -> SettlementResult<ParsedDocument> {
        let metadata = self.config.metadata();
        let rates = self.config.rates();
        let lines = normalize_lines(text);

        let mut entries = Vec::new();
        let mut skipped_lines = Vec::new();

        for &(line_number, line) in &lines {
            match self.recognizer.recognize(line, line_number)? {
                LineOutcome::NotAnEntry => {}
                LineOutcome::Skipped(reason) => {
                    debug!(
                        line_number,
                        line = %line,
                        reason = %reason,
                        "Skipping unrecognized entry line"
                    );
                    skipped_lines.push(SkippedLine {
                        line_number,
                        line: line.to_string(),
                        reason,
                    });
                }
                LineOutcome::Recognized(raw) => {
                    entries.push(resolve_distance(
                        raw,
                        &metadata.waypoint_separator,
                        rates.fallback_km_per_leg,
                    )?);
                }
            }
        }

        let entry_count = entries.len();
        let mut records = aggregate_daily(entries, rates)?;
        sort_records(&mut records);

        info!(
            lines = lines.len(),
            entries = entry_count,
            records = records.len(),
            skipped = skipped_lines.len(),
            "Parsed travel report"
        );

        Ok(ParsedDocument {
            records,
            skipped_lines,
        })
    }
}

/// Parses a travel report into sorted daily records.
///
/// Convenience wrapper that compiles a [`SettlementEngine`] for one call.
///
/// # Example
///
/// ```
/// use travel_settlement::config::SettlementConfig;
/// use travel_settlement::parse_expense_data;
///
/// let result = parse_expense_data("おはようございます", &SettlementConfig::default());
/// assert!(result.unwrap_err().is_no_data());
/// ```
pub fn parse_expense_data(
    text: &str,
    config: &SettlementConfig,
) -> SettlementResult<Vec<DailyRecord>> {
    SettlementEngine::new(config.clone())?.parse(text)
}

/// Parses a travel report into a full [`SettlementReport`].
pub fn build_report(text: &str, config: &SettlementConfig) -> SettlementResult<SettlementReport> {
    SettlementEngine::new(config.clone())?.report(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthDay;
    use crate::parsing::SkipReason;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn engine() -> SettlementEngine {
        SettlementEngine::new(SettlementConfig::default()).unwrap()
    }

    const MIXED_REPORT: &str = "\
お疲れ様です。1月分の交通費です。
【ピノ】山田 1/6(火)本社→現場 8km
【ピノ】佐藤様 12/25(水)本社→倉庫→本社
【ピノ】山田 1/5(月)A→B→C 12.5km
【ピノ】山田 1/6(火)本社→現場 8km
【ピノ】山田 1/6(火)現場→本社 8km
【ピノ】日付なし 本社→現場 3km
以上です。
";

    #[test]
    fn test_end_to_end_single_line() {
        let records = engine().parse("【ピノ】山田 1/5(月)A→B→C 12.5km").unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.person(), "山田");
        assert_eq!(record.date(), MonthDay::new(1, 5).unwrap());
        assert_eq!(record.routes().len(), 1);
        assert_eq!(record.routes()[0].route(), "A→B→C");
        assert_eq!(record.routes()[0].distance(), dec("12.5"));
        assert_eq!(record.total_distance(), dec("12.5"));
        assert_eq!(record.transportation_fee(), 187);
        assert_eq!(record.allowance(), 200);
        assert_eq!(record.total(), 387);
    }

    #[test]
    fn test_mixed_report() {
        let records = engine().parse(MIXED_REPORT).unwrap();

        let keys: Vec<(String, String)> = records
            .iter()
            .map(|r| (r.person().to_string(), r.date().to_string()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("佐藤".to_string(), "12/25".to_string()),
                ("山田".to_string(), "1/5".to_string()),
                ("山田".to_string(), "1/6".to_string()),
            ]
        );

        // Derived: two legs × 5.0
        assert_eq!(records[0].total_distance(), dec("10.0"));
        assert_eq!(records[0].total(), 150 + 200);

        // Duplicate 本社→現場 dropped; return leg kept
        let routes: Vec<&str> = records[2].routes().iter().map(|r| r.route()).collect();
        assert_eq!(routes, vec!["本社→現場", "現場→本社"]);
        assert_eq!(records[2].total_distance(), dec("16"));
        assert_eq!(records[2].total(), 240 + 200);
    }

    #[test]
    fn test_only_non_marker_lines_is_no_data() {
        let result = engine().parse("お疲れ様です\n山田 1/5(月)A→B 3km\n");
        assert!(result.unwrap_err().is_no_data());
    }

    #[test]
    fn test_empty_text_is_no_data() {
        assert!(engine().parse("").unwrap_err().is_no_data());
    }

    #[test]
    fn test_only_malformed_marker_lines_is_no_data() {
        let result = engine().parse("【ピノ】山田 A→B 3km\n【ピノ】\n");
        assert!(result.unwrap_err().is_no_data());
    }

    #[test]
    fn test_fault_discards_all_records() {
        let text = "【ピノ】山田 1/5(月)A→B 3km\n【ピノ】山田 13/5(月)A→B 3km\n";
        match engine().parse(text) {
            Err(SettlementError::InvalidDate { line_number, .. }) => assert_eq!(line_number, 2),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_rerun_is_identical() {
        let engine = engine();
        let first = engine.parse(MIXED_REPORT).unwrap();
        let second = engine.parse(MIXED_REPORT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_totals_and_diagnostics() {
        let report = engine().report(MIXED_REPORT).unwrap();

        assert_eq!(report.settlement_name, "PINO精算");
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.summaries.len(), 2);
        assert_eq!(report.summaries[0].person, "佐藤");
        assert_eq!(report.summaries[0].total, 350);
        assert_eq!(report.summaries[1].person, "山田");
        assert_eq!(report.summaries[1].total, 387 + 440);
        assert_eq!(report.grand_total, 350 + 387 + 440);

        assert_eq!(report.skipped_lines.len(), 1);
        assert_eq!(report.skipped_lines[0].line_number, 7);
        assert!(report.skipped_lines[0].line.contains("日付なし"));
        assert_eq!(report.skipped_lines[0].reason, SkipReason::MissingDate);
    }

    #[test]
    fn test_fault_line_number_counts_blank_lines() {
        let text = "お疲れ様です。\n\n\n【ピノ】山田 13/5(月)A→B 3km\n";
        let err = engine().parse(text).unwrap_err();

        match &err {
            SettlementError::InvalidDate { line_number, text } => {
                assert_eq!(*line_number, 4);
                assert_eq!(text, "13/5");
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
        assert!(err.user_message().ends_with("on line 4"));
    }

    #[test]
    fn test_skipped_line_number_counts_blank_lines() {
        let text = "【ピノ】山田 1/5(月)A→B 3km\n\n\n【ピノ】鈴木 1/6(月)\n";
        let report = engine().report(text).unwrap();

        assert_eq!(report.skipped_lines.len(), 1);
        assert_eq!(report.skipped_lines[0].line_number, 4);
        assert_eq!(report.skipped_lines[0].line, "【ピノ】鈴木 1/6(月)");
        assert_eq!(report.skipped_lines[0].reason, SkipReason::MissingRoute);
    }

    #[test]
    fn test_config_rates_applied() {
        let mut config = SettlementConfig::default();
        let mut rates = config.rates().clone();
        rates.per_km = Decimal::from(20);
        rates.daily_allowance = 500;
        config = SettlementConfig::new(config.metadata().clone(), rates);

        let records = parse_expense_data("【ピノ】山田 1/5(月)A→B 2.5km", &config).unwrap();
        assert_eq!(records[0].transportation_fee(), 50);
        assert_eq!(records[0].allowance(), 500);
        assert_eq!(records[0].total(), 550);
    }
}
