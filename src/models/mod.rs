//! Core data models for the Travel Settlement Engine.
//!
//! This module contains all the domain models produced by the engine.

mod daily_record;
mod month_day;
mod route_entry;
mod settlement_report;

pub use daily_record::DailyRecord;
pub use month_day::{MonthDay, ParseMonthDayError};
pub use route_entry::RouteEntry;
pub use settlement_report::{PersonSummary, SettlementReport, SkippedLine};
