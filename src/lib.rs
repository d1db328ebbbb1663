//! Travel Settlement Engine
//!
//! This crate turns free-form Japanese travel reports into per-person,
//! per-day settlement records: route and distance per day, a distance-based
//! transportation fee, a flat daily allowance and the day's total.
//!
//! ```
//! use travel_settlement::config::SettlementConfig;
//! use travel_settlement::parse_expense_data;
//!
//! let text = "【ピノ】山田 1/5(月)A→B→C 12.5km";
//! let records = parse_expense_data(text, &SettlementConfig::default()).unwrap();
//!
//! assert_eq!(records[0].transportation_fee(), 187);
//! assert_eq!(records[0].total(), 387);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod parsing;

pub use engine::{SettlementEngine, build_report, parse_expense_data};
