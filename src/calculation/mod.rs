//! Calculation logic for the Travel Settlement Engine.
//!
//! This module contains the settlement arithmetic: transportation fees,
//! grouping of entries into daily records with route deduplication, the
//! display ordering of records, and per-person totals.

mod daily_aggregation;
mod person_totals;
mod record_sort;
mod transportation_fee;

pub use daily_aggregation::aggregate_daily;
pub use person_totals::summarize_by_person;
pub use record_sort::sort_records;
pub use transportation_fee::{
    DEFAULT_DAILY_ALLOWANCE, DEFAULT_RATE_PER_KM, calculate_total_distance,
    calculate_transportation_fee,
};
