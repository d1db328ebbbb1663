//! Daily settlement record model.
//!
//! A [`DailyRecord`] is the billing line for one person on one day. All of
//! its figures are derived from its routes when the record is built and
//! cannot be changed afterwards.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{calculate_total_distance, calculate_transportation_fee};
use crate::config::RateConfig;
use crate::error::{SettlementError, SettlementResult};

use super::{MonthDay, RouteEntry};

/// The aggregated settlement for one person on one day.
///
/// # Invariants
///
/// - `routes` is never empty and holds no two entries with the same route text.
/// - `total_distance` is the sum of the route distances.
/// - `transportation_fee` is `floor(total_distance × per_km)`.
/// - `allowance` is paid once for the day, however many routes there are.
/// - `total` is `transportation_fee + allowance`.
///
/// # Example
///
/// ```
/// use travel_settlement::config::SettlementConfig;
/// use travel_settlement::models::{DailyRecord, RouteEntry};
/// use rust_decimal::Decimal;
///
/// let config = SettlementConfig::default();
/// let record = DailyRecord::new(
///     "山田",
///     "1/5".parse().unwrap(),
///     vec![RouteEntry::new("A→B→C", Decimal::new(125, 1))],
///     config.rates(),
/// )
/// .unwrap();
///
/// assert_eq!(record.transportation_fee(), 187);
/// assert_eq!(record.allowance(), 200);
/// assert_eq!(record.total(), 387);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    person: String,
    date: MonthDay,
    routes: Vec<RouteEntry>,
    total_distance: Decimal,
    transportation_fee: i64,
    allowance: i64,
    total: i64,
}

impl DailyRecord {
    /// Builds a record from a day's routes, computing every figure.
    ///
    /// Returns `CalculationError` when `routes` is empty or when the fee
    /// does not fit the monetary range.
    pub fn new(
        person: impl Into<String>,
        date: MonthDay,
        routes: Vec<RouteEntry>,
        rates: &RateConfig,
    ) -> SettlementResult<Self> {
        let person = person.into();
        if routes.is_empty() {
            return Err(SettlementError::CalculationError {
                message: format!("no routes for {} on {}", person, date),
            });
        }

        let total_distance = calculate_total_distance(&routes)?;
        let transportation_fee = calculate_transportation_fee(total_distance, rates.per_km)?;
        let allowance = rates.daily_allowance;
        let total = transportation_fee.checked_add(allowance).ok_or_else(|| {
            SettlementError::CalculationError {
                message: format!("total overflows for {} on {}", person, date),
            }
        })?;

        Ok(Self {
            person,
            date,
            routes,
            total_distance,
            transportation_fee,
            allowance,
            total,
        })
    }

    /// The person the record belongs to.
    pub fn person(&self) -> &str {
        &self.person
    }

    /// The day of travel.
    pub fn date(&self) -> MonthDay {
        self.date
    }

    /// The day's distinct routes, in the order they were reported.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Sum of the route distances in kilometers.
    pub fn total_distance(&self) -> Decimal {
        self.total_distance
    }

    /// Distance-based fee, truncated to a whole unit.
    pub fn transportation_fee(&self) -> i64 {
        self.transportation_fee
    }

    /// Flat daily allowance.
    pub fn allowance(&self) -> i64 {
        self.allowance
    }

    /// Fee plus allowance.
    pub fn total(&self) -> i64 {
        self.total
    }
}
