//! Transportation fee calculation.
//!
//! The fee for a day is the day's total distance multiplied by the per-km
//! rate, truncated to a whole unit. Truncation is deliberate: `3.3 km` at
//! 15 per km pays 49, not 50.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SettlementError, SettlementResult};
use crate::models::RouteEntry;

/// Transportation fee paid per kilometer.
pub const DEFAULT_RATE_PER_KM: i64 = 15;

/// Flat allowance paid once per person per day.
pub const DEFAULT_DAILY_ALLOWANCE: i64 = 200;

/// Sums the distances of a day's routes.
pub fn calculate_total_distance(routes: &[RouteEntry]) -> SettlementResult<Decimal> {
    routes.iter().try_fold(Decimal::ZERO, |total, leg| {
        total
            .checked_add(leg.distance())
            .ok_or_else(|| SettlementError::CalculationError {
                message: format!("total distance overflows at route '{}'", leg.route()),
            })
    })
}

/// Calculates `floor(total_distance × per_km)`.
///
/// # Example
///
/// ```
/// use travel_settlement::calculation::calculate_transportation_fee;
/// use rust_decimal::Decimal;
///
/// let fee = calculate_transportation_fee(Decimal::new(33, 1), Decimal::from(15)).unwrap();
/// assert_eq!(fee, 49);
/// ```
pub fn calculate_transportation_fee(total_distance: Decimal, per_km: Decimal) -> SettlementResult<i64> {
    total_distance
        .checked_mul(per_km)
        .and_then(|amount| amount.floor().to_i64())
        .ok_or_else(|| SettlementError::CalculationError {
            message: format!(
                "transportation fee for {} km at {} per km is out of range",
                total_distance.normalize(),
                per_km.normalize()
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rate() -> Decimal {
        Decimal::from(DEFAULT_RATE_PER_KM)
    }

    /// TF-001: whole kilometers
    #[test]
    fn test_tf_001_whole_kilometers() {
        assert_eq!(calculate_transportation_fee(dec("10"), rate()).unwrap(), 150);
    }

    /// TF-002: fractional fee truncated
    #[test]
    fn test_tf_002_fraction_truncated_not_rounded() {
        // 3.3 × 15 = 49.5
        assert_eq!(calculate_transportation_fee(dec("3.3"), rate()).unwrap(), 49);
        // 12.5 × 15 = 187.5
        assert_eq!(calculate_transportation_fee(dec("12.5"), rate()).unwrap(), 187);
    }

    /// TF-003: just below a whole unit
    #[test]
    fn test_tf_003_just_below_whole_unit() {
        // 1.39 × 15 = 20.85
        assert_eq!(calculate_transportation_fee(dec("1.39"), rate()).unwrap(), 20);
        // 1.4 × 15 = 21.0 exactly; no binary float drift
        assert_eq!(calculate_transportation_fee(dec("1.4"), rate()).unwrap(), 21);
    }

    #[test]
    fn test_zero_distance_zero_fee() {
        assert_eq!(calculate_transportation_fee(Decimal::ZERO, rate()).unwrap(), 0);
    }

    #[test]
    fn test_fee_out_of_range_is_error() {
        let result = calculate_transportation_fee(Decimal::MAX, rate());
        assert!(matches!(
            result,
            Err(SettlementError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_total_distance_sums_exactly() {
        let routes = vec![
            RouteEntry::new("A→B", dec("1.1")),
            RouteEntry::new("B→C", dec("2.2")),
        ];
        assert_eq!(calculate_total_distance(&routes).unwrap(), dec("3.3"));
    }

    #[test]
    fn test_total_distance_overflow_is_error() {
        let routes = vec![
            RouteEntry::new("A→B", Decimal::MAX),
            RouteEntry::new("B→C", Decimal::MAX),
        ];
        assert!(calculate_total_distance(&routes).is_err());
    }
}
