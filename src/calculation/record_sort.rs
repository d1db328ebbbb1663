//! Display ordering for daily records.

use crate::models::DailyRecord;

/// Orders records by person, then by date.
///
/// Dates compare numerically as `(month, day)`, so `2/9` comes before
/// `12/1`. The sort is stable: records that tie keep their input order.
///
/// # Example
///
/// ```
/// use travel_settlement::calculation::{aggregate_daily, sort_records};
/// use travel_settlement::config::SettlementConfig;
/// use travel_settlement::models::RouteEntry;
/// use travel_settlement::parsing::ResolvedEntry;
/// use rust_decimal::Decimal;
///
/// let entry = |date: &str| ResolvedEntry {
///     person: "山田".to_string(),
///     date: date.parse().unwrap(),
///     leg: RouteEntry::new("A→B", Decimal::ONE),
/// };
///
/// let config = SettlementConfig::default();
/// let mut records = aggregate_daily(vec![entry("12/1"), entry("2/9")], config.rates()).unwrap();
/// sort_records(&mut records);
///
/// assert_eq!(records[0].date().to_string(), "2/9");
/// ```
pub fn sort_records(records: &mut [DailyRecord]) {
    records.sort_by(|a, b| {
        a.person()
            .cmp(b.person())
            .then_with(|| a.date().cmp(&b.date()))
    });
}
