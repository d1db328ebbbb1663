//! Daily aggregation of resolved travel entries.
//!
//! Entries are grouped by `(person, date)` in the order each group is first
//! seen. Within a group a route already reported that day is dropped, so a
//! leg submitted twice is paid once.

use std::collections::HashMap;

use tracing::debug;

use crate::config::RateConfig;
use crate::error::{SettlementError, SettlementResult};
use crate::models::{DailyRecord, MonthDay, RouteEntry};
use crate::parsing::ResolvedEntry;

struct DayGroup {
    person: String,
    date: MonthDay,
    routes: Vec<RouteEntry>,
}

/// Groups entries into one [`DailyRecord`] per person and day.
///
/// Route deduplication compares the route text exactly; `A→B` and `A → B`
/// are different routes. Records come out in group first-seen order.
///
/// Returns `NoDataFound` when `entries` is empty.
///
/// # Example
///
/// ```
/// use travel_settlement::calculation::aggregate_daily;
/// use travel_settlement::config::SettlementConfig;
/// use travel_settlement::models::{MonthDay, RouteEntry};
/// use travel_settlement::parsing::ResolvedEntry;
/// use rust_decimal::Decimal;
///
/// let entry = |route: &str| ResolvedEntry {
///     person: "山田".to_string(),
///     date: MonthDay::new(1, 5).unwrap(),
///     leg: RouteEntry::new(route, Decimal::from(10)),
/// };
///
/// let config = SettlementConfig::default();
/// let records = aggregate_daily(vec![entry("A→B"), entry("A→B")], config.rates()).unwrap();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].total_distance(), Decimal::from(10));
/// ```
pub fn aggregate_daily(
    entries: Vec<ResolvedEntry>,
    rates: &RateConfig,
) -> SettlementResult<Vec<DailyRecord>> {
    if entries.is_empty() {
        return Err(SettlementError::NoDataFound);
    }

    let mut index: HashMap<(String, MonthDay), usize> = HashMap::new();
    let mut groups: Vec<DayGroup> = Vec::new();

    for entry in entries {
        let slot = *index
            .entry((entry.person.clone(), entry.date))
            .or_insert_with(|| {
                groups.push(DayGroup {
                    person: entry.person.clone(),
                    date: entry.date,
                    routes: Vec::new(),
                });
                groups.len() - 1
            });

        let group = &mut groups[slot];
        if group.routes.iter().any(|r| r.route() == entry.leg.route()) {
            debug!(
                person = %group.person,
                date = %group.date,
                route = %entry.leg.route(),
                "Dropping duplicate route"
            );
            continue;
        }
        group.routes.push(entry.leg);
    }

    groups
        .into_iter()
        .map(|group| DailyRecord::new(group.person, group.date, group.routes, rates))
        .collect()
}
