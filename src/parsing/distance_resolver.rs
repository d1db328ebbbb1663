//! Distance resolution for recognized entries.
//!
//! Entries that name a route but give no distance are credited a fixed
//! distance per leg of the route.

use rust_decimal::Decimal;

use crate::error::{SettlementError, SettlementResult};
use crate::models::{MonthDay, RouteEntry};

use super::RawEntry;

/// The glyph separating successive stops within a route.
pub const DEFAULT_WAYPOINT_SEPARATOR: &str = "→";

/// Distance credited per route leg when none is given (5.0 km).
pub fn default_km_per_leg() -> Decimal {
    Decimal::new(50, 1)
}

/// A recognized entry with its distance settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// The person the entry belongs to.
    pub person: String,
    /// The day of travel.
    pub date: MonthDay,
    /// The route and its distance.
    pub leg: RouteEntry,
}

/// Derives a distance from the number of legs in a route.
///
/// The route is split on `separator`; each gap between consecutive
/// waypoints is one leg worth `km_per_leg`. A route without the separator
/// has no legs and yields zero.
///
/// # Example
///
/// ```
/// use travel_settlement::parsing::derive_distance;
/// use rust_decimal::Decimal;
///
/// let distance = derive_distance("A→B→C", "→", Decimal::new(50, 1)).unwrap();
/// assert_eq!(distance, Decimal::new(100, 1));
/// ```
pub fn derive_distance(route: &str, separator: &str, km_per_leg: Decimal) -> SettlementResult<Decimal> {
    let legs = route.split(separator).count().saturating_sub(1);

    Decimal::from(legs as u64)
        .checked_mul(km_per_leg)
        .ok_or_else(|| SettlementError::CalculationError {
            message: format!("derived distance overflows for route '{}'", route),
        })
}

/// Settles the distance of a recognized entry.
///
/// An explicit distance is used unchanged; an absent one is derived from
/// the route with [`derive_distance`].
pub fn resolve_distance(
    entry: RawEntry,
    separator: &str,
    km_per_leg: Decimal,
) -> SettlementResult<ResolvedEntry> {
    let distance = match entry.distance {
        Some(distance) => distance,
        None => derive_distance(&entry.route, separator, km_per_leg)?,
    };

    Ok(ResolvedEntry {
        person: entry.person,
        date: entry.date,
        leg: RouteEntry::new(entry.route, distance),
    })
}
