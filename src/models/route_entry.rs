//! Route entry model.

use rust_decimal::Decimal;
use serde::Serialize;

/// One leg reported on one line for one person and day.
///
/// # Example
///
/// ```
/// use travel_settlement::models::RouteEntry;
/// use rust_decimal::Decimal;
///
/// let leg = RouteEntry::new("本社→現場", Decimal::new(125, 1));
/// assert_eq!(leg.route(), "本社→現場");
/// assert_eq!(leg.distance(), Decimal::new(125, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    route: String,
    distance: Decimal,
}

impl RouteEntry {
    /// Creates a route entry.
    pub fn new(route: impl Into<String>, distance: Decimal) -> Self {
        Self {
            route: route.into(),
            distance,
        }
    }

    /// The route text as written on the entry line.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The distance in kilometers, explicit or derived from the route.
    pub fn distance(&self) -> Decimal {
        self.distance
    }
}
