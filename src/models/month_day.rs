//! Month/day model for travel entries.
//!
//! Travel reports only ever name a month and a day (`1/5`), never a year.
//! [`MonthDay`] keeps that shape and orders by `(month, day)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when `M/D` text is not a valid month/day pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month/day '{text}'")]
pub struct ParseMonthDayError {
    /// The text that failed to parse.
    pub text: String,
}

/// A year-less calendar position parsed from `M/D` text.
///
/// Ordering compares the month first and the day second, so `2/9` sorts
/// before `12/1`. There is no year component: a December entry sorts after
/// a January one even when the December belongs to the previous year.
///
/// Days are checked against 1–31 only; `2/31` is accepted.
///
/// # Example
///
/// ```
/// use travel_settlement::models::MonthDay;
///
/// let early: MonthDay = "2/9".parse().unwrap();
/// let late: MonthDay = "12/1".parse().unwrap();
/// assert!(early < late);
/// assert_eq!(early.to_string(), "2/9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Creates a month/day pair, returning `None` when either part is out of range.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some(Self { month, day })
        } else {
            None
        }
    }

    /// The month, 1–12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day of the month, 1–31.
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl FromStr for MonthDay {
    type Err = ParseMonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthDayError {
            text: s.to_string(),
        };

        let (month, day) = s.trim().split_once('/').ok_or_else(err)?;
        let month = month.parse::<u32>().map_err(|_| err())?;
        let day = day.parse::<u32>().map_err(|_| err())?;

        Self::new(month, day).ok_or_else(err)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(s: &str) -> MonthDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_single_digit_parts() {
        let date = md("1/5");
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 5);
    }

    #[test]
    fn test_parse_leading_zero() {
        assert_eq!(md("01/05"), md("1/5"));
    }

    #[test]
    fn test_numeric_ordering_not_lexicographic() {
        assert!(md("2/9") < md("12/1"));
        assert!(md("1/9") < md("1/10"));
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        assert!("13/1".parse::<MonthDay>().is_err());
        assert!("0/1".parse::<MonthDay>().is_err());
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        assert!("1/0".parse::<MonthDay>().is_err());
        assert!("1/32".parse::<MonthDay>().is_err());
    }

    #[test]
    fn test_day_not_checked_against_month_length() {
        assert!("2/31".parse::<MonthDay>().is_ok());
    }

    #[test]
    fn test_overflowing_digits_rejected() {
        let err = "99999999999/1".parse::<MonthDay>().unwrap_err();
        assert_eq!(err.text, "99999999999/1");
    }

    #[test]
    fn test_missing_slash_rejected() {
        assert!("15".parse::<MonthDay>().is_err());
    }

    #[test]
    fn test_serializes_as_text() {
        let json = serde_json::to_string(&md("12/25")).unwrap();
        assert_eq!(json, "\"12/25\"");

        let back: MonthDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, md("12/25"));
    }

    #[test]
    fn test_december_sorts_after_january() {
        // No year component: the fiscal window's December leg sorts last.
        assert!(md("12/25") > md("1/31"));
    }
}
