//! Travel-entry recognition.
//!
//! Entry lines start with a bracketed marker such as `【ピノ】` followed by
//! the person, the date with its weekday and the route, optionally closed
//! by a distance in kilometers:
//!
//! ```text
//! 【ピノ】山田 1/5(月)本社→現場→本社 12.5km
//! 【ピノ】佐藤様 1/6（火）本社→倉庫
//! ```
//!
//! Several historical shapes of the same entry are accepted. Each shape is a
//! [`Dialect`]; the recognizer tries them in priority order and the first
//! one that matches decides the line.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::SettlementMetadata;
use crate::error::{SettlementError, SettlementResult};
use crate::models::MonthDay;

/// The marker that opens a travel-entry line.
pub const DEFAULT_ENTRY_MARKER: &str = "【ピノ】";

/// Honorifics stripped from the end of a person's name.
pub const DEFAULT_HONORIFIC_SUFFIXES: [&str; 2] = ["様", "さん"];

/// `M/D` followed by a one-character weekday in ASCII or full-width parentheses.
const DATE_PATTERN: &str = r"(?P<date>[0-9]+/[0-9]+)\s*[(（][^()（）\s][)）]";

/// A number followed by any of the kilometer spellings seen in reports:
/// `km`, `㎞`, `ｋｍ` and `kｍ`.
const DISTANCE_SUFFIX_PATTERN: &str = r"(?P<distance>[0-9]+\.?[0-9]*)\s*(?:(?i:km)|㎞|ｋｍ|kｍ)";

/// The input shapes an entry line may take, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `marker person M/D(w) route <number><unit>`.
    MarkerWithDistance,
    /// `marker person M/D(w) route` with the distance left out.
    MarkerWithoutDistance,
}

/// The fields extracted from one entry line, before distance resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// The shape the line was recognized as.
    pub dialect: Dialect,
    /// The 1-based line number in the submitted text.
    pub line_number: usize,
    /// The person, with any honorific removed.
    pub person: String,
    /// The day of travel.
    pub date: MonthDay,
    /// The route text, trimmed.
    pub route: String,
    /// The explicit distance in kilometers, if the line gave one.
    pub distance: Option<Decimal>,
}

/// Why a marker line matched no dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No person followed by an `M/D(w)` date group after the marker.
    MissingDate,
    /// The person token is nothing but an honorific.
    MissingPerson,
    /// Nothing but whitespace or a bare distance follows the date group.
    MissingRoute,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingDate => "missing_date",
            SkipReason::MissingPerson => "missing_person",
            SkipReason::MissingRoute => "missing_route",
        };
        f.write_str(text)
    }
}

/// What the recognizer made of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line does not start with the entry marker.
    NotAnEntry,
    /// The line starts with the marker but matches no dialect.
    Skipped(SkipReason),
    /// The line was recognized.
    Recognized(RawEntry),
}

/// Borrowed captures from a line that matched a dialect's shape.
struct EntryFields<'a> {
    person: &'a str,
    date: &'a str,
    route: &'a str,
    distance: Option<&'a str>,
}

struct DialectMatcher {
    dialect: Dialect,
    pattern: Regex,
}

impl DialectMatcher {
    fn capture<'a>(&self, line: &'a str, distance_suffix: &Regex) -> Option<EntryFields<'a>> {
        let caps = self.pattern.captures(line)?;

        let route = caps.name("route")?.as_str().trim();
        if route.is_empty() {
            return None;
        }
        // A trailing distance means the line belongs to the distance dialect
        // and was rejected there; it must not be read as a bare route.
        if self.dialect == Dialect::MarkerWithoutDistance && distance_suffix.is_match(route) {
            return None;
        }

        Some(EntryFields {
            person: caps.name("person")?.as_str(),
            date: caps.name("date")?.as_str(),
            route,
            distance: caps.name("distance").map(|m| m.as_str()),
        })
    }
}

/// Recognizes travel-entry lines.
///
/// Compiled once from the configured marker and honorifics, then used for
/// any number of lines. Holds no per-line state.
///
/// # Example
///
/// ```
/// use travel_settlement::config::SettlementConfig;
/// use travel_settlement::parsing::{EntryRecognizer, LineOutcome};
///
/// let config = SettlementConfig::default();
/// let recognizer = EntryRecognizer::from_config(config.metadata()).unwrap();
///
/// match recognizer.recognize("【ピノ】山田 1/5(月)A→B→C 12.5km", 1).unwrap() {
///     LineOutcome::Recognized(entry) => {
///         assert_eq!(entry.person, "山田");
///         assert_eq!(entry.route, "A→B→C");
///     }
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// ```
pub struct EntryRecognizer {
    marker: String,
    honorifics: Vec<String>,
    head: Regex,
    matchers: Vec<DialectMatcher>,
    distance_suffix: Regex,
}

impl EntryRecognizer {
    /// Compiles a recognizer for the configured marker and honorifics.
    pub fn from_config(metadata: &SettlementMetadata) -> SettlementResult<Self> {
        Self::new(&metadata.entry_marker, &metadata.honorific_suffixes)
    }

    /// Compiles a recognizer for the given marker and honorific suffixes.
    pub fn new(marker: &str, honorifics: &[String]) -> SettlementResult<Self> {
        let prefix = format!(
            r"^{}\s*(?P<person>\S+)\s+{}\s*",
            regex::escape(marker),
            DATE_PATTERN
        );

        let matchers = vec![
            DialectMatcher {
                dialect: Dialect::MarkerWithDistance,
                pattern: compile(&format!("{}(?P<route>.*?){}", prefix, DISTANCE_SUFFIX_PATTERN))?,
            },
            DialectMatcher {
                dialect: Dialect::MarkerWithoutDistance,
                pattern: compile(&format!("{}(?P<route>.+)$", prefix))?,
            },
        ];

        // Longest suffix first so "さん" is not shadowed by a shorter one.
        let mut honorifics = honorifics.to_vec();
        honorifics.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));

        Ok(Self {
            marker: marker.to_string(),
            honorifics,
            head: compile(&prefix)?,
            matchers,
            distance_suffix: compile(DISTANCE_SUFFIX_PATTERN)?,
        })
    }

    /// Classifies one normalized line.
    ///
    /// A line that matches a dialect's shape but carries an unusable date or
    /// distance is a fault for the whole document, not a skipped line.
    pub fn recognize(&self, line: &str, line_number: usize) -> SettlementResult<LineOutcome> {
        if !line.starts_with(&self.marker) {
            return Ok(LineOutcome::NotAnEntry);
        }

        for matcher in &self.matchers {
            let Some(fields) = matcher.capture(line, &self.distance_suffix) else {
                continue;
            };

            let person = self.strip_honorific(fields.person);
            if person.is_empty() {
                continue;
            }

            let date = fields
                .date
                .parse::<MonthDay>()
                .map_err(|_| SettlementError::InvalidDate {
                    line_number,
                    text: fields.date.to_string(),
                })?;

            let distance = fields
                .distance
                .map(|token| parse_distance(token, line_number))
                .transpose()?;

            return Ok(LineOutcome::Recognized(RawEntry {
                dialect: matcher.dialect,
                line_number,
                person: person.to_string(),
                date,
                route: fields.route.to_string(),
                distance,
            }));
        }

        Ok(LineOutcome::Skipped(self.skip_reason(line)))
    }

    /// Names the first part of an entry missing from a marker line.
    fn skip_reason(&self, line: &str) -> SkipReason {
        let person = self
            .head
            .captures(line)
            .and_then(|caps| caps.name("person"))
            .map(|m| m.as_str());

        match person {
            None => SkipReason::MissingDate,
            Some(person) if self.strip_honorific(person).is_empty() => SkipReason::MissingPerson,
            Some(_) => SkipReason::MissingRoute,
        }
    }

    fn strip_honorific<'a>(&self, person: &'a str) -> &'a str {
        self.honorifics
            .iter()
            .find_map(|suffix| person.strip_suffix(suffix.as_str()))
            .unwrap_or(person)
    }
}

fn compile(pattern: &str) -> SettlementResult<Regex> {
    Regex::new(pattern).map_err(|e| SettlementError::InvalidPattern {
        message: e.to_string(),
    })
}

fn parse_distance(token: &str, line_number: usize) -> SettlementResult<Decimal> {
    // "12." is written often enough; read it as "12".
    Decimal::from_str(token.trim_end_matches('.')).map_err(|e| SettlementError::InvalidDistance {
        line_number,
        token: token.to_string(),
        message: e.to_string(),
    })
}
