//! Text parsing for the Travel Settlement Engine.
//!
//! Turns raw report text into resolved travel entries: line normalization,
//! dialect-based entry recognition, and distance resolution for entries
//! that omit an explicit distance.

mod distance_resolver;
mod entry_recognizer;
mod line_normalizer;

pub use distance_resolver::{
    DEFAULT_WAYPOINT_SEPARATOR, ResolvedEntry, default_km_per_leg, derive_distance,
    resolve_distance,
};
pub use entry_recognizer::{
    DEFAULT_ENTRY_MARKER, DEFAULT_HONORIFIC_SUFFIXES, Dialect, EntryRecognizer, LineOutcome,
    RawEntry, SkipReason,
};
pub use line_normalizer::normalize_lines;
