//! Error types for the Travel Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing and settling
//! travel reports.

use thiserror::Error;

/// Message shown to the user when the input contains no recognizable entries.
pub const NO_DATA_MESSAGE: &str = "データが見つかりませんでした。正しい形式で入力してください。";

/// The main error type for the Travel Settlement Engine.
///
/// `NoDataFound` is an expected outcome rather than a fault; every other
/// variant is a fault that aborts the whole invocation. Use
/// [`SettlementError::is_no_data`] to tell the two apart.
///
/// # Example
///
/// ```
/// use travel_settlement::error::SettlementError;
///
/// let error = SettlementError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum SettlementError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A recognizer pattern could not be compiled from the configuration.
    #[error("Invalid recognizer pattern: {message}")]
    InvalidPattern {
        /// A description of the compile error.
        message: String,
    },

    /// No line of the input produced a recognized entry.
    #[error("No data found")]
    NoDataFound,

    /// A distance token matched the entry shape but could not be converted.
    #[error("Invalid distance '{token}' on line {line_number}: {message}")]
    InvalidDistance {
        /// The 1-based line number in the submitted text.
        line_number: usize,
        /// The numeric token that failed to convert.
        token: String,
        /// A description of the conversion failure.
        message: String,
    },

    /// A date token matched the entry shape but is not a valid month/day.
    #[error("Invalid date '{text}' on line {line_number}")]
    InvalidDate {
        /// The 1-based line number in the submitted text.
        line_number: usize,
        /// The date text that failed to convert.
        text: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl SettlementError {
    /// Returns true when this is the empty-result outcome rather than a fault.
    pub fn is_no_data(&self) -> bool {
        matches!(self, SettlementError::NoDataFound)
    }

    /// Returns the message a presentation layer should show for this outcome.
    ///
    /// ```
    /// use travel_settlement::error::SettlementError;
    ///
    /// let error = SettlementError::CalculationError {
    ///     message: "fee overflow".to_string(),
    /// };
    /// assert_eq!(
    ///     error.user_message(),
    ///     "エラーが発生しました: Calculation error: fee overflow"
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            SettlementError::NoDataFound => NO_DATA_MESSAGE.to_string(),
            other => format!("エラーが発生しました: {}", other),
        }
    }
}

/// A type alias for Results that return SettlementError.
pub type SettlementResult<T> = Result<T, SettlementError>;
