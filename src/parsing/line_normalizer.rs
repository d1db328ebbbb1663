//! Line normalization for raw report text.

/// Splits raw text into trimmed, non-empty lines, preserving order.
///
/// Each line is paired with its 1-based position in the original text, so
/// diagnostics still point at the right line after blank lines are dropped.
/// Both `\n` and `\r\n` line endings are accepted. Trimming removes any
/// Unicode whitespace, including the ideographic space (U+3000) common in
/// Japanese text.
///
/// # Example
///
/// ```
/// use travel_settlement::parsing::normalize_lines;
///
/// let lines = normalize_lines("  first \r\n\n\u{3000}second\u{3000}\n");
/// assert_eq!(lines, vec![(1, "first"), (3, "second")]);
/// ```
pub fn normalize_lines(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}
