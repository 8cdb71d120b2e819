//! Source position tracking for error reporting.

/// Represents a position in ES3 source text.
///
/// Used for error reporting to indicate where a problem was found.
/// Line and column are 1-based.
///
/// # Examples
///
/// ```
/// use es3_core::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 3,
///     column: 7,
///     offset: 41,
/// };
///
/// assert_eq!(pos.line, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePosition {
    /// Line number, 1-based
    pub line: u32,
    /// Column number, 1-based
    pub column: u32,
    /// Character offset from the start of the source
    pub offset: usize,
}
