//! Error types for raven-lex.
//!
//! Lexing itself never fails; these errors only come from editing a
//! [`Document`](crate::Document) with positions it does not have.

use thiserror::Error;

/// Error type for document edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    /// The line does not exist.
    #[error("Line out of range: index {index}, document has {line_count} lines")]
    LineOutOfRange { index: usize, line_count: usize },

    /// The range of lines to replace does not lie within the document.
    #[error("Splice out of range: {remove} lines at {index}, document has {line_count} lines")]
    SpliceOutOfRange {
        index: usize,
        remove: usize,
        line_count: usize,
    },
}

/// Result type alias for document edits.
pub type HighlightResult<T> = std::result::Result<T, HighlightError>;
