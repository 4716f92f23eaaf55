//! Language metadata declared to the host editor.
//!
//! None of this is consulted by the lexer itself.

/// Editor-facing facts about a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageData {
    /// The marker that starts a line comment.
    pub line_comment: &'static str,
    /// Characters the editor may auto-close.
    pub auto_close: &'static [char],
}

/// Metadata for Raven.
pub const RAVEN: LanguageData = LanguageData {
    line_comment: "#",
    auto_close: &['(', '[', '{', '"', '`'],
};
