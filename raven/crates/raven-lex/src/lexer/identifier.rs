//! Identifier lexing and keyword promotion.
//!
//! Raven has no reserved words. An identifier at statement position that is
//! followed by something that looks like an argument leads a keyword
//! statement (`return -1`, `while x < 3 { ... }`); the same spelling followed
//! by `(`, `.`, `=` or nothing is an ordinary reference.

use crate::chars::{
    is_close_bracket, is_horizontal_space, is_ident_continue, is_ident_start, is_open_bracket,
    starts_string, ANNOTATION_MARKER, COMMENT_MARKER, REFERENCE_MARKER,
};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier and classifies it.
    ///
    /// The cursor must be at an identifier start character.
    ///
    /// # Returns
    ///
    /// `Keyword` when promoted, otherwise `PropertyName` after a member
    /// dot, `VariableSpecial` after a reference `&`, or `Variable`.
    pub fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);

        let kind = if self.should_promote() {
            self.state.expr_start = true;
            self.state.macro_eligible = false;
            self.state.macro_locked = true;
            TokenKind::Keyword
        } else {
            let kind = if self.state.after_dot {
                TokenKind::PropertyName
            } else if self.state.in_swap {
                TokenKind::VariableSpecial
            } else {
                TokenKind::Variable
            };
            self.state.expr_start = false;
            self.state.macro_eligible = false;
            kind
        };

        self.state.after_dot = false;
        self.state.in_swap = false;
        kind
    }

    /// Decides whether the identifier just consumed leads a statement.
    fn should_promote(&self) -> bool {
        let state = &*self.state;
        let eligible = state.expr_start
            && state.macro_eligible
            && !state.after_dot
            && !state.in_swap
            && !state.macro_locked;

        eligible && begins_argument(self.cursor.remaining())
    }
}

/// Returns true if `rest`, the text following an identifier, makes that
/// identifier a statement keyword.
///
/// Directly adjacent `(`, `[` or `.` make it a call or property access, and
/// an adjacent string opener makes it a string prefix (`tag"..."`). Past
/// whitespace, the first character must be able to begin an argument; end of
/// line, a comment, a comma or a closing bracket means nothing follows.
pub(crate) fn begins_argument(rest: &str) -> bool {
    if matches!(rest.chars().next(), Some('(' | '[' | '.')) || starts_string(rest) {
        return false;
    }

    let ahead = rest.trim_start_matches(is_horizontal_space);
    let mut chars = ahead.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    let second = chars.next().unwrap_or('\0');

    if first == ',' || first == COMMENT_MARKER || is_close_bracket(first) {
        return false;
    }

    is_ident_start(first)
        || first.is_ascii_digit()
        || (first == '.' && second.is_ascii_digit())
        || (first == '-' && second.is_ascii_digit())
        || is_open_bracket(first)
        || first == ANNOTATION_MARKER
        || (first == REFERENCE_MARKER && is_ident_start(second))
        || starts_string(ahead)
}
