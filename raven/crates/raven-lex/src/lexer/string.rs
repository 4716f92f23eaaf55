//! String literal lexing.
//!
//! This module handles opening string literals and scanning their contents,
//! including literals that run on over several lines.

use crate::chars::ESCAPE_MARKER;
use crate::state::{Quote, StringContext};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Tries to open a string literal at the cursor.
    ///
    /// Matches any run of escape markers immediately followed by a quote.
    /// On success the literal's context is installed in the state and the
    /// opener is consumed; no token is produced yet. On failure nothing is
    /// consumed and the state is untouched.
    pub fn try_open_string(&mut self) -> bool {
        let rest = self.cursor.remaining();
        let escape_run = rest.chars().take_while(|&c| c == ESCAPE_MARKER).count();

        // Escape markers are ASCII, so the run length is also a byte offset
        let quote = match rest[escape_run..].chars().next().and_then(Quote::from_char) {
            Some(quote) => quote,
            None => return false,
        };

        self.cursor.advance_n(escape_run + 1);
        self.state.string = Some(StringContext::new(quote, escape_run));
        self.state.end_expression();
        true
    }

    /// Scans string content until the literal closes or the line ends.
    ///
    /// Inside an escaped literal, the escape sequence consumes the character
    /// after it unconditionally, so an escaped quote never closes the
    /// literal. If the line ends first, the context stays in the state and
    /// the next line resumes scanning inside the literal.
    pub fn continue_string(&mut self) -> TokenKind {
        while !self.cursor.is_at_end() {
            let Some(context) = self.state.string.as_ref() else {
                break;
            };

            if self.cursor.match_str(context.close_sequence()) {
                self.state.string = None;
                self.state.end_expression();
                break;
            }

            if let Some(escape) = context.escape_sequence() {
                if self.cursor.match_str(escape) {
                    self.cursor.advance();
                    continue;
                }
            }

            self.cursor.advance();
        }

        TokenKind::String
    }
}
