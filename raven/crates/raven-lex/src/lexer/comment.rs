//! Comment lexing.
//!
//! Raven only has line comments: `#` to the end of the line.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a line comment.
    ///
    /// A comment ends the statement it trails, exactly as a blank line would.
    pub fn lex_comment(&mut self) -> TokenKind {
        self.cursor.skip_to_end();
        self.state.on_blank_line();
        TokenKind::Comment
    }
}
