//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the per-token dispatch.

use crate::chars::{
    is_close_bracket, is_ident_start, is_open_bracket, is_operator_char, ANNOTATION_MARKER,
    COMMENT_MARKER,
};
use crate::cursor::Cursor;
use crate::state::LexerState;
use crate::token::{Span, Token, TokenKind};

/// Line tokenizer for Raven source text.
///
/// A lexer covers exactly one line. It borrows the document's
/// [`LexerState`] for the duration of the line, so whatever context the
/// line leaves behind (an open string, open brackets, a pending member
/// access) is visible to the lexer of the next line.
///
/// # Example
///
/// ```
/// use raven_lex::{Lexer, LexerState, TokenKind};
///
/// let mut state = LexerState::new();
/// let kinds: Vec<TokenKind> = Lexer::new("return -1", &mut state)
///     .map(|token| token.kind)
///     .collect();
///
/// assert_eq!(kinds, [TokenKind::Keyword, TokenKind::Number]);
/// ```
pub struct Lexer<'a> {
    /// Character cursor over the current line.
    pub cursor: Cursor<'a>,

    /// The document's carried-over state.
    pub state: &'a mut LexerState,

    /// Starting position of the current token (byte offset).
    pub token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for `line`, continuing from `state`.
    ///
    /// `line` must not contain a line terminator.
    pub fn new(line: &'a str, state: &'a mut LexerState) -> Self {
        Self {
            cursor: Cursor::new(line),
            state,
            token_start: 0,
        }
    }

    /// Returns the next token on the line, or `None` at end of line.
    ///
    /// Whitespace is skipped without producing a token. Every call that
    /// returns a token has consumed at least one character.
    pub fn next_token(&mut self) -> Option<Token> {
        self.token_start = self.cursor.position();

        if self.state.in_string() {
            if self.cursor.is_at_end() {
                return None;
            }
            let kind = self.continue_string();
            return Some(self.finish(kind));
        }

        if self.cursor.is_line_start() {
            self.state.on_line_start();
        }

        self.cursor.skip_whitespace();
        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return None;
        }

        let kind = self.lex_token();
        Some(self.finish(kind))
    }

    /// Classifies the token at the cursor.
    ///
    /// Recognizers are tried in a fixed order; several of them overlap on
    /// their first character (`-1` vs `-`, `.5` vs `.`, `...` vs `.`).
    fn lex_token(&mut self) -> TokenKind {
        if let Some(kind) = self.lex_number() {
            return kind;
        }

        if self.try_open_string() {
            return self.continue_string();
        }

        match self.cursor.current_char() {
            COMMENT_MARKER => self.lex_comment(),
            ',' => self.lex_comma(),
            c if is_open_bracket(c) => self.lex_open_bracket(),
            c if is_close_bracket(c) => self.lex_close_bracket(),
            ANNOTATION_MARKER => self.lex_annotation(),
            _ => {
                if let Some(kind) = self.lex_operator() {
                    return kind;
                }
                self.lex_fallback()
            },
        }
    }

    /// Identifiers, then the generic operator class, then anything else.
    fn lex_fallback(&mut self) -> TokenKind {
        let c = self.cursor.current_char();

        if is_ident_start(c) {
            return self.lex_identifier();
        }

        self.cursor.advance();

        if is_operator_char(c) {
            self.state.open_expression();
            TokenKind::Operator
        } else {
            self.state.end_expression();
            TokenKind::Unclassified
        }
    }

    fn finish(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.token_start, self.cursor.position()))
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the text of the line being lexed.
    pub fn line(&self) -> &'a str {
        self.cursor.line()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
