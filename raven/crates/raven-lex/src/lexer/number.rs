//! Number literal lexing.
//!
//! This module recognizes hexadecimal and decimal literals. Two forms are
//! only legal where an expression may start: a signed literal (`-1`), which
//! would otherwise be a subtraction, and a leading-dot literal (`.5`), which
//! would otherwise be a member access.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal at the cursor, if there is one.
    ///
    /// # Number Formats
    ///
    /// - Hexadecimal: `0xFF`, `0x1f`
    /// - Decimal: `42`, `3.14`
    /// - Signed (expression start only): `-1`, `-0.5`
    /// - Leading dot (expression start only): `.5`
    ///
    /// # Returns
    ///
    /// `Some(TokenKind::Number)` after consuming the literal, or `None` with
    /// nothing consumed and the state untouched.
    pub fn lex_number(&mut self) -> Option<TokenKind> {
        let rest = self.cursor.remaining();
        let expr_start = self.state.is_expr_start();

        let len = hex_literal_len(rest)
            .or_else(|| expr_start.then(|| signed_literal_len(rest)).flatten())
            .or_else(|| decimal_literal_len(rest))
            .or_else(|| expr_start.then(|| leading_dot_literal_len(rest)).flatten())?;

        // Literals are pure ASCII, so byte and character counts agree
        self.cursor.advance_n(len);
        self.state.end_expression();
        Some(TokenKind::Number)
    }
}

fn digits_len(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// `0x` followed by one or more hex digits.
fn hex_literal_len(text: &str) -> Option<usize> {
    let digits = text
        .strip_prefix("0x")?
        .bytes()
        .take_while(u8::is_ascii_hexdigit)
        .count();
    (digits > 0).then_some(2 + digits)
}

/// One or more digits with an optional `.digits` fraction.
fn decimal_literal_len(text: &str) -> Option<usize> {
    let integer = digits_len(text);
    if integer == 0 {
        return None;
    }

    let fraction = match text[integer..].strip_prefix('.') {
        Some(after_dot) => match digits_len(after_dot) {
            0 => 0,
            n => n + 1,
        },
        None => 0,
    };

    Some(integer + fraction)
}

fn signed_literal_len(text: &str) -> Option<usize> {
    decimal_literal_len(text.strip_prefix('-')?).map(|len| len + 1)
}

fn leading_dot_literal_len(text: &str) -> Option<usize> {
    match digits_len(text.strip_prefix('.')?) {
        0 => None,
        n => Some(n + 1),
    }
}
