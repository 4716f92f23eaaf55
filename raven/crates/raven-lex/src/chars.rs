//! Character classes for the Raven lexer.
//!
//! Raven identifiers and operators are ASCII-only; any other character is
//! left unclassified by the lexer rather than rejected.

/// The escape marker. A run of these before a quote raises the string's
/// delimiter; inside an escaped string it introduces an escaped character.
pub const ESCAPE_MARKER: char = '\\';

/// The quote character of escaped strings.
pub const DOUBLE_QUOTE: char = '"';

/// The quote character of raw strings.
pub const BACKTICK: char = '`';

/// The line comment marker.
pub const COMMENT_MARKER: char = '#';

/// The annotation marker.
pub const ANNOTATION_MARKER: char = '@';

/// The reference-taking operator.
pub const REFERENCE_MARKER: char = '&';

/// Checks if a character is a valid identifier start.
///
/// # Example
///
/// ```
/// use raven_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// Besides letters, digits and underscores, identifiers may carry the
/// suffix markers `!` and `?` (`push!`, `empty?`).
///
/// # Example
///
/// ```
/// use raven_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('!'));
/// assert!(is_ident_continue('?'));
/// assert!(!is_ident_continue('+'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '!' | '?')
}

/// Checks if a character is a quote that can open a string literal.
pub fn is_quote(c: char) -> bool {
    c == DOUBLE_QUOTE || c == BACKTICK
}

/// Checks if a character is horizontal whitespace skipped between tokens.
pub fn is_horizontal_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Checks if a character opens a bracket group.
pub fn is_open_bracket(c: char) -> bool {
    matches!(c, '(' | '[' | '{')
}

/// Checks if a character closes a bracket group.
pub fn is_close_bracket(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Checks if a character is one of the named single-character operators.
pub fn is_single_operator(c: char) -> bool {
    matches!(c, '=' | '+' | '-' | '*' | '/' | '^' | '>' | '<' | ':' | '|' | '&')
}

/// Checks if a character belongs to the generic operator class.
///
/// This is the fallback for operator-like characters that have no named
/// operator of their own.
pub fn is_operator_char(c: char) -> bool {
    is_single_operator(c) || matches!(c, '!' | '%' | '~' | '?' | '$' | ';' | '\\' | '\'')
}

/// Returns true if `text` starts with a string opener: any run of escape
/// markers immediately followed by a quote.
///
/// # Example
///
/// ```
/// use raven_lex::chars::starts_string;
///
/// assert!(starts_string("\"x\""));
/// assert!(starts_string("\\\\`x`\\\\"));
/// assert!(!starts_string("\\n"));
/// ```
pub fn starts_string(text: &str) -> bool {
    text.trim_start_matches(ESCAPE_MARKER).starts_with(is_quote)
}
