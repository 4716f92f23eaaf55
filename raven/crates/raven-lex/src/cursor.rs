//! Character cursor over a single line of source text.
//!
//! This module provides the `Cursor` struct which the lexer uses to walk one
//! line at a time. The cursor never sees a line terminator: the host splits
//! the document into lines and hands each one over separately, so the only
//! position that matters is the byte offset within the current line.

/// A cursor for traversing one line of source code character by character.
///
/// The cursor maintains the current byte offset and provides methods for
/// advancing, peeking ahead, and matching literal text. It handles UTF-8
/// correctly: every advance moves over exactly one `char`.
///
/// # Example
///
/// ```
/// use raven_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("foo = 1");
///
/// assert_eq!(cursor.current_char(), 'f');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'o');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The line being traversed.
    line: &'a str,

    /// Current byte position in the line.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self { line, position: 0 }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(2), 'c');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // Fast path: an all-ASCII prefix maps bytes to chars one-to-one
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Does nothing if already at the end of the line.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances the cursor by the given number of characters.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abcdef");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.current_char(), 'd');
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances the cursor to the end of the line.
    pub fn skip_to_end(&mut self) {
        self.position = self.line.len();
    }

    /// Returns true if the cursor is at the end of the line.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.line.len()
    }

    /// Returns true if nothing on this line has been consumed yet.
    pub fn is_line_start(&self) -> bool {
        self.position == 0
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("|>");
    /// assert!(cursor.match_char('|'));
    /// assert!(!cursor.match_char('|'));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Matches and consumes `expected` if the remaining text starts with it.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("...xs");
    /// assert!(cursor.match_str("..."));
    /// assert!(!cursor.match_str("..."));
    /// assert_eq!(cursor.remaining(), "xs");
    /// ```
    pub fn match_str(&mut self, expected: &str) -> bool {
        if self.starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    /// Returns true if the remaining text starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consumes characters while `predicate` holds and returns how many
    /// characters were consumed.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Skips horizontal whitespace (spaces, tabs and stray carriage returns).
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t foo");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'f');
    /// ```
    pub fn skip_whitespace(&mut self) {
        self.eat_while(crate::chars::is_horizontal_space);
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the line from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while x");
    /// let start = cursor.position();
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(start), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.line[start..self.position]
    }

    /// Returns the line text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.line[self.position..]
    }

    /// Returns the full line text.
    pub fn line(&self) -> &'a str {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("foo = 1");
        assert_eq!(cursor.current_char(), 'f');
        assert_eq!(cursor.position(), 0);
        assert!(cursor.is_line_start());
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek_char(1), 'γ');
    }

    #[test]
    fn test_peek_past_non_ascii() {
        let cursor = Cursor::new("aé\"");
        assert_eq!(cursor.peek_char(1), 'é');
        assert_eq!(cursor.peek_char(2), '"');
        assert_eq!(cursor.peek_char(3), '\0');
    }

    #[test]
    fn test_match_str() {
        let mut cursor = Cursor::new("\\\\\"rest");
        assert!(!cursor.match_str("\"\\"));
        assert!(cursor.match_str("\\\\"));
        assert_eq!(cursor.current_char(), '"');
    }

    #[test]
    fn test_eat_while_counts_chars() {
        let mut cursor = Cursor::new("\\\\\\`x");
        assert_eq!(cursor.eat_while(|c| c == '\\'), 3);
        assert_eq!(cursor.current_char(), '`');
    }

    #[test]
    fn test_skip_whitespace_only() {
        let mut cursor = Cursor::new("  \t ");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_skip_to_end() {
        let mut cursor = Cursor::new("# note");
        cursor.skip_to_end();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.slice_from(0), "# note");
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("foo.bar");
        cursor.advance_n(3);
        assert_eq!(cursor.slice_from(0), "foo");
        assert_eq!(cursor.remaining(), ".bar");
        assert_eq!(cursor.line(), "foo.bar");
    }
}
