//! Lexer state carried between tokens and between lines.
//!
//! One `LexerState` belongs to one open document. The host creates it with
//! [`LexerState::new`] and threads it through every line in document order;
//! the lexer reads and mutates it in place and keeps no other memory.

use crate::chars::{BACKTICK, DOUBLE_QUOTE, ESCAPE_MARKER};

/// The quote character that opened a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `"`: escape sequences are interpreted.
    Double,
    /// `` ` ``: raw, nothing is escaped.
    Backtick,
}

impl Quote {
    /// Maps a quote character to its kind.
    pub fn from_char(c: char) -> Option<Quote> {
        match c {
            DOUBLE_QUOTE => Some(Quote::Double),
            BACKTICK => Some(Quote::Backtick),
            _ => None,
        }
    }

    /// Returns the quote character.
    pub fn as_char(self) -> char {
        match self {
            Quote::Double => DOUBLE_QUOTE,
            Quote::Backtick => BACKTICK,
        }
    }
}

/// Parameters of the string literal the cursor is currently inside.
///
/// A literal opened with `k` escape markers before its quote is closed by
/// the quote followed by `k` escape markers, so raising `k` lets the literal
/// contain the bare quote character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringContext {
    quote: Quote,
    escape_run: usize,
    close: String,
    escape: Option<String>,
}

impl StringContext {
    /// Builds the context for a literal opened by `escape_run` escape
    /// markers followed by `quote`.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::state::{Quote, StringContext};
    ///
    /// let ctx = StringContext::new(Quote::Double, 2);
    /// assert_eq!(ctx.close_sequence(), "\"\\\\");
    /// assert_eq!(ctx.escape_sequence(), Some("\\\\"));
    ///
    /// let raw = StringContext::new(Quote::Backtick, 0);
    /// assert!(raw.is_raw());
    /// assert_eq!(raw.escape_sequence(), None);
    /// ```
    pub fn new(quote: Quote, escape_run: usize) -> Self {
        let mut close = String::with_capacity(escape_run + 1);
        close.push(quote.as_char());
        close.extend(std::iter::repeat(ESCAPE_MARKER).take(escape_run));

        let escape = match quote {
            Quote::Backtick => None,
            Quote::Double => Some(ESCAPE_MARKER.to_string().repeat(escape_run.max(1))),
        };

        Self {
            quote,
            escape_run,
            close,
            escape,
        }
    }

    /// The quote that opened the literal.
    pub fn quote(&self) -> Quote {
        self.quote
    }

    /// Number of escape markers consumed before the opening quote.
    pub fn escape_run(&self) -> usize {
        self.escape_run
    }

    /// True for backtick strings, which never interpret escapes.
    pub fn is_raw(&self) -> bool {
        self.quote == Quote::Backtick
    }

    /// The exact text that terminates the literal.
    pub fn close_sequence(&self) -> &str {
        &self.close
    }

    /// The marker run that escapes the following character, if any.
    pub fn escape_sequence(&self) -> Option<&str> {
        self.escape.as_deref()
    }
}

/// Save area for the macro lock, one entry per open bracket.
///
/// Popping an empty stack yields `false`; stray closing brackets are never
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MacroLockStack {
    saved: Vec<bool>,
}

impl MacroLockStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `locked` on entry to a bracket group.
    pub fn push(&mut self, locked: bool) {
        self.saved.push(locked);
    }

    /// Restores the value saved by the matching opening bracket.
    pub fn pop(&mut self) -> bool {
        self.saved.pop().unwrap_or(false)
    }

    /// Current bracket nesting depth.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// True when no bracket is open.
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

/// Context carried from token to token and from line to line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexerState {
    pub(crate) string: Option<StringContext>,
    pub(crate) expr_start: bool,
    pub(crate) macro_eligible: bool,
    pub(crate) after_dot: bool,
    pub(crate) in_swap: bool,
    pub(crate) macro_locked: bool,
    pub(crate) lock_stack: MacroLockStack,
}

impl Default for LexerState {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerState {
    /// Returns the state at the very start of a document.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::LexerState;
    ///
    /// let state = LexerState::new();
    /// assert!(state.is_expr_start());
    /// assert!(!state.in_string());
    /// assert_eq!(state.bracket_depth(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            string: None,
            expr_start: true,
            macro_eligible: true,
            after_dot: false,
            in_swap: false,
            macro_locked: false,
            lock_stack: MacroLockStack::new(),
        }
    }

    /// Called by the host for a fully blank line instead of tokenizing it.
    ///
    /// A blank line always re-opens statement position. An open string stays
    /// open, and the bracket save area is untouched.
    pub fn on_blank_line(&mut self) {
        self.expr_start = true;
        self.macro_eligible = true;
        self.after_dot = false;
        self.in_swap = false;
        self.macro_locked = false;
    }

    /// Applies the blank-line reset at the start of a line, unless the line
    /// begins inside a string literal.
    pub fn on_line_start(&mut self) {
        if self.string.is_none() {
            self.on_blank_line();
        }
    }

    /// True while the cursor is inside an unterminated string literal.
    pub fn in_string(&self) -> bool {
        self.string.is_some()
    }

    /// The open string literal, if any.
    pub fn string_context(&self) -> Option<&StringContext> {
        self.string.as_ref()
    }

    /// True when the next token may begin a new expression or statement.
    pub fn is_expr_start(&self) -> bool {
        self.expr_start
    }

    /// True when an identifier here could be promoted to a keyword.
    pub fn is_macro_eligible(&self) -> bool {
        self.macro_eligible
    }

    /// True right after a member-access dot.
    pub fn is_after_dot(&self) -> bool {
        self.after_dot
    }

    /// True right after a reference-taking `&` adjacent to an identifier.
    pub fn is_in_swap(&self) -> bool {
        self.in_swap
    }

    /// True once the current statement has been led by a keyword.
    pub fn is_macro_locked(&self) -> bool {
        self.macro_locked
    }

    /// Number of brackets currently open.
    pub fn bracket_depth(&self) -> usize {
        self.lock_stack.depth()
    }

    /// Any token other than those that re-open expression position.
    pub(crate) fn end_expression(&mut self) {
        self.expr_start = false;
        self.macro_eligible = false;
        self.after_dot = false;
        self.in_swap = false;
    }

    /// An operator leaves expression position open on its right.
    pub(crate) fn open_expression(&mut self) {
        self.expr_start = true;
        self.macro_eligible = true;
        self.after_dot = false;
        self.in_swap = false;
    }

    pub(crate) fn enter_bracket(&mut self) {
        self.lock_stack.push(self.macro_locked);
        self.macro_locked = false;
        self.open_expression();
    }

    pub(crate) fn leave_bracket(&mut self) {
        self.macro_locked = self.lock_stack.pop();
        self.end_expression();
    }
}
