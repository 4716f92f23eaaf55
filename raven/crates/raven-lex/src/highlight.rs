//! Line and document drivers.
//!
//! [`tokenize_line`] is the canonical way to feed one line through the
//! lexer. [`Document`] keeps a whole buffer tokenized and re-tokenizes only
//! what an edit can have changed: scanning restarts at the first edited line
//! and stops at the first untouched line whose start state comes out the same
//! as before the edit.

use std::ops::Range;

use crate::error::{HighlightError, HighlightResult};
use crate::state::LexerState;
use crate::token::Token;
use crate::Lexer;

/// Tokenizes one line, advancing `state` to the start of the next line.
///
/// An empty line is reported to the state as a blank line and yields no
/// tokens.
///
/// # Example
///
/// ```
/// use raven_lex::{tokenize_line, LexerState, TokenKind};
///
/// let mut state = LexerState::new();
/// let tokens = tokenize_line("foo(bar)", &mut state);
/// assert_eq!(tokens[0].kind, TokenKind::Variable);
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize_line(line: &str, state: &mut LexerState) -> Vec<Token> {
    if line.is_empty() {
        state.on_blank_line();
        return Vec::new();
    }

    Lexer::new(line, state).collect()
}

/// Splits text into lines on `\n`, dropping a trailing `\r` from each.
///
/// Text always has at least one (possibly empty) line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// A tokenized buffer.
///
/// Holds each line's text, the lexer state at the start of each line, and
/// each line's tokens.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
    starts: Vec<LexerState>,
    tokens: Vec<Vec<Token>>,
    end: LexerState,
}

impl Document {
    /// Creates a document from `text` and tokenizes all of it.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = split_lines(text).map(str::to_owned).collect();
        let count = lines.len();

        let mut document = Self {
            lines,
            starts: vec![LexerState::new(); count],
            tokens: vec![Vec::new(); count],
            end: LexerState::new(),
        };
        document.rescan(0, count, LexerState::new());
        document
    }

    /// Replaces the text of one line.
    ///
    /// # Returns
    ///
    /// The range of lines whose tokens were recomputed.
    pub fn replace_line(&mut self, index: usize, text: &str) -> HighlightResult<Range<usize>> {
        if index >= self.lines.len() {
            return Err(HighlightError::LineOutOfRange {
                index,
                line_count: self.lines.len(),
            });
        }
        self.splice(index, 1, &[text])
    }

    /// Replaces `remove` lines starting at `index` with `insert`.
    ///
    /// `index` may equal the line count to append.
    ///
    /// # Returns
    ///
    /// The range of lines (in the edited document) whose tokens were
    /// recomputed.
    pub fn splice(
        &mut self,
        index: usize,
        remove: usize,
        insert: &[&str],
    ) -> HighlightResult<Range<usize>> {
        let line_count = self.lines.len();
        if index > line_count || remove > line_count - index {
            return Err(HighlightError::SpliceOutOfRange {
                index,
                remove,
                line_count,
            });
        }

        // Lines before `index` are untouched, so neither is the state after them
        let state = match self.starts.get(index) {
            Some(state) => state.clone(),
            None => self.end.clone(),
        };

        let removed = index..index + remove;
        self.lines
            .splice(removed.clone(), insert.iter().map(|line| line.to_string()));
        self.starts.splice(
            removed.clone(),
            std::iter::repeat_with(LexerState::new).take(insert.len()),
        );
        self.tokens
            .splice(removed, std::iter::repeat_with(Vec::new).take(insert.len()));

        let rescanned = self.rescan(index, index + insert.len(), state);
        log::debug!(
            "spliced {} lines at {} ({} removed), re-tokenized lines {:?}",
            insert.len(),
            index,
            remove,
            rescanned
        );
        Ok(rescanned)
    }

    /// Tokenizes from line `first` with `state`.
    ///
    /// Lines before `dirty_end` are always tokenized; after that, scanning
    /// stops at the first line whose cached start state equals the one just
    /// computed.
    fn rescan(&mut self, first: usize, dirty_end: usize, mut state: LexerState) -> Range<usize> {
        let mut line = first;

        while line < self.lines.len() {
            if line >= dirty_end && self.starts[line] == state {
                log::trace!("state converged at line {}", line);
                return first..line;
            }

            self.starts[line] = state.clone();
            self.tokens[line] = tokenize_line(&self.lines[line], &mut state);
            line += 1;
        }

        self.end = state;
        first..line
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of one line.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Tokens of one line.
    pub fn tokens(&self, index: usize) -> Option<&[Token]> {
        self.tokens.get(index).map(Vec::as_slice)
    }

    /// The lexer state at the start of a line.
    pub fn state_before(&self, index: usize) -> Option<&LexerState> {
        self.starts.get(index)
    }

    /// The lexer state after the last line.
    pub fn end_state(&self) -> &LexerState {
        &self.end
    }

    /// Iterates over lines and their tokens.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &[Token])> {
        self.lines
            .iter()
            .map(String::as_str)
            .zip(self.tokens.iter().map(Vec::as_slice))
    }

    /// Reassembles the document text with `\n` line endings.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
