//! raven-lex - Syntax Highlighting Lexer for the Raven Language
//!
//! This crate classifies Raven source text for an editor, one line at a time.
//! Each line is lexed against a [`LexerState`] carried over from the previous
//! line, so multi-line strings, open brackets and pending member accesses
//! are tracked across line boundaries without ever re-reading earlier text.
//!
//! # Example Usage
//!
//! ```
//! use raven_lex::{tokenize_line, LexerState, TokenKind};
//!
//! let mut state = LexerState::new();
//! let line = "while x < 3 { print x }";
//! let tokens = tokenize_line(line, &mut state);
//!
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[0].text(line), "while");
//! ```
//!
//! For whole buffers, [`Document`] keeps every line's tokens and re-lexes
//! only what an edit can affect.
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and spans
//! - [`state`] - State carried between lines
//! - [`lexer`] - Per-line tokenizer
//! - [`cursor`] - Character cursor over one line
//! - [`chars`] - Character classes
//! - [`highlight`] - Line and document drivers
//! - [`language`] - Editor metadata
//! - [`error`] - Document edit errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Raven has no reserved words. An identifier that starts a statement and is
//! directly followed by an argument (`return -1`, `let x`, `else {`) is a
//! keyword; the same word in a call (`print(x)`), an assignment
//! (`print = 1`) or on its own is a variable. Only one keyword may lead a
//! statement; brackets open a fresh scope for this rule.
//!
//! ## Identifiers
//!
//! Pattern: `[A-Za-z_][A-Za-z0-9_!?]*`. After a member dot an identifier is a
//! property name; directly after a reference `&` it is a special variable.
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14`, `0xFF`, and at expression start `-1`, `.5`
//! - **String**: `"text"`, `` `raw` ``, and raised forms such as
//!   `\"say "hi""\` whose escape run lets the body hold bare quotes
//!
//! ## Operators
//!
//! - **Multi-character**: `...`, `==`, `!=`, `>=`, `<=`, `&&`, `||`, `|>`
//! - **Single**: `= + - * / ^ > < : | &` and `! % ~ ? $ ; \ '`
//!
//! ## Other
//!
//! - **Brackets**: `()`, `[]`, `{}`
//! - **Punctuation**: `,` and the member dot `.`
//! - **Annotation**: `@name`
//! - **Comment**: `#` to end of line

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod highlight;
pub mod language;
pub mod lexer;
pub mod state;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{HighlightError, HighlightResult};
pub use highlight::{split_lines, tokenize_line, Document};
pub use language::{LanguageData, RAVEN};
pub use lexer::Lexer;
pub use state::{LexerState, MacroLockStack, Quote, StringContext};
pub use token::{Span, Token, TokenKind};
