//! Token type definitions.
//!
//! The lexer does not build values or a syntax tree; a token is a category
//! plus the byte span it covers within its line.

use std::fmt;

/// The category of a classified token.
///
/// This is a closed set. The host maps each category to a visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// An identifier promoted to a statement-introducing keyword.
    Keyword,
    /// A plain identifier reference.
    Variable,
    /// An identifier directly after a reference-taking `&`.
    VariableSpecial,
    /// An identifier directly after a member-access dot.
    PropertyName,
    /// A numeric literal.
    Number,
    /// A string literal, or the part of one that lies on this line.
    String,
    /// An operator.
    Operator,
    /// One of `( ) [ ] { }`.
    Bracket,
    /// A comma or a member-access dot.
    Punctuation,
    /// An `@` annotation.
    Annotation,
    /// A `#` line comment.
    Comment,
    /// A character the lexer does not classify.
    Unclassified,
}

impl TokenKind {
    /// All categories, in declaration order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Keyword,
        TokenKind::Variable,
        TokenKind::VariableSpecial,
        TokenKind::PropertyName,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Operator,
        TokenKind::Bracket,
        TokenKind::Punctuation,
        TokenKind::Annotation,
        TokenKind::Comment,
        TokenKind::Unclassified,
    ];

    /// Returns the category name the host uses to look up a style.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Variable => "variable",
            TokenKind::VariableSpecial => "variable-special",
            TokenKind::PropertyName => "property-name",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Operator => "operator",
            TokenKind::Bracket => "bracket",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Annotation => "annotation",
            TokenKind::Comment => "comment",
            TokenKind::Unclassified => "none",
        }
    }

    /// Parses a category name as produced by [`TokenKind::as_str`].
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open byte range within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token's category.
    pub kind: TokenKind,
    /// The bytes of the line the token covers.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the token's text within `line`.
    ///
    /// # Example
    ///
    /// ```
    /// use raven_lex::{Span, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Keyword, Span::new(0, 6));
    /// assert_eq!(token.text("return -1"), "return");
    /// ```
    pub fn text<'l>(&self, line: &'l str) -> &'l str {
        &line[self.span.start..self.span.end]
    }
}
