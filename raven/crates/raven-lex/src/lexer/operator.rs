//! Operator and punctuation lexing.
//!
//! This module handles operators, brackets, commas, member dots and
//! annotations.

use crate::chars::{is_ident_continue, is_ident_start, is_single_operator, REFERENCE_MARKER};
use crate::token::TokenKind;
use crate::Lexer;

/// Operators longer than two characters. Checked before everything else so
/// that `...` is never split into dots.
const MULTI_OPERATORS: &[&str] = &["..."];

/// Two-character operators, checked before their one-character prefixes.
const PAIRED_OPERATORS: &[&str] = &["==", "!=", ">=", "<=", "&&", "||", "|>"];

impl<'a> Lexer<'a> {
    /// Lexes an operator or member-access dot at the cursor.
    ///
    /// Handles, longest match first: `...`, the paired operators, `&`,
    /// `= + - * / ^ > < : |`, and `.`.
    ///
    /// # Returns
    ///
    /// The token kind, or `None` with nothing consumed.
    pub fn lex_operator(&mut self) -> Option<TokenKind> {
        if self.match_any(MULTI_OPERATORS) {
            self.state.end_expression();
            return Some(TokenKind::Operator);
        }

        if self.match_any(PAIRED_OPERATORS) {
            self.state.open_expression();
            return Some(TokenKind::Operator);
        }

        match self.cursor.current_char() {
            REFERENCE_MARKER => Some(self.lex_reference()),
            '.' => Some(self.lex_dot()),
            c if is_single_operator(c) => {
                self.cursor.advance();
                self.state.open_expression();
                Some(TokenKind::Operator)
            },
            _ => None,
        }
    }

    fn match_any(&mut self, operators: &[&str]) -> bool {
        operators.iter().any(|op| self.cursor.match_str(op))
    }

    /// Lexes a lone `&`.
    ///
    /// Directly followed by an identifier, it takes a reference: the
    /// identifier becomes a special variable and expression position is left
    /// as it was.
    fn lex_reference(&mut self) -> TokenKind {
        self.cursor.advance();

        let next = self.cursor.current_char();
        if !self.cursor.is_at_end() && next != REFERENCE_MARKER && is_ident_start(next) {
            self.state.in_swap = true;
            self.state.after_dot = false;
        } else {
            self.state.open_expression();
        }

        TokenKind::Operator
    }

    /// Lexes a member-access dot.
    fn lex_dot(&mut self) -> TokenKind {
        self.cursor.advance();
        self.state.end_expression();
        self.state.after_dot = true;
        TokenKind::Punctuation
    }

    /// Lexes a comma, which ends the current statement.
    pub fn lex_comma(&mut self) -> TokenKind {
        self.cursor.advance();
        self.state.on_blank_line();
        TokenKind::Punctuation
    }

    /// Lexes `(`, `[` or `{`, saving the macro lock for the group.
    pub fn lex_open_bracket(&mut self) -> TokenKind {
        self.cursor.advance();
        self.state.enter_bracket();
        TokenKind::Bracket
    }

    /// Lexes `)`, `]` or `}`, restoring the macro lock of the enclosing group.
    pub fn lex_close_bracket(&mut self) -> TokenKind {
        self.cursor.advance();
        self.state.leave_bracket();
        TokenKind::Bracket
    }

    /// Lexes an `@` annotation and the name attached to it.
    pub fn lex_annotation(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.state.expr_start = true;
        self.state.macro_eligible = false;
        self.state.after_dot = false;
        self.state.in_swap = false;
        TokenKind::Annotation
    }
}

#[cfg(test)]
mod tests {
    use crate::state::LexerState;
    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex_all(line: &str) -> Vec<(TokenKind, String)> {
        let mut state = LexerState::new();
        Lexer::new(line, &mut state)
            .map(|token| (token.kind, token.text(line).to_string()))
            .collect()
    }

    fn lex_op(line: &str) -> (TokenKind, String) {
        lex_all(line).remove(0)
    }

    #[test]
    fn test_paired_operators() {
        for op in ["==", "!=", ">=", "<=", "&&", "||", "|>"] {
            let line = format!("a {op} b");
            assert_eq!(lex_all(&line)[1], (TokenKind::Operator, op.to_string()));
        }
    }

    #[test]
    fn test_single_operators() {
        for op in ["=", "+", "*", "/", "^", ">", "<", ":", "|"] {
            let line = format!("a {op} b");
            assert_eq!(lex_all(&line)[1], (TokenKind::Operator, op.to_string()));
        }
    }

    #[test]
    fn test_operator_reopens_expression() {
        let tokens = lex_all("x = -1");
        assert_eq!(tokens[2], (TokenKind::Number, "-1".to_string()));
    }

    #[test]
    fn test_subtraction_after_group_is_not_a_literal() {
        let tokens = lex_all("f(y) -1");
        assert_eq!(tokens[4], (TokenKind::Operator, "-".to_string()));
        assert_eq!(tokens[5], (TokenKind::Number, "1".to_string()));
    }

    #[test]
    fn test_ellipsis_is_one_token() {
        let tokens = lex_all("f(xs...)");
        assert_eq!(tokens[3], (TokenKind::Operator, "...".to_string()));
        assert_eq!(tokens[4], (TokenKind::Bracket, ")".to_string()));
    }

    #[test]
    fn test_two_dots_are_two_punctuation_tokens() {
        let tokens = lex_all("a..b");
        assert_eq!(tokens[1], (TokenKind::Punctuation, ".".to_string()));
        assert_eq!(tokens[2], (TokenKind::Punctuation, ".".to_string()));
        assert_eq!(tokens[3], (TokenKind::PropertyName, "b".to_string()));
    }

    #[test]
    fn test_dot_makes_property_name() {
        let tokens = lex_all("point.x");
        assert_eq!(tokens[1], (TokenKind::Punctuation, ".".to_string()));
        assert_eq!(tokens[2], (TokenKind::PropertyName, "x".to_string()));
    }

    #[test]
    fn test_reference_marks_special_variable() {
        let tokens = lex_all("swap(&x, &y)");
        assert_eq!(tokens[2], (TokenKind::Operator, "&".to_string()));
        assert_eq!(tokens[3], (TokenKind::VariableSpecial, "x".to_string()));
        assert_eq!(tokens[6], (TokenKind::VariableSpecial, "y".to_string()));
    }

    #[test]
    fn test_reference_keeps_expression_position() {
        let mut state = LexerState::new();
        state.expr_start = false;
        state.macro_eligible = false;
        let mut lexer = Lexer::new("&x", &mut state);
        assert_eq!(lexer.lex_operator(), Some(TokenKind::Operator));
        assert!(lexer.state.is_in_swap());
        assert!(!lexer.state.is_expr_start());
    }

    #[test]
    fn test_detached_reference_is_plain_operator() {
        let tokens = lex_all("a & b");
        assert_eq!(tokens[1], (TokenKind::Operator, "&".to_string()));
        assert_eq!(tokens[2], (TokenKind::Variable, "b".to_string()));
    }

    #[test]
    fn test_brackets_nest_lock() {
        let mut state = LexerState::new();
        Lexer::new("if (a) { c", &mut state).for_each(drop);
        assert_eq!(state.bracket_depth(), 1);
        assert!(!state.is_macro_locked());
    }

    #[test]
    fn test_statement_keyword_inside_group() {
        let tokens = lex_all("while true { return x }");
        assert_eq!(tokens[0].0, TokenKind::Keyword);
        assert_eq!(tokens[1].0, TokenKind::Variable);
        assert_eq!(tokens[3], (TokenKind::Keyword, "return".to_string()));
    }

    #[test]
    fn test_comma_reopens_statement() {
        let tokens = lex_all("[print x, print y]");
        assert_eq!(tokens[1], (TokenKind::Keyword, "print".to_string()));
        assert_eq!(tokens[3], (TokenKind::Punctuation, ",".to_string()));
        assert_eq!(tokens[4], (TokenKind::Keyword, "print".to_string()));
    }

    #[test]
    fn test_unbalanced_close_is_harmless() {
        let mut state = LexerState::new();
        Lexer::new(") ] }", &mut state).for_each(drop);
        assert_eq!(state.bracket_depth(), 0);
        assert!(!state.is_macro_locked());
    }

    #[test]
    fn test_annotation() {
        assert_eq!(lex_op("@label outer"), (TokenKind::Annotation, "@label".to_string()));
        assert_eq!(lex_all("@label outer")[1], (TokenKind::Variable, "outer".to_string()));
        assert_eq!(lex_op("@ x"), (TokenKind::Annotation, "@".to_string()));
    }

    #[test]
    fn test_pipe_chain() {
        let tokens = lex_all("xs |> map(f)");
        assert_eq!(tokens[1], (TokenKind::Operator, "|>".to_string()));
        assert_eq!(tokens[2], (TokenKind::Variable, "map".to_string()));
    }
}
