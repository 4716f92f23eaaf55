//! Edge case tests for raven-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize_line, LexerState, Span, TokenKind};

    fn lex_with(line: &str, state: &mut LexerState) -> Vec<(TokenKind, String)> {
        tokenize_line(line, state)
            .into_iter()
            .map(|token| (token.kind, token.text(line).to_string()))
            .collect()
    }

    fn lex_all(line: &str) -> Vec<(TokenKind, String)> {
        lex_with(line, &mut LexerState::new())
    }

    fn kinds(line: &str) -> Vec<TokenKind> {
        lex_all(line).into_iter().map(|(kind, _)| kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_line() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![(TokenKind::Variable, "x".to_string())]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("{name} = 1"));
        assert_eq!(tokens[0], (TokenKind::Variable, name));
    }

    #[test]
    fn test_edge_underscore_identifier() {
        assert_eq!(kinds("_"), [TokenKind::Variable]);
        assert_eq!(kinds("_tmp = 1")[0], TokenKind::Variable);
    }

    #[test]
    fn test_edge_identifier_suffixes() {
        let tokens = lex_all("empty? xs");
        assert_eq!(tokens[0], (TokenKind::Keyword, "empty?".to_string()));
        assert_eq!(lex_all("x!=y")[0], (TokenKind::Variable, "x!".to_string()));
    }

    #[test]
    fn test_edge_empty_string() {
        assert_eq!(kinds("\"\""), [TokenKind::String]);
        assert_eq!(kinds("``"), [TokenKind::String]);
    }

    #[test]
    fn test_edge_unterminated_string_carries_over() {
        let mut state = LexerState::new();
        lex_with("\"abc", &mut state);
        assert!(state.in_string());
        assert_eq!(
            lex_with("   ", &mut state),
            vec![(TokenKind::String, "   ".to_string())]
        );
        assert!(state.in_string());
    }

    #[test]
    fn test_edge_blank_line_inside_string() {
        let mut state = LexerState::new();
        lex_with("`open", &mut state);
        assert!(lex_with("", &mut state).is_empty());
        assert!(state.in_string());
        assert_eq!(lex_with("close` x", &mut state)[0].0, TokenKind::String);
    }

    #[test]
    fn test_edge_escaped_escape_before_quote() {
        let tokens = lex_all(r#""a\\" b"#);
        assert_eq!(tokens[0], (TokenKind::String, r#""a\\""#.to_string()));
        assert_eq!(tokens[1].0, TokenKind::Variable);
    }

    #[test]
    fn test_edge_lone_escape_marker() {
        assert_eq!(lex_all(r"\"), vec![(TokenKind::Operator, r"\".to_string())]);
    }

    #[test]
    fn test_edge_hex_bounds() {
        assert_eq!(lex_all("0x0")[0], (TokenKind::Number, "0x0".to_string()));
        assert_eq!(
            lex_all("0xDEADbeef")[0],
            (TokenKind::Number, "0xDEADbeef".to_string())
        );
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex_all("007")[0], (TokenKind::Number, "007".to_string()));
    }

    #[test]
    fn test_edge_number_then_identifier() {
        let tokens = lex_all("1e10");
        assert_eq!(tokens[0], (TokenKind::Number, "1".to_string()));
        assert_eq!(tokens[1], (TokenKind::Variable, "e10".to_string()));
    }

    #[test]
    fn test_edge_minus_after_value() {
        let tokens = lex_all("a = xs[0] -1");
        assert_eq!(tokens[6], (TokenKind::Operator, "-".to_string()));
        assert_eq!(tokens[7], (TokenKind::Number, "1".to_string()));
    }

    #[test]
    fn test_edge_all_paired_operators() {
        let tokens = lex_all("a == b != c >= d <= e && f || g |> h");
        let ops: Vec<_> = tokens
            .iter()
            .filter(|(kind, _)| *kind == TokenKind::Operator)
            .map(|(_, text)| text.as_str())
            .collect();
        assert_eq!(ops, ["==", "!=", ">=", "<=", "&&", "||", "|>"]);
    }

    #[test]
    fn test_edge_generic_operator_chars() {
        for c in ['%', '~', '$', ';', '\''] {
            let line = format!("a {c} b");
            assert_eq!(lex_all(&line)[1], (TokenKind::Operator, c.to_string()));
        }
    }

    #[test]
    fn test_edge_consecutive_operators() {
        let tokens = lex_all("a=-1");
        assert_eq!(tokens[1], (TokenKind::Operator, "=".to_string()));
        assert_eq!(tokens[2], (TokenKind::Number, "-1".to_string()));
    }

    #[test]
    fn test_edge_triple_ellipsis_run() {
        let tokens = lex_all("f(a......)");
        assert_eq!(tokens[3], (TokenKind::Operator, "...".to_string()));
        assert_eq!(tokens[4], (TokenKind::Operator, "...".to_string()));
    }

    #[test]
    fn test_edge_non_ascii_is_unclassified() {
        let tokens = lex_all("é = 1");
        assert_eq!(tokens[0], (TokenKind::Unclassified, "é".to_string()));
        assert_eq!(tokens[0].1.len(), 2);
        assert_eq!(tokens[1].0, TokenKind::Operator);
    }

    #[test]
    fn test_edge_non_ascii_in_string_and_comment() {
        let tokens = lex_all("\"héllo\" # ünïcode");
        assert_eq!(tokens[0], (TokenKind::String, "\"héllo\"".to_string()));
        assert_eq!(tokens[1], (TokenKind::Comment, "# ünïcode".to_string()));
    }

    #[test]
    fn test_edge_nested_brackets_restore_lock() {
        let mut state = LexerState::new();
        lex_with("let x = [[(", &mut state);
        assert_eq!(state.bracket_depth(), 3);
        lex_with(")]]", &mut state);
        assert_eq!(state.bracket_depth(), 0);
        assert!(state.is_macro_locked());
    }

    #[test]
    fn test_edge_close_bracket_underflow() {
        let mut state = LexerState::new();
        lex_with("}}}", &mut state);
        assert_eq!(state.bracket_depth(), 0);
        assert!(!state.is_macro_locked());
        assert_eq!(lex_with("go now", &mut state)[0].0, TokenKind::Keyword);
    }

    #[test]
    fn test_edge_second_keyword_in_statement() {
        let tokens = lex_all("return not x");
        assert_eq!(tokens[0].0, TokenKind::Keyword);
        assert_eq!(tokens[1].0, TokenKind::Variable);
    }

    #[test]
    fn test_edge_dot_carries_across_lines() {
        let mut state = LexerState::new();
        lex_with("xs.", &mut state);
        assert!(state.is_after_dot());
        // A new line resets statement position
        assert_eq!(lex_with("len", &mut state)[0].0, TokenKind::Variable);
    }

    #[test]
    fn test_edge_double_ampersand_is_not_reference() {
        let tokens = lex_all("a &&b");
        assert_eq!(tokens[1], (TokenKind::Operator, "&&".to_string()));
        assert_eq!(tokens[2].0, TokenKind::Variable);
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let tokens = tokenize_line("\t x \r", &mut LexerState::new());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].span, Span::new(2, 3));
    }

    #[test]
    fn test_edge_comment_marker_in_string() {
        assert_eq!(kinds("\"# not a comment\""), [TokenKind::String]);
    }

    #[test]
    fn test_edge_annotation_then_keyword_position() {
        let tokens = lex_all("@inline fn f(x) { x }");
        assert_eq!(tokens[0], (TokenKind::Annotation, "@inline".to_string()));
        assert_eq!(tokens[1], (TokenKind::Variable, "fn".to_string()));
    }
}
