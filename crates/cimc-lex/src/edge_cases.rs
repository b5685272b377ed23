//! Edge case and property tests for cimc-lex.

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        lexer
            .tokenize()
            .expect("lexing failed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert_eq!(kinds("  \t \r\n "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(4096);
        let mut lexer = Lexer::new(&name);
        let token = lexer.next_token().expect("lexing failed");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.lexeme.len(), 4096);
    }

    #[test]
    fn test_edge_all_45_keywords() {
        let source = "alignas alignof auto bool break case char const constexpr continue \
                      default do double else enum extern false float for goto if inline \
                      int long nullptr register restrict return short signed sizeof static \
                      static_assert struct switch thread_local true typedef typeof \
                      typeof_unqual union unsigned void volatile while";
        let toks = kinds(source);
        // 45 keywords plus Eof, none of them identifiers.
        assert_eq!(toks.len(), 46);
        assert!(!toks.contains(&TokenKind::Identifier));
    }

    #[test]
    fn test_edge_adjacent_operators_no_spaces() {
        assert_eq!(
            kinds("a=-b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Minus,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_edge_division_vs_comment() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("a //b\nc"),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_block_comment_does_not_nest() {
        assert_eq!(
            kinds("/* outer /* inner */ x"),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_high_bit_bytes_inside_string() {
        let toks = kinds("\"héllo\" x");
        assert_eq!(
            toks,
            vec![TokenKind::StringLit, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_edge_full_program() {
        let source = "int main() {\n    int x = 1 + 2;\n    return x;\n}\n";
        let toks = kinds(source);
        assert_eq!(toks.first(), Some(&TokenKind::KwInt));
        assert_eq!(toks.last(), Some(&TokenKind::Eof));
        assert_eq!(toks.iter().filter(|k| **k == TokenKind::Semicolon).count(), 2);
    }

    /// Vocabulary of lexemes whose token kind survives re-lexing in
    /// isolation. Quoted literals are excluded: their lexemes are the inner
    /// bytes, which do not re-lex to the same kind by design.
    fn vocab() -> Vec<(TokenKind, &'static str)> {
        vec![
            (TokenKind::KwInt, "int"),
            (TokenKind::KwWhile, "while"),
            (TokenKind::KwReturn, "return"),
            (TokenKind::KwTrue, "true"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Identifier, "count"),
            (TokenKind::Identifier, "_tmp"),
            (TokenKind::IntLit, "0"),
            (TokenKind::IntLit, "42"),
            (TokenKind::FloatLit, "3.14"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Comma, ","),
            (TokenKind::Plus, "+"),
            (TokenKind::Minus, "-"),
            (TokenKind::Star, "*"),
            (TokenKind::Slash, "/"),
            (TokenKind::Percent, "%"),
            (TokenKind::Eq, "="),
            (TokenKind::EqEq, "=="),
            (TokenKind::BangEq, "!="),
            (TokenKind::LtEq, "<="),
            (TokenKind::GtEq, ">="),
            (TokenKind::Shl, "<<"),
            (TokenKind::ShlEq, "<<="),
            (TokenKind::AmpAmp, "&&"),
            (TokenKind::PipePipe, "||"),
            (TokenKind::PlusPlus, "++"),
            (TokenKind::MinusMinus, "--"),
            (TokenKind::Arrow, "->"),
            (TokenKind::Ellipsis, "..."),
            (TokenKind::Amp, "&"),
            (TokenKind::Pipe, "|"),
            (TokenKind::Bang, "!"),
        ]
    }

    proptest! {
        /// Round-trip: joining lexemes with whitespace and re-lexing
        /// reproduces the same kind sequence.
        #[test]
        fn prop_kinds_stable_under_relex(
            picks in proptest::collection::vec(0usize..37, 0..40)
        ) {
            let vocab = vocab();
            let chosen: Vec<_> = picks.iter().map(|&i| vocab[i]).collect();
            let source: String = chosen
                .iter()
                .map(|(_, lexeme)| *lexeme)
                .collect::<Vec<_>>()
                .join(" ");

            let relexed = kinds(&source);
            let expected: Vec<_> = chosen
                .iter()
                .map(|(kind, _)| *kind)
                .chain(std::iter::once(TokenKind::Eof))
                .collect();
            prop_assert_eq!(relexed, expected);
        }
    }
}
