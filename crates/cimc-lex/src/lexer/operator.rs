//! Operator and punctuation lexing.
//!
//! Multi-character operators are matched greedily, longest first:
//! `<<= >>= ... << >> == != <= >= && || ++ -- += -= *= /= %= &= |= ^= ->`.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `.` or `...`.
    pub(crate) fn lex_dot(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1) == '.' {
            self.cursor.advance();
            self.cursor.advance();
            self.token(TokenKind::Ellipsis)
        } else {
            self.token(TokenKind::Dot)
        }
    }

    /// Lexes `+`, `++`, or `+=`.
    pub(crate) fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('+') {
            self.token(TokenKind::PlusPlus)
        } else if self.cursor.match_char('=') {
            self.token(TokenKind::PlusEq)
        } else {
            self.token(TokenKind::Plus)
        }
    }

    /// Lexes `-`, `--`, `-=`, or `->`.
    pub(crate) fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('-') {
            self.token(TokenKind::MinusMinus)
        } else if self.cursor.match_char('=') {
            self.token(TokenKind::MinusEq)
        } else if self.cursor.match_char('>') {
            self.token(TokenKind::Arrow)
        } else {
            self.token(TokenKind::Minus)
        }
    }

    /// Lexes `*` or `*=`.
    pub(crate) fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::StarEq)
        } else {
            self.token(TokenKind::Star)
        }
    }

    /// Lexes `/` or `/=`. Comments are consumed as trivia before dispatch,
    /// so a slash here is always an operator.
    pub(crate) fn lex_slash(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::SlashEq)
        } else {
            self.token(TokenKind::Slash)
        }
    }

    /// Lexes `%` or `%=`.
    pub(crate) fn lex_percent(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::PercentEq)
        } else {
            self.token(TokenKind::Percent)
        }
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::EqEq)
        } else {
            self.token(TokenKind::Eq)
        }
    }

    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::BangEq)
        } else {
            self.token(TokenKind::Bang)
        }
    }

    /// Lexes `<`, `<=`, `<<`, or `<<=`.
    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::LtEq)
        } else if self.cursor.match_char('<') {
            if self.cursor.match_char('=') {
                self.token(TokenKind::ShlEq)
            } else {
                self.token(TokenKind::Shl)
            }
        } else {
            self.token(TokenKind::Lt)
        }
    }

    /// Lexes `>`, `>=`, `>>`, or `>>=`.
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::GtEq)
        } else if self.cursor.match_char('>') {
            if self.cursor.match_char('=') {
                self.token(TokenKind::ShrEq)
            } else {
                self.token(TokenKind::Shr)
            }
        } else {
            self.token(TokenKind::Gt)
        }
    }

    /// Lexes `&`, `&&`, or `&=`.
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.token(TokenKind::AmpAmp)
        } else if self.cursor.match_char('=') {
            self.token(TokenKind::AmpEq)
        } else {
            self.token(TokenKind::Amp)
        }
    }

    /// Lexes `|`, `||`, or `|=`.
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.token(TokenKind::PipePipe)
        } else if self.cursor.match_char('=') {
            self.token(TokenKind::PipeEq)
        } else {
            self.token(TokenKind::Pipe)
        }
    }

    /// Lexes `^` or `^=`.
    pub(crate) fn lex_caret(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token(TokenKind::CaretEq)
        } else {
            self.token(TokenKind::Caret)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};

    fn lex_op(source: &str) -> TokenKind {
        let mut lexer = Lexer::new(source);
        lexer.next_token().expect("lexing failed").kind
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(lex_op("+"), TokenKind::Plus);
        assert_eq!(lex_op("-"), TokenKind::Minus);
        assert_eq!(lex_op("*"), TokenKind::Star);
        assert_eq!(lex_op("/"), TokenKind::Slash);
        assert_eq!(lex_op("%"), TokenKind::Percent);
        assert_eq!(lex_op("="), TokenKind::Eq);
        assert_eq!(lex_op("<"), TokenKind::Lt);
        assert_eq!(lex_op(">"), TokenKind::Gt);
        assert_eq!(lex_op("&"), TokenKind::Amp);
        assert_eq!(lex_op("|"), TokenKind::Pipe);
        assert_eq!(lex_op("!"), TokenKind::Bang);
        assert_eq!(lex_op("^"), TokenKind::Caret);
        assert_eq!(lex_op("~"), TokenKind::Tilde);
        assert_eq!(lex_op("."), TokenKind::Dot);
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(lex_op("=="), TokenKind::EqEq);
        assert_eq!(lex_op("!="), TokenKind::BangEq);
        assert_eq!(lex_op("<="), TokenKind::LtEq);
        assert_eq!(lex_op(">="), TokenKind::GtEq);
        assert_eq!(lex_op("<<"), TokenKind::Shl);
        assert_eq!(lex_op(">>"), TokenKind::Shr);
        assert_eq!(lex_op("&&"), TokenKind::AmpAmp);
        assert_eq!(lex_op("||"), TokenKind::PipePipe);
        assert_eq!(lex_op("++"), TokenKind::PlusPlus);
        assert_eq!(lex_op("--"), TokenKind::MinusMinus);
        assert_eq!(lex_op("+="), TokenKind::PlusEq);
        assert_eq!(lex_op("-="), TokenKind::MinusEq);
        assert_eq!(lex_op("*="), TokenKind::StarEq);
        assert_eq!(lex_op("/="), TokenKind::SlashEq);
        assert_eq!(lex_op("%="), TokenKind::PercentEq);
        assert_eq!(lex_op("&="), TokenKind::AmpEq);
        assert_eq!(lex_op("|="), TokenKind::PipeEq);
        assert_eq!(lex_op("^="), TokenKind::CaretEq);
        assert_eq!(lex_op("->"), TokenKind::Arrow);
    }

    #[test]
    fn test_three_char_operators() {
        assert_eq!(lex_op("<<="), TokenKind::ShlEq);
        assert_eq!(lex_op(">>="), TokenKind::ShrEq);
        assert_eq!(lex_op("..."), TokenKind::Ellipsis);
    }

    #[test]
    fn test_longest_match_is_greedy() {
        let mut lexer = Lexer::new("<<=<<<=");
        let tokens = lexer.tokenize().expect("lexing failed");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ShlEq,
                TokenKind::Shl,
                TokenKind::LtEq,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_two_dots_are_two_tokens() {
        let mut lexer = Lexer::new("..");
        let tokens = lexer.tokenize().expect("lexing failed");
        assert_eq!(tokens[0].kind, TokenKind::Dot);
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }
}
