//! Numeric literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal: one or more digits, optionally followed by
    /// `.` and more digits. No decimal point produces `IntLit`, otherwise
    /// `FloatLit`.
    ///
    /// A digit run glued to an identifier character (`123abc`) is a
    /// malformed literal: the whole erroneous run is consumed up to
    /// whitespace or `;` and emitted as a single `Invalid` token, which
    /// terminates lexing.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut kind = TokenKind::IntLit;
        if self.cursor.current_char() == '.' {
            kind = TokenKind::FloatLit;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let next = self.cursor.current_char();
        if next.is_ascii_alphabetic() || next == '_' {
            self.consume_invalid_run();
            return self.token(TokenKind::Invalid);
        }

        self.token(kind)
    }

    /// Consumes the remainder of a malformed literal up to whitespace, `;`,
    /// or end of file.
    fn consume_invalid_run(&mut self) {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c.is_whitespace() || c == ';' {
                break;
            }
            self.cursor.advance();
        }
    }
}
