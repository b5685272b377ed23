//! String and character literal lexing.
//!
//! Lexemes are the bytes between the quotes with escape sequences preserved
//! literally; escape processing is not this front end's job.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// A backslash escapes the following byte (including `"` and `\`), so
    /// an escaped quote does not terminate the literal. Newlines inside the
    /// literal are legal and advance the line counter. Reaching end of file
    /// before the closing quote is `UnterminatedString`.
    pub(crate) fn lex_string(&mut self) -> Result<Token, LexError> {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString {
                    line: self.token_start_line,
                    column: self.token_start_column,
                });
            }
            match self.cursor.current_char() {
                '"' => break,
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                },
                _ => self.cursor.advance(),
            }
        }

        let content = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance(); // closing quote
        Ok(Token::new(
            TokenKind::StringLit,
            content,
            self.token_start_line,
            self.token_start_column,
        ))
    }

    /// Lexes a character literal: one character or a two-character escape
    /// such as `\n`, then the closing quote. Anything else is
    /// `UnterminatedChar`.
    pub(crate) fn lex_char(&mut self) -> Result<Token, LexError> {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Err(self.unterminated_char());
        }

        if self.cursor.current_char() == '\\' {
            self.cursor.advance();
            if self.cursor.is_at_end() {
                return Err(self.unterminated_char());
            }
            self.cursor.advance();
        } else {
            self.cursor.advance();
        }

        if self.cursor.current_char() != '\'' {
            return Err(self.unterminated_char());
        }

        let content = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance(); // closing quote
        Ok(Token::new(
            TokenKind::CharLit,
            content,
            self.token_start_line,
            self.token_start_column,
        ))
    }

    fn unterminated_char(&self) -> LexError {
        LexError::UnterminatedChar {
            line: self.token_start_line,
            column: self.token_start_column,
        }
    }
}
