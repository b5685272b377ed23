//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the per-token dispatch, and
//! the driver-facing `tokenize` entry point.

use cimc_util::Diagnostic;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for the Cim source language.
///
/// Produces tokens on demand via [`Lexer::next_token`] or all at once via
/// [`Lexer::tokenize`]. Warnings (currently only the unterminated block
/// comment) accumulate on the lexer and are drained by the driver.
pub struct Lexer<'a> {
    /// Character cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column where the current token starts (1-based).
    pub(crate) token_start_column: u32,

    /// Non-fatal findings, surfaced by the driver after the scan.
    pub(crate) warnings: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            warnings: Vec::new(),
        }
    }

    /// Scans the whole input into a token sequence ending with `Eof`.
    ///
    /// A malformed numeric literal is emitted as an `Invalid` token and
    /// terminates the scan; the `Eof` terminator is still appended so the
    /// sequence shape holds for every successful return.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::Eof => {
                    tokens.push(token);
                    break;
                },
                TokenKind::Invalid => {
                    tokens.push(token);
                    tokens.push(Token::new(
                        TokenKind::Eof,
                        String::new(),
                        self.cursor.line(),
                        self.cursor.column(),
                    ));
                    break;
                },
                _ => tokens.push(token),
            }
        }
        Ok(tokens)
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::new(
                TokenKind::Eof,
                String::new(),
                self.token_start_line,
                self.token_start_column,
            ));
        }

        match self.cursor.current_char() {
            '(' => Ok(self.single(TokenKind::LParen)),
            ')' => Ok(self.single(TokenKind::RParen)),
            '{' => Ok(self.single(TokenKind::LBrace)),
            '}' => Ok(self.single(TokenKind::RBrace)),
            '[' => Ok(self.single(TokenKind::LBracket)),
            ']' => Ok(self.single(TokenKind::RBracket)),
            ';' => Ok(self.single(TokenKind::Semicolon)),
            ',' => Ok(self.single(TokenKind::Comma)),
            ':' => Ok(self.single(TokenKind::Colon)),
            '?' => Ok(self.single(TokenKind::Question)),
            '~' => Ok(self.single(TokenKind::Tilde)),
            '.' => Ok(self.lex_dot()),
            '+' => Ok(self.lex_plus()),
            '-' => Ok(self.lex_minus()),
            '*' => Ok(self.lex_star()),
            '/' => Ok(self.lex_slash()),
            '%' => Ok(self.lex_percent()),
            '=' => Ok(self.lex_equals()),
            '!' => Ok(self.lex_bang()),
            '<' => Ok(self.lex_less()),
            '>' => Ok(self.lex_greater()),
            '&' => Ok(self.lex_ampersand()),
            '|' => Ok(self.lex_pipe()),
            '^' => Ok(self.lex_caret()),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.lex_identifier()),
            c if c.is_ascii_digit() => Ok(self.lex_number()),
            c => Err(LexError::UnexpectedCharacter {
                character: c,
                line: self.token_start_line,
                column: self.token_start_column,
            }),
        }
    }

    /// Drains the warnings collected so far.
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }

    /// Finishes a token whose lexeme runs from the token start to the
    /// current cursor position.
    pub(crate) fn token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start).to_string(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Consumes one character and finishes a single-character token.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(kind)
    }
}
