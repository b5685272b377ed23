//! cimc-par - Recursive-descent parser for the Cim front end.
//!
//! Consumes the lexer's token sequence (always terminated by `Eof`) and
//! builds a [`Program`]: the ordered globals and functions of a single
//! translation unit. The parser is hand-written recursive descent with
//! one-token lookahead; expression parsing is a precedence-climbing chain
//! mirroring the language's operator table. The first syntactic fault
//! aborts parsing with a [`ParseError`].

pub mod ast;
mod edge_cases;
pub mod error;
mod expr;
mod items;
mod stmt;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind};

use cimc_lex::{Token, TokenKind};
use cimc_util::NodeId;

/// Recursive descent parser with one-token lookahead.
pub struct Parser {
    /// Token stream from the lexer, `Eof`-terminated.
    tokens: Vec<Token>,

    /// Current position in the token stream.
    position: usize,

    /// Counter for stamping scope-opening nodes.
    next_node_id: u32,
}

impl Parser {
    /// Creates a parser over a token stream.
    ///
    /// The lexer always terminates its output with an `Eof` token; an empty
    /// stream is completed with one so lookahead never runs off the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::new(TokenKind::Eof, String::new(), 1, 1));
        }
        Self {
            tokens,
            position: 0,
            next_node_id: 0,
        }
    }

    /// Allocates the id for a scope-opening node.
    pub(crate) fn fresh_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    /// Returns the current token without consuming it.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    /// Returns the most recently consumed token.
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    /// True when the current token is `Eof`.
    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes and returns the current token.
    pub(crate) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous().clone()
    }

    /// True when the current token has the given kind.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return kind == TokenKind::Eof;
        }
        self.peek().kind == kind
    }

    /// Consumes the current token if it has the given kind.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the given kind or fails with `err_kind`.
    ///
    /// At end of input the fault is reported as `UnexpectedEof` instead, as
    /// every expectation failure there is really a truncated program.
    pub(crate) fn consume(
        &mut self,
        kind: TokenKind,
        err_kind: ParseErrorKind,
        message: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        if self.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedEof,
                self.peek().line,
                format!("{} (unexpected end of file)", message),
            ));
        }
        Err(ParseError::new(err_kind, self.peek().line, message))
    }

    /// True when the current token can begin a type: one of the type
    /// keywords, or the identifier spelling `string`.
    pub(crate) fn is_type_specifier(&self) -> bool {
        let token = self.peek();
        if token.kind == TokenKind::Identifier && token.lexeme == "string" {
            return true;
        }
        token.kind.is_type_keyword()
    }
}
