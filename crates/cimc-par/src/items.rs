//! Top-level parsing: the program and its function and global declarations.

use crate::ast::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;
use cimc_lex::TokenKind;

impl Parser {
    /// Parses a complete translation unit.
    ///
    /// Every top-level declaration starts with a type specifier and a name;
    /// a following `(` makes it a function, `=` or `;` a global variable.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::default();

        while !self.is_at_end() {
            let line = self.peek().line;
            if !self.is_type_specifier() {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedTypeSpecifier,
                    line,
                    "expected a type specifier for top-level declaration",
                ));
            }
            let type_name = self.advance().lexeme;
            let name_token = self.consume(
                TokenKind::Identifier,
                ParseErrorKind::ExpectedIdentifier,
                "expected identifier for declaration",
            )?;
            let name = name_token.lexeme;

            if self.check(TokenKind::LParen) {
                program
                    .functions
                    .push(self.finish_parse_function(type_name, name, line)?);
            } else if self.check(TokenKind::Eq) || self.check(TokenKind::Semicolon) {
                program
                    .globals
                    .push(self.finish_parse_variable(type_name, name, line)?);
            } else {
                return Err(ParseError::new(
                    ParseErrorKind::FailedToFindToken,
                    self.peek().line,
                    "expected '(' for function declaration or '=' or ';' for variable declaration",
                ));
            }
        }

        Ok(program)
    }

    /// Parses the remainder of a function declaration after its return type
    /// and name.
    fn finish_parse_function(
        &mut self,
        return_type: String,
        name: String,
        line: u32,
    ) -> Result<FunctionDecl, ParseError> {
        self.consume(
            TokenKind::LParen,
            ParseErrorKind::FailedToFindToken,
            "expected '(' after function name",
        )?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                if !self.is_type_specifier() {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedTypeSpecifier,
                        self.peek().line,
                        "expected parameter type",
                    ));
                }
                let param_type = self.advance().lexeme;
                let param_name = self.consume(
                    TokenKind::Identifier,
                    ParseErrorKind::ExpectedIdentifier,
                    "expected parameter name",
                )?;
                params.push(Param::new(param_type, param_name.lexeme, param_name.line));

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(
            TokenKind::RParen,
            ParseErrorKind::FailedToFindToken,
            "expected ')' after parameters",
        )?;

        let body = self.parse_block()?;
        let id = self.fresh_node_id();

        Ok(FunctionDecl::new(return_type, name, params, body, line, id))
    }

    /// Parses the remainder of a variable declaration after its type and
    /// name: an optional initializer and the terminating semicolon.
    pub(crate) fn finish_parse_variable(
        &mut self,
        type_name: String,
        name: String,
        line: u32,
    ) -> Result<VarDecl, ParseError> {
        let initializer = if self.match_kind(TokenKind::Eq) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.consume(
            TokenKind::Semicolon,
            ParseErrorKind::ExpectedSemicolonAfterStatement,
            "expected ';' after variable declaration",
        )?;
        Ok(VarDecl::new(type_name, name, initializer, line))
    }
}
