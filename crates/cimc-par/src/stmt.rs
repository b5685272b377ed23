//! Statement parsing: blocks, control flow, declarations, expression
//! statements.

use crate::ast::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;
use cimc_lex::TokenKind;

impl Parser {
    /// Parses a single statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.peek().line;
        if self.match_kind(TokenKind::KwIf) {
            return self.parse_if_statement(line);
        }
        if self.match_kind(TokenKind::KwWhile) {
            return self.parse_while_statement(line);
        }
        if self.match_kind(TokenKind::KwFor) {
            return self.parse_for_statement(line);
        }
        if self.match_kind(TokenKind::KwReturn) {
            return self.parse_return_statement(line);
        }
        if self.match_kind(TokenKind::KwBreak) {
            self.consume(
                TokenKind::Semicolon,
                ParseErrorKind::ExpectedSemicolonAfterStatement,
                "expected ';' after 'break'",
            )?;
            return Ok(Stmt::Break { line });
        }
        if self.match_kind(TokenKind::KwContinue) {
            self.consume(
                TokenKind::Semicolon,
                ParseErrorKind::ExpectedSemicolonAfterStatement,
                "expected ';' after 'continue'",
            )?;
            return Ok(Stmt::Continue { line });
        }
        if self.check(TokenKind::LBrace) {
            return Ok(Stmt::Block(self.parse_block()?));
        }
        if self.is_type_specifier() {
            return self.parse_variable_declaration_statement();
        }
        self.parse_expression_statement()
    }

    /// Parses a variable declaration statement.
    pub(crate) fn parse_variable_declaration_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.peek().line;
        let type_name = self.advance().lexeme;
        let name_token = self.consume(
            TokenKind::Identifier,
            ParseErrorKind::ExpectedIdentifier,
            "expected variable name",
        )?;
        let decl = self.finish_parse_variable(type_name, name_token.lexeme, line)?;
        Ok(Stmt::VarDecl(decl))
    }

    /// Parses an expression statement.
    pub(crate) fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.peek().line;
        let expr = self.parse_expression()?;
        self.consume(
            TokenKind::Semicolon,
            ParseErrorKind::ExpectedSemicolonAfterStatement,
            "expected ';' after expression",
        )?;
        Ok(Stmt::Expr(ExprStmt { expr, line }))
    }

    /// Parses a brace-delimited block.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        let line = self.peek().line;
        self.consume(
            TokenKind::LBrace,
            ParseErrorKind::ExpectedLeftBraceForBody,
            "expected '{' to start a block",
        )?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.consume(
            TokenKind::RBrace,
            ParseErrorKind::FailedToFindToken,
            "expected '}' to end a block",
        )?;

        let id = self.fresh_node_id();
        Ok(Block {
            statements,
            line,
            id,
        })
    }

    /// Parses an `if` statement; the keyword is already consumed.
    fn parse_if_statement(&mut self, line: u32) -> Result<Stmt, ParseError> {
        self.consume(
            TokenKind::LParen,
            ParseErrorKind::ExpectedLeftParenAfterKeyword,
            "expected '(' after 'if'",
        )?;
        let condition = self.parse_expression()?;
        self.consume(
            TokenKind::RParen,
            ParseErrorKind::ExpectedRightParenAfterCondition,
            "expected ')' after if condition",
        )?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_kind(TokenKind::KwElse) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            line,
        }))
    }

    /// Parses a `while` statement; the keyword is already consumed.
    fn parse_while_statement(&mut self, line: u32) -> Result<Stmt, ParseError> {
        self.consume(
            TokenKind::LParen,
            ParseErrorKind::ExpectedLeftParenAfterKeyword,
            "expected '(' after 'while'",
        )?;
        let condition = self.parse_expression()?;
        self.consume(
            TokenKind::RParen,
            ParseErrorKind::ExpectedRightParenAfterCondition,
            "expected ')' after while condition",
        )?;
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While(WhileStmt {
            condition,
            body,
            line,
        }))
    }

    /// Parses a `for` statement; the keyword is already consumed.
    ///
    /// All three clauses are optional. The initializer is either a variable
    /// declaration or an expression statement, both of which consume their
    /// own semicolon.
    fn parse_for_statement(&mut self, line: u32) -> Result<Stmt, ParseError> {
        self.consume(
            TokenKind::LParen,
            ParseErrorKind::ExpectedLeftParenAfterKeyword,
            "expected '(' after 'for'",
        )?;

        let initializer = if self.match_kind(TokenKind::Semicolon) {
            None
        } else if self.is_type_specifier() {
            Some(self.parse_variable_declaration_statement()?)
        } else {
            Some(self.parse_expression_statement()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.consume(
            TokenKind::Semicolon,
            ParseErrorKind::ExpectedSemicolonAfterStatement,
            "expected ';' after loop condition",
        )?;

        let step = if !self.check(TokenKind::RParen) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.consume(
            TokenKind::RParen,
            ParseErrorKind::ExpectedRightParenAfterCondition,
            "expected ')' after for clauses",
        )?;

        let body = Box::new(self.parse_statement()?);
        let id = self.fresh_node_id();

        Ok(Stmt::For(Box::new(ForStmt {
            initializer,
            condition,
            step,
            body,
            line,
            id,
        })))
    }

    /// Parses a `return` statement; the keyword is already consumed.
    fn parse_return_statement(&mut self, line: u32) -> Result<Stmt, ParseError> {
        let value = if !self.check(TokenKind::Semicolon) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.consume(
            TokenKind::Semicolon,
            ParseErrorKind::ExpectedSemicolonAfterStatement,
            "expected ';' after return value",
        )?;
        Ok(Stmt::Return(ReturnStmt { value, line }))
    }
}
