//! Expression parsing.
//!
//! Precedence-climbing chain, lowest binding first:
//! assignment, logical-or (`|`, `||`), logical-and (`&`, `&&`), equality,
//! comparison, term, factor, unary, call, primary. All binary levels are
//! left-associative; assignment is right-associative. Both spellings bind
//! at the logical levels; the node keeps the operator lexeme, and the type
//! checker tells `&`/`|` apart from `&&`/`||` by that string.

use crate::ast::*;
use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;
use cimc_lex::TokenKind;

impl Parser {
    /// Parses an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// assignment := logical-or ( "=" assignment )?
    ///
    /// Only an identifier may appear on the left of `=`.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_logical_or()?;

        if self.match_kind(TokenKind::Eq) {
            let line = self.previous().line;
            let value = self.parse_assignment()?;

            return match expr.kind {
                ExprKind::Identifier(target) => Ok(Expr::new(
                    ExprKind::Assignment {
                        target,
                        value: Box::new(value),
                    },
                    line,
                )),
                _ => Err(ParseError::new(
                    ParseErrorKind::InvalidAssignmentTarget,
                    line,
                    "invalid assignment target",
                )),
            };
        }

        Ok(expr)
    }

    /// logical-or := logical-and ( ("|" | "||") logical-and )*
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_logical_and()?;
        while self.check(TokenKind::Pipe) || self.check(TokenKind::PipePipe) {
            let token = self.advance();
            let right = self.parse_logical_and()?;
            expr = binary(expr, token.lexeme, right, token.line);
        }
        Ok(expr)
    }

    /// logical-and := equality ( ("&" | "&&") equality )*
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_equality()?;
        while self.check(TokenKind::Amp) || self.check(TokenKind::AmpAmp) {
            let token = self.advance();
            let right = self.parse_equality()?;
            expr = binary(expr, token.lexeme, right, token.line);
        }
        Ok(expr)
    }

    /// equality := comparison ( ("==" | "!=") comparison )*
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_comparison()?;
        while self.check(TokenKind::EqEq) || self.check(TokenKind::BangEq) {
            let token = self.advance();
            let right = self.parse_comparison()?;
            expr = binary(expr, token.lexeme, right, token.line);
        }
        Ok(expr)
    }

    /// comparison := term ( ("<" | ">" | "<=" | ">=") term )*
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_term()?;
        while self.check(TokenKind::Lt)
            || self.check(TokenKind::Gt)
            || self.check(TokenKind::LtEq)
            || self.check(TokenKind::GtEq)
        {
            let token = self.advance();
            let right = self.parse_term()?;
            expr = binary(expr, token.lexeme, right, token.line);
        }
        Ok(expr)
    }

    /// term := factor ( ("+" | "-") factor )*
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_factor()?;
        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            let token = self.advance();
            let right = self.parse_factor()?;
            expr = binary(expr, token.lexeme, right, token.line);
        }
        Ok(expr)
    }

    /// factor := unary ( ("*" | "/" | "%") unary )*
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_unary()?;
        while self.check(TokenKind::Star)
            || self.check(TokenKind::Slash)
            || self.check(TokenKind::Percent)
        {
            let token = self.advance();
            let right = self.parse_unary()?;
            expr = binary(expr, token.lexeme, right, token.line);
        }
        Ok(expr)
    }

    /// unary := ("!" | "-" | "++" | "--") unary | call
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(TokenKind::Bang)
            || self.check(TokenKind::Minus)
            || self.check(TokenKind::PlusPlus)
            || self.check(TokenKind::MinusMinus)
        {
            let token = self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: token.lexeme,
                    operand: Box::new(operand),
                },
                token.line,
            ));
        }
        self.parse_call()
    }

    /// call := primary ( "(" arguments? ")" )?
    ///
    /// Only an identifier can be called; any other primary followed by `(`
    /// is left alone for the caller to reject.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_primary()?;

        if self.check(TokenKind::LParen) {
            if let ExprKind::Identifier(callee) = &expr.kind {
                let callee = callee.clone();
                self.advance(); // '('
                let mut arguments = Vec::new();
                if !self.check(TokenKind::RParen) {
                    loop {
                        arguments.push(self.parse_expression()?);
                        if !self.match_kind(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                self.consume(
                    TokenKind::RParen,
                    ParseErrorKind::FailedToFindToken,
                    "expected ')' after arguments",
                )?;
                return Ok(Expr::new(ExprKind::Call { callee, arguments }, expr.line));
            }
        }

        Ok(expr)
    }

    /// primary := literal | identifier | "(" expression ")"
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let line = self.peek().line;

        match self.peek().kind {
            TokenKind::IntLit | TokenKind::FloatLit => {
                let token = self.advance();
                Ok(Expr::new(ExprKind::NumberLiteral(token.lexeme), line))
            },
            TokenKind::StringLit => {
                let token = self.advance();
                Ok(Expr::new(ExprKind::StringLiteral(token.lexeme), line))
            },
            TokenKind::CharLit => {
                let token = self.advance();
                Ok(Expr::new(ExprKind::CharLiteral(token.lexeme), line))
            },
            TokenKind::KwTrue => {
                self.advance();
                Ok(Expr::new(ExprKind::BoolLiteral(true), line))
            },
            TokenKind::KwFalse => {
                self.advance();
                Ok(Expr::new(ExprKind::BoolLiteral(false), line))
            },
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::new(ExprKind::Identifier(token.lexeme), line))
            },
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.consume(
                    TokenKind::RParen,
                    ParseErrorKind::FailedToFindToken,
                    "expected ')' after expression",
                )?;
                Ok(expr)
            },
            TokenKind::Invalid => Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                line,
                format!("unexpected invalid token '{}'", self.peek().lexeme),
            )),
            _ => Err(ParseError::new(
                ParseErrorKind::ExpectedExpression,
                line,
                "expected an expression",
            )),
        }
    }
}

/// Builds a binary node tagged with the operator's line.
fn binary(left: Expr, op: String, right: Expr, line: u32) -> Expr {
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        line,
    )
}
