//! Container parsing
//!
//! Handles lists, tuples/grouping, sets and mappings. All containers allow
//! a trailing comma. `(expr)` is grouping, not a 1-tuple; a 1-tuple needs
//! the trailing comma, and `{}` is the empty mapping — matching the
//! literal syntax of the payload language.

use crate::ast::{Expr, ExprKind};
use crate::error::SyntaxError;
use crate::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse `[a, b, c]`
    pub(crate) fn parse_list(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.expect(Token::LBracket)?;
        let elements = self.parse_elements(&Token::RBracket)?;
        let end = self.expect(Token::RBracket)?;
        Ok(Expr::new(
            ExprKind::List(elements),
            start.span.merge(&end.span),
        ))
    }

    /// Parse a parenthesized expression or tuple
    pub(crate) fn parse_parenthesized_or_tuple(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.expect(Token::LParen)?;

        // Empty tuple
        if self.check(&Token::RParen) {
            let end = self.expect(Token::RParen)?;
            return Ok(Expr::new(
                ExprKind::Tuple(Vec::new()),
                start.span.merge(&end.span),
            ));
        }

        let first = self.parse_expression()?;

        // No comma: plain grouping
        if !self.check(&Token::Comma) {
            self.expect(Token::RParen)?;
            return Ok(first);
        }

        // Tuple: at least one comma
        let mut elements = vec![first];
        while self.check(&Token::Comma) {
            self.bump()?;
            if self.check(&Token::RParen) {
                break;
            }
            elements.push(self.parse_expression()?);
        }

        let end = self.expect(Token::RParen)?;
        Ok(Expr::new(
            ExprKind::Tuple(elements),
            start.span.merge(&end.span),
        ))
    }

    /// Parse `{...}` — empty mapping, a set, or a mapping depending on
    /// whether the first element is followed by a colon
    pub(crate) fn parse_set_or_dict(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.expect(Token::LBrace)?;

        if self.check(&Token::RBrace) {
            let end = self.expect(Token::RBrace)?;
            return Ok(Expr::new(
                ExprKind::Dict(Vec::new()),
                start.span.merge(&end.span),
            ));
        }

        let first = self.parse_expression()?;

        if self.check(&Token::Colon) {
            self.bump()?;
            let first_value = self.parse_expression()?;
            let mut pairs = vec![(first, first_value)];

            while self.check(&Token::Comma) {
                self.bump()?;
                if self.check(&Token::RBrace) {
                    break;
                }
                let key = self.parse_expression()?;
                self.expect(Token::Colon)?;
                let value = self.parse_expression()?;
                pairs.push((key, value));
            }

            let end = self.expect(Token::RBrace)?;
            return Ok(Expr::new(
                ExprKind::Dict(pairs),
                start.span.merge(&end.span),
            ));
        }

        let mut elements = vec![first];
        while self.check(&Token::Comma) {
            self.bump()?;
            if self.check(&Token::RBrace) {
                break;
            }
            elements.push(self.parse_expression()?);
        }

        let end = self.expect(Token::RBrace)?;
        Ok(Expr::new(
            ExprKind::Set(elements),
            start.span.merge(&end.span),
        ))
    }

    /// Parse comma-separated expressions until the closing token
    fn parse_elements(&mut self, close: &Token) -> Result<Vec<Expr>, SyntaxError> {
        let mut elements = Vec::new();

        if self.check(close) {
            return Ok(elements);
        }

        loop {
            elements.push(self.parse_expression()?);
            if !self.check(&Token::Comma) {
                break;
            }
            self.bump()?;
            if self.check(close) {
                break;
            }
        }

        Ok(elements)
    }
}
