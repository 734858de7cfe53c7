//! Literal and name parsing
//!
//! Handles keyword literals, signed numbers, strings, and dotted
//! identifier chains. Number tokens are normalized here (sign applied,
//! radix prefix and underscore groups stripped); integer conversion is
//! deferred to lowering so overflow stays a semantic failure.

use crate::ast::{Expr, ExprKind};
use crate::error::SyntaxError;
use crate::span::Span;
use crate::token::Token;

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse `true`, `false` or `null`
    pub(crate) fn parse_keyword_literal(&mut self) -> Result<Expr, SyntaxError> {
        let token = self
            .bump()?
            .ok_or_else(|| SyntaxError::unexpected_eof("literal"))?;
        let kind = match token.token {
            Token::KwTrue => ExprKind::Bool(true),
            Token::KwFalse => ExprKind::Bool(false),
            Token::KwNull => ExprKind::Null,
            _ => {
                return Err(SyntaxError::unexpected_token(
                    token.text,
                    "'true', 'false' or 'null'",
                    token.span,
                ))
            }
        };
        Ok(Expr::new(kind, token.span))
    }

    /// Parse a number with a single leading `+` or `-`
    pub(crate) fn parse_signed_number(&mut self) -> Result<Expr, SyntaxError> {
        let sign = self
            .bump()?
            .ok_or_else(|| SyntaxError::unexpected_eof("number"))?;
        let negative = sign.token == Token::Minus;

        let is_number = self
            .current
            .as_ref()
            .map(|t| t.token.is_number())
            .unwrap_or(false);
        if !is_number {
            return match self.current.as_ref() {
                Some(t) => Err(SyntaxError::unexpected_token(t.text, "number", t.span)),
                None => Err(SyntaxError::unexpected_eof("number")),
            };
        }

        let mut expr = self.parse_number(Some(negative))?;
        expr.span = sign.span.merge(&expr.span);
        Ok(expr)
    }

    /// Parse a number token into an Int or Float node
    pub(crate) fn parse_number(&mut self, negative: Option<bool>) -> Result<Expr, SyntaxError> {
        let token = self
            .bump()?
            .ok_or_else(|| SyntaxError::unexpected_eof("number"))?;
        let negative = negative.unwrap_or(false);

        if token.token.is_integer() {
            let (radix, digits) = match token.token {
                Token::BinaryLiteral => (2, &token.text[2..]),
                Token::OctalLiteral => (8, &token.text[2..]),
                Token::HexLiteral => (16, &token.text[2..]),
                _ => (10, token.text),
            };
            let mut normalized = String::with_capacity(digits.len() + 1);
            if negative {
                normalized.push('-');
            }
            normalized.extend(digits.chars().filter(|c| *c != '_'));
            return Ok(Expr::new(
                ExprKind::Int {
                    digits: normalized,
                    radix,
                },
                token.span,
            ));
        }

        let mut normalized: String = token.text.chars().filter(|c| *c != '_').collect();
        if negative {
            normalized.insert(0, '-');
        }
        let value: f64 = normalized.parse().map_err(|_| {
            SyntaxError::unexpected_token(token.text, "float literal", token.span)
        })?;
        Ok(Expr::new(ExprKind::Float(value), token.span))
    }

    /// Parse a string literal token, keeping the body raw (escapes are
    /// decoded at lowering time so a bad escape is a semantic error)
    pub(crate) fn parse_string(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.expect(Token::StringLiteral)?;
        // Token text includes both quote characters
        let raw = token.text[1..token.text.len() - 1].to_string();
        Ok(Expr::new(ExprKind::Str { raw }, token.span))
    }

    /// Parse `ident(.ident)*`, returning the segments and covering span
    pub(crate) fn parse_name_segments(&mut self) -> Result<(Vec<String>, Span), SyntaxError> {
        let first = self.expect(Token::Identifier)?;
        let mut segments = vec![first.text.to_string()];
        let mut span = first.span;

        while self.check(&Token::Dot) {
            self.bump()?;
            let next = self.expect(Token::Identifier)?;
            segments.push(next.text.to_string());
            span = span.merge(&next.span);
        }

        Ok((segments, span))
    }
}
