//! Recursive descent parser for the restricted literal grammar
//!
//! Three entry points, one per input shape:
//!
//! * [`parse_source`] — a single expression (literal, container or name
//!   chain) covering the whole input,
//! * [`parse_assign_source`] — `target = value`,
//! * [`parse_call_source`] — `name(args...)` or a bare name chain.
//!
//! All of them require the input to be fully consumed; trailing tokens are
//! a syntax error, never silently ignored.

mod collections;
mod literals;

use crate::ast::{CallExpr, Expr};
use crate::error::SyntaxError;
use crate::lexer::{Lexer, SpannedToken};
use crate::span::Span;
use crate::token::Token;

/// Maximum expression nesting depth. Inputs are request payloads, so this
/// bounds recursion on adversarial input long before stack exhaustion.
pub(crate) const MAX_DEPTH: usize = 64;

/// Restricted-grammar parser
pub struct Parser<'a> {
    /// Source text
    pub(crate) source: &'a str,
    /// Lexer
    pub(crate) lexer: Lexer<'a>,
    /// Current token (one-token lookahead)
    pub(crate) current: Option<SpannedToken<'a>>,
    /// Current expression nesting depth
    pub(crate) depth: usize,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("source", &self.source)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<'a> Parser<'a> {
    /// Create a parser primed with the first token
    pub fn new(source: &'a str) -> Result<Self, SyntaxError> {
        let mut parser = Self {
            source,
            lexer: Lexer::new(source),
            current: None,
            depth: 0,
        };
        parser.bump()?;
        Ok(parser)
    }

    // ==================== Token Management ====================

    /// Advance to the next token, returning the one just consumed
    pub(crate) fn bump(&mut self) -> Result<Option<SpannedToken<'a>>, SyntaxError> {
        let prev = self.current.take();
        self.current = match self.lexer.next_token() {
            Some(Ok(token)) => Some(token),
            Some(Err(e)) => return Err(e),
            None => None,
        };
        Ok(prev)
    }

    /// Check if the current token matches
    pub(crate) fn check(&self, expected: &Token) -> bool {
        self.current
            .as_ref()
            .map(|t| &t.token == expected)
            .unwrap_or(false)
    }

    /// Peek at the token after the current one without consuming anything
    pub(crate) fn peek_next(&mut self) -> Option<Token> {
        match self.lexer.peek() {
            Some(Ok(token)) => Some(token.token.clone()),
            _ => None,
        }
    }

    /// Consume the current token if it matches, error otherwise
    pub(crate) fn expect(&mut self, expected: Token) -> Result<SpannedToken<'a>, SyntaxError> {
        match self.current.as_ref() {
            Some(t) if t.token == expected => match self.bump()? {
                Some(token) => Ok(token),
                None => Err(SyntaxError::unexpected_eof(format!("{:?}", expected))),
            },
            Some(t) => Err(SyntaxError::unexpected_token(
                t.text,
                format!("{:?}", expected),
                t.span,
            )),
            None => Err(SyntaxError::unexpected_eof(format!("{:?}", expected))),
        }
    }

    /// Error unless the whole input has been consumed
    pub(crate) fn expect_eof(&mut self) -> Result<(), SyntaxError> {
        match self.current.as_ref() {
            None => Ok(()),
            Some(t) => Err(SyntaxError::TrailingInput { span: t.span }),
        }
    }

    /// Get the span of the current token, or an empty span at EOF
    pub(crate) fn current_span(&self) -> Span {
        self.current
            .as_ref()
            .map(|t| t.span)
            .unwrap_or_else(|| Span::new(self.source.len(), self.source.len()))
    }

    /// Check if we're at end of input
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    // ==================== Expression Parsing ====================

    /// Parse a single expression, guarding recursion depth
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep {
                limit: MAX_DEPTH,
                span: self.current_span(),
            });
        }
        self.depth += 1;
        let result = self.parse_expression_inner();
        self.depth -= 1;
        result
    }

    fn parse_expression_inner(&mut self) -> Result<Expr, SyntaxError> {
        let token = self
            .current
            .as_ref()
            .ok_or_else(|| SyntaxError::unexpected_eof("expression"))?
            .token
            .clone();

        match &token {
            Token::KwTrue | Token::KwFalse | Token::KwNull => self.parse_keyword_literal(),
            Token::Plus | Token::Minus => self.parse_signed_number(),
            t if t.is_number() => self.parse_number(None),
            Token::StringLiteral => self.parse_string(),
            Token::Identifier => {
                let (segments, span) = self.parse_name_segments()?;
                Ok(Expr::new(crate::ast::ExprKind::Name(segments), span))
            }
            Token::LBracket => self.parse_list(),
            Token::LParen => self.parse_parenthesized_or_tuple(),
            Token::LBrace => self.parse_set_or_dict(),
            _ => {
                let t = self.current.as_ref().ok_or_else(|| {
                    SyntaxError::unexpected_eof("expression")
                })?;
                Err(SyntaxError::unexpected_token(t.text, "expression", t.span))
            }
        }
    }
}

// ==================== Entry Points ====================

/// Parse the whole input as a single expression
pub fn parse_source(source: &str) -> Result<Expr, SyntaxError> {
    let mut parser = Parser::new(source)?;
    let expr = parser.parse_expression()?;
    parser.expect_eof()?;
    Ok(expr)
}

/// Parse the whole input as `target = value`, returning both sides.
/// The target is returned as a general expression; the caller decides
/// whether its shape is an acceptable assignment target.
pub fn parse_assign_source(source: &str) -> Result<(Expr, Expr), SyntaxError> {
    let mut parser = Parser::new(source)?;
    let target = parser.parse_expression()?;
    parser.expect(Token::Eq)?;
    let value = parser.parse_expression()?;
    parser.expect_eof()?;
    Ok((target, value))
}

/// Parse the whole input as a call expression or bare method name
pub fn parse_call_source(source: &str) -> Result<CallExpr, SyntaxError> {
    let mut parser = Parser::new(source)?;
    let (segments, _span) = parser.parse_name_segments()?;

    if !parser.check(&Token::LParen) {
        parser.expect_eof()?;
        return Ok(CallExpr::Bare(segments.join(".")));
    }

    let (args, kwargs) = parser.parse_call_arguments()?;
    parser.expect_eof()?;
    Ok(CallExpr::Call {
        func: segments,
        args,
        kwargs,
    })
}

impl<'a> Parser<'a> {
    /// Parse `( arg, ..., kw=val, ... )` after the callee name.
    /// Positional arguments may not follow keyword arguments.
    fn parse_call_arguments(&mut self) -> Result<(Vec<Expr>, Vec<(String, Expr)>), SyntaxError> {
        self.expect(Token::LParen)?;

        let mut args = Vec::new();
        let mut kwargs: Vec<(String, Expr)> = Vec::new();

        if !self.check(&Token::RParen) {
            loop {
                if self.check(&Token::Identifier) && self.peek_next() == Some(Token::Eq) {
                    let name_token = self.expect(Token::Identifier)?;
                    self.expect(Token::Eq)?;
                    let value = self.parse_expression()?;
                    kwargs.push((name_token.text.to_string(), value));
                } else {
                    if !kwargs.is_empty() {
                        return Err(SyntaxError::unexpected_token(
                            self.current.as_ref().map(|t| t.text).unwrap_or(""),
                            "keyword argument",
                            self.current_span(),
                        ));
                    }
                    args.push(self.parse_expression()?);
                }

                if !self.check(&Token::Comma) {
                    break;
                }
                self.bump()?;

                // Allow trailing comma
                if self.check(&Token::RParen) {
                    break;
                }
            }
        }

        self.expect(Token::RParen)?;
        Ok((args, kwargs))
    }
}
