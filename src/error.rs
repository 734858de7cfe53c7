//! Error types
//!
//! The taxonomy keeps two failure classes strictly apart:
//!
//! * [`SyntaxError`] — the text is not shaped like anything the restricted
//!   grammar knows. The literal evaluator recovers from this class through
//!   its coercion fallback; the assignment and call parsers surface it.
//! * [`LiteralError`] — the text parsed, but the parsed shape does not
//!   denote a literal value (a bare name, a malformed escape, an integer
//!   that overflows). Only the assignment parser's lenient mode may recover
//!   from this class, and only for name-chain values.

use crate::span::Span;
use thiserror::Error;

/// Syntax-level parse error with source span
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Unexpected token
    #[error("unexpected token '{found}' at {span:?}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        span: Span,
    },

    /// Unexpected end of input
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// Unterminated string
    #[error("unterminated string literal starting at {span:?}")]
    UnterminatedString { span: Span },

    /// Input continues past a complete expression
    #[error("trailing input after expression at {span:?}")]
    TrailingInput { span: Span },

    /// Lexer error
    #[error("unrecognized token at {span:?}")]
    UnrecognizedToken { span: Span },

    /// Nesting depth cap exceeded
    #[error("nesting deeper than {limit} levels at {span:?}")]
    TooDeep { limit: usize, span: Span },
}

impl SyntaxError {
    /// Create an unexpected token error
    pub fn unexpected_token(
        found: impl Into<String>,
        expected: impl Into<String>,
        span: Span,
    ) -> Self {
        SyntaxError::UnexpectedToken {
            found: found.into(),
            expected: expected.into(),
            span,
        }
    }

    /// Create an unexpected EOF error
    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        SyntaxError::UnexpectedEof {
            expected: expected.into(),
        }
    }

    /// Get the span of the error, if it has one
    pub fn span(&self) -> Option<&Span> {
        match self {
            SyntaxError::UnexpectedToken { span, .. } => Some(span),
            SyntaxError::UnexpectedEof { .. } => None,
            SyntaxError::UnterminatedString { span } => Some(span),
            SyntaxError::TrailingInput { span } => Some(span),
            SyntaxError::UnrecognizedToken { span } => Some(span),
            SyntaxError::TooDeep { span, .. } => Some(span),
        }
    }
}

/// Semantic literal error: well-formed shape, invalid value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// The expression is valid grammar but not a literal (e.g. a name)
    #[error("'{found}' is not a literal value")]
    NotALiteral { found: String, span: Span },

    /// Malformed escape sequence inside a string literal
    #[error("invalid escape sequence '{sequence}' at {span:?}")]
    InvalidEscape { sequence: String, span: Span },

    /// Integer literal does not fit in 64 bits
    #[error("integer literal '{literal}' out of range")]
    IntOutOfRange { literal: String, span: Span },
}

/// Failure to parse an assignment string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// Not syntactically a single assignment
    #[error("'{text}' could not be parsed as an assignment")]
    InvalidAssignment {
        text: String,
        #[source]
        source: SyntaxError,
    },

    /// Assignment target is not an identifier or attribute chain
    #[error("assignment target in '{text}' is not an identifier")]
    UnsupportedTarget { text: String },

    /// Right-hand side is not a valid literal value
    #[error("invalid assignment value")]
    InvalidValue(#[from] LiteralError),
}

/// Failure to parse a call expression string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    /// Not syntactically a call or bare method name
    #[error("'{text}' could not be parsed as a call expression")]
    InvalidCallExpression {
        text: String,
        #[source]
        source: SyntaxError,
    },

    /// The callee of a call form must be a single bare identifier
    #[error("callee in '{text}' is not a bare identifier")]
    CalleeNotIdentifier { text: String },

    /// A call argument is not a valid literal value
    #[error("invalid call argument")]
    InvalidArgument(#[from] LiteralError),
}
