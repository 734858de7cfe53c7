//! Restricted expression AST
//!
//! The parser produces these nodes; lowering in [`crate::eval`] turns them
//! into [`crate::value::LiteralValue`]s. Names and attribute chains are
//! representable here — assignment targets, callees and deferred values
//! need them — but lowering rejects them, which is what keeps the grammar
//! literal-only at the value level.

use crate::span::Span;

/// An expression node with its source span
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression node kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `null` / `None`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer literal; digits are kept raw (sign applied, radix prefix and
    /// underscores stripped) so overflow can surface as a semantic error
    Int { digits: String, radix: u32 },
    /// Float literal, already converted (cannot overflow)
    Float(f64),
    /// String literal body without quotes, escapes not yet decoded
    Str { raw: String },
    /// `[a, b, c]`
    List(Vec<Expr>),
    /// `(a, b)` — fixed arity, `()` is the empty tuple
    Tuple(Vec<Expr>),
    /// `{a, b}` with no colons
    Set(Vec<Expr>),
    /// `{k: v, ...}` — `{}` is the empty mapping
    Dict(Vec<(Expr, Expr)>),
    /// `a` or `a.b.c`
    Name(Vec<String>),
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Dot-joined identifier chain, or `None` if this is not a name
    pub fn name_chain(&self) -> Option<String> {
        match &self.kind {
            ExprKind::Name(segments) => Some(segments.join(".")),
            _ => None,
        }
    }

    /// Short noun for error messages
    pub fn describe(&self) -> &'static str {
        match &self.kind {
            ExprKind::Null => "null",
            ExprKind::Bool(_) => "boolean",
            ExprKind::Int { .. } => "integer",
            ExprKind::Float(_) => "float",
            ExprKind::Str { .. } => "string",
            ExprKind::List(_) => "list",
            ExprKind::Tuple(_) => "tuple",
            ExprKind::Set(_) => "set",
            ExprKind::Dict(_) => "mapping",
            ExprKind::Name(_) => "name",
        }
    }
}

/// Top-level shape of a call input
#[derive(Debug, Clone, PartialEq)]
pub enum CallExpr {
    /// No parentheses: the whole input is a method name
    Bare(String),
    /// `name(args...)` — `func` holds the dotted callee segments so the
    /// caller can insist on a single bare identifier
    Call {
        func: Vec<String>,
        args: Vec<Expr>,
        kwargs: Vec<(String, Expr)>,
    },
}
