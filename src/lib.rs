//! litcall
//!
//! Safe parsing of call expressions, assignments, and literal values from
//! untrusted strings. Inputs are lexed and parsed with a restricted
//! grammar and lowered to typed values; nothing is ever executed.
//!
//! Strings that fail the literal grammar are coerced through a chain of
//! datetime, date, time, duration, and UUID casters before falling back
//! to a plain string, so `"2020-09-12"` becomes a date while `"hello"`
//! stays a string.
//!
//! # Example
//!
//! ```
//! use litcall::{parse_call, LiteralValue};
//!
//! let call = parse_call("set_name('Bob', count=2)").expect("parse failed");
//!
//! assert_eq!(call.method_name, "set_name");
//! assert_eq!(call.args, vec![LiteralValue::str("Bob")]);
//! assert_eq!(call.kwargs["count"], LiteralValue::Int(2));
//! ```

pub mod assign;
pub mod ast;
pub mod cache;
pub mod call;
pub mod coerce;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;
pub mod value;

// Re-exports
pub use assign::ParsedAssignment;
pub use ast::{CallExpr, Expr, ExprKind};
pub use call::ParsedCall;
pub use error::{AssignError, CallError, LiteralError, SyntaxError};
pub use lexer::{Lexer, SpannedToken};
pub use parser::Parser;
pub use span::Span;
pub use token::Token;
pub use value::LiteralValue;

use once_cell::sync::Lazy;

use cache::{Memo, DEFAULT_CAPACITY};

static EVAL_CACHE: Lazy<Memo<String, LiteralValue>> = Lazy::new(|| Memo::new(DEFAULT_CAPACITY));
static ASSIGN_CACHE: Lazy<Memo<(String, bool), ParsedAssignment>> =
    Lazy::new(|| Memo::new(DEFAULT_CAPACITY));
static CALL_CACHE: Lazy<Memo<String, ParsedCall>> = Lazy::new(|| Memo::new(DEFAULT_CAPACITY));

/// Evaluate a string as a typed literal value
///
/// Inputs that parse under the literal grammar become their typed value.
/// Inputs that do not are run through the coercion chain and finally
/// returned as a plain string, so this only fails on a semantic error
/// such as an integer overflow or a bad escape sequence.
///
/// Successful results are memoized.
///
/// # Example
///
/// ```
/// use litcall::{evaluate, LiteralValue};
///
/// assert_eq!(evaluate("[1, 2]").unwrap(), LiteralValue::List(vec![
///     LiteralValue::Int(1),
///     LiteralValue::Int(2),
/// ]));
/// assert_eq!(evaluate("hello world").unwrap(), LiteralValue::str("hello world"));
/// ```
pub fn evaluate(text: &str) -> Result<LiteralValue, LiteralError> {
    if let Some(value) = EVAL_CACHE.get(&text.to_string()) {
        return Ok(value);
    }
    let value = eval::evaluate_uncached(text)?;
    EVAL_CACHE.put(text.to_string(), value.clone());
    Ok(value)
}

/// Parse an assignment string like `name.field=value`
///
/// The key is the dotted target chain; the value is evaluated as a
/// literal. With `raise_if_unparseable` false, a value that is itself a
/// name chain is recovered as [`LiteralValue::DeferredName`] for the
/// caller to resolve later.
///
/// Successful results are memoized per flag value.
pub fn parse_assignment(
    text: &str,
    raise_if_unparseable: bool,
) -> Result<ParsedAssignment, AssignError> {
    let key = (text.to_string(), raise_if_unparseable);
    if let Some(parsed) = ASSIGN_CACHE.get(&key) {
        return Ok(parsed);
    }
    let parsed = assign::parse_assignment_uncached(text, raise_if_unparseable)?;
    ASSIGN_CACHE.put(key, parsed.clone());
    Ok(parsed)
}

/// Parse a call expression string like `set_name('Bob')`
///
/// A bare name is a call with no arguments. A leading `$` is preserved
/// on the returned method name. Successful results are memoized.
pub fn parse_call(text: &str) -> Result<ParsedCall, CallError> {
    if let Some(parsed) = CALL_CACHE.get(&text.to_string()) {
        return Ok(parsed);
    }
    let parsed = call::parse_call_uncached(text)?;
    CALL_CACHE.put(text.to_string(), parsed.clone());
    Ok(parsed)
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
