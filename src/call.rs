//! Call expression parsing
//!
//! Turns `name(arg, ..., kw=val, ...)` into a method name plus evaluated
//! argument lists. A leading `$` marks a reserved method; it is stripped
//! for parsing and re-attached to the returned name. Inputs without a
//! call form are treated as bare method names with no arguments.

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::CallExpr;
use crate::error::CallError;
use crate::eval;
use crate::parser;
use crate::value::LiteralValue;

/// Reserved-prefix marker for special methods
const RESERVED_PREFIX: char = '$';

/// A parsed call expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCall {
    /// Method name, `$` prefix preserved, never empty
    pub method_name: String,
    /// Positional arguments in source order
    pub args: Vec<LiteralValue>,
    /// Keyword arguments, insertion order kept, duplicates last-write-wins
    pub kwargs: IndexMap<String, LiteralValue>,
}

/// Parse a call expression string, without memoization.
///
/// Call arguments must be genuine literals: a semantically invalid
/// argument always fails the parse, there is no deferred recovery here.
pub fn parse_call_uncached(text: &str) -> Result<ParsedCall, CallError> {
    let (remainder, reserved) = match text.strip_prefix(RESERVED_PREFIX) {
        Some(stripped) => (stripped, true),
        None => (text, false),
    };

    let call =
        parser::parse_call_source(remainder).map_err(|source| CallError::InvalidCallExpression {
            text: text.to_string(),
            source,
        })?;

    let (name, args, kwargs) = match call {
        CallExpr::Bare(name) => (name, Vec::new(), IndexMap::new()),
        CallExpr::Call { func, args, kwargs } => {
            let [name] = func.as_slice() else {
                return Err(CallError::CalleeNotIdentifier {
                    text: text.to_string(),
                });
            };
            let args = args
                .iter()
                .map(eval::lower)
                .collect::<Result<Vec<_>, _>>()?;
            let mut evaluated = IndexMap::with_capacity(kwargs.len());
            for (key, value) in &kwargs {
                evaluated.insert(key.clone(), eval::lower(value)?);
            }
            (name.clone(), args, evaluated)
        }
    };

    let method_name = if reserved {
        format!("{}{}", RESERVED_PREFIX, name)
    } else {
        name
    };

    Ok(ParsedCall {
        method_name,
        args,
        kwargs,
    })
}
