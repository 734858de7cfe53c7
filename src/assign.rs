//! Assignment parsing
//!
//! Turns `identifier(.identifier)* = <expr>` into a single key/value pair.
//! The value side goes through literal lowering; when lowering fails
//! semantically and the caller did not opt into strict mode, a name-chain
//! value is kept as a [`LiteralValue::DeferredName`] for a later
//! resolution stage instead of failing the whole parse.

use serde::Serialize;

use crate::error::AssignError;
use crate::eval;
use crate::parser;
use crate::value::LiteralValue;

/// A parsed `key = value` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAssignment {
    /// Dot-joined assignment target, never empty
    pub key: String,
    /// Parsed value, possibly a deferred name
    pub value: LiteralValue,
}

/// Parse an assignment string, without memoization.
///
/// With `raise_if_unparseable` set, a semantically invalid value fails the
/// parse instead of being deferred. Syntax failures always fail the parse
/// regardless of the flag.
pub fn parse_assignment_uncached(
    text: &str,
    raise_if_unparseable: bool,
) -> Result<ParsedAssignment, AssignError> {
    let (target, value_expr) =
        parser::parse_assign_source(text).map_err(|source| AssignError::InvalidAssignment {
            text: text.to_string(),
            source,
        })?;

    // The dot-joined chain is the key on both the literal and the deferred
    // path; a non-name target is unsupported, not a syntax error
    let key = target
        .name_chain()
        .ok_or_else(|| AssignError::UnsupportedTarget {
            text: text.to_string(),
        })?;

    match eval::lower(&value_expr) {
        Ok(value) => Ok(ParsedAssignment { key, value }),
        Err(err) if raise_if_unparseable => Err(err.into()),
        Err(err) => {
            // The value may be a template variable resolved later against
            // an external context; only a name chain qualifies
            match value_expr.name_chain() {
                Some(name) => Ok(ParsedAssignment {
                    key,
                    value: LiteralValue::DeferredName(name),
                }),
                None => Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LiteralError;

    #[test]
    fn test_simple_assignment() {
        assert_eq!(
            parse_assignment_uncached("x=1", false),
            Ok(ParsedAssignment {
                key: "x".into(),
                value: LiteralValue::Int(1),
            })
        );
    }

    #[test]
    fn test_string_value() {
        assert_eq!(
            parse_assignment_uncached("name='Bob'", false),
            Ok(ParsedAssignment {
                key: "name".into(),
                value: LiteralValue::str("Bob"),
            })
        );
    }

    #[test]
    fn test_attribute_chain_target() {
        let parsed = parse_assignment_uncached("model.field.sub=3", false).unwrap();
        assert_eq!(parsed.key, "model.field.sub");
        assert_eq!(parsed.value, LiteralValue::Int(3));
    }

    #[test]
    fn test_deferred_name_value() {
        let parsed = parse_assignment_uncached("x=some_undefined_name", false).unwrap();
        assert_eq!(parsed.key, "x");
        assert_eq!(
            parsed.value,
            LiteralValue::DeferredName("some_undefined_name".into())
        );
    }

    #[test]
    fn test_deferred_dotted_value_keeps_full_chain_and_key() {
        // The key stays the full dotted target even on the deferred path
        let parsed = parse_assignment_uncached("a.b=c.d", false).unwrap();
        assert_eq!(parsed.key, "a.b");
        assert_eq!(parsed.value, LiteralValue::DeferredName("c.d".into()));
    }

    #[test]
    fn test_strict_mode_propagates() {
        assert!(matches!(
            parse_assignment_uncached("x=some_undefined_name", true),
            Err(AssignError::InvalidValue(LiteralError::NotALiteral { .. }))
        ));
    }

    #[test]
    fn test_non_name_bad_value_propagates_even_when_lenient() {
        // `[a]` is not a name chain: nothing to defer, so the literal
        // error surfaces
        assert!(matches!(
            parse_assignment_uncached("x=[a]", false),
            Err(AssignError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_not_an_assignment() {
        assert!(matches!(
            parse_assignment_uncached("not an assignment", false),
            Err(AssignError::InvalidAssignment { .. })
        ));
        assert!(matches!(
            parse_assignment_uncached("", true),
            Err(AssignError::InvalidAssignment { .. })
        ));
    }

    #[test]
    fn test_unsupported_target() {
        assert!(matches!(
            parse_assignment_uncached("1=2", false),
            Err(AssignError::UnsupportedTarget { .. })
        ));
        assert!(matches!(
            parse_assignment_uncached("[a]=2", false),
            Err(AssignError::UnsupportedTarget { .. })
        ));
    }
}
