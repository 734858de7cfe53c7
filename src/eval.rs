//! Lowering restricted expressions to literal values
//!
//! [`evaluate_uncached`] implements the evaluator contract: grammar first,
//! coercion chain on a syntax failure, plain-string passthrough last. The
//! one distinction that must not collapse lives here: a *syntax* failure
//! (not a literal expression at all) is recoverable, while a *semantic*
//! failure (parsed shape, invalid value — a bare name, a bad escape, an
//! overflowing integer) propagates as [`LiteralError`].

use indexmap::{IndexMap, IndexSet};

use crate::ast::{Expr, ExprKind};
use crate::coerce;
use crate::error::LiteralError;
use crate::parser;
use crate::span::Span;
use crate::value::LiteralValue;

/// Evaluate a string into a typed literal value, without memoization.
///
/// Never returns [`LiteralValue::DeferredName`]; that wrapping is the
/// assignment parser's job.
pub fn evaluate_uncached(text: &str) -> Result<LiteralValue, LiteralError> {
    match parser::parse_source(text) {
        Ok(expr) => lower(&expr),
        // Not a literal expression at all: coercion chain, then passthrough
        Err(_) => Ok(coerce::cast(text).unwrap_or_else(|| LiteralValue::Str(text.to_string()))),
    }
}

/// Lower a parsed expression to a literal value
pub(crate) fn lower(expr: &Expr) -> Result<LiteralValue, LiteralError> {
    match &expr.kind {
        ExprKind::Null => Ok(LiteralValue::Null),
        ExprKind::Bool(b) => Ok(LiteralValue::Bool(*b)),
        ExprKind::Int { digits, radix } => i64::from_str_radix(digits, *radix)
            .map(LiteralValue::Int)
            .map_err(|_| LiteralError::IntOutOfRange {
                literal: digits.clone(),
                span: expr.span,
            }),
        ExprKind::Float(value) => Ok(LiteralValue::float(*value)),
        ExprKind::Str { raw } => Ok(LiteralValue::Str(decode_escapes(raw, expr.span)?)),
        ExprKind::List(elements) => Ok(LiteralValue::List(lower_all(elements)?)),
        ExprKind::Tuple(elements) => Ok(LiteralValue::Tuple(lower_all(elements)?)),
        ExprKind::Set(elements) => {
            let mut set = IndexSet::with_capacity(elements.len());
            for element in elements {
                set.insert(lower(element)?);
            }
            Ok(LiteralValue::Set(set))
        }
        ExprKind::Dict(pairs) => {
            let mut mapping = IndexMap::with_capacity(pairs.len());
            for (key, value) in pairs {
                // Duplicate keys: last write wins
                mapping.insert(lower(key)?, lower(value)?);
            }
            Ok(LiteralValue::Mapping(mapping))
        }
        ExprKind::Name(segments) => Err(LiteralError::NotALiteral {
            found: segments.join("."),
            span: expr.span,
        }),
    }
}

fn lower_all(elements: &[Expr]) -> Result<Vec<LiteralValue>, LiteralError> {
    elements.iter().map(lower).collect()
}

/// Decode escape sequences in a raw string body.
///
/// Recognized: `\n \t \r \\ \' \" \0 \a \b \f \v`, `\xHH`, `\uHHHH`,
/// `\UXXXXXXXX`. Anything else is a malformed escape, which is a semantic
/// failure by contract.
fn decode_escapes(raw: &str, span: Span) -> Result<String, LiteralError> {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            return Err(LiteralError::InvalidEscape {
                sequence: "\\".into(),
                span,
            });
        };
        match escape {
            'n' => result.push('\n'),
            't' => result.push('\t'),
            'r' => result.push('\r'),
            '\\' => result.push('\\'),
            '\'' => result.push('\''),
            '"' => result.push('"'),
            '0' => result.push('\0'),
            'a' => result.push('\x07'),
            'b' => result.push('\x08'),
            'f' => result.push('\x0c'),
            'v' => result.push('\x0b'),
            'x' => result.push(take_code_point(&mut chars, 2, "\\x", span)?),
            'u' => result.push(take_code_point(&mut chars, 4, "\\u", span)?),
            'U' => result.push(take_code_point(&mut chars, 8, "\\U", span)?),
            other => {
                return Err(LiteralError::InvalidEscape {
                    sequence: format!("\\{}", other),
                    span,
                })
            }
        }
    }

    Ok(result)
}

/// Read exactly `digits` hex digits and convert them to a char
fn take_code_point(
    chars: &mut std::str::Chars<'_>,
    digits: usize,
    prefix: &str,
    span: Span,
) -> Result<char, LiteralError> {
    let mut sequence = String::from(prefix);
    let mut value: u32 = 0;
    for _ in 0..digits {
        let Some(c) = chars.next() else {
            return Err(LiteralError::InvalidEscape { sequence, span });
        };
        sequence.push(c);
        let Some(digit) = c.to_digit(16) else {
            return Err(LiteralError::InvalidEscape { sequence, span });
        };
        value = value * 16 + digit;
    }
    char::from_u32(value).ok_or(LiteralError::InvalidEscape { sequence, span })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(evaluate_uncached("123"), Ok(LiteralValue::Int(123)));
        assert_eq!(evaluate_uncached("-0x10"), Ok(LiteralValue::Int(-16)));
        assert_eq!(evaluate_uncached("1.5"), Ok(LiteralValue::float(1.5)));
        assert_eq!(evaluate_uncached("true"), Ok(LiteralValue::Bool(true)));
        assert_eq!(evaluate_uncached("None"), Ok(LiteralValue::Null));
        assert_eq!(evaluate_uncached("'a'"), Ok(LiteralValue::str("a")));
    }

    #[test]
    fn test_escape_decoding() {
        assert_eq!(
            evaluate_uncached(r"'a\n\t\x41é'"),
            Ok(LiteralValue::str("a\n\tA\u{e9}"))
        );
    }

    #[test]
    fn test_bad_escape_is_semantic() {
        assert!(matches!(
            evaluate_uncached(r"'\q'"),
            Err(LiteralError::InvalidEscape { .. })
        ));
        assert!(matches!(
            evaluate_uncached(r"'\x4'"),
            Err(LiteralError::InvalidEscape { .. })
        ));
    }

    #[test]
    fn test_int_overflow_is_semantic() {
        assert!(matches!(
            evaluate_uncached("99999999999999999999"),
            Err(LiteralError::IntOutOfRange { .. })
        ));
    }

    #[test]
    fn test_bare_name_is_semantic() {
        assert!(matches!(
            evaluate_uncached("some_name"),
            Err(LiteralError::NotALiteral { .. })
        ));
        assert!(matches!(
            evaluate_uncached("[a, 1]"),
            Err(LiteralError::NotALiteral { .. })
        ));
    }

    #[test]
    fn test_syntax_failure_falls_back_to_coercion() {
        assert!(matches!(
            evaluate_uncached("2020-01-01T00:00:00"),
            Ok(LiteralValue::DateTime(_))
        ));
        assert!(matches!(
            evaluate_uncached("550e8400-e29b-41d4-a716-446655440000"),
            Ok(LiteralValue::UniqueId(_))
        ));
    }

    #[test]
    fn test_unmatched_input_passes_through() {
        assert_eq!(
            evaluate_uncached("hello world"),
            Ok(LiteralValue::str("hello world"))
        );
        assert_eq!(evaluate_uncached(""), Ok(LiteralValue::str("")));
    }

    #[test]
    fn test_containers() {
        assert_eq!(
            evaluate_uncached("[1, 2]"),
            Ok(LiteralValue::List(vec![1.into(), 2.into()]))
        );
        let LiteralValue::Mapping(pairs) = evaluate_uncached("{'a': 1, 'a': 2}").unwrap() else {
            panic!("expected a mapping");
        };
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[&LiteralValue::str("a")], LiteralValue::Int(2));
    }

    #[test]
    fn test_string_contents_are_not_coerced() {
        // The chain applies to raw inputs, not to string literal bodies
        assert_eq!(
            evaluate_uncached("'2020-01-01'"),
            Ok(LiteralValue::str("2020-01-01"))
        );
    }

    #[test]
    fn test_depth_bomb_degrades_to_string() {
        let bomb = "[".repeat(10_000);
        assert_eq!(evaluate_uncached(&bomb), Ok(LiteralValue::Str(bomb)));
    }
}
