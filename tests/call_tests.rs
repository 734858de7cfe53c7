//! End-to-end call expression parsing tests

use chrono::NaiveDate;
use litcall::{parse_call, CallError, LiteralError, LiteralValue};
use pretty_assertions::assert_eq;

fn assert_call(source: &str, method_name: &str, args: Vec<LiteralValue>) {
    let result = parse_call(source);
    assert!(
        result.is_ok(),
        "Failed to parse call: {}\nError: {:?}",
        source,
        result.err()
    );
    let parsed = result.unwrap();
    assert_eq!(parsed.method_name, method_name, "source: {}", source);
    assert_eq!(parsed.args, args, "source: {}", source);
}

// =============================================================================
// Method Names
// =============================================================================

#[test]
fn test_no_arguments() {
    assert_call("refresh()", "refresh", vec![]);
}

#[test]
fn test_bare_name_without_parentheses() {
    assert_call("no_parens", "no_parens", vec![]);
}

#[test]
fn test_reserved_prefix_round_trips() {
    assert_call("$refresh()", "$refresh", vec![]);
    assert_call("$toggle", "$toggle", vec![]);
}

#[test]
fn test_dotted_callee_is_rejected() {
    assert!(matches!(
        parse_call("obj.method()"),
        Err(CallError::CalleeNotIdentifier { .. })
    ));
}

// =============================================================================
// Positional Arguments
// =============================================================================

#[test]
fn test_scalar_arguments() {
    assert_call("set_name('Bob')", "set_name", vec![LiteralValue::str("Bob")]);
    assert_call(
        "move(1, -2, 0.5)",
        "move",
        vec![
            LiteralValue::Int(1),
            LiteralValue::Int(-2),
            LiteralValue::float(0.5),
        ],
    );
    assert_call(
        "flags(true, null)",
        "flags",
        vec![LiteralValue::Bool(true), LiteralValue::Null],
    );
}

#[test]
fn test_container_arguments() {
    assert_call(
        "merge([1, 2], {'k': 'v'})",
        "merge",
        vec![
            LiteralValue::List(vec![LiteralValue::Int(1), LiteralValue::Int(2)]),
            LiteralValue::Mapping(indexmap::indexmap! {
                LiteralValue::str("k") => LiteralValue::str("v"),
            }),
        ],
    );
}

#[test]
fn test_quoted_arguments_stay_strings() {
    assert_call(
        "set_date('2020-09-12')",
        "set_date",
        vec![LiteralValue::str("2020-09-12")],
    );
}

#[test]
fn test_trailing_comma() {
    assert_call("f(1,)", "f", vec![LiteralValue::Int(1)]);
}

// =============================================================================
// Keyword Arguments
// =============================================================================

#[test]
fn test_keyword_arguments() {
    let parsed = parse_call("book(title='Emma', year=1815)").unwrap();
    assert_eq!(parsed.method_name, "book");
    assert!(parsed.args.is_empty());
    assert_eq!(parsed.kwargs["title"], LiteralValue::str("Emma"));
    assert_eq!(parsed.kwargs["year"], LiteralValue::Int(1815));
}

#[test]
fn test_positional_then_keyword() {
    let parsed = parse_call("page(3, per_page=20)").unwrap();
    assert_eq!(parsed.args, vec![LiteralValue::Int(3)]);
    assert_eq!(parsed.kwargs["per_page"], LiteralValue::Int(20));
}

#[test]
fn test_positional_after_keyword_is_invalid() {
    assert!(matches!(
        parse_call("f(a=1, 2)"),
        Err(CallError::InvalidCallExpression { .. })
    ));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_name_arguments_are_invalid() {
    assert!(matches!(
        parse_call("f(undefined)"),
        Err(CallError::InvalidArgument(LiteralError::NotALiteral { .. }))
    ));
    assert!(matches!(
        parse_call("f(k=undefined)"),
        Err(CallError::InvalidArgument(LiteralError::NotALiteral { .. }))
    ));
}

#[test]
fn test_malformed_calls() {
    assert!(matches!(
        parse_call("1 + 1"),
        Err(CallError::InvalidCallExpression { .. })
    ));
    assert!(matches!(
        parse_call("f(1"),
        Err(CallError::InvalidCallExpression { .. })
    ));
    assert!(matches!(
        parse_call("f()()"),
        Err(CallError::InvalidCallExpression { .. })
    ));
    assert!(matches!(
        parse_call("$"),
        Err(CallError::InvalidCallExpression { .. })
    ));
    assert!(matches!(
        parse_call(""),
        Err(CallError::InvalidCallExpression { .. })
    ));
}

// =============================================================================
// Value Typing
// =============================================================================

#[test]
fn test_argument_values_compare_by_type() {
    // A quoted date string is not the same value as a real date
    let parsed = parse_call("set_date('2020-09-12')").unwrap();
    assert_ne!(
        parsed.args[0],
        LiteralValue::Date(NaiveDate::from_ymd_opt(2020, 9, 12).unwrap())
    );
}
