//! Memoized entry points agree with their uncached counterparts

use litcall::{assign, call, eval, evaluate, parse_assignment, parse_call, LiteralValue};
use pretty_assertions::assert_eq;

#[test]
fn test_evaluate_matches_uncached() {
    for source in [
        "true",
        "-42",
        "'text'",
        "[1, {'a': (2,)}]",
        "2020-09-12",
        "unquoted text",
    ] {
        assert_eq!(
            evaluate(source).unwrap(),
            eval::evaluate_uncached(source).unwrap(),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_parse_assignment_matches_uncached() {
    for source in ["name='Bob'", "a.b.c=[1, 2]", "flag=false"] {
        assert_eq!(
            parse_assignment(source, true).unwrap(),
            assign::parse_assignment_uncached(source, true).unwrap(),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_parse_call_matches_uncached() {
    for source in ["$refresh()", "set_name('Bob', last='Smith')", "bare"] {
        assert_eq!(
            parse_call(source).unwrap(),
            call::parse_call_uncached(source).unwrap(),
            "source: {}",
            source
        );
    }
}

#[test]
fn test_repeated_lookups_are_stable() {
    let first = evaluate("{'k': [1.5, null]}").unwrap();
    for _ in 0..300 {
        assert_eq!(evaluate("{'k': [1.5, null]}").unwrap(), first);
    }
}

#[test]
fn test_cache_survives_many_distinct_keys() {
    // Push well past the cache capacity, then confirm old inputs still
    // evaluate correctly after eviction
    for i in 0..500 {
        let source = format!("[{}]", i);
        assert_eq!(
            evaluate(&source).unwrap(),
            LiteralValue::List(vec![LiteralValue::Int(i)])
        );
    }
    assert_eq!(
        evaluate("[0]").unwrap(),
        LiteralValue::List(vec![LiteralValue::Int(0)])
    );
}

#[test]
fn test_errors_are_recomputed_consistently() {
    for _ in 0..3 {
        assert!(evaluate("99999999999999999999999999").is_err());
        assert!(parse_call("1 + 1").is_err());
        assert!(parse_assignment("x", true).is_err());
    }
}
