//! Tests for token module

use super::*;
use logos::Logos;

#[test]
fn test_keywords() {
    let mut lexer = Token::lexer("true false null");
    assert_eq!(lexer.next(), Some(Ok(Token::KwTrue)));
    assert_eq!(lexer.next(), Some(Ok(Token::KwFalse)));
    assert_eq!(lexer.next(), Some(Ok(Token::KwNull)));
}

#[test]
fn test_capitalized_keywords() {
    let mut lexer = Token::lexer("True False None");
    assert_eq!(lexer.next(), Some(Ok(Token::KwTrue)));
    assert_eq!(lexer.next(), Some(Ok(Token::KwFalse)));
    assert_eq!(lexer.next(), Some(Ok(Token::KwNull)));
}

#[test]
fn test_numbers() {
    let mut lexer = Token::lexer("42 3.14 0xff 0b101 1_000_000 1e-5 .5");
    assert_eq!(lexer.next(), Some(Ok(Token::DecimalLiteral)));
    assert_eq!(lexer.next(), Some(Ok(Token::FloatLiteral)));
    assert_eq!(lexer.next(), Some(Ok(Token::HexLiteral)));
    assert_eq!(lexer.next(), Some(Ok(Token::BinaryLiteral)));
    assert_eq!(lexer.next(), Some(Ok(Token::DecimalLiteral)));
    assert_eq!(lexer.next(), Some(Ok(Token::FloatExponent)));
    assert_eq!(lexer.next(), Some(Ok(Token::FloatLeadingDot)));
}

#[test]
fn test_identifiers() {
    let mut lexer = Token::lexer("foo bar_baz _private Foo123");
    assert_eq!(lexer.next(), Some(Ok(Token::Identifier)));
    assert_eq!(lexer.next(), Some(Ok(Token::Identifier)));
    assert_eq!(lexer.next(), Some(Ok(Token::Identifier)));
    assert_eq!(lexer.next(), Some(Ok(Token::Identifier)));
}

#[test]
fn test_delimiters_and_punctuation() {
    let mut lexer = Token::lexer("( ) [ ] { } , : . = + -");
    assert_eq!(lexer.next(), Some(Ok(Token::LParen)));
    assert_eq!(lexer.next(), Some(Ok(Token::RParen)));
    assert_eq!(lexer.next(), Some(Ok(Token::LBracket)));
    assert_eq!(lexer.next(), Some(Ok(Token::RBracket)));
    assert_eq!(lexer.next(), Some(Ok(Token::LBrace)));
    assert_eq!(lexer.next(), Some(Ok(Token::RBrace)));
    assert_eq!(lexer.next(), Some(Ok(Token::Comma)));
    assert_eq!(lexer.next(), Some(Ok(Token::Colon)));
    assert_eq!(lexer.next(), Some(Ok(Token::Dot)));
    assert_eq!(lexer.next(), Some(Ok(Token::Eq)));
    assert_eq!(lexer.next(), Some(Ok(Token::Plus)));
    assert_eq!(lexer.next(), Some(Ok(Token::Minus)));
}

#[test]
fn test_dotted_name_is_not_a_float() {
    // `a.b` must lex as Identifier Dot Identifier, not a float fragment
    let mut lexer = Token::lexer("a.b");
    assert_eq!(lexer.next(), Some(Ok(Token::Identifier)));
    assert_eq!(lexer.next(), Some(Ok(Token::Dot)));
    assert_eq!(lexer.next(), Some(Ok(Token::Identifier)));
}

#[test]
fn test_operators_are_rejected() {
    let mut lexer = Token::lexer("1 * 2");
    assert_eq!(lexer.next(), Some(Ok(Token::DecimalLiteral)));
    assert_eq!(lexer.next(), Some(Err(())));
}

#[test]
fn test_classification() {
    assert!(Token::DecimalLiteral.is_number());
    assert!(Token::HexLiteral.is_integer());
    assert!(!Token::FloatLiteral.is_integer());
    assert!(Token::KwNull.is_keyword());
    assert!(Token::Minus.is_sign());
    assert!(!Token::Identifier.is_number());
}
