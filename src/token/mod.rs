//! Token definitions for the restricted literal grammar
//!
//! The grammar covers literal values (numbers, strings, booleans, null),
//! the container delimiters, and dotted identifier chains. Operators are
//! deliberately absent: anything the lexer cannot recognize is a syntax
//! failure, which is the load-bearing safety property of the crate.

#[cfg(test)]
mod tests;

use logos::Logos;

/// Tokens of the restricted grammar
///
/// Boolean and null keywords are accepted in both lowercase and the
/// capitalized spelling used by the template payloads this crate serves.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // ==================== Keywords ====================
    #[token("true")]
    #[token("True")]
    KwTrue,
    #[token("false")]
    #[token("False")]
    KwFalse,
    #[token("null")]
    #[token("None")]
    KwNull,

    // ==================== Delimiters ====================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // ==================== Punctuation ====================
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    // ==================== Number Literals ====================
    // Underscore digit groups are accepted, matching the source language
    // of the payloads (1_000_000).
    #[regex(r"0[bB][01]([01]|_[01])*")]
    BinaryLiteral,
    #[regex(r"0[oO][0-7]([0-7]|_[0-7])*")]
    OctalLiteral,
    #[regex(r"0[xX][0-9a-fA-F]([0-9a-fA-F]|_[0-9a-fA-F])*")]
    HexLiteral,
    #[regex(r"[0-9]([0-9]|_[0-9])*")]
    DecimalLiteral,

    #[regex(r"\.[0-9]([0-9]|_[0-9])*([eE][+-]?[0-9]+)?")]
    FloatLeadingDot,
    #[regex(r"[0-9]([0-9]|_[0-9])*\.[0-9]*([eE][+-]?[0-9]+)?")]
    FloatLiteral,
    #[regex(r"[0-9]([0-9]|_[0-9])*[eE][+-]?[0-9]+")]
    FloatExponent,

    // ==================== String Literals ====================
    // The lexer wrapper scans from the opening quote to the matching close
    // and emits a single StringLiteral token; logos only flags the opening
    // quote character.
    #[token("'")]
    SingleQuote,
    #[token("\"")]
    DoubleQuote,

    /// Produced by the lexer wrapper, never by logos directly
    StringLiteral,

    // ==================== Identifiers ====================
    #[regex(r"[_\p{XID_Start}][_\p{XID_Continue}]*")]
    Identifier,
}

impl Token {
    /// Check if this token starts a number literal
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Token::BinaryLiteral
                | Token::OctalLiteral
                | Token::HexLiteral
                | Token::DecimalLiteral
                | Token::FloatLeadingDot
                | Token::FloatLiteral
                | Token::FloatExponent
        )
    }

    /// Check if this token is an integer literal
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Token::BinaryLiteral
                | Token::OctalLiteral
                | Token::HexLiteral
                | Token::DecimalLiteral
        )
    }

    /// Check if this token is a keyword literal (true/false/null)
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::KwTrue | Token::KwFalse | Token::KwNull)
    }

    /// Check if this token is a numeric sign
    pub fn is_sign(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus)
    }
}
