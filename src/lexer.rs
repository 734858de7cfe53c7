//! Lexer for the restricted literal grammar
//!
//! Wraps the logos-generated lexer with string-body scanning: quoted
//! strings are consumed here (quote to matching quote, escapes skipped)
//! and surface as a single `StringLiteral` token, so the inner lexer never
//! tries to tokenize string contents.

use logos::Logos;

use crate::error::SyntaxError;
use crate::span::Span;
use crate::token::Token;

/// A token with its span and source text
#[derive(Debug, Clone)]
pub struct SpannedToken<'a> {
    pub token: Token,
    pub span: Span,
    pub text: &'a str,
}

impl<'a> SpannedToken<'a> {
    pub fn new(token: Token, span: Span, text: &'a str) -> Self {
        Self { token, span, text }
    }
}

/// Restricted-grammar lexer
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, Token>,
    /// Peeked token (for lookahead)
    peeked: Option<Result<SpannedToken<'a>, SyntaxError>>,
    /// Offset from original source (used after restarting the inner lexer)
    offset: usize,
}

impl<'a> std::fmt::Debug for Lexer<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("source", &self.source)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            peeked: None,
            offset: 0,
        }
    }

    /// Get the source text
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Peek at the next token without consuming it
    pub fn peek(&mut self) -> Option<&Result<SpannedToken<'a>, SyntaxError>> {
        if self.peeked.is_none() {
            self.peeked = self.next_token_internal();
        }
        self.peeked.as_ref()
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Option<Result<SpannedToken<'a>, SyntaxError>> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }
        self.next_token_internal()
    }

    fn next_token_internal(&mut self) -> Option<Result<SpannedToken<'a>, SyntaxError>> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let start = self.offset + span.start;
        let end = self.offset + span.end;

        match result {
            Ok(Token::SingleQuote) => Some(self.scan_string(start, end, b'\'')),
            Ok(Token::DoubleQuote) => Some(self.scan_string(start, end, b'"')),
            Ok(token) => {
                let span = Span::new(start, end);
                let text = &self.source[start..end];
                Some(Ok(SpannedToken::new(token, span, text)))
            }
            Err(()) => {
                let span = Span::new(start, end);
                Some(Err(SyntaxError::UnrecognizedToken { span }))
            }
        }
    }

    /// Consume a quoted string body and emit a single StringLiteral token.
    /// The token text includes both quote characters; escape decoding
    /// happens later, at lowering time.
    fn scan_string(
        &mut self,
        start: usize,
        body_start: usize,
        quote: u8,
    ) -> Result<SpannedToken<'a>, SyntaxError> {
        match self.scan_string_to_close(body_start, quote) {
            Ok(string_end) => {
                self.restart_from(string_end);
                let span = Span::new(start, string_end);
                let text = &self.source[start..string_end];
                Ok(SpannedToken::new(Token::StringLiteral, span, text))
            }
            Err(e) => {
                // Prevent further tokens after a broken string
                self.restart_from(self.source.len());
                Err(e)
            }
        }
    }

    /// Scan string content to find the closing quote.
    /// Uses memchr for SIMD-accelerated scanning; a backslash skips the
    /// following byte so escaped quotes do not terminate the scan.
    fn scan_string_to_close(&self, start: usize, quote: u8) -> Result<usize, SyntaxError> {
        let bytes = self.source.as_bytes();
        let mut pos = start;

        while pos < bytes.len() {
            match memchr::memchr2(b'\\', quote, &bytes[pos..]) {
                None => break,
                Some(offset) => {
                    pos += offset;
                    if bytes[pos] == b'\\' {
                        if pos + 1 < bytes.len() {
                            pos += 2;
                            continue;
                        }
                        // Trailing backslash: the string cannot close
                        pos = bytes.len();
                        break;
                    }
                    return Ok(pos + 1);
                }
            }
        }

        Err(SyntaxError::UnterminatedString {
            span: Span::new(start - 1, pos),
        })
    }

    /// Restart the inner lexer from a new position
    fn restart_from(&mut self, pos: usize) {
        self.peeked = None;
        if pos < self.source.len() {
            self.inner = Token::lexer(&self.source[pos..]);
        } else {
            self.inner = Token::lexer("");
        }
        self.offset = pos;
    }

    /// Check if we're at end of input
    pub fn is_eof(&mut self) -> bool {
        self.peek().is_none()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<SpannedToken<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize source text into a vector of spanned tokens
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken<'_>, SyntaxError>> {
    Lexer::new(source).collect()
}
