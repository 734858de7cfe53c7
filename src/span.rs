//! Byte-offset spans for error reporting
//!
//! Inputs to this crate are short single-line strings, so spans track byte
//! offsets only; there is no line/column bookkeeping.

use serde::{Deserialize, Serialize};

/// Represents a span in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset start (0-indexed)
    pub start: usize,
    /// Byte offset end (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty span at position 0
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge two spans into one that covers both
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Get the length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if a byte offset is within this span
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}
