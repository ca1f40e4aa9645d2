//! Byte ranges into template source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Creates a span covering the character at `offset`, clamped to a
    /// source of `source_len` bytes.
    pub(crate) fn at(offset: usize, source_len: usize) -> Self {
        let start = offset.min(source_len);
        Self::new(start..(start + 1).min(source_len))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
