//! In-place scanner that carves a NUL-terminated line into command segments,
//! names and arguments.
//!
//! Every step looks for the next delimiter, overwrites it with the terminator
//! and yields the span between the cursor and that terminator. Segments are
//! split first, then the name and arguments are carved inside the segment, so
//! each byte of the line is read at most twice.

use heapless::Vec;

use crate::delimiter::{Delimiters, TERMINATOR};

/// Byte range of one token inside the caller's buffer.
///
/// Spans never own text. They are only meaningful for the buffer they were
/// carved from and only until that buffer is handed back to the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last byte of the token.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the bytes this span covers.
    pub fn bytes<'b>(&self, buf: &'b [u8]) -> &'b [u8] {
        &buf[self.start..self.end()]
    }
}

/// One command segment produced by [`Tokenizer::next_segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment {
    /// Name token; empty when the segment itself is empty.
    pub name: Span,
    /// Set when at least one kept argument did not fit the argument buffer.
    pub truncated: bool,
}

/// Splits `buf[from..to]` at the first `delimiter`.
///
/// The delimiter byte is replaced with the terminator. Returns the token in
/// front of it and the position right after it, or the whole range and
/// `None` when the delimiter does not occur.
pub(crate) fn carve(buf: &mut [u8], from: usize, to: usize, delimiter: u8) -> (Span, Option<usize>) {
    match buf[from..to].iter().position(|&b| b == delimiter) {
        Some(offset) => {
            let at = from + offset;
            buf[at] = TERMINATOR;
            (Span::new(from, offset), Some(at + 1))
        }
        None => (Span::new(from, to - from), None),
    }
}

/// Position of the first terminator, if the buffer carries one.
pub(crate) fn terminator_position(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == TERMINATOR)
}

/// Cursor over one exclusively borrowed input line.
pub(crate) struct Tokenizer<'b> {
    buf: &'b mut [u8],
    end: usize,
    cursor: Option<usize>,
    delimiters: Delimiters,
}

impl<'b> Tokenizer<'b> {
    /// `end` is the index of the terminator; nothing at or past it is scanned.
    pub fn new(buf: &'b mut [u8], end: usize, delimiters: Delimiters) -> Self {
        Self { buf, end, cursor: Some(0), delimiters }
    }

    /// The line as carved so far. Every consumed delimiter now reads as NUL.
    pub fn buffer(&self) -> &[u8] {
        self.buf
    }

    /// Carves the next command segment and fills `args` with its arguments.
    ///
    /// `args` is cleared first. Empty argument tokens are kept only when
    /// `null_as_arg` is set. Arguments past the capacity of `args` are
    /// dropped and flagged through [`Segment::truncated`].
    ///
    /// Returns `None` once the terminator has been reached.
    pub fn next_segment<const N: usize>(
        &mut self,
        args: &mut Vec<Span, N>,
        null_as_arg: bool,
    ) -> Option<Segment> {
        let start = self.cursor?;
        let (segment, next) = carve(self.buf, start, self.end, self.delimiters.command());
        self.cursor = next;

        args.clear();
        let (name, mut next_arg) =
            carve(self.buf, segment.start, segment.end(), self.delimiters.name_arg());

        let mut truncated = false;
        while let Some(from) = next_arg {
            let (token, after) = carve(self.buf, from, segment.end(), self.delimiters.arg_arg());
            next_arg = after;

            if token.is_empty() && !null_as_arg {
                continue;
            }
            if args.push(token).is_err() {
                truncated = true;
                break;
            }
        }

        Some(Segment { name, truncated })
    }
}
