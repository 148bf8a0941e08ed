use heapless::Vec;
use log::{debug, trace, warn};

use crate::delimiter::{Delimiter, Delimiters, TERMINATOR};
use crate::error::{DelimiterError, DispatchError};
use crate::table::{Command, CommandHandler, CommandTable, Fallback, FallbackFn, HandlerFn};
use crate::tokenizer::{Span, Tokenizer, terminator_position};

/// Size of the stack copy made by [`Dispatcher::execute_str`], terminator included.
pub const DEFAULT_LINE_CAPACITY: usize = 128;

/// What one `execute` call did, beyond the number of matched commands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatchSummary {
    /// Segments that matched a table entry; their handler ran.
    pub invoked: usize,
    /// Non-empty segments routed to the fallback.
    pub unmatched: usize,
    /// Empty segments, e.g. between `;;` or after a trailing `;`.
    pub skipped: usize,
    /// Segments that had more arguments than the argument buffer holds.
    pub truncated: usize,
    /// Segments whose name or arguments are not valid UTF-8; nothing was called.
    pub invalid: usize,
}

/// Splits a NUL-terminated line into commands and runs them against a table.
///
/// # Type Parameters
/// - `MAX_ARGS`: capacity of the argument buffer, i.e. the most arguments a
///   single handler can receive. Extra arguments are dropped.
/// - `H`: handler type of the table entries. Defaults to a plain `fn(&[&str])`.
/// - `F`: fallback called with the name of every unknown command.
///
/// The dispatcher keeps no reference to any input line between calls. The
/// argument buffer only holds byte offsets, so it can be reused by every
/// command of every line.
///
/// # Example
/// ```ignore
/// fn status(args: &[&str]) { /* ... */ }
/// fn not_found(name: &str) { /* ... */ }
///
/// static COMMANDS: [Command<'static>; 1] = [Command::new("status", status as HandlerFn)];
///
/// let mut dispatcher: Dispatcher<'_, 4> = Dispatcher::new(&COMMANDS, not_found as FallbackFn);
/// let mut line = *b"status,1;status,2\0";
/// assert_eq!(dispatcher.execute(&mut line, false), Ok(2));
/// ```
pub struct Dispatcher<'a, const MAX_ARGS: usize, H = HandlerFn, F = FallbackFn> {
    table: CommandTable<'a, H>,
    fallback: F,
    delimiters: Delimiters,
    args: Vec<Span, MAX_ARGS>,
}

impl<'a, const MAX_ARGS: usize, H, F> Dispatcher<'a, MAX_ARGS, H, F>
where
    H: CommandHandler,
    F: Fallback,
{
    /// Creates a dispatcher with the default delimiters (`;`, `,`, `,`).
    pub fn new(table: &'a [Command<'a, H>], fallback: F) -> Self {
        Self::with_delimiters(table, fallback, Delimiters::DEFAULT)
    }

    pub fn with_delimiters(table: &'a [Command<'a, H>], fallback: F, delimiters: Delimiters) -> Self {
        Self {
            table: CommandTable::new(table),
            fallback,
            delimiters,
            args: Vec::new(),
        }
    }

    /// Parses `buffer` and runs every command found in it.
    ///
    /// `buffer` must contain a NUL terminator; scanning stops at the first
    /// one. Every delimiter consumed on the way is overwritten with NUL, so
    /// the original text cannot be recovered afterwards.
    ///
    /// With `null_as_arg` set, empty arguments (`cmd,1,,2`) are passed to
    /// the handler as `""` instead of being skipped.
    ///
    /// Returns the number of commands that matched a table entry. Unknown
    /// commands go to the fallback and are not counted.
    pub fn execute(&mut self, buffer: &mut [u8], null_as_arg: bool) -> Result<usize, DispatchError> {
        self.execute_summary(buffer, null_as_arg).map(|summary| summary.invoked)
    }

    /// Same as [`execute`](Self::execute), but reports skipped, unmatched
    /// and truncated segments as well.
    pub fn execute_summary(
        &mut self,
        buffer: &mut [u8],
        null_as_arg: bool,
    ) -> Result<DispatchSummary, DispatchError> {
        if buffer.is_empty() {
            return Err(DispatchError::EmptyBuffer);
        }
        let end = terminator_position(buffer).ok_or(DispatchError::MissingTerminator)?;

        let mut summary = DispatchSummary::default();
        let mut tokenizer = Tokenizer::new(buffer, end, self.delimiters);

        while let Some(segment) = tokenizer.next_segment(&mut self.args, null_as_arg) {
            if segment.name.is_empty() {
                summary.skipped += 1;
                continue;
            }

            let text = tokenizer.buffer();
            let mut views = [""; MAX_ARGS];
            let Some(name) = decode(text, segment.name, &self.args, &mut views) else {
                summary.invalid += 1;
                warn!("segment at byte {} is not valid UTF-8, skipped", segment.name.start);
                continue;
            };
            let args = &views[..self.args.len()];

            if segment.truncated {
                summary.truncated += 1;
                warn!("'{}': more than {} arguments, extra arguments dropped", name, MAX_ARGS);
            }

            match self.table.find(name) {
                Some(index) => {
                    trace!("dispatch '{}' with {} argument(s)", name, args.len());
                    self.table.as_slice()[index].handler.invoke(args);
                    summary.invoked += 1;
                }
                None => {
                    debug!("'{}' not found", name);
                    self.fallback.unmatched(name);
                    summary.unmatched += 1;
                }
            }
        }

        debug!(
            "line done: {} invoked, {} unmatched, {} skipped, {} truncated, {} invalid",
            summary.invoked, summary.unmatched, summary.skipped, summary.truncated, summary.invalid
        );
        Ok(summary)
    }

    /// Copies `line` into `scratch`, terminates it and dispatches it.
    ///
    /// Embedded-friendly entry point for callers that hold the line as a
    /// `&str`; the caller decides how much stack the copy may use.
    pub fn execute_with_buf(
        &mut self,
        line: &str,
        scratch: &mut [u8],
        null_as_arg: bool,
    ) -> Result<usize, DispatchError> {
        let len = line.len();
        if len >= scratch.len() {
            return Err(DispatchError::LineTooLong { capacity: scratch.len() });
        }
        scratch[..len].copy_from_slice(line.as_bytes());
        scratch[len] = TERMINATOR;
        self.execute(&mut scratch[..=len], null_as_arg)
    }

    /// Convenience: copies `line` into a stack buffer of
    /// [`DEFAULT_LINE_CAPACITY`] bytes and dispatches it.
    pub fn execute_str(&mut self, line: &str, null_as_arg: bool) -> Result<usize, DispatchError> {
        let mut scratch = [0u8; DEFAULT_LINE_CAPACITY];
        self.execute_with_buf(line, &mut scratch, null_as_arg)
    }

    /// Index of the first table entry named `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.table.find(name)
    }
}

impl<'a, const MAX_ARGS: usize, H, F> Dispatcher<'a, MAX_ARGS, H, F> {
    /// Changes one delimiter for all following calls.
    pub fn set_delimiter(&mut self, class: Delimiter, byte: u8) -> Result<(), DelimiterError> {
        self.delimiters.set(class, byte)
    }

    pub fn delimiter(&self, class: Delimiter) -> u8 {
        self.delimiters.get(class)
    }

    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    pub fn table(&self) -> CommandTable<'a, H> {
        self.table
    }

    /// Capacity of the argument buffer.
    pub const fn max_args(&self) -> usize {
        MAX_ARGS
    }
}

/// Views the name and arguments of one segment as text. `None` if any of them
/// is not UTF-8.
fn decode<'t>(text: &'t [u8], name: Span, args: &[Span], views: &mut [&'t str]) -> Option<&'t str> {
    for (view, span) in views.iter_mut().zip(args) {
        *view = as_str(text, *span)?;
    }
    as_str(text, name)
}

fn as_str(text: &[u8], span: Span) -> Option<&str> {
    core::str::from_utf8(span.bytes(text)).ok()
}
