//! # linecmd_core
//!
//! Allocation-free command tokenizer and dispatcher for text lines received
//! over a serial link (or any other byte transport).
//!
//! A line such as
//!
//! ```text
//! status,1;period,200;test,a,,b
//! ```
//!
//! is split **in place** into command segments (`;`), a command name (first
//! `,`) and arguments (following `,`). Each name is looked up in a static
//! [`Command`] table and the matching handler is called with the arguments as
//! `&[&str]`. Names that match nothing are passed to a fallback.
//!
//! ## Properties
//! - `no_std`, no heap: the argument buffer is a `heapless::Vec` of byte
//!   offsets sized by the `MAX_ARGS` const generic.
//! - The caller's buffer is borrowed exclusively for one call; every consumed
//!   delimiter is overwritten with NUL.
//! - Delimiters are configurable per dispatcher at runtime (see [`Delimiter`]).
//! - Lookup is a linear, exact, case-sensitive scan; the first entry wins.
//! - A buffer without terminator is rejected before any handler runs, see
//!   [`DispatchError`]. A segment that is not UTF-8 is skipped on its own.
//!
//! ## Logging
//! Diagnostics go through the `log` facade: `trace` per dispatched command,
//! `debug` for unknown commands and the per-line summary, `warn` when
//! arguments are dropped or a segment is not UTF-8. Install any logger to see them.
//!
//! ## Features
//! - `defmt`: derive `defmt::Format` for the public error and summary types.

#![cfg_attr(not(test), no_std)]

pub mod delimiter;
pub mod dispatcher;
pub mod error;
pub mod table;
mod tokenizer;

pub use delimiter::{Delimiter, Delimiters, TERMINATOR};
pub use dispatcher::{DEFAULT_LINE_CAPACITY, DispatchSummary, Dispatcher};
pub use error::{DelimiterError, DispatchError};
pub use table::{Command, CommandHandler, CommandTable, Fallback, FallbackFn, HandlerFn};
pub use tokenizer::Span;
