//! Error types reported by the dispatcher and the delimiter configuration.
//!
//! An unknown command name is not an error: it is routed to the fallback
//! handler. The variants below only cover input that cannot be scanned at all
//! and delimiter settings that would break the scanner.

use core::fmt;

/// Errors returned by [`Dispatcher::execute`](crate::Dispatcher::execute) and friends.
///
/// All of them are detected before the first handler runs, so a failed call
/// never leaves a half-dispatched line behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// The input slice has zero length, so it cannot even hold the terminator.
    EmptyBuffer,

    /// No NUL byte was found inside the input slice.
    MissingTerminator,

    /// A `&str` line does not fit the stack copy used by `execute_str`.
    LineTooLong { capacity: usize },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBuffer => f.write_str("input buffer is empty"),
            Self::MissingTerminator => f.write_str("input buffer has no NUL terminator"),
            Self::LineTooLong { capacity } => {
                write!(f, "input line does not fit into {capacity} bytes")
            }
        }
    }
}

impl core::error::Error for DispatchError {}

/// Errors returned when selecting or changing a delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DelimiterError {
    /// Raw delimiter class index outside `0..=2`.
    UnknownClass(u8),

    /// The NUL terminator can never separate tokens.
    Terminator,

    /// Only single-byte ASCII delimiters are supported.
    NonAscii(u8),
}

impl fmt::Display for DelimiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownClass(raw) => write!(f, "unknown delimiter class {raw}"),
            Self::Terminator => f.write_str("the NUL terminator cannot be used as a delimiter"),
            Self::NonAscii(byte) => write!(f, "delimiter 0x{byte:02x} is not ASCII"),
        }
    }
}

impl core::error::Error for DelimiterError {}
