//! Build-time settings shared by the demo crates.

/// Printed in front of every input line.
pub const PROMPT: &str = "> ";

/// Printed once at startup.
pub const BANNER: &str = "linecmd demo\nType \"help\" to see list of commands.";

/// Size of the receive line buffer, terminator included.
pub const LINE_MAX_LEN: usize = 64;

/// Most arguments a single command receives; extra ones are dropped.
pub const MAX_ARGS: usize = 4;

/// Default delimiter bytes. The dispatcher can change them at runtime.
pub const COMMAND_SEPARATOR: u8 = b';';
pub const NAME_ARG_SEPARATOR: u8 = b',';
pub const ARG_ARG_SEPARATOR: u8 = b',';

/// Accepted LED flash period in milliseconds, and the value used at boot.
pub const PERIOD_MIN_MS: u16 = 10;
pub const PERIOD_MAX_MS: u16 = 1000;
pub const PERIOD_DEFAULT_MS: u16 = 100;
