use core::fmt;
use std::io::Write as _;

/// `fmt::Write` sink for handler replies, backed by stdout.
///
/// Stands in for the UART transmit path of a real board.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(s.as_bytes()).map_err(|_| fmt::Error)?;
        stdout.flush().map_err(|_| fmt::Error)
    }
}
