//! Handlers of the demo command set.
//!
//! Each public handler forwards to a `*_to` function that writes its reply to
//! any `fmt::Write` and acts on an explicit [`Device`], so the replies can be
//! checked without a terminal.

use core::fmt::{self, Write};

use linecmd_core::CommandTable;
use linecmd_macros::define_commands;
use log::debug;

use crate::console::Console;
use crate::device::{DEVICE, Device, LedMode};
use linecmd_config::{PERIOD_MAX_MS, PERIOD_MIN_MS};

define_commands! {
    pub static COMMANDS;
    "help"        => help,        "list commands";
    "status"      => status,      "[0 = off; 1 = on; 2 = flash]";
    "period"      => period,      "[10-1000ms]";
    "test"        => test,        "print every argument";
    "enable_null" => enable_null, "toggle empty arguments";
}

pub fn help(_args: &[&str]) {
    let _ = help_to(&mut Console);
}

pub fn status(args: &[&str]) {
    let _ = status_to(&DEVICE, &mut Console, args);
}

pub fn period(args: &[&str]) {
    let _ = period_to(&DEVICE, &mut Console, args);
}

pub fn test(args: &[&str]) {
    let _ = test_to(&mut Console, args);
}

pub fn enable_null(_args: &[&str]) {
    let _ = enable_null_to(&DEVICE, &mut Console);
}

/// Fallback for names missing from [`COMMANDS`].
pub fn not_found(name: &str) {
    let _ = not_found_to(&mut Console, name);
}

pub fn help_to<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str("\n----- HELP\n")?;
    CommandTable::new(COMMANDS).write_help(out)?;
    out.write_str("-----\n")
}

pub fn status_to<W: Write>(dev: &Device, out: &mut W, args: &[&str]) -> fmt::Result {
    let Some(arg) = args.first() else {
        return out.write_str("Argument missing!\n");
    };
    let Some(mode) = LedMode::from_arg(arg) else {
        return out.write_str("Argument can be only 0, 1 or 2!\n");
    };

    dev.set_mode(mode);
    debug!("led mode -> {:?}", mode);
    match mode {
        LedMode::Off => out.write_str("LED is off!\n"),
        LedMode::On => out.write_str("LED is on!\n"),
        LedMode::Flash => writeln!(out, "LED is flashing with {}ms period!", dev.period_ms()),
    }
}

pub fn period_to<W: Write>(dev: &Device, out: &mut W, args: &[&str]) -> fmt::Result {
    let Some(arg) = args.first() else {
        return out.write_str("Argument missing!\n");
    };

    match arg.parse::<u16>().ok().map(|ms| dev.set_period(ms)) {
        Some(Ok(())) => writeln!(out, "New flash period is {}ms", dev.period_ms()),
        _ => writeln!(out, "Period has to be between {PERIOD_MIN_MS} and {PERIOD_MAX_MS}ms!"),
    }
}

pub fn test_to<W: Write>(out: &mut W, args: &[&str]) -> fmt::Result {
    out.write_str("Test command:\n")?;
    for (i, arg) in args.iter().enumerate() {
        writeln!(out, "- Argument {i}: '{arg}'")?;
    }
    out.write_str("\n")
}

pub fn enable_null_to<W: Write>(dev: &Device, out: &mut W) -> fmt::Result {
    let enabled = dev.toggle_null_as_arg();
    writeln!(out, "NULL as argument is {}", if enabled { "enabled" } else { "disabled" })
}

pub fn not_found_to<W: Write>(out: &mut W, name: &str) -> fmt::Result {
    writeln!(out, "Command '{name}' not found!")
}
