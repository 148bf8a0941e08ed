mod line;
mod shell;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use linecmd_config::{ARG_ARG_SEPARATOR, COMMAND_SEPARATOR, NAME_ARG_SEPARATOR};
use linecmd_core::Delimiters;
use log::debug;
use usercode::DEVICE;

use crate::shell::Shell;

/// Feeds stdin to the demo command set, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Pass empty arguments to handlers instead of skipping them
    #[arg(long)]
    null_as_arg: bool,

    /// Byte between commands on one line
    #[arg(long, default_value_t = COMMAND_SEPARATOR as char)]
    command_separator: char,

    /// Byte between a command name and its first argument
    #[arg(long, default_value_t = NAME_ARG_SEPARATOR as char)]
    name_separator: char,

    /// Byte between two arguments
    #[arg(long, default_value_t = ARG_ARG_SEPARATOR as char)]
    arg_separator: char,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn ascii(c: char, what: &str) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("{what} {c:?} is not a single ASCII byte"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .format_timestamp(None)
        .init();

    let delimiters = Delimiters::try_new(
        ascii(cli.command_separator, "command separator")?,
        ascii(cli.name_separator, "name separator")?,
        ascii(cli.arg_separator, "argument separator")?,
    )
    .context("invalid delimiter")?;
    debug!("delimiters: {:?}", delimiters);

    DEVICE.set_null_as_arg(cli.null_as_arg);

    let stdin = io::stdin();
    let mut shell = Shell::new(delimiters);
    if !stdin.is_terminal() {
        shell = shell.quiet();
    }
    shell.run(stdin.lock()).context("reading stdin")?;
    Ok(())
}
