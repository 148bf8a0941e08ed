use std::io::{self, Read, Write};

use linecmd_config::{BANNER, LINE_MAX_LEN, MAX_ARGS, PROMPT};
use linecmd_core::{Delimiters, Dispatcher, FallbackFn};
use log::{error, info, warn};
use usercode::{COMMANDS, DEVICE, not_found};

use crate::line::{Feed, LineBuffer};

/// Totals of one [`Shell::run`] session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub lines: usize,
    pub invoked: usize,
    /// Commands dropped because they were not valid UTF-8.
    pub invalid: usize,
    pub overflows: usize,
}

/// Receive loop of the demo firmware: bytes in, commands out.
pub struct Shell {
    dispatcher: Dispatcher<'static, MAX_ARGS>,
    line: LineBuffer<LINE_MAX_LEN>,
    prompt: bool,
}

impl Shell {
    pub fn new(delimiters: Delimiters) -> Self {
        Self {
            dispatcher: Dispatcher::with_delimiters(COMMANDS, not_found as FallbackFn, delimiters),
            line: LineBuffer::new(),
            prompt: true,
        }
    }

    /// Turns the prompt off, e.g. when input is piped in.
    pub fn quiet(mut self) -> Self {
        self.prompt = false;
        self
    }

    /// Reads `input` until EOF and dispatches every line.
    ///
    /// The null-as-argument policy is read from [`DEVICE`] before each line,
    /// so `enable_null` takes effect on the next line.
    pub fn run<R: Read>(&mut self, input: R) -> io::Result<Session> {
        let mut session = Session::default();
        if self.prompt {
            println!("{BANNER}");
            self.show_prompt()?;
        }

        for byte in input.bytes() {
            match self.line.push(byte?) {
                Feed::Pending => {}
                Feed::Overflow => {
                    session.overflows += 1;
                    warn!("line longer than {} bytes, restarting", LINE_MAX_LEN - 1);
                }
                Feed::Line(line) => {
                    dispatch(&mut self.dispatcher, line, &mut session);
                    self.show_prompt()?;
                }
            }
        }

        if let Some(line) = self.line.finish() {
            dispatch(&mut self.dispatcher, line, &mut session);
        }
        info!(
            "session done: {} line(s), {} command(s), {} invalid, {} overflow(s)",
            session.lines, session.invoked, session.invalid, session.overflows
        );
        Ok(session)
    }

    fn show_prompt(&self) -> io::Result<()> {
        if self.prompt {
            let mut stdout = io::stdout().lock();
            stdout.write_all(PROMPT.as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    }
}

fn dispatch(dispatcher: &mut Dispatcher<'static, MAX_ARGS>, line: &mut [u8], session: &mut Session) {
    session.lines += 1;
    match dispatcher.execute_summary(line, DEVICE.null_as_arg()) {
        Ok(summary) => {
            session.invoked += summary.invoked;
            session.invalid += summary.invalid;
        }
        Err(e) => error!("line rejected: {e}"),
    }
}
