//! Command table entries, the handler capability and name lookup.

use core::fmt;

/// Anything that can be invoked with the arguments of one command segment.
///
/// Implemented for every `Fn(&[&str])`, which covers plain function
/// pointers (the usual choice for a `static` table), closures and
/// `&dyn Fn(&[&str])`.
pub trait CommandHandler {
    fn invoke(&self, args: &[&str]);
}

impl<F> CommandHandler for F
where
    F: Fn(&[&str]),
{
    #[inline(always)]
    fn invoke(&self, args: &[&str]) {
        self(args)
    }
}

/// Receives the name of every non-empty command segment that matched no entry.
pub trait Fallback {
    fn unmatched(&self, name: &str);
}

impl<F> Fallback for F
where
    F: Fn(&str),
{
    #[inline(always)]
    fn unmatched(&self, name: &str) {
        self(name)
    }
}

/// Handler type used by `static` tables.
pub type HandlerFn = fn(&[&str]);

/// Fallback type used when the fallback is a plain function.
pub type FallbackFn = fn(&str);

/// One entry of a command table.
#[derive(Clone, Copy)]
pub struct Command<'a, H = HandlerFn> {
    /// Name matched exactly and case-sensitively against the first token.
    pub name: &'a str,
    pub handler: H,
    /// Help text, may be empty.
    pub description: &'a str,
}

impl<'a, H> Command<'a, H> {
    pub const fn new(name: &'a str, handler: H) -> Self {
        Self { name, handler, description: "" }
    }

    pub const fn with_description(name: &'a str, handler: H, description: &'a str) -> Self {
        Self { name, handler, description }
    }
}

impl<H> fmt::Debug for Command<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Borrowed, ordered, immutable command table.
pub struct CommandTable<'a, H = HandlerFn> {
    commands: &'a [Command<'a, H>],
}

impl<H> Clone for CommandTable<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for CommandTable<'_, H> {}

impl<H> fmt::Debug for CommandTable<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.commands.iter().map(|c| c.name)).finish()
    }
}

impl<'a, H> CommandTable<'a, H> {
    pub const fn new(commands: &'a [Command<'a, H>]) -> Self {
        Self { commands }
    }

    /// Index of the first entry named exactly `name`.
    ///
    /// A name that is only a prefix of an entry (or the other way round) does
    /// not match.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&'a Command<'a, H>> {
        self.commands.get(index)
    }

    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'a, Command<'a, H>> {
        self.commands.iter()
    }

    pub const fn as_slice(&self) -> &'a [Command<'a, H>] {
        self.commands
    }

    /// First pair of indices `(first, shadowed)` sharing a name.
    ///
    /// Lookup always resolves to `first`; the entry at `shadowed` can never be
    /// reached.
    pub fn first_duplicate(&self) -> Option<(usize, usize)> {
        self.commands.iter().enumerate().find_map(|(later, cmd)| {
            self.commands[..later]
                .iter()
                .position(|earlier| earlier.name == cmd.name)
                .map(|first| (first, later))
        })
    }

    /// Writes one `- name: description` line per entry, in table order.
    pub fn write_help<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for cmd in self.commands {
            if cmd.description.is_empty() {
                writeln!(out, "- {}", cmd.name)?;
            } else {
                writeln!(out, "- {}: {}", cmd.name, cmd.description)?;
            }
        }
        Ok(())
    }
}

impl<'a, H> From<&'a [Command<'a, H>]> for CommandTable<'a, H> {
    fn from(commands: &'a [Command<'a, H>]) -> Self {
        Self::new(commands)
    }
}

impl<'a, H> IntoIterator for CommandTable<'a, H> {
    type Item = &'a Command<'a, H>;
    type IntoIter = core::slice::Iter<'a, Command<'a, H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
