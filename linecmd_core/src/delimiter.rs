use crate::error::DelimiterError;

/// Byte that ends the input buffer and replaces every consumed delimiter.
pub const TERMINATOR: u8 = b'\0';

/// The three delimiter classes understood by the tokenizer.
///
/// Raw class numbers (as they may arrive from a configuration command) are
/// converted with [`TryFrom<u8>`]; anything outside `0..=2` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Delimiter {
    /// Separates one command from the next: `cmd1;cmd2`.
    CommandSeparator = 0,
    /// Separates a command name from its first argument: `cmd,arg`.
    NameArgSeparator = 1,
    /// Separates two arguments: `cmd,arg1,arg2`.
    ArgArgSeparator = 2,
}

impl Delimiter {
    pub const ALL: [Delimiter; 3] = [
        Delimiter::CommandSeparator,
        Delimiter::NameArgSeparator,
        Delimiter::ArgArgSeparator,
    ];
}

impl TryFrom<u8> for Delimiter {
    type Error = DelimiterError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Delimiter::CommandSeparator),
            1 => Ok(Delimiter::NameArgSeparator),
            2 => Ok(Delimiter::ArgArgSeparator),
            other => Err(DelimiterError::UnknownClass(other)),
        }
    }
}

/// The delimiter set used for one dispatcher.
///
/// Two or even all three classes may share the same byte; the default set
/// does exactly that for the name and argument separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Delimiters {
    command: u8,
    name_arg: u8,
    arg_arg: u8,
}

impl Delimiters {
    /// `;` between commands, `,` after the name and between arguments.
    pub const DEFAULT: Delimiters = Delimiters::new(b';', b',', b',');

    /// Builds a set without validation, for use in `const` contexts.
    ///
    /// Prefer [`Delimiters::try_new`] for values that come from outside the
    /// firmware image.
    pub const fn new(command: u8, name_arg: u8, arg_arg: u8) -> Self {
        Self { command, name_arg, arg_arg }
    }

    /// Builds a set, rejecting NUL and non-ASCII bytes.
    pub fn try_new(command: u8, name_arg: u8, arg_arg: u8) -> Result<Self, DelimiterError> {
        Ok(Self {
            command: validate(command)?,
            name_arg: validate(name_arg)?,
            arg_arg: validate(arg_arg)?,
        })
    }

    /// Returns the byte currently configured for `class`.
    pub const fn get(&self, class: Delimiter) -> u8 {
        match class {
            Delimiter::CommandSeparator => self.command,
            Delimiter::NameArgSeparator => self.name_arg,
            Delimiter::ArgArgSeparator => self.arg_arg,
        }
    }

    /// Replaces the byte for `class`. The old value is kept on error.
    pub fn set(&mut self, class: Delimiter, byte: u8) -> Result<(), DelimiterError> {
        let byte = validate(byte)?;
        match class {
            Delimiter::CommandSeparator => self.command = byte,
            Delimiter::NameArgSeparator => self.name_arg = byte,
            Delimiter::ArgArgSeparator => self.arg_arg = byte,
        }
        Ok(())
    }

    pub const fn command(&self) -> u8 {
        self.command
    }

    pub const fn name_arg(&self) -> u8 {
        self.name_arg
    }

    pub const fn arg_arg(&self) -> u8 {
        self.arg_arg
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn validate(byte: u8) -> Result<u8, DelimiterError> {
    if byte == TERMINATOR {
        Err(DelimiterError::Terminator)
    } else if !byte.is_ascii() {
        Err(DelimiterError::NonAscii(byte))
    } else {
        Ok(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_serial_convention() {
        let d = Delimiters::default();
        assert_eq!(d.get(Delimiter::CommandSeparator), b';');
        assert_eq!(d.get(Delimiter::NameArgSeparator), b',');
        assert_eq!(d.get(Delimiter::ArgArgSeparator), b',');
    }

    #[test]
    fn set_then_get_each_class() {
        let mut d = Delimiters::default();
        d.set(Delimiter::CommandSeparator, b'|').unwrap();
        d.set(Delimiter::NameArgSeparator, b':').unwrap();
        d.set(Delimiter::ArgArgSeparator, b' ').unwrap();
        assert_eq!(d, Delimiters::new(b'|', b':', b' '));
    }

    #[test]
    fn rejects_terminator_and_keeps_old_value() {
        let mut d = Delimiters::default();
        assert_eq!(d.set(Delimiter::ArgArgSeparator, 0), Err(DelimiterError::Terminator));
        assert_eq!(d.arg_arg(), b',');
    }

    #[test]
    fn rejects_non_ascii() {
        assert_eq!(
            Delimiters::try_new(b';', 0xA7, b','),
            Err(DelimiterError::NonAscii(0xA7))
        );
    }

    #[test]
    fn class_from_raw_index() {
        for (raw, class) in Delimiter::ALL.iter().enumerate() {
            assert_eq!(Delimiter::try_from(raw as u8), Ok(*class));
        }
        assert_eq!(Delimiter::try_from(3), Err(DelimiterError::UnknownClass(3)));
        assert_eq!(Delimiter::try_from(255), Err(DelimiterError::UnknownClass(255)));
    }
}
