/// Outcome of feeding one received byte to a [`LineBuffer`].
#[derive(Debug, PartialEq, Eq)]
pub enum Feed<'l> {
    /// The byte was stored (or ignored); no line is complete yet.
    Pending,
    /// A newline arrived. The slice holds the line plus its NUL terminator.
    Line(&'l mut [u8]),
    /// The line did not fit. It was discarded and the byte starts a new one.
    Overflow,
}

/// Fixed-size receive buffer that turns a byte stream into NUL-terminated lines.
///
/// # Type Parameters
/// - `N`: buffer size, terminator included, so lines hold at most `N - 1` bytes.
///
/// `\r` and NUL bytes are ignored, `\n` completes the line.
pub struct LineBuffer<const N: usize> {
    buffer: [u8; N],
    length: usize,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        const { assert!(N > 0, "LineBuffer needs room for the terminator") };
        Self { buffer: [0; N], length: 0 }
    }

    pub fn push(&mut self, byte: u8) -> Feed<'_> {
        match byte {
            b'\n' => Feed::Line(self.take()),
            b'\r' | 0 => Feed::Pending,
            _ if self.length + 1 >= N => {
                self.length = 0;
                self.store(byte);
                Feed::Overflow
            }
            _ => {
                self.store(byte);
                Feed::Pending
            }
        }
    }

    /// Hands out whatever is buffered, e.g. at the end of the input stream.
    pub fn finish(&mut self) -> Option<&mut [u8]> {
        if self.length == 0 { None } else { Some(self.take()) }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn store(&mut self, byte: u8) {
        if N > 1 {
            self.buffer[self.length] = byte;
            self.length += 1;
        }
    }

    fn take(&mut self) -> &mut [u8] {
        let len = self.length;
        self.length = 0;
        self.buffer[len] = 0;
        &mut self.buffer[..=len]
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
