use crate::buf::Buf;
use crate::int::{Integer, MAX_DIGITS};
use bytes::{Buf as _, BufMut as _};
use std::io::{self, Read, Write};

/// Integer reader and writer over a pair of byte streams.
///
/// Input is pulled in chunks of the buffer's capacity. Output is collected
/// until the buffer is full and then written in one call. Whatever is still
/// buffered is flushed by [`close`](Self::close), or once on drop if `close`
/// was never reached.
pub struct FastIo<R, W>
where
    R: Read,
    W: Write,
{
    reader: R,
    writer: W,
    input: Buf,
    output: Buf,
    is_closed: bool,
}

/// Buffered I/O over the raw standard input and output descriptors.
#[cfg(all(unix, feature = "stdio"))]
pub fn stdio() -> FastIo<crate::Stdin, crate::Stdout> {
    FastIo::new(crate::Stdin::stdin(), crate::Stdout::stdout())
}

impl<R, W> FastIo<R, W>
where
    R: Read,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_capacity(crate::BUF_SIZE, reader, writer)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize, reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            input: Buf::with_capacity(capacity),
            output: Buf::with_capacity(capacity),
            is_closed: false,
        }
    }

    pub fn get_ref(&self) -> (&R, &W) {
        (&self.reader, &self.writer)
    }

    pub fn get_mut(&mut self) -> (&mut R, &mut W) {
        (&mut self.reader, &mut self.writer)
    }

    /// Returns the next input byte, or `None` once the reader is exhausted or fails.
    pub fn next_char(&mut self) -> Option<u8> {
        self.fill()?;
        Some(self.input.get_u8())
    }

    /// Like [`next_char`](Self::next_char), without consuming the byte.
    pub fn peek_char(&mut self) -> Option<u8> {
        self.fill()?;
        self.input.chunk().first().copied()
    }

    /// Reads one signed decimal `i32`. See [`read_integer`](Self::read_integer).
    pub fn read_int(&mut self) -> i32 {
        self.read_integer()
    }

    pub fn read_i64(&mut self) -> i64 {
        self.read_integer()
    }

    /// Reads one signed decimal integer.
    ///
    /// Leading bytes up to and including `b' '` are skipped, then an optional
    /// `-` and a run of digits are consumed. The byte that ends the run stays
    /// in the stream. A missing number reads as zero and out-of-range values
    /// wrap.
    pub fn read_integer<T>(&mut self) -> T
    where
        T: Integer,
    {
        while self.peek_char().is_some_and(|c| c <= b' ') {
            self.input.consume(1);
        }
        let is_negative = self.peek_char() == Some(b'-');
        if is_negative {
            self.input.consume(1);
        }
        let mut x = T::ZERO;
        while let Some(c @ b'0'..=b'9') = self.peek_char() {
            x = x.push_digit(c - b'0');
            self.input.consume(1);
        }
        if is_negative {
            x.negate()
        } else {
            x
        }
    }

    /// Appends one byte, first writing out the buffer if it is full.
    pub fn write_char(&mut self, c: u8) -> io::Result<()> {
        if self.output.is_full() {
            self.drain()?;
        }
        self.output.put_u8(c);
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        bytes.iter().try_for_each(|&c| self.write_char(c))
    }

    pub fn write_int(&mut self, x: i32) -> io::Result<()> {
        self.write_integer(x)
    }

    pub fn write_i64(&mut self, x: i64) -> io::Result<()> {
        self.write_integer(x)
    }

    /// Writes `x` in decimal, with a leading `-` when negative.
    pub fn write_integer<T>(&mut self, x: T) -> io::Result<()>
    where
        T: Integer,
    {
        if x.is_negative() {
            self.write_char(b'-')?;
        }
        let mut digits = [0; MAX_DIGITS];
        let len = x.digits(&mut digits);
        digits[..len]
            .iter()
            .rev()
            .try_for_each(|&c| self.write_char(c))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.writer.flush()
    }

    /// Flushes the remaining output. Drop will not flush again, even if this fails.
    pub fn close(mut self) -> io::Result<()> {
        self.is_closed = true;
        self.flush()
    }

    fn fill(&mut self) -> Option<()> {
        if self.input.is_empty() {
            match self.input.fill_from(&mut self.reader) {
                Ok(0) => return None,
                Ok(n) => tracing::trace!(n, "refilled input buffer"),
                Err(e) => {
                    tracing::debug!(error = %e, "read failed, treating as end of stream");
                    return None;
                }
            }
        }
        Some(())
    }

    fn drain(&mut self) -> io::Result<()> {
        let n = self.output.drain_to(&mut self.writer)?;
        tracing::trace!(n, "flushed output buffer");
        Ok(())
    }
}

impl<R, W> Drop for FastIo<R, W>
where
    R: Read,
    W: Write,
{
    fn drop(&mut self) {
        if !self.is_closed && !self.output.is_empty() {
            if let Err(e) = self.flush() {
                tracing::debug!(error = %e, "failed to flush output on drop");
            }
        }
    }
}
