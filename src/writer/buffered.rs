//! Rebindable buffered writer.

use std::fmt;
use std::io::{self, Read, Write};

use crate::error::CopyError;
use crate::transfer::{ReadFrom, Sink};

/// A buffered writer whose staging buffer is borrowed from a
/// [`WriterPool`](crate::WriterPool).
///
/// Bytes stay in the staging buffer until it fills or [`Write::flush`] is
/// called. Unlike `std::io::BufWriter`, nothing is flushed implicitly when
/// the writer is released or dropped.
pub struct BufferedWriter<W> {
    inner: W,
    buf: Box<[u8]>,
    len: usize,
}

impl<W> BufferedWriter<W> {
    /// Binds a staging buffer to `inner`, starting with nothing buffered.
    pub(crate) fn bind(inner: W, buf: Box<[u8]>) -> Self {
        Self { inner, buf, len: 0 }
    }

    /// Splits the writer into its sink and its staging buffer, dropping any
    /// unflushed bytes.
    pub(crate) fn unbind(self) -> (W, Box<[u8]>) {
        (self.inner, self.buf)
    }

    /// Returns the bytes buffered but not yet written to the sink.
    pub fn buffer(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the size of the staging buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns how many more bytes fit before the buffer must be flushed.
    pub fn available(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Gets a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> BufferedWriter<W> {
    /// Writes the staged bytes to the sink without flushing the sink itself.
    ///
    /// On failure the bytes not yet accepted stay buffered.
    fn flush_buf(&mut self) -> io::Result<()> {
        let mut written = 0;
        let result = loop {
            if written >= self.len {
                break Ok(());
            }
            match self.inner.write(&self.buf[written..self.len]) {
                Ok(0) => {
                    break Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write the buffered data",
                    ));
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break Err(e),
            }
        };
        if written > 0 {
            self.buf.copy_within(written..self.len, 0);
            self.len -= written;
        }
        result
    }
}

impl<W: Write> Write for BufferedWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if data.len() > self.available() {
            self.flush_buf()?;
        }
        if data.len() >= self.buf.len() {
            return self.inner.write(data);
        }
        let end = self.len + data.len();
        self.buf[self.len..end].copy_from_slice(data);
        self.len = end;
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> ReadFrom for BufferedWriter<W> {
    /// Reads `src` straight into the staging buffer, writing it out each
    /// time it fills. The tail stays buffered until the next flush.
    ///
    /// The count, on success or failure, is bytes taken from `src`; some of
    /// them may still be buffered.
    fn read_from(&mut self, src: &mut dyn Read) -> Result<u64, CopyError> {
        let mut total = 0u64;
        loop {
            if self.len == self.buf.len() {
                self.flush_buf().map_err(|e| CopyError::io(total, e))?;
            }
            match src.read(&mut self.buf[self.len..]) {
                Ok(0) => return Ok(total),
                Ok(n) => {
                    self.len += n;
                    total += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(CopyError::io(total, e)),
            }
        }
    }
}

impl<W: Write> Sink for BufferedWriter<W> {
    fn as_read_from(&mut self) -> Option<&mut dyn ReadFrom> {
        Some(self)
    }
}

impl<W: fmt::Debug> fmt::Debug for BufferedWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedWriter")
            .field("inner", &self.inner)
            .field("buffered", &self.len)
            .field("capacity", &self.buf.len())
            .finish()
    }
}
