//! Rebindable buffered reader.

use std::fmt;
use std::io::{self, BufRead, Read, Write};

use crate::error::CopyError;
use crate::transfer::{Source, WriteTo, write_all_counted};

/// A buffered reader whose staging buffer is borrowed from a
/// [`ReaderPool`](crate::ReaderPool).
///
/// Obtained from [`ReaderPool::acquire`](crate::ReaderPool::acquire) and
/// handed back with [`ReaderPool::release`](crate::ReaderPool::release),
/// which discards any unread buffered bytes and returns the source.
pub struct BufferedReader<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
}

impl<R> BufferedReader<R> {
    /// Binds a staging buffer to `inner`, starting with nothing buffered.
    pub(crate) fn bind(inner: R, buf: Box<[u8]>) -> Self {
        Self {
            inner,
            buf,
            pos: 0,
            filled: 0,
        }
    }

    /// Splits the reader into its source and its staging buffer.
    pub(crate) fn unbind(self) -> (R, Box<[u8]>) {
        (self.inner, self.buf)
    }

    /// Returns the buffered bytes not yet consumed.
    pub fn buffer(&self) -> &[u8] {
        &self.buf[self.pos..self.filled]
    }

    /// Returns the size of the staging buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Gets a reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Gets a mutable reference to the underlying source.
    ///
    /// Reading from it directly skips whatever is buffered.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    fn discard_buffer(&mut self) {
        self.pos = 0;
        self.filled = 0;
    }
}

impl<R: Read> Read for BufferedReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        // Large reads with nothing buffered go straight to the source.
        if self.pos == self.filled && out.len() >= self.buf.len() {
            self.discard_buffer();
            return self.inner.read(out);
        }
        let n = {
            let mut rem = self.fill_buf()?;
            rem.read(out)?
        };
        self.consume(n);
        Ok(n)
    }
}

impl<R: Read> BufRead for BufferedReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.filled {
            let n = self.inner.read(&mut self.buf)?;
            self.pos = 0;
            self.filled = n;
        }
        Ok(&self.buf[self.pos..self.filled])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.filled);
    }
}

impl<R: Read> WriteTo for BufferedReader<R> {
    /// Drains the buffered bytes, then streams the rest of the source
    /// through the staging buffer.
    fn write_to(&mut self, dst: &mut dyn Write) -> Result<u64, CopyError> {
        let mut written = 0u64;
        loop {
            let chunk = match self.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CopyError::io(written, e)),
            };
            if chunk.is_empty() {
                return Ok(written);
            }
            let (n, result) = write_all_counted(dst, chunk);
            self.consume(n);
            written += n as u64;
            result.map_err(|e| CopyError::io(written, e))?;
        }
    }
}

impl<R: Read> Source for BufferedReader<R> {
    fn as_write_to(&mut self) -> Option<&mut dyn WriteTo> {
        Some(self)
    }
}

impl<R: fmt::Debug> fmt::Debug for BufferedReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedReader")
            .field("inner", &self.inner)
            .field("buffered", &(self.filled - self.pos))
            .field("capacity", &self.buf.len())
            .finish()
    }
}
