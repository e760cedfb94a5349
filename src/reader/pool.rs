//! Pool of buffered readers and the reader-staged copy.

use std::io::Read;

use crate::config::PoolConfig;
use crate::error::{CopyError, PoolError};
use crate::pool::{Pool, PoolStats};
use crate::transfer::{Sink, Source, WriteTo, try_direct};

use super::BufferedReader;

/// A pool of [`BufferedReader`] staging buffers.
///
/// Each acquisition binds a recycled (or new) staging buffer to the given
/// source. Every buffer in one pool has the same size, fixed at construction.
///
/// # Example
///
/// ```
/// use std::io::BufRead;
/// use bufpool::ReaderPool;
///
/// let pool = ReaderPool::new(0);
///
/// let mut reader = pool.acquire(&b"line one\nline two\n"[..]);
/// let mut line = String::new();
/// reader.read_line(&mut line)?;
/// assert_eq!(line, "line one\n");
///
/// let _source = pool.release(reader);
/// assert_eq!(pool.idle(), 1);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct ReaderPool {
    pool: Pool<Box<[u8]>>,
    buf_size: usize,
}

impl ReaderPool {
    /// Creates a pool of readers with `buf_size`-byte staging buffers.
    ///
    /// With `0`, [`DEFAULT_BUF_SIZE`](crate::DEFAULT_BUF_SIZE) is used.
    pub fn new(buf_size: usize) -> Self {
        Self::build(PoolConfig::new(buf_size))
    }

    /// Creates a pool from a validated configuration.
    pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PoolConfig) -> Self {
        let buf_size = config.staging_size();
        Self {
            pool: Pool::new(&config, move || vec![0u8; buf_size].into_boxed_slice()),
            buf_size,
        }
    }

    /// Returns a buffered reader bound to `source`.
    pub fn acquire<R: Read>(&self, source: R) -> BufferedReader<R> {
        BufferedReader::bind(source, self.pool.get())
    }

    /// Unbinds `reader`, returns its staging buffer to the pool and hands
    /// back the source. Unread buffered bytes are discarded.
    pub fn release<R>(&self, reader: BufferedReader<R>) -> R {
        let (source, buf) = reader.unbind();
        self.pool.put(buf);
        source
    }

    /// Streams `src` into `dst` until `src` is exhausted.
    ///
    /// A direct transfer is attempted first; only when neither endpoint
    /// offers one is a pooled reader acquired. The reader goes back to the
    /// pool whether or not the transfer fails. On failure the I/O error is
    /// returned as-is inside [`CopyError::Io`], along with the number of
    /// bytes that reached `dst` first.
    pub fn copy<W, R>(&self, dst: &mut W, src: &mut R) -> Result<u64, CopyError>
    where
        W: Sink,
        R: Source,
    {
        if let Some(result) = try_direct(dst, src) {
            return result;
        }

        let mut reader = self.acquire(src);
        let result = reader.write_to(dst);
        self.release(reader);
        result
    }

    /// Returns the staging buffer size.
    pub fn buf_size(&self) -> usize {
        self.buf_size
    }

    /// Returns the number of idle readers.
    pub fn idle(&self) -> usize {
        self.pool.idle()
    }

    /// Returns a snapshot of pool activity.
    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }
}

impl Default for ReaderPool {
    fn default() -> Self {
        Self::new(0)
    }
}
