//! Pool of buffered writers and the writer-staged copy.

use std::io::Write;

use crate::config::PoolConfig;
use crate::error::{CopyError, PoolError};
use crate::pool::{Pool, PoolStats};
use crate::transfer::{ReadFrom, Sink, Source, try_direct};

use super::BufferedWriter;

/// A pool of [`BufferedWriter`] staging buffers.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use bufpool::WriterPool;
///
/// let pool = WriterPool::new(64);
///
/// let mut writer = pool.acquire(Vec::new());
/// writer.write_all(b"buffered")?;
/// writer.flush()?;
///
/// let out = pool.release(writer);
/// assert_eq!(out, b"buffered");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct WriterPool {
    pool: Pool<Box<[u8]>>,
    buf_size: usize,
}

impl WriterPool {
    /// Creates a pool of writers with `buf_size`-byte staging buffers.
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

    /// Returns a buffered writer bound to `sink`.
    pub fn acquire<W: Write>(&self, sink: W) -> BufferedWriter<W> {
        BufferedWriter::bind(sink, self.pool.get())
    }

    /// Unbinds `writer`, returns its staging buffer to the pool and hands
    /// back the sink. Unflushed bytes are discarded.
    pub fn release<W>(&self, writer: BufferedWriter<W>) -> W {
        let (sink, buf) = writer.unbind();
        self.pool.put(buf);
        sink
    }

    /// Streams `src` into `dst` until `src` is exhausted, then flushes.
    ///
    /// A direct transfer is attempted first; only when neither endpoint
    /// offers one is a pooled writer acquired. If the transfer fails the
    /// writer is not flushed and the error comes back as [`CopyError::Io`]
    /// with the number of bytes taken from `src` before the failure.
    /// If only the final flush fails, [`CopyError::Flush`] carries the number
    /// of bytes handed to the writer. The writer is released in every case.
    pub fn copy<W, R>(&self, dst: &mut W, src: &mut R) -> Result<u64, CopyError>
    where
        W: Sink,
        R: Source,
    {
        if let Some(result) = try_direct(dst, src) {
            return result;
        }

        let mut writer = self.acquire(dst);
        let result = writer.read_from(src).and_then(|copied| {
            writer
                .flush()
                .map(|()| copied)
                .map_err(|source| CopyError::Flush { copied, source })
        });
        self.release(writer);
        result
    }

    /// Returns the staging buffer size.
    pub fn buf_size(&self) -> usize {
        self.buf_size
    }

    /// Returns the number of idle writers.
    pub fn idle(&self) -> usize {
        self.pool.idle()
    }

    /// Returns a snapshot of pool activity.
    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }
}

impl Default for WriterPool {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    struct Plain<'a>(&'a [u8]);

    impl Read for Plain<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.0.read(buf)
        }
    }

    impl Source for Plain<'_> {}

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    impl Source for Failing {}

    #[test]
    fn test_release_discards_unflushed() {
        let pool = WriterPool::new(16);
        let mut writer = pool.acquire(Vec::new());
        writer.write_all(b"lost").unwrap();
        let out = pool.release(writer);
        assert!(out.is_empty());

        let writer = pool.acquire(Vec::new());
        assert!(writer.buffer().is_empty());
        assert_eq!(writer.capacity(), 16);
    }

    #[test]
    fn test_copy_staged_flushes() {
        let pool = WriterPool::new(8);
        let mut src = Plain(b"flushed through the pool");
        let mut dst = io::Cursor::new(Vec::new());
        let n = pool.copy(&mut dst, &mut src).unwrap();
        assert_eq!(n, 24);
        assert_eq!(dst.get_ref().as_slice(), b"flushed through the pool");
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn test_copy_transfer_error_releases() {
        let pool = WriterPool::new(8);
        let mut dst = io::Cursor::new(Vec::new());
        let err = pool.copy(&mut dst, &mut Failing).unwrap_err();
        assert!(!err.is_flush());
        assert_eq!(err.io_error().kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(err.copied(), 0);
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn test_copy_direct_skips_pool() {
        let pool = WriterPool::new(0);
        let mut src = Plain(b"into a vec");
        let mut dst = Vec::new();
        assert_eq!(pool.copy(&mut dst, &mut src).unwrap(), 10);
        assert_eq!(dst, b"into a vec");
        assert_eq!(pool.stats().acquired, 0);
    }
}
