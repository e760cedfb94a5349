//! Shared pool of growable byte buffers.

use bytes::{BufMut, BytesMut};

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::pool::{Pool, PoolStats};

/// A pool of reusable [`BytesMut`] buffers.
///
/// Buffers come out of [`BufferPool::acquire`] empty. [`BufferPool::release`]
/// clears the contents but keeps the backing storage, so a recycled buffer
/// usually has room for whatever its previous holder wrote.
///
/// The pool is safe to share between threads (wrap it in an `Arc`); each
/// acquired buffer is owned exclusively by its holder until released.
/// Dropping a buffer instead of releasing it is fine, it is simply not reused.
///
/// # Example
///
/// ```
/// use bufpool::BufferPool;
///
/// let pool = BufferPool::new(1024);
///
/// let mut buf = pool.acquire_from_str("hello");
/// buf.extend_from_slice(b" world");
/// assert_eq!(&buf[..], b"hello world");
///
/// pool.release(buf);
/// assert!(pool.acquire().is_empty());
/// ```
#[derive(Debug)]
pub struct BufferPool {
    pool: Pool<BytesMut>,
}

impl BufferPool {
    /// Creates a pool whose new buffers pre-allocate `bootstrap_capacity` bytes.
    ///
    /// With `0`, new buffers start without backing storage.
    pub fn new(bootstrap_capacity: usize) -> Self {
        Self::build(PoolConfig::new(bootstrap_capacity))
    }

    /// Creates a pool from a validated configuration.
    pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PoolConfig) -> Self {
        let capacity = config.bootstrap_capacity();
        let pool = if capacity > 0 {
            Pool::new(&config, move || BytesMut::with_capacity(capacity))
        } else {
            Pool::new(&config, BytesMut::new)
        };
        Self { pool }
    }

    /// Returns an empty buffer, recycled or newly constructed.
    pub fn acquire(&self) -> BytesMut {
        self.pool.get()
    }

    /// Returns a buffer holding a copy of `s`.
    pub fn acquire_from_str(&self, s: &str) -> BytesMut {
        self.acquire_from_bytes(s.as_bytes())
    }

    /// Returns a buffer holding a copy of `data`.
    pub fn acquire_from_bytes(&self, data: &[u8]) -> BytesMut {
        let mut buf = self.acquire();
        buf.put_slice(data);
        buf
    }

    /// Clears `buf` and returns it to the pool.
    pub fn release(&self, mut buf: BytesMut) {
        buf.clear();
        self.pool.put(buf);
    }

    /// Returns the number of idle buffers.
    pub fn idle(&self) -> usize {
        self.pool.idle()
    }

    /// Returns a snapshot of pool activity.
    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(0)
    }
}
