//! Configuration for pool construction.
//!
//! - [`PoolConfig`] - Bootstrap capacity and idle bound shared by every pool
//!
//! # Example
//!
//! ```
//! use bufpool::{BufferPool, PoolConfig};
//!
//! let config = PoolConfig::new(4096).with_max_idle(64);
//! let pool = BufferPool::with_config(config)?;
//!
//! let buf = pool.acquire();
//! assert!(buf.capacity() >= 4096);
//! pool.release(buf);
//! # Ok::<(), bufpool::PoolError>(())
//! ```

use crate::error::PoolError;

/// Default staging buffer size for pooled readers and writers (4 KiB).
pub const DEFAULT_BUF_SIZE: usize = 4 * 1024;

/// Configuration shared by [`BufferPool`](crate::BufferPool),
/// [`ReaderPool`](crate::ReaderPool) and [`WriterPool`](crate::WriterPool).
///
/// A bootstrap capacity of `0` means "use the ambient default": buffers start
/// empty and staging buffers get [`DEFAULT_BUF_SIZE`] bytes.
///
/// Pools are unbounded unless [`PoolConfig::with_max_idle`] is set, in which
/// case releases beyond the bound drop the instance instead of retaining it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoolConfig {
    bootstrap_capacity: usize,
    max_idle: Option<usize>,
}

impl PoolConfig {
    /// Creates a configuration with the given bootstrap capacity.
    pub const fn new(bootstrap_capacity: usize) -> Self {
        Self {
            bootstrap_capacity,
            max_idle: None,
        }
    }

    /// Sets the bootstrap capacity.
    ///
    /// Note: This does not validate the configuration. Use [`PoolConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_bootstrap_capacity(mut self, capacity: usize) -> Self {
        self.bootstrap_capacity = capacity;
        self
    }

    /// Bounds the number of idle instances the pool retains.
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = Some(max_idle);
        self
    }

    /// Removes the idle bound.
    pub fn unbounded(mut self) -> Self {
        self.max_idle = None;
        self
    }

    /// Returns the bootstrap capacity (`0` when unset).
    pub fn bootstrap_capacity(&self) -> usize {
        self.bootstrap_capacity
    }

    /// Returns the idle bound, if any.
    pub fn max_idle(&self) -> Option<usize> {
        self.max_idle
    }

    /// Returns the staging buffer size for readers and writers.
    pub(crate) fn staging_size(&self) -> usize {
        if self.bootstrap_capacity > 0 {
            self.bootstrap_capacity
        } else {
            DEFAULT_BUF_SIZE
        }
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.max_idle == Some(0) {
            return Err(PoolError::InvalidConfig {
                message: "max_idle must be non-zero",
            });
        }
        Ok(())
    }
}
