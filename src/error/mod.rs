//! Error types for bufpool.

use std::fmt;
use std::io;

/// Errors raised while configuring a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidConfig { message } => write!(f, "invalid config: {}", message),
        }
    }
}

impl std::error::Error for PoolError {}

/// Errors returned by the copy routines.
///
/// Both variants carry the number of bytes moved before the failure, so a
/// caller can tell how much of the source was consumed. The I/O error itself
/// is carried verbatim. A flush error is only reported by
/// [`WriterPool::copy`](crate::WriterPool::copy), after every byte of the
/// source was handed to the staging writer.
#[derive(Debug)]
pub enum CopyError {
    /// Reading from the source or writing to the destination failed.
    Io {
        /// Bytes transferred before the failure.
        copied: u64,
        /// The error reported by the source or destination.
        source: io::Error,
    },

    /// The transfer succeeded but flushing the staged bytes failed.
    Flush {
        /// Bytes handed to the writer before the flush was attempted.
        copied: u64,
        /// The error reported by the destination.
        source: io::Error,
    },
}

impl CopyError {
    /// Creates a transfer error after `copied` bytes were moved.
    pub fn io(copied: u64, source: io::Error) -> Self {
        CopyError::Io { copied, source }
    }

    /// Returns the number of bytes transferred before the failure.
    pub fn copied(&self) -> u64 {
        match self {
            CopyError::Io { copied, .. } | CopyError::Flush { copied, .. } => *copied,
        }
    }

    /// Returns the underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            CopyError::Io { source, .. } | CopyError::Flush { source, .. } => source,
        }
    }

    /// Returns `true` if this is a flush error.
    pub fn is_flush(&self) -> bool {
        matches!(self, CopyError::Flush { .. })
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::Io { copied, source } => {
                write!(f, "io error after {} bytes: {}", copied, source)
            }
            CopyError::Flush { copied, source } => {
                write!(f, "flush failed after {} bytes: {}", copied, source)
            }
        }
    }
}

impl std::error::Error for CopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}

impl From<io::Error> for CopyError {
    fn from(e: io::Error) -> Self {
        CopyError::io(0, e)
    }
}

impl From<CopyError> for io::Error {
    fn from(e: CopyError) -> Self {
        match e {
            CopyError::Io { source, .. } | CopyError::Flush { source, .. } => source,
        }
    }
}
