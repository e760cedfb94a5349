//! bufpool
//!
//! Pooled I/O buffering for Rust.
//!
//! `bufpool` amortizes allocation in byte-stream code by recycling buffers
//! instead of allocating one per operation. It provides:
//!
//! - [`BufferPool`] - growable [`bytes::BytesMut`] buffers
//! - [`ReaderPool`] - buffered readers rebound to a new source on each use
//! - [`WriterPool`] - buffered writers rebound to a new sink on each use
//! - `copy` on the reader and writer pools, which skips the pool entirely
//!   when either endpoint can transfer the bytes itself
//!
//! The crate intentionally:
//! - does NOT spawn threads or tasks
//! - does NOT retry, log errors, or recover from partial failures
//! - does NOT keep a global pool; every pool is an explicitly owned value
//!
//! # Buffers
//!
//! ```
//! use bufpool::BufferPool;
//!
//! let pool = BufferPool::new(4096);
//!
//! let mut buf = pool.acquire();
//! buf.extend_from_slice(b"request body");
//! assert_eq!(buf.len(), 12);
//!
//! pool.release(buf);
//! assert!(pool.acquire().is_empty());
//! ```
//!
//! # Copy
//!
//! ```
//! use std::io::Cursor;
//! use bufpool::ReaderPool;
//!
//! let readers = ReaderPool::new(0);
//!
//! // Cursors write themselves out, so no pooled reader is needed.
//! let mut src = Cursor::new(vec![7u8; 10_000]);
//! let mut dst = Cursor::new(Vec::new());
//!
//! let copied = readers.copy(&mut dst, &mut src)?;
//! assert_eq!(copied, 10_000);
//! assert_eq!(readers.stats().acquired, 0);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Custom endpoints opt in by implementing [`Source`] or [`Sink`]; the
//! default impls expose no direct-transfer capability.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod reader;
mod transfer;
mod writer;

mod pool; // internal generic pool

//
// Public surface
//

pub use buffer::BufferPool;
pub use config::{DEFAULT_BUF_SIZE, PoolConfig};
pub use error::{CopyError, PoolError};
pub use pool::PoolStats;
pub use reader::{BufferedReader, ReaderPool};
pub use transfer::{ReadFrom, Sink, Source, WriteTo, try_direct};
pub use writer::{BufferedWriter, WriterPool};
