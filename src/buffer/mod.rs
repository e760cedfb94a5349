//! Pooled growable byte buffers.
//!
//! - [`BufferPool`] - Recycles [`bytes::BytesMut`] buffers, cleared on release

mod pool;

pub use pool::BufferPool;
