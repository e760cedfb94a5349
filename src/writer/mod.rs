//! Pooled buffered writers.
//!
//! - [`WriterPool`] - Recycles staging buffers and rebinds them to new sinks
//! - [`BufferedWriter`] - The writer handed out by the pool

mod buffered;
mod pool;

pub use buffered::BufferedWriter;
pub use pool::WriterPool;
