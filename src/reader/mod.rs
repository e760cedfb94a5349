//! Pooled buffered readers.
//!
//! - [`ReaderPool`] - Recycles staging buffers and rebinds them to new sources
//! - [`BufferedReader`] - The reader handed out by the pool

mod buffered;
mod pool;

pub use buffered::BufferedReader;
pub use pool::ReaderPool;
