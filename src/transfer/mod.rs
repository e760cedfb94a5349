//! Byte endpoints and the buffer-free copy path.
//!
//! - [`Source`] / [`Sink`] - Readers and writers that may expose a direct-transfer capability
//! - [`WriteTo`] / [`ReadFrom`] - The capabilities themselves
//! - [`try_direct`] - Delegates a copy to one of those capabilities when present

mod capability;
mod direct;

pub use capability::{ReadFrom, Sink, Source, WriteTo};
pub(crate) use capability::write_all_counted;
pub use direct::try_direct;
