//! Buffer-free copy path.

use crate::error::CopyError;

use super::capability::{Sink, Source};

/// Copies `src` into `dst` through one of their own transfer routines.
///
/// The source's [`WriteTo`](super::WriteTo) capability is preferred, then the
/// destination's [`ReadFrom`](super::ReadFrom). Returns `None` without
/// touching either endpoint when neither capability exists, leaving the
/// caller to stage the copy through a pooled buffer.
///
/// Errors from the capability are returned unchanged, together with the
/// byte count it reported.
///
/// # Example
///
/// ```
/// use bufpool::try_direct;
///
/// let mut src: &[u8] = b"payload";
/// let mut dst = Vec::new();
///
/// let copied = try_direct(&mut dst, &mut src).expect("slices write themselves");
/// assert_eq!(copied?, 7);
/// # Ok::<(), bufpool::CopyError>(())
/// ```
pub fn try_direct<W, R>(dst: &mut W, src: &mut R) -> Option<Result<u64, CopyError>>
where
    W: Sink,
    R: Source,
{
    if let Some(writer_to) = src.as_write_to() {
        tracing::trace!("direct copy via source write_to");
        return Some(writer_to.write_to(dst));
    }
    if let Some(reader_from) = dst.as_read_from() {
        tracing::trace!("direct copy via destination read_from");
        return Some(reader_from.read_from(src));
    }
    None
}
