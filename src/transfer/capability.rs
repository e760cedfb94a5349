//! Byte endpoints and their optional direct-transfer capabilities.

use std::fs::File;
use std::io::{self, Cursor, Read, Write};
use std::net::TcpStream;
use std::process::{ChildStderr, ChildStdin, ChildStdout};

use crate::error::CopyError;

/// Writes everything a source has left into `dst` using its own copy loop.
pub trait WriteTo {
    /// Writes the remaining bytes into `dst`, returning how many were written.
    ///
    /// On failure the error carries the bytes written before it.
    fn write_to(&mut self, dst: &mut dyn Write) -> Result<u64, CopyError>;
}

/// Reads everything `src` has left using the sink's own copy loop.
pub trait ReadFrom {
    /// Reads `src` until exhaustion, returning how many bytes were consumed.
    ///
    /// On failure the error carries the bytes consumed before it.
    fn read_from(&mut self, src: &mut dyn Read) -> Result<u64, CopyError>;
}

/// Like `Write::write_all`, but also reports how much of `data` was accepted
/// when it fails.
pub(crate) fn write_all_counted(dst: &mut dyn Write, data: &[u8]) -> (usize, io::Result<()>) {
    let mut written = 0;
    while written < data.len() {
        match dst.write(&data[written..]) {
            Ok(0) => {
                let err = io::Error::new(io::ErrorKind::WriteZero, "failed to write whole buffer");
                return (written, Err(err));
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return (written, Err(e)),
        }
    }
    (written, Ok(()))
}

/// A byte source that may expose a [`WriteTo`] capability.
///
/// The default answers "no capability", so plain readers only need an empty
/// impl:
///
/// ```
/// use std::io::{self, Read};
/// use bufpool::Source;
///
/// struct Zeros;
///
/// impl Read for Zeros {
///     fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
///         buf.fill(0);
///         Ok(buf.len())
///     }
/// }
///
/// impl Source for Zeros {}
/// ```
pub trait Source: Read {
    /// Returns the direct-transfer capability, if this source has one.
    fn as_write_to(&mut self) -> Option<&mut dyn WriteTo> {
        None
    }
}

/// A byte sink that may expose a [`ReadFrom`] capability.
pub trait Sink: Write {
    /// Returns the direct-transfer capability, if this sink has one.
    fn as_read_from(&mut self) -> Option<&mut dyn ReadFrom> {
        None
    }
}

impl WriteTo for &[u8] {
    fn write_to(&mut self, dst: &mut dyn Write) -> Result<u64, CopyError> {
        let data = *self;
        let (written, result) = write_all_counted(dst, data);
        *self = &data[written..];
        result
            .map(|()| written as u64)
            .map_err(|e| CopyError::io(written as u64, e))
    }
}

impl Source for &[u8] {
    fn as_write_to(&mut self) -> Option<&mut dyn WriteTo> {
        Some(self)
    }
}

impl<T: AsRef<[u8]>> WriteTo for Cursor<T> {
    fn write_to(&mut self, dst: &mut dyn Write) -> Result<u64, CopyError> {
        let start = usize::try_from(self.position()).unwrap_or(usize::MAX);
        let (written, result) = {
            let data = self.get_ref().as_ref();
            let rest = data.get(start..).unwrap_or_default();
            write_all_counted(dst, rest)
        };
        if written > 0 {
            self.set_position((start + written) as u64);
        }
        result
            .map(|()| written as u64)
            .map_err(|e| CopyError::io(written as u64, e))
    }
}

impl<T: AsRef<[u8]>> Source for Cursor<T> {
    fn as_write_to(&mut self) -> Option<&mut dyn WriteTo> {
        Some(self)
    }
}

impl ReadFrom for Vec<u8> {
    fn read_from(&mut self, src: &mut dyn Read) -> Result<u64, CopyError> {
        let start = self.len();
        // Bytes read before an error stay appended.
        src.read_to_end(self)
            .map(|n| n as u64)
            .map_err(|e| CopyError::io((self.len() - start) as u64, e))
    }
}

impl Sink for Vec<u8> {
    fn as_read_from(&mut self) -> Option<&mut dyn ReadFrom> {
        Some(self)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    fn as_write_to(&mut self) -> Option<&mut dyn WriteTo> {
        (**self).as_write_to()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn as_write_to(&mut self) -> Option<&mut dyn WriteTo> {
        (**self).as_write_to()
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn as_read_from(&mut self) -> Option<&mut dyn ReadFrom> {
        (**self).as_read_from()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn as_read_from(&mut self) -> Option<&mut dyn ReadFrom> {
        (**self).as_read_from()
    }
}

macro_rules! plain_endpoint {
    ($trait:ident: $($ty:ty),+ $(,)?) => {
        $(impl $trait for $ty {})+
    };
}

plain_endpoint!(Source: File, TcpStream, io::Stdin, io::Empty, io::Repeat, ChildStdout, ChildStderr);
plain_endpoint!(Sink: File, TcpStream, io::Stdout, io::Stderr, io::Sink, ChildStdin);
plain_endpoint!(Sink: Cursor<Vec<u8>>, Cursor<&mut [u8]>, Cursor<&mut Vec<u8>>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_write_to_consumes() {
        let mut src: &[u8] = b"hello";
        let mut dst = Vec::new();
        let n = src.as_write_to().unwrap().write_to(&mut dst).unwrap();
        assert_eq!(n, 5);
        assert_eq!(dst, b"hello");
        assert!(src.is_empty());
    }

    #[test]
    fn test_cursor_write_to_from_position() {
        let mut src = Cursor::new(b"0123456789".to_vec());
        src.set_position(4);
        let mut dst = Vec::new();
        let n = src.write_to(&mut dst).unwrap();
        assert_eq!(n, 6);
        assert_eq!(dst, b"456789");
        assert_eq!(src.position(), 10);

        // Exhausted cursor writes nothing
        assert_eq!(src.write_to(&mut dst).unwrap(), 0);
    }

    #[test]
    fn test_cursor_past_end() {
        let mut src = Cursor::new(b"abc");
        src.set_position(100);
        let mut dst = Vec::new();
        assert_eq!(src.write_to(&mut dst).unwrap(), 0);
        assert!(dst.is_empty());
    }

    #[test]
    fn test_vec_read_from_appends() {
        let mut dst = b"ab".to_vec();
        let n = dst
            .as_read_from()
            .unwrap()
            .read_from(&mut &b"cd"[..])
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(dst, b"abcd");
    }

    /// Accepts `room` bytes, then fails.
    struct Cramped {
        out: Vec<u8>,
        room: usize,
    }

    impl Write for Cramped {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "no room"));
            }
            let n = buf.len().min(self.room);
            self.out.extend_from_slice(&buf[..n]);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_slice_write_to_reports_partial_count() {
        let mut src: &[u8] = b"0123456789";
        let mut dst = Cramped {
            out: Vec::new(),
            room: 4,
        };
        let err = src.write_to(&mut dst).unwrap_err();
        assert_eq!(err.copied(), 4);
        assert_eq!(err.io_error().kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(src, b"456789");
    }

    #[test]
    fn test_cursor_write_to_reports_partial_count() {
        let mut src = Cursor::new(b"0123456789".to_vec());
        let mut dst = Cramped {
            out: Vec::new(),
            room: 7,
        };
        let err = src.write_to(&mut dst).unwrap_err();
        assert_eq!(err.copied(), 7);
        assert_eq!(src.position(), 7);
        assert_eq!(dst.out, b"0123456");
    }

    #[test]
    fn test_vec_read_from_reports_partial_count() {
        let mut src = (&b"abc"[..]).chain(Failing);
        let mut dst: Vec<u8> = Vec::new();
        let err = dst.read_from(&mut src).unwrap_err();
        assert_eq!(err.copied(), 3);
        assert_eq!(dst, b"abc");
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn test_plain_endpoints_have_no_capability() {
        assert!(io::empty().as_write_to().is_none());
        assert!(io::sink().as_read_from().is_none());
        assert!(Cursor::new(Vec::new()).as_read_from().is_none());
    }

    #[test]
    fn test_forwarding_through_references() {
        let mut dst = Vec::new();
        let mut by_ref = &mut dst;
        assert!(Sink::as_read_from(&mut by_ref).is_some());

        let mut boxed: Box<dyn Source> = Box::new(io::empty());
        assert!(boxed.as_write_to().is_none());
    }
}
