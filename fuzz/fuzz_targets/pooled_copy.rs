#![no_main]

use std::io::{self, Read, Write};

use bufpool::{BufferPool, ReaderPool, Sink, Source, WriterPool};
use libfuzzer_sys::fuzz_target;

/// Reader with no direct-transfer capability and a fuzz-chosen read size.
struct Plain<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Plain<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.step).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

impl Source for Plain<'_> {}

#[derive(Default)]
struct Collect(Vec<u8>);

impl Write for Collect {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for Collect {}

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (buf_size, step, data) = input;
    let buf_size = usize::from(buf_size);
    let step = usize::from(step).max(1);

    // Verify: reader-staged copy preserves bytes and count
    let readers = ReaderPool::new(buf_size);
    let mut dst = Collect::default();
    let n = readers
        .copy(&mut dst, &mut Plain { data: &data, step })
        .unwrap();
    assert_eq!(n, data.len() as u64);
    assert_eq!(dst.0, data);
    assert_eq!(readers.idle(), 1);

    // Verify: writer-staged copy leaves nothing unflushed
    let writers = WriterPool::new(buf_size);
    let mut dst = Collect::default();
    let n = writers
        .copy(&mut dst, &mut Plain { data: &data, step })
        .unwrap();
    assert_eq!(n, data.len() as u64);
    assert_eq!(dst.0, data);
    assert_eq!(writers.idle(), 1);

    // Verify: released buffers come back empty
    let buffers = BufferPool::new(buf_size);
    let buf = buffers.acquire_from_bytes(&data);
    assert_eq!(&buf[..], &data[..]);
    buffers.release(buf);
    assert!(buffers.acquire().is_empty());
});
