//! Reader adapter providing one byte of lookahead, plus bounded-buffer
//! stream helpers.

use crate::error::Result;
use std::io::{self, Read, Write};

/// How many payload bytes are staged on the stack at a time when streaming
/// string contents.
pub(crate) const SCRATCH_LEN: usize = 64;

/// Wraps a byte source so the next byte can be inspected without consuming
/// it.
///
/// The break sentinel that terminates an indefinite-length array or map is
/// a full header byte sitting where the next item would start; peeking lets
/// the container loops spot it without stealing the first byte of a real
/// item. Only one byte of lookahead is ever held, so the source is never
/// positioned more than one byte past what the caller has consumed.
pub struct PeekReader<R> {
    source: R,
    peeked: Option<u8>,
}

impl<R: Read> PeekReader<R> {
    /// Wraps a source in a lookahead reader.
    pub fn new(source: R) -> Self {
        Self {
            source,
            peeked: None,
        }
    }

    /// Returns the next byte without consuming it.
    ///
    /// The first call pulls one byte from the source and caches it;
    /// repeated calls return the cached byte. Fails if the source errors or
    /// ends before a byte is available.
    pub fn peek(&mut self) -> io::Result<u8> {
        if let Some(byte) = self.peeked {
            return Ok(byte);
        }

        let mut byte = [0u8];
        self.source.read_exact(&mut byte)?;
        self.peeked = Some(byte[0]);

        Ok(byte[0])
    }
}

impl<R: Read> Read for PeekReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if let Some(byte) = self.peeked.take() {
            buf[0] = byte;
            return Ok(1);
        }

        self.source.read(buf)
    }
}

/// Streams exactly `length` bytes from `input` into `out` through a stack
/// scratch buffer.
pub(crate) fn copy_exact<R, W>(input: &mut R, out: &mut W, mut length: u64) -> Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut scratch = [0u8; SCRATCH_LEN];

    while length > 0 {
        let step = length.min(SCRATCH_LEN as u64) as usize;
        input.read_exact(&mut scratch[..step])?;
        out.write_all(&scratch[..step])?;
        length -= step as u64;
    }

    Ok(())
}

/// Reads and discards exactly `length` bytes from `input`.
pub(crate) fn discard_exact<R>(input: &mut R, mut length: u64) -> Result<()>
where
    R: Read + ?Sized,
{
    let mut scratch = [0u8; SCRATCH_LEN];

    while length > 0 {
        let step = length.min(SCRATCH_LEN as u64) as usize;
        input.read_exact(&mut scratch[..step])?;
        length -= step as u64;
    }

    Ok(())
}
