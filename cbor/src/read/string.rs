//! Byte and text string readers.

use crate::error::{Error, Result};
use crate::header::read_header;
use crate::reader::copy_exact;
use crate::types::{MajorType, ARG_INDEFINITE};
use std::io::{Read, Write};

/// Reads the next item as a byte or text string, streaming its payload
/// into `out`.
///
/// `length_hint` is invoked once before any payload moves: with
/// `(false, byte_length)` for a definite-length string, or `(true, 0)` for
/// an indefinite-length one, letting the caller preallocate or refuse. An
/// indefinite string is a run of definite chunks of the same major type
/// terminated by break; `out` receives the concatenated payloads and chunk
/// boundaries are not preserved. A chunk of the other string major fails
/// with [`Error::UnsupportedMajorType`], an indefinite chunk with
/// [`Error::NestedIndefinite`].
pub fn read_bytes<R, W, F>(input: &mut R, length_hint: F, out: &mut W) -> Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
    F: FnOnce(bool, u64) -> Result<()>,
{
    let (major, arg, value) = read_header(input)?;
    bytes_body(input, major, arg, value, length_hint, out)
}

pub(crate) fn bytes_body<R, W, F>(
    input: &mut R,
    major: MajorType,
    arg: u8,
    value: u64,
    length_hint: F,
    out: &mut W,
) -> Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
    F: FnOnce(bool, u64) -> Result<()>,
{
    if major != MajorType::Bytes && major != MajorType::Text {
        return Err(Error::UnsupportedMajorType);
    }

    let indefinite = arg == ARG_INDEFINITE;
    length_hint(indefinite, value)?;

    if !indefinite {
        return copy_exact(input, out, value);
    }

    loop {
        let (chunk_major, chunk_arg, chunk_length) = read_header(input)?;

        if chunk_major == MajorType::Simple && chunk_arg == ARG_INDEFINITE {
            return Ok(());
        }

        if chunk_major != major {
            return Err(Error::UnsupportedMajorType);
        }

        if chunk_arg == ARG_INDEFINITE {
            return Err(Error::NestedIndefinite);
        }

        copy_exact(input, out, chunk_length)?;
    }
}
