//! Array and map readers.

use crate::error::{Error, Result};
use crate::header::read_header;
use crate::reader::PeekReader;
use crate::types::{MajorType, ARG_INDEFINITE, BREAK};
use std::io::Read;

/// Reads the next item as an array.
///
/// `length_hint` is invoked once: with `(false, count)` for a definite
/// array or `(true, 0)` for an indefinite one. `read_item` then runs once
/// per element and must consume exactly one data item from the reader it
/// is handed, typically by re-entering the codec with any typed reader.
pub fn read_array<R, F, G>(input: &mut R, length_hint: F, read_item: G) -> Result<()>
where
    R: Read + ?Sized,
    F: FnOnce(bool, u64) -> Result<()>,
    G: FnMut(&mut PeekReader<&mut R>) -> Result<()>,
{
    let (major, arg, value) = read_header(input)?;

    if major != MajorType::Array {
        return Err(Error::UnsupportedMajorType);
    }

    items_body(input, arg, value, length_hint, read_item)
}

/// Reads the next item as a map.
///
/// Like [`read_array`], except the count is in key and value pairs and
/// `read_pair` must consume one key followed by one value per invocation.
pub fn read_map<R, F, G>(input: &mut R, length_hint: F, read_pair: G) -> Result<()>
where
    R: Read + ?Sized,
    F: FnOnce(bool, u64) -> Result<()>,
    G: FnMut(&mut PeekReader<&mut R>) -> Result<()>,
{
    let (major, arg, value) = read_header(input)?;

    if major != MajorType::Map {
        return Err(Error::UnsupportedMajorType);
    }

    items_body(input, arg, value, length_hint, read_pair)
}

fn items_body<R, F, G>(input: &mut R, arg: u8, value: u64, length_hint: F, mut next: G) -> Result<()>
where
    R: Read + ?Sized,
    F: FnOnce(bool, u64) -> Result<()>,
    G: FnMut(&mut PeekReader<&mut R>) -> Result<()>,
{
    let indefinite = arg == ARG_INDEFINITE;
    length_hint(indefinite, value)?;

    let mut items = PeekReader::new(input);

    if indefinite {
        loop {
            if items.peek()? == BREAK {
                // The sentinel has been pulled off the source; dropping the
                // lookahead discards it.
                return Ok(());
            }

            next(&mut items)?;
        }
    }

    for _ in 0..value {
        next(&mut items)?;
    }

    Ok(())
}
