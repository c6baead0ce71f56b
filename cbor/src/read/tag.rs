//! Tag number reader.

use crate::error::{Error, Result};
use crate::header::read_header;
use crate::types::MajorType;
use std::io::Read;

/// Reads the next item's tag number. The wrapped item is left unread for
/// the caller.
pub fn read_tag<R>(input: &mut R) -> Result<u64>
where
    R: Read + ?Sized,
{
    let (major, _, value) = read_header(input)?;

    if major != MajorType::Tag {
        return Err(Error::UnsupportedMajorType);
    }

    Ok(value)
}
