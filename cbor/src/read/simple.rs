//! Readers for simple values.

use crate::error::{Error, Result};
use crate::header::read_header;
use crate::types::{MajorType, SIMPLE_FALSE, SIMPLE_TRUE};
use std::io::Read;

/// Reads the next item as a boolean.
pub fn read_bool<R>(input: &mut R) -> Result<bool>
where
    R: Read + ?Sized,
{
    let (major, _, value) = read_header(input)?;
    bool_from(major, value)
}

pub(crate) fn bool_from(major: MajorType, value: u64) -> Result<bool> {
    if major != MajorType::Simple {
        return Err(Error::UnsupportedMajorType);
    }

    if value == u64::from(SIMPLE_FALSE) {
        Ok(false)
    } else if value == u64::from(SIMPLE_TRUE) {
        Ok(true)
    } else {
        Err(Error::UnsupportedValue)
    }
}
