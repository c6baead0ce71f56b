//! Reading and writing of CBOR item headers.

use crate::error::{Error, Result};
use crate::num::{be_pack, be_unpack};
use crate::types::{MajorType, ARG_INDEFINITE, ARG_U16, ARG_U32, ARG_U64, ARG_U8};
use std::io::{Read, Write};

/// How many argument bytes trail the initial byte for an argument code.
///
/// Codes 28 through 30 are reserved and make the item not well formed.
pub(crate) fn arg_length(arg: u8) -> Result<usize> {
    match arg {
        _ if arg < ARG_U8 => Ok(0),
        ARG_U8 => Ok(1),
        ARG_U16 => Ok(2),
        ARG_U32 => Ok(4),
        ARG_U64 => Ok(8),
        ARG_INDEFINITE => Ok(0),
        _ => Err(Error::NotWellFormed),
    }
}

/// Reads one item header: the initial byte plus any trailing argument
/// bytes.
///
/// Returns the major type, the argument code, and the 64-bit argument
/// value. Inline arguments (codes 0 through 23) come back with code zero
/// and the value carried in the third field; codes 24 through 27 pull one,
/// two, four, or eight big-endian bytes into the value; the indefinite code
/// comes back with a zero value, its meaning left to the caller. Reserved
/// codes fail with [`Error::NotWellFormed`].
pub fn read_header<R>(input: &mut R) -> Result<(MajorType, u8, u64)>
where
    R: Read + ?Sized,
{
    let mut buf = [0u8; 8];
    input.read_exact(&mut buf[..1])?;

    let (major, arg) = MajorType::split(buf[0]);
    let trailing = arg_length(arg)?;

    if trailing == 0 {
        return if arg < ARG_U8 {
            Ok((major, 0, u64::from(arg)))
        } else {
            Ok((major, arg, 0))
        };
    }

    let bytes = &mut buf[..trailing];
    input.read_exact(bytes)?;

    Ok((major, arg, be_unpack(bytes)))
}

/// Writes an item header for `major` carrying `value`, using the shortest
/// of the inline, one, two, four, or eight byte argument forms that fits.
/// Returns the number of bytes written.
pub fn write_header<W>(out: &mut W, major: MajorType, value: u64) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut buf = [0u8; 9];

    if value < u64::from(ARG_U8) {
        buf[0] = major.byte(value as u8);
        out.write_all(&buf[..1])?;
        return Ok(1);
    }

    let (arg, trailing) = if value < 0x1_00 {
        (ARG_U8, 1)
    } else if value < 0x1_00_00 {
        (ARG_U16, 2)
    } else if value < 0x1_00_00_00_00 {
        (ARG_U32, 4)
    } else {
        (ARG_U64, 8)
    };

    buf[0] = major.byte(arg);
    be_pack(value, &mut buf[1..=trailing]);
    out.write_all(&buf[..=trailing])?;

    Ok(1 + trailing)
}
