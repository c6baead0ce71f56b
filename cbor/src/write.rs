//! CBOR item writers.
//!
//! Every writer returns the total number of bytes it wrote and stops at the
//! first sink error.

use crate::error::Result;
use crate::header::write_header;
use crate::num::be_pack;
use crate::types::{MajorType, ARG_U16, ARG_U32, ARG_U64, SIMPLE_FALSE, SIMPLE_TRUE};
use half::f16;
use std::io::Write;

/// Writes `value` as an unsigned integer.
pub fn write_unsigned<T, W>(out: &mut W, value: T) -> Result<usize>
where
    T: Into<u64>,
    W: Write + ?Sized,
{
    write_header(out, MajorType::Unsigned, value.into())
}

/// Writes `value` as an unsigned or negative integer depending on its sign.
pub fn write_signed<T, W>(out: &mut W, value: T) -> Result<usize>
where
    T: Into<i64>,
    W: Write + ?Sized,
{
    let value = value.into();

    if value >= 0 {
        write_header(out, MajorType::Unsigned, value as u64)
    } else {
        write_header(out, MajorType::Negative, (-(value + 1)) as u64)
    }
}

/// Writes `value` at the narrowest precision that preserves it exactly:
/// half if the half-precision conversion is exact, else single if the value
/// survives the round trip through binary32, else double.
///
/// NaN payloads are not preserved; every NaN is written as the
/// half-precision quiet NaN.
pub fn write_float<T, W>(out: &mut W, value: T) -> Result<usize>
where
    T: Into<f64>,
    W: Write + ?Sized,
{
    let value = value.into();

    if value.is_nan() {
        return float_bits(out, ARG_U16, u64::from(f16::NAN.to_bits()), 2);
    }

    let single = value as f32;

    if f64::from(single) != value {
        return float_bits(out, ARG_U64, value.to_bits(), 8);
    }

    let half = f16::from_f32(single);

    if f32::from(half) == single {
        float_bits(out, ARG_U16, u64::from(half.to_bits()), 2)
    } else {
        float_bits(out, ARG_U32, u64::from(single.to_bits()), 4)
    }
}

fn float_bits<W>(out: &mut W, arg: u8, bits: u64, trailing: usize) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut buf = [0u8; 9];
    buf[0] = MajorType::Simple.byte(arg);
    be_pack(bits, &mut buf[1..=trailing]);
    out.write_all(&buf[..=trailing])?;

    Ok(1 + trailing)
}

/// Writes `value` as false or true.
pub fn write_bool<W>(out: &mut W, value: bool) -> Result<usize>
where
    W: Write + ?Sized,
{
    let simple = if value { SIMPLE_TRUE } else { SIMPLE_FALSE };
    write_header(out, MajorType::Simple, u64::from(simple))
}

/// Writes a tag number. The caller writes the wrapped item next.
pub fn write_tag<W>(out: &mut W, tag: u64) -> Result<usize>
where
    W: Write + ?Sized,
{
    write_header(out, MajorType::Tag, tag)
}

/// Writes a definite-length byte string.
pub fn write_bytes<W>(out: &mut W, value: &[u8]) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut written = write_header(out, MajorType::Bytes, value.len() as u64)?;
    out.write_all(value)?;
    written += value.len();

    Ok(written)
}

/// Writes a definite-length text string. The payload is the UTF-8 encoding
/// of `value`.
pub fn write_text<W>(out: &mut W, value: &str) -> Result<usize>
where
    W: Write + ?Sized,
{
    let mut written = write_header(out, MajorType::Text, value.len() as u64)?;
    out.write_all(value.as_bytes())?;
    written += value.len();

    Ok(written)
}

/// Writes a definite-length array header. The caller writes `length`
/// elements next.
pub fn write_array_header<W>(out: &mut W, length: u64) -> Result<usize>
where
    W: Write + ?Sized,
{
    write_header(out, MajorType::Array, length)
}

/// Writes a definite-length map header. The caller writes `length` key and
/// value pairs next.
pub fn write_map_header<W>(out: &mut W, length: u64) -> Result<usize>
where
    W: Write + ?Sized,
{
    write_header(out, MajorType::Map, length)
}
