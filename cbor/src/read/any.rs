//! Untyped reader producing dynamically typed values.

use crate::error::{Error, Result};
use crate::header::read_header;
use crate::read::number::{float_from, signed_from, unsigned_from};
use crate::read::simple::bool_from;
use crate::read::string::bytes_body;
use crate::types::{
    MajorType, ARG_INDEFINITE, ARG_U16, ARG_U32, ARG_U64, ARG_U8, SIMPLE_FALSE, SIMPLE_NULL,
    SIMPLE_TRUE, SIMPLE_UNDEFINED,
};
use std::io::Read;

/// A decoded data item of any kind.
///
/// Integer variants mirror the encoded argument width: inline and one-byte
/// arguments decode as `U8`/`I8`, two-byte arguments as `U16`/`I16`, and so
/// on. Half-precision floats widen to `F32`. Undefined coalesces to `Null`.
/// Map entries keep their stream order, duplicates included.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Null,
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

/// Reads the next data item, whatever its type.
///
/// Tag numbers are dropped; the wrapped item is returned in their place.
pub fn read_any<R>(input: &mut R) -> Result<Value>
where
    R: Read + ?Sized,
{
    let (major, arg, value) = read_header(input)?;
    any_body(input, major, arg, value)
}

fn any_body<R>(input: &mut R, major: MajorType, arg: u8, value: u64) -> Result<Value>
where
    R: Read + ?Sized,
{
    match major {
        MajorType::Unsigned => match arg {
            0 | ARG_U8 => unsigned_from(major, arg, value).map(Value::U8),
            ARG_U16 => unsigned_from(major, arg, value).map(Value::U16),
            ARG_U32 => unsigned_from(major, arg, value).map(Value::U32),
            ARG_U64 => unsigned_from(major, arg, value).map(Value::U64),
            _ => Err(Error::NotWellFormed),
        },

        MajorType::Negative => match arg {
            0 | ARG_U8 => signed_from(major, arg, value).map(Value::I8),
            ARG_U16 => signed_from(major, arg, value).map(Value::I16),
            ARG_U32 => signed_from(major, arg, value).map(Value::I32),
            // `-1 - value` computed in the unsigned domain; magnitudes past
            // i64::MIN wrap through two's complement.
            ARG_U64 => Ok(Value::I64(!value as i64)),
            _ => Err(Error::NotWellFormed),
        },

        MajorType::Bytes => {
            let mut bytes = Vec::with_capacity(prealloc(arg, value));
            bytes_body(input, major, arg, value, |_, _| Ok(()), &mut bytes)?;

            Ok(Value::Bytes(bytes))
        }

        MajorType::Text => {
            let mut bytes = Vec::with_capacity(prealloc(arg, value));
            bytes_body(input, major, arg, value, |_, _| Ok(()), &mut bytes)?;

            let text = String::from_utf8(bytes).map_err(|_| Error::UnsupportedValue)?;
            Ok(Value::Text(text))
        }

        MajorType::Array => {
            let mut items = Vec::with_capacity(prealloc(arg, value));

            if arg == ARG_INDEFINITE {
                loop {
                    let (next_major, next_arg, next_value) = read_header(input)?;

                    if next_major == MajorType::Simple && next_arg == ARG_INDEFINITE {
                        break;
                    }

                    items.push(any_body(input, next_major, next_arg, next_value)?);
                }
            } else {
                for _ in 0..value {
                    items.push(read_any(input)?);
                }
            }

            Ok(Value::Array(items))
        }

        MajorType::Map => {
            let mut entries = Vec::with_capacity(prealloc(arg, value));

            if arg == ARG_INDEFINITE {
                loop {
                    let (key_major, key_arg, key_value) = read_header(input)?;

                    if key_major == MajorType::Simple && key_arg == ARG_INDEFINITE {
                        break;
                    }

                    let key = any_body(input, key_major, key_arg, key_value)?;
                    let value = read_any(input)?;
                    entries.push((key, value));
                }
            } else {
                for _ in 0..value {
                    let key = read_any(input)?;
                    let value = read_any(input)?;
                    entries.push((key, value));
                }
            }

            Ok(Value::Map(entries))
        }

        MajorType::Tag => read_any(input),

        MajorType::Simple => {
            if arg == 0 {
                if value < u64::from(SIMPLE_FALSE) {
                    return unsigned_from(major, arg, value).map(Value::U8);
                }

                if value == u64::from(SIMPLE_FALSE) || value == u64::from(SIMPLE_TRUE) {
                    return bool_from(major, value).map(Value::Bool);
                }

                if value == u64::from(SIMPLE_NULL) || value == u64::from(SIMPLE_UNDEFINED) {
                    return Ok(Value::Null);
                }
            }

            match arg {
                ARG_U8 => unsigned_from(major, arg, value).map(Value::U8),
                ARG_U16 | ARG_U32 => float_from(major, arg, value).map(Value::F32),
                ARG_U64 => float_from(major, arg, value).map(Value::F64),
                // An unexpected break, outside any indefinite container.
                _ => Err(Error::NotWellFormed),
            }
        }
    }
}

fn prealloc(arg: u8, value: u64) -> usize {
    if arg == ARG_INDEFINITE {
        0
    } else {
        value as usize
    }
}
