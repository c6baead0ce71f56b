//! Typed readers for integer and floating-point items.

use crate::error::{Error, Result};
use crate::header::read_header;
use crate::traits::{FloatReadable, SignedReadable, UnsignedReadable};
use crate::types::{MajorType, ARG_U16, ARG_U32, ARG_U64, ARG_U8, SIMPLE_FALSE};
use half::f16;
use std::io::Read;

/// Whether a simple-major header carries a plain numeric payload: either an
/// inline simple value below the assigned range, or the one-byte simple
/// form.
fn numeric_simple(arg: u8, value: u64) -> bool {
    (arg == 0 && value < u64::from(SIMPLE_FALSE)) || arg == ARG_U8
}

/// Reads the next item as an unsigned integer of width `T`.
///
/// Accepts major 0, and major 7 when the header carries a plain numeric
/// payload. Fails with [`Error::Overflow`] if the argument has bits set
/// above the width of `T`.
pub fn read_unsigned<T, R>(input: &mut R) -> Result<T>
where
    T: UnsignedReadable,
    R: Read + ?Sized,
{
    let (major, arg, value) = read_header(input)?;
    unsigned_from(major, arg, value)
}

pub(crate) fn unsigned_from<T>(major: MajorType, arg: u8, value: u64) -> Result<T>
where
    T: UnsignedReadable,
{
    match major {
        MajorType::Unsigned => {}
        MajorType::Simple if numeric_simple(arg, value) => {}
        _ => return Err(Error::UnsupportedMajorType),
    }

    if value & T::OVERFLOW_MASK != 0 {
        return Err(Error::Overflow);
    }

    T::from_u64(value).ok_or(Error::Overflow)
}

/// Reads the next item as a signed integer of width `T`.
///
/// Accepts majors 0 and 1, plus the numeric simple forms of
/// [`read_unsigned`]. A major 1 argument decodes to `-1 - argument`, so the
/// overflow mask also covers the sign bit.
pub fn read_signed<T, R>(input: &mut R) -> Result<T>
where
    T: SignedReadable,
    R: Read + ?Sized,
{
    let (major, arg, value) = read_header(input)?;
    signed_from(major, arg, value)
}

pub(crate) fn signed_from<T>(major: MajorType, arg: u8, value: u64) -> Result<T>
where
    T: SignedReadable,
{
    match major {
        MajorType::Unsigned | MajorType::Negative => {}
        MajorType::Simple if numeric_simple(arg, value) => {}
        _ => return Err(Error::UnsupportedMajorType),
    }

    if value & T::OVERFLOW_MASK != 0 {
        return Err(Error::Overflow);
    }

    if major == MajorType::Negative {
        T::from_i64(-1 - value as i64).ok_or(Error::Overflow)
    } else {
        T::from_u64(value).ok_or(Error::Overflow)
    }
}

/// Reads the next item as a float of width `T`.
///
/// Integers and one-byte numeric simples convert to the nearest
/// representable value. Half and single precision payloads widen exactly; a
/// double precision payload read into `f32` must survive the round trip
/// through binary32 bit for bit, otherwise the read fails with
/// [`Error::Overflow`].
pub fn read_float<T, R>(input: &mut R) -> Result<T>
where
    T: FloatReadable,
    R: Read + ?Sized,
{
    let (major, arg, value) = read_header(input)?;
    float_from(major, arg, value)
}

pub(crate) fn float_from<T>(major: MajorType, arg: u8, value: u64) -> Result<T>
where
    T: FloatReadable,
{
    match major {
        MajorType::Unsigned => return T::from_u64(value).ok_or(Error::Overflow),
        MajorType::Negative => {
            let magnitude = T::from_u64(value).ok_or(Error::Overflow)?;
            return Ok(-T::one() - magnitude);
        }
        MajorType::Simple => {}
        _ => return Err(Error::UnsupportedMajorType),
    }

    match arg {
        ARG_U8 => T::from_u64(value).ok_or(Error::Overflow),
        ARG_U16 => {
            let single = f16::from_bits(value as u16).to_f32();
            T::from_f32(single).ok_or(Error::Overflow)
        }
        ARG_U32 => T::from_f32(f32::from_bits(value as u32)).ok_or(Error::Overflow),
        ARG_U64 => {
            let double = f64::from_bits(value);
            let narrowed = T::from_f64(double).ok_or(Error::Overflow)?;
            let widened = narrowed.to_f64().ok_or(Error::Overflow)?;

            if widened.to_bits() != double.to_bits() {
                return Err(Error::Overflow);
            }

            Ok(narrowed)
        }
        _ => Err(Error::UnsupportedValue),
    }
}

#[cfg(test)]
mod tests {
    use super::{read_float, read_signed, read_unsigned};
    use crate::error::Error;
    use crate::header::write_header;
    use crate::types::MajorType;
    use proptest::prelude::*;

    #[test]
    fn unsigned_widths() {
        let mut input = &[0x00u8][..];
        assert_eq!(0u8, read_unsigned(&mut input).unwrap());

        let mut input = &[0x17u8][..];
        assert_eq!(0x17u8, read_unsigned(&mut input).unwrap());

        let mut input = &[0x18, 0x18][..];
        assert_eq!(0x18u8, read_unsigned(&mut input).unwrap());

        let mut input = &[0x19, 0x03, 0xe8][..];
        assert_eq!(1000u16, read_unsigned(&mut input).unwrap());

        let mut input = &[0x1a, 0x00, 0x0f, 0x42, 0x40][..];
        assert_eq!(1_000_000u32, read_unsigned(&mut input).unwrap());

        let mut input = &[0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff][..];
        assert_eq!(u64::MAX, read_unsigned(&mut input).unwrap());
    }

    #[test]
    fn unsigned_overflow() {
        let mut input = &[0x18, 0xff][..];
        assert_eq!(0xffu8, read_unsigned(&mut input).unwrap());

        let mut input = &[0x19, 0x01, 0x00][..];
        assert!(matches!(
            read_unsigned::<u8, _>(&mut input),
            Err(Error::Overflow)
        ));

        let mut input = &[0x1a, 0x00, 0x01, 0x00, 0x00][..];
        assert!(matches!(
            read_unsigned::<u16, _>(&mut input),
            Err(Error::Overflow)
        ));

        let mut input = &[0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff][..];
        assert!(matches!(
            read_unsigned::<u32, _>(&mut input),
            Err(Error::Overflow)
        ));
    }

    #[test]
    fn unsigned_accepts_numeric_simples() {
        // An inline simple value below the assigned range.
        let mut input = &[0xe5u8][..];
        assert_eq!(5u8, read_unsigned(&mut input).unwrap());

        // The one-byte simple form.
        let mut input = &[0xf8, 0xff][..];
        assert_eq!(0xffu8, read_unsigned(&mut input).unwrap());

        // Assigned simple values are not numbers.
        let mut input = &[0xf4u8][..];
        assert!(matches!(
            read_unsigned::<u8, _>(&mut input),
            Err(Error::UnsupportedMajorType)
        ));
    }

    #[test]
    fn unsigned_rejects_other_majors() {
        for encoded in &[&[0x20u8][..], &[0x40], &[0x60], &[0x80], &[0xa0]] {
            let mut input = *encoded;
            assert!(matches!(
                read_unsigned::<u64, _>(&mut input),
                Err(Error::UnsupportedMajorType)
            ));
        }
    }

    #[test]
    fn signed_values() {
        let mut input = &[0x20u8][..];
        assert_eq!(-1i8, read_signed(&mut input).unwrap());

        let mut input = &[0x29u8][..];
        assert_eq!(-10i8, read_signed(&mut input).unwrap());

        let mut input = &[0x38, 0x63][..];
        assert_eq!(-100i8, read_signed(&mut input).unwrap());

        let mut input = &[0x39, 0x03, 0xe7][..];
        assert_eq!(-1000i16, read_signed(&mut input).unwrap());

        let mut input = &[0x18, 0x64][..];
        assert_eq!(100i16, read_signed(&mut input).unwrap());

        let mut input = &[0x3b, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff][..];
        assert_eq!(i64::MIN, read_signed(&mut input).unwrap());
    }

    #[test]
    fn signed_overflow() {
        // -128 fits an i8, -129 does not.
        let mut input = &[0x38, 0x7f][..];
        assert_eq!(-128i8, read_signed(&mut input).unwrap());

        let mut input = &[0x38, 0x80][..];
        assert!(matches!(
            read_signed::<i8, _>(&mut input),
            Err(Error::Overflow)
        ));

        let mut input = &[0x18, 0x80][..];
        assert!(matches!(
            read_signed::<i8, _>(&mut input),
            Err(Error::Overflow)
        ));

        // -2^64 is below what an i64 can hold.
        let mut input = &[0x3b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff][..];
        assert!(matches!(
            read_signed::<i64, _>(&mut input),
            Err(Error::Overflow)
        ));

        let mut input = &[0x1b, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..];
        assert!(matches!(
            read_signed::<i64, _>(&mut input),
            Err(Error::Overflow)
        ));
    }

    #[test]
    fn float_from_integers() {
        let mut input = &[0x01u8][..];
        assert_eq!(1.0f32, read_float(&mut input).unwrap());

        let mut input = &[0x20u8][..];
        assert_eq!(-1.0f64, read_float(&mut input).unwrap());

        let mut input = &[0xf8, 0x18][..];
        assert_eq!(24.0f32, read_float(&mut input).unwrap());
    }

    #[test]
    fn float_widths() {
        let mut input = &[0xf9, 0x00, 0x00][..];
        assert_eq!(0.0f32, read_float(&mut input).unwrap());

        let mut input = &[0xf9, 0x3c, 0x00][..];
        assert_eq!(1.0f32, read_float(&mut input).unwrap());

        let mut input = &[0xf9, 0x7b, 0xff][..];
        assert_eq!(65504.0f32, read_float(&mut input).unwrap());

        let mut input = &[0xf9, 0xc4, 0x00][..];
        assert_eq!(-4.0f64, read_float(&mut input).unwrap());

        let mut input = &[0xfa, 0x47, 0xc3, 0x50, 0x00][..];
        assert_eq!(100_000.0f32, read_float(&mut input).unwrap());

        let mut input = &[0xfb, 0x3f, 0xf1, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9a][..];
        assert_eq!(1.1f64, read_float(&mut input).unwrap());

        let mut input = &[0xf9, 0x7c, 0x00][..];
        assert_eq!(f32::INFINITY, read_float(&mut input).unwrap());

        let mut input = &[0xf9, 0x7e, 0x00][..];
        assert!(read_float::<f32, _>(&mut input).unwrap().is_nan());
    }

    #[test]
    fn double_narrows_only_when_exact() {
        // 1.0 survives the round trip through binary32.
        let mut input = &[0xfb, 0x3f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..];
        assert_eq!(1.0f32, read_float(&mut input).unwrap());

        // 1.1 does not.
        let mut input = &[0xfb, 0x3f, 0xf1, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9a][..];
        assert!(matches!(
            read_float::<f32, _>(&mut input),
            Err(Error::Overflow)
        ));

        // The canonical quiet NaN keeps its bit pattern across the round
        // trip.
        let mut input = &[0xfb, 0x7f, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00][..];
        assert!(read_float::<f32, _>(&mut input).unwrap().is_nan());
    }

    #[test]
    fn float_rejects_non_numeric_items() {
        let mut input = &[0xf4u8][..];
        assert!(matches!(
            read_float::<f32, _>(&mut input),
            Err(Error::UnsupportedValue)
        ));

        // Inline simples below the assigned range are integers, not floats.
        let mut input = &[0xe5u8][..];
        assert!(matches!(
            read_float::<f32, _>(&mut input),
            Err(Error::UnsupportedValue)
        ));

        let mut input = &[0x80u8][..];
        assert!(matches!(
            read_float::<f64, _>(&mut input),
            Err(Error::UnsupportedMajorType)
        ));
    }

    #[test]
    fn typed_reads_of_floats_fail() {
        let mut input = &[0xf9, 0x7b, 0xff][..];
        assert!(matches!(
            read_signed::<i32, _>(&mut input),
            Err(Error::UnsupportedMajorType)
        ));
    }

    proptest! {
        #[test]
        fn unsigned_overflow_boundary(value: u64) {
            let mut encoded = Vec::new();
            write_header(&mut encoded, MajorType::Unsigned, value).unwrap();

            let mut input = &encoded[..];
            match read_unsigned::<u32, _>(&mut input) {
                Ok(decoded) => {
                    prop_assert!(value < 1u64 << 32);
                    prop_assert_eq!(value as u32, decoded);
                }
                Err(Error::Overflow) => prop_assert!(value >= 1u64 << 32),
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }

        #[test]
        fn signed_overflow_boundary(value: u64) {
            let mut encoded = Vec::new();
            write_header(&mut encoded, MajorType::Negative, value).unwrap();

            let mut input = &encoded[..];
            match read_signed::<i16, _>(&mut input) {
                Ok(decoded) => {
                    prop_assert!(value < 1u64 << 15);
                    prop_assert_eq!(-1i16 - value as i16, decoded);
                }
                Err(Error::Overflow) => prop_assert!(value >= 1u64 << 15),
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }
    }
}
