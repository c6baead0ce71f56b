//! Trait bounds for the generic typed readers.

use num_traits::{Float, FromPrimitive, PrimInt, Signed, Unsigned};

/// An unsigned integer width that CBOR arguments can be read into.
///
/// The mask covers every bit that cannot appear in a decoded argument
/// without overflowing this width.
pub trait UnsignedReadable: PrimInt + Unsigned + FromPrimitive {
    const OVERFLOW_MASK: u64;
}

impl UnsignedReadable for u8 {
    const OVERFLOW_MASK: u64 = 0xffff_ffff_ffff_ff00;
}

impl UnsignedReadable for u16 {
    const OVERFLOW_MASK: u64 = 0xffff_ffff_ffff_0000;
}

impl UnsignedReadable for u32 {
    const OVERFLOW_MASK: u64 = 0xffff_ffff_0000_0000;
}

impl UnsignedReadable for u64 {
    const OVERFLOW_MASK: u64 = 0;
}

/// A signed integer width that CBOR arguments can be read into.
///
/// The mask also covers the sign bit: a major 0 or major 1 argument with
/// any of these bits set cannot be represented at this width.
pub trait SignedReadable: PrimInt + Signed + FromPrimitive {
    const OVERFLOW_MASK: u64;
}

impl SignedReadable for i8 {
    const OVERFLOW_MASK: u64 = 0xffff_ffff_ffff_ff80;
}

impl SignedReadable for i16 {
    const OVERFLOW_MASK: u64 = 0xffff_ffff_ffff_8000;
}

impl SignedReadable for i32 {
    const OVERFLOW_MASK: u64 = 0xffff_ffff_8000_0000;
}

impl SignedReadable for i64 {
    const OVERFLOW_MASK: u64 = 0x8000_0000_0000_0000;
}

/// A floating-point width that CBOR items can be read into.
pub trait FloatReadable: Float + FromPrimitive {}

impl FloatReadable for f32 {}

impl FloatReadable for f64 {}
