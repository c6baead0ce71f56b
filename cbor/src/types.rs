//! CBOR data model constants.

/// The top-three-bit category tag of a CBOR data item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MajorType {
    /// Major 0, an unsigned integer.
    Unsigned,

    /// Major 1, a negative integer encoding `-1 - argument`.
    Negative,

    /// Major 2, a byte string.
    Bytes,

    /// Major 3, a text string.
    Text,

    /// Major 4, an array of data items.
    Array,

    /// Major 5, a map of key and value pairs.
    Map,

    /// Major 6, a tag number wrapping one data item.
    Tag,

    /// Major 7, simple values and floats.
    Simple,
}

impl MajorType {
    /// Splits an initial header byte into its major type and argument code.
    pub(crate) fn split(byte: u8) -> (MajorType, u8) {
        let major = match byte >> 5 {
            0 => MajorType::Unsigned,
            1 => MajorType::Negative,
            2 => MajorType::Bytes,
            3 => MajorType::Text,
            4 => MajorType::Array,
            5 => MajorType::Map,
            6 => MajorType::Tag,
            7 => MajorType::Simple,
            _ => unreachable!("three-bit major type"),
        };

        (major, byte & ARG_MASK)
    }

    /// Assembles an initial header byte from this major type and an
    /// argument code.
    pub(crate) fn byte(self, arg: u8) -> u8 {
        (self as u8) << 5 | arg
    }
}

pub(crate) const ARG_MASK: u8 = 0b000_11111;

/// The argument follows as one byte.
pub const ARG_U8: u8 = 24;

/// The argument follows as two big-endian bytes.
pub const ARG_U16: u8 = 25;

/// The argument follows as four big-endian bytes.
pub const ARG_U32: u8 = 26;

/// The argument follows as eight big-endian bytes.
pub const ARG_U64: u8 = 27;

// Codes 28 through 30 are reserved and rejected as not well formed.

/// The length is unknown up front; the item runs until a break sentinel.
pub const ARG_INDEFINITE: u8 = 31;

/// Simple value 20, false.
pub const SIMPLE_FALSE: u8 = 20;

/// Simple value 21, true.
pub const SIMPLE_TRUE: u8 = 21;

/// Simple value 22, null.
pub const SIMPLE_NULL: u8 = 22;

/// Simple value 23, undefined.
pub const SIMPLE_UNDEFINED: u8 = 23;

/// The break sentinel that terminates indefinite-length items: major 7
/// carrying the indefinite argument code.
pub const BREAK: u8 = 0b111_00000 | ARG_INDEFINITE;
