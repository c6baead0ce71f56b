//! Streaming CBOR (RFC 8949) reader and writer.
//!
//! Typed readers and writers move one data item at a time between any
//! `std::io` source or sink; container readers re-enter the codec through
//! caller-supplied callbacks.

mod error;
mod header;
mod num;
mod read;
mod reader;
mod traits;
mod types;
mod write;

pub use crate::error::{Error, Result};
pub use crate::header::{read_header, write_header};
#[cfg(feature = "read-any")]
pub use crate::read::{read_any, Value};
pub use crate::read::{
    read_array, read_bool, read_bytes, read_float, read_map, read_raw, read_signed, read_tag,
    read_unsigned, skip_item,
};
pub use crate::reader::PeekReader;
pub use crate::traits::{FloatReadable, SignedReadable, UnsignedReadable};
pub use crate::types::{
    MajorType, ARG_INDEFINITE, ARG_U16, ARG_U32, ARG_U64, ARG_U8, BREAK, SIMPLE_FALSE,
    SIMPLE_NULL, SIMPLE_TRUE, SIMPLE_UNDEFINED,
};
pub use crate::write::{
    write_array_header, write_bool, write_bytes, write_float, write_map_header, write_signed,
    write_tag, write_text, write_unsigned,
};
