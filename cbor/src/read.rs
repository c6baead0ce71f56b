//! CBOR item readers.

#[cfg(feature = "read-any")]
mod any;
mod container;
mod number;
mod raw;
mod simple;
mod skip;
mod string;
mod tag;

#[cfg(feature = "read-any")]
pub use any::{read_any, Value};
pub use container::{read_array, read_map};
pub use number::{read_float, read_signed, read_unsigned};
pub use raw::read_raw;
pub use simple::read_bool;
pub use skip::skip_item;
pub use string::read_bytes;
pub use tag::read_tag;
