//! Error types for CBOR reading and writing.

use std::io;
use thiserror::Error;

/// Any error that can occur while reading or writing a CBOR stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The item's major type does not match the requested read.
    #[error("unsupported major type")]
    UnsupportedMajorType,

    /// The major type matched, but the value cannot be represented in the
    /// requested semantics.
    #[error("unsupported value")]
    UnsupportedValue,

    /// The byte stream violates CBOR framing.
    #[error("not well formed")]
    NotWellFormed,

    /// The encoded value does not fit the target width without loss.
    #[error("overflow")]
    Overflow,

    /// An indefinite-length string chunk inside an indefinite-length string.
    #[error("nested indefinite")]
    NestedIndefinite,

    /// A short read or write, or any other error from the source or sink.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
