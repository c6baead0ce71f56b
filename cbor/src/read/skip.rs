//! Skip-over traversal.

use crate::error::Result;
use crate::header::read_header;
use crate::reader::discard_exact;
use crate::types::{MajorType, ARG_INDEFINITE};
use std::io::Read;

/// Skips the next data item, leaving the source positioned at the first
/// byte past it.
///
/// Nested containers are traversed without being materialized; string
/// payloads are read and thrown away.
pub fn skip_item<R>(input: &mut R) -> Result<()>
where
    R: Read + ?Sized,
{
    let (major, arg, value) = read_header(input)?;
    skip_body(input, major, arg, value)
}

fn skip_body<R>(input: &mut R, major: MajorType, arg: u8, value: u64) -> Result<()>
where
    R: Read + ?Sized,
{
    match major {
        MajorType::Unsigned | MajorType::Negative | MajorType::Simple => Ok(()),

        MajorType::Bytes | MajorType::Text => {
            if arg != ARG_INDEFINITE {
                return discard_exact(input, value);
            }

            loop {
                let (chunk_major, chunk_arg, chunk_length) = read_header(input)?;

                if chunk_major == MajorType::Simple && chunk_arg == ARG_INDEFINITE {
                    return Ok(());
                }

                discard_exact(input, chunk_length)?;
            }
        }

        MajorType::Array => {
            if arg != ARG_INDEFINITE {
                for _ in 0..value {
                    skip_item(input)?;
                }

                return Ok(());
            }

            loop {
                let (next_major, next_arg, next_value) = read_header(input)?;

                if next_major == MajorType::Simple && next_arg == ARG_INDEFINITE {
                    return Ok(());
                }

                skip_body(input, next_major, next_arg, next_value)?;
            }
        }

        MajorType::Map => {
            if arg != ARG_INDEFINITE {
                for _ in 0..value {
                    skip_item(input)?;
                    skip_item(input)?;
                }

                return Ok(());
            }

            loop {
                let (key_major, key_arg, key_value) = read_header(input)?;

                if key_major == MajorType::Simple && key_arg == ARG_INDEFINITE {
                    return Ok(());
                }

                skip_body(input, key_major, key_arg, key_value)?;
                skip_item(input)?;
            }
        }

        MajorType::Tag => skip_item(input),
    }
}
