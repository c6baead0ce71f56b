//! Raw-copy traversal.

use crate::error::Result;
use crate::header::arg_length;
use crate::num::be_unpack;
use crate::reader::{copy_exact, PeekReader};
use crate::types::{MajorType, ARG_INDEFINITE, BREAK};
use std::io::{Read, Write};

/// Copies the next data item from `input` to `out`, byte for byte.
///
/// The emitted bytes are exactly the input span of the item, including
/// non-minimal argument encodings and indefinite-length framing.
pub fn read_raw<R, W>(input: &mut R, out: &mut W) -> Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut input = input;
    let mut out = out;

    raw_item(&mut input, &mut out)
}

// Trait objects keep the recursion through nested lookahead readers from
// instantiating a new reader type per nesting level.
fn raw_item(input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let mut header = [0u8; 9];
    input.read_exact(&mut header[..1])?;

    let (major, arg) = MajorType::split(header[0]);
    let trailing = arg_length(arg)?;
    input.read_exact(&mut header[1..1 + trailing])?;

    let value = be_unpack(&header[1..1 + trailing]);
    out.write_all(&header[..1 + trailing])?;

    let indefinite = arg == ARG_INDEFINITE;

    match major {
        MajorType::Unsigned | MajorType::Negative | MajorType::Simple => Ok(()),

        MajorType::Bytes | MajorType::Text => {
            if indefinite {
                return raw_until_break(input, out);
            }

            copy_exact(input, out, value)
        }

        MajorType::Array => {
            if indefinite {
                return raw_until_break(input, out);
            }

            for _ in 0..value {
                raw_item(input, out)?;
            }

            Ok(())
        }

        MajorType::Map => {
            if indefinite {
                return raw_until_break(input, out);
            }

            for _ in 0..value {
                raw_item(input, out)?;
                raw_item(input, out)?;
            }

            Ok(())
        }

        MajorType::Tag => raw_item(input, out),
    }
}

/// Copies items until the break sentinel, then emits the sentinel.
fn raw_until_break(input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let mut items = PeekReader::new(input);

    loop {
        if items.peek()? == BREAK {
            out.write_all(&[BREAK])?;
            return Ok(());
        }

        raw_item(&mut items, out)?;
    }
}
