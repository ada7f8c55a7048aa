//! Shared helpers for codec implementations.

use crate::Error;
use bytes::Buf;

/// Checks that the buffer has at least `len` bytes remaining.
///
/// Called before every multi-byte read so that a short buffer fails with
/// [`Error::EndOfBuffer`] without consuming anything.
#[inline]
pub fn at_least(buf: &mut impl Buf, len: usize) -> Result<(), Error> {
    if buf.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    Ok(())
}
