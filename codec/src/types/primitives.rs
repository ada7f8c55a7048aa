//! Codec implementations for the numeric and boolean field types.
//!
//! Every type here has a compile-time constant [`FixedSize::SIZE`] and can be
//! encoded and decoded without any configuration.
//!
//! ## Byte order
//!
//! All multi-byte values are written most-significant byte first. This is the
//! canonical order for the whole wire format: both encode and decode use it,
//! and no other order is ever emitted or accepted.

use crate::{util::at_least, Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};

// Numeric types implementation
macro_rules! impl_numeric {
    ($type:ty, $read_method:ident, $write_method:ident) => {
        impl Write for $type {
            #[inline]
            fn write(&self, buf: &mut impl BufMut) {
                buf.$write_method(*self);
            }
        }

        impl Read for $type {
            type Cfg = ();
            #[inline]
            fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
                at_least(buf, std::mem::size_of::<$type>())?;
                Ok(buf.$read_method())
            }
        }

        impl FixedSize for $type {
            const SIZE: usize = std::mem::size_of::<$type>();
        }
    };
}

impl_numeric!(u8, get_u8, put_u8);
impl_numeric!(u16, get_u16, put_u16);
impl_numeric!(f32, get_f32, put_f32);

// Bool implementation
impl Write for bool {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        buf.put_u8(if *self { 1 } else { 0 });
    }
}

/// Booleans are encoded as a single byte, 1 for true and 0 for false. Decoding
/// accepts any nonzero byte as true.
impl Read for bool {
    type Cfg = ();
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        Ok(u8::read(buf)? > 0)
    }
}

impl FixedSize for bool {
    const SIZE: usize = 1;
}
