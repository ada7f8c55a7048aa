//! Codec implementation for the float-pair field type.
//!
//! A pair has no wire representation of its own: it is the float codec applied
//! twice, first component then second, for a fixed 8 bytes.

use crate::{Error, FixedSize, Read, ReadExt, Write};
use bytes::{Buf, BufMut};

impl Write for (f32, f32) {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
        self.1.write(buf);
    }
}

impl Read for (f32, f32) {
    type Cfg = ();
    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        Ok((f32::read(buf)?, f32::read(buf)?))
    }
}

impl FixedSize for (f32, f32) {
    const SIZE: usize = f32::SIZE + f32::SIZE;
}
