//! Dynamically typed header fields.
//!
//! The wire format carries no type information: every field is identified by
//! position, and both peers must agree on the sequence of [FieldKind]s that
//! makes up a header. Decoding with the wrong kind does not fail, it just
//! misinterprets the octets, so schemas must be kept in lockstep.
//!
//! [Value] exists for callers that work with schemas at runtime (inspection
//! tooling, generic relays). Typed headers should implement [crate::Write] and
//! [crate::Read] directly on their own structs instead.

use crate::{EncodeSize, Error, FixedSize, Read, ReadExt, Text, Write};
use bytes::{Buf, BufMut};

/// The type of a single header field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FieldKind {
    /// Length-prefixed text of up to [Text::MAX_LEN] characters.
    Text,
    /// IEEE 754 single-precision float.
    F32,
    /// Unsigned 16-bit integer.
    U16,
    /// Two single-precision floats.
    F32Pair,
    /// Unsigned 8-bit integer.
    U8,
    /// Boolean flag.
    Bool,
}

impl FieldKind {
    /// The encoded size of a field of this kind, if it is the same for every
    /// value. Returns `None` for [FieldKind::Text], whose size depends on the
    /// value.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Self::Text => None,
            Self::F32 => Some(f32::SIZE),
            Self::U16 => Some(u16::SIZE),
            Self::F32Pair => Some(<(f32, f32)>::SIZE),
            Self::U8 => Some(u8::SIZE),
            Self::Bool => Some(bool::SIZE),
        }
    }
}

/// A single header field of any supported type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Length-prefixed text.
    Text(Text),
    /// IEEE 754 single-precision float.
    F32(f32),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Two single-precision floats.
    F32Pair(f32, f32),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Boolean flag.
    Bool(bool),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::F32(_) => FieldKind::F32,
            Self::U16(_) => FieldKind::U16,
            Self::F32Pair(_, _) => FieldKind::F32Pair,
            Self::U8(_) => FieldKind::U8,
            Self::Bool(_) => FieldKind::Bool,
        }
    }
}

impl Write for Value {
    fn write(&self, buf: &mut impl BufMut) {
        match self {
            Self::Text(v) => v.write(buf),
            Self::F32(v) => v.write(buf),
            Self::U16(v) => v.write(buf),
            Self::F32Pair(x, y) => (*x, *y).write(buf),
            Self::U8(v) => v.write(buf),
            Self::Bool(v) => v.write(buf),
        }
    }
}

impl EncodeSize for Value {
    fn encode_size(&self) -> usize {
        match self {
            Self::Text(v) => v.encode_size(),
            Self::F32(v) => v.encode_size(),
            Self::U16(v) => v.encode_size(),
            Self::F32Pair(x, y) => (*x, *y).encode_size(),
            Self::U8(v) => v.encode_size(),
            Self::Bool(v) => v.encode_size(),
        }
    }
}

impl Read for Value {
    type Cfg = FieldKind;

    fn read_cfg(buf: &mut impl Buf, cfg: &FieldKind) -> Result<Self, Error> {
        Ok(match cfg {
            FieldKind::Text => Self::Text(Text::read(buf)?),
            FieldKind::F32 => Self::F32(f32::read(buf)?),
            FieldKind::U16 => Self::U16(u16::read(buf)?),
            FieldKind::F32Pair => {
                let (x, y) = <(f32, f32)>::read(buf)?;
                Self::F32Pair(x, y)
            }
            FieldKind::U8 => Self::U8(u8::read(buf)?),
            FieldKind::Bool => Self::Bool(bool::read(buf)?),
        })
    }
}
