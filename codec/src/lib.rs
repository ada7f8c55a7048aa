//! Encode and decode header fields.
//!
//! # Overview
//!
//! Message headers are encoded as a flat sequence of typed fields with no
//! tags, padding, or self-description. Six field types are supported:
//!
//! | Type         | Encoding                                   | Size (bytes) |
//! |--------------|--------------------------------------------|--------------|
//! | [Text]       | length octet, then one octet per character | 1 + length   |
//! | `f32`        | IEEE 754 single precision, big-endian      | 4            |
//! | `u16`        | big-endian                                 | 2            |
//! | `(f32, f32)` | two floats, first component first          | 8            |
//! | `u8`         | the octet itself                           | 1            |
//! | `bool`       | `0x01` for true, `0x00` for false          | 1            |
//!
//! All multi-byte values use big-endian byte order to avoid host-endian
//! ambiguity. Decoding advances a cursor through the buffer, so a header is
//! read by decoding each of its fields in order from a shared [bytes::Buf].
//! The wire carries no type information: both peers must agree on the field
//! sequence ahead of time.
//!
//! # Example (Variable Size)
//!
//! ```rust
//! use headwire_codec::{DecodeExt, Encode, EncodeSize, Error, Read, ReadExt, Text, Write};
//! use bytes::{Buf, BufMut};
//!
//! /// Fields announced by a player joining a session.
//! #[derive(Debug, PartialEq)]
//! struct Join {
//!     nick: Text,
//!     hue: u8,
//!     spawn: (f32, f32),
//! }
//!
//! impl Write for Join {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.nick.write(buf);
//!         self.hue.write(buf);
//!         self.spawn.write(buf);
//!     }
//! }
//!
//! impl EncodeSize for Join {
//!     fn encode_size(&self) -> usize {
//!         self.nick.encode_size() + self.hue.encode_size() + self.spawn.encode_size()
//!     }
//! }
//!
//! impl Read for Join {
//!     type Cfg = ();
//!     fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
//!         let nick = Text::read(buf)?;
//!         let hue = u8::read(buf)?;
//!         let spawn = <(f32, f32)>::read(buf)?;
//!         Ok(Self { nick, hue, spawn })
//!     }
//! }
//!
//! let join = Join {
//!     nick: Text::new("ada").unwrap(),
//!     hue: 42,
//!     spawn: (16.0, -4.5),
//! };
//! let encoded = join.encode();
//! assert_eq!(encoded.len(), 13);
//! let decoded = Join::decode(encoded).unwrap();
//! assert_eq!(join, decoded);
//! ```
//!
//! # Example (Fixed Size)
//!
//! ```rust
//! use headwire_codec::{DecodeExt, EncodeFixed, Error, FixedSize, Read, ReadExt, Write};
//! use bytes::{Buf, BufMut};
//!
//! /// A velocity update, always eight bytes on the wire.
//! #[derive(Debug, PartialEq)]
//! struct Velocity {
//!     x: f32,
//!     y: f32,
//! }
//!
//! impl Write for Velocity {
//!     fn write(&self, buf: &mut impl BufMut) {
//!         self.x.write(buf);
//!         self.y.write(buf);
//!     }
//! }
//!
//! impl Read for Velocity {
//!     type Cfg = ();
//!     fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
//!         let x = f32::read(buf)?;
//!         let y = f32::read(buf)?;
//!         Ok(Self { x, y })
//!     }
//! }
//!
//! impl FixedSize for Velocity {
//!     const SIZE: usize = f32::SIZE + f32::SIZE;
//! }
//!
//! let velocity = Velocity { x: 3.0, y: -1.5 };
//! let encoded: [u8; Velocity::SIZE] = velocity.encode_fixed();
//! let decoded = Velocity::decode(&encoded[..]).unwrap();
//! assert_eq!(velocity, decoded);
//! ```

pub mod codec;
pub use codec::{
    Codec, Decode, DecodeExt, Encode, EncodeFixed, EncodeSize, FixedSize, Read, ReadExt, Write,
};
pub mod error;
pub use error::Error;
pub mod types;
pub use types::{
    text::Text,
    value::{FieldKind, Value},
};
pub mod util;
