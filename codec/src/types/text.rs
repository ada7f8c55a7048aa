//! Codec implementation for length-prefixed text.
//!
//! A [Text] value is encoded as a single length octet followed by one octet per
//! character, so the wire form never exceeds 256 bytes. Each character must fit
//! in a single octet (scalar values up to U+00FF), which [Text::new] enforces at
//! construction. The length octet counts characters, not UTF-8 bytes: a
//! two-byte UTF-8 character like 'é' still occupies exactly one octet on the
//! wire.
//!
//! A value longer than [Text::MAX_LEN] characters cannot be represented in the
//! length octet and is encoded as the empty string. Callers that must preserve
//! such values are expected to split them before encoding.

use crate::{util::at_least, EncodeSize, Error, Read, ReadExt, Write};
use bytes::{Buf, BufMut};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A string restricted to single-octet characters.
///
/// Construction validates every character, so encoding is infallible.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Text(String);

impl Text {
    /// The maximum number of characters representable in the length octet.
    pub const MAX_LEN: usize = u8::MAX as usize;

    /// Create a new [Text] from the given string.
    ///
    /// Returns [Error::UnsupportedCharacter] if any character has a scalar
    /// value above U+00FF.
    pub fn new(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        if let Some(c) = text.chars().find(|c| *c as u32 > 0xFF) {
            return Err(Error::UnsupportedCharacter(c));
        }
        Ok(Self(text))
    }

    /// The number of characters in the text.
    ///
    /// This is the length written to the wire, which differs from
    /// `String::len` whenever a character occupies two UTF-8 bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the text, returning the inner [String].
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Write for Text {
    fn write(&self, buf: &mut impl BufMut) {
        let len = self.len();
        if len > Self::MAX_LEN {
            // Too long for the length octet: encode as empty.
            buf.put_u8(0);
            return;
        }
        buf.put_u8(len as u8);
        for c in self.0.chars() {
            buf.put_u8(c as u8);
        }
    }
}

impl EncodeSize for Text {
    fn encode_size(&self) -> usize {
        let len = self.len();
        if len > Self::MAX_LEN {
            1
        } else {
            1 + len
        }
    }
}

impl Read for Text {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, Error> {
        let len = u8::read(buf)? as usize;
        at_least(buf, len)?;
        let mut text = String::with_capacity(len);
        for _ in 0..len {
            text.push(buf.get_u8() as char);
        }
        Ok(Self(text))
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Text {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Text {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeExt, Encode};
    use bytes::Bytes;

    #[test]
    fn test_text() {
        for value in ["", "a", "hello world", "café ÿ"] {
            let text = Text::new(value).unwrap();
            let encoded = text.encode();
            assert_eq!(encoded.len(), text.encode_size());
            let decoded = Text::decode(encoded).unwrap();
            assert_eq!(text, decoded);
            assert_eq!(decoded.as_str(), value);
        }
    }

    #[test]
    fn test_text_conformity() {
        assert_eq!(
            Text::new("hi").unwrap().encode(),
            Bytes::from_static(&[0x02, b'h', b'i'])
        );
        // 'é' is two UTF-8 bytes but one octet on the wire.
        assert_eq!(
            Text::new("é").unwrap().encode(),
            Bytes::from_static(&[0x01, 0xE9])
        );
        assert_eq!(Text::new("").unwrap().encode(), Bytes::from_static(&[0x00]));
    }

    #[test]
    fn test_text_char_len() {
        let text = Text::new("é").unwrap();
        assert_eq!(text.len(), 1);
        assert_eq!(text.as_str().len(), 2);
        assert_eq!(text.encode_size(), 2);
    }

    #[test]
    fn test_text_max_len() {
        let text = Text::new("y".repeat(Text::MAX_LEN)).unwrap();
        let encoded = text.encode();
        assert_eq!(encoded.len(), 256);
        assert_eq!(encoded[0], 0xFF);
        let decoded = Text::decode(encoded).unwrap();
        assert_eq!(text, decoded);
    }

    #[test]
    fn test_text_oversized() {
        // One character past the limit encodes as empty.
        let text = Text::new("y".repeat(Text::MAX_LEN + 1)).unwrap();
        assert_eq!(text.encode_size(), 1);
        assert_eq!(text.encode(), Bytes::from_static(&[0x00]));
        let decoded = Text::decode(text.encode()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_text_unsupported_character() {
        for value in ["€", "naïve🦀", "Ā"] {
            assert!(matches!(
                Text::new(value),
                Err(Error::UnsupportedCharacter(_))
            ));
        }

        // U+00FF is the last supported character.
        assert!(Text::new("ÿ").is_ok());
        assert!(matches!(
            Text::new("Ā"),
            Err(Error::UnsupportedCharacter('Ā'))
        ));
    }

    #[test]
    fn test_text_insufficient_buffer() {
        // The length octet promises more characters than remain.
        let mut short: &[u8] = &[0x05, b'a', b'b'];
        assert!(matches!(Text::read(&mut short), Err(Error::EndOfBuffer)));
        // The length octet was consumed but the characters were not.
        assert_eq!(short.len(), 2);

        let mut empty: &[u8] = &[];
        assert!(matches!(Text::read(&mut empty), Err(Error::EndOfBuffer)));
    }

    #[test]
    fn test_text_conversions() {
        let text = Text::try_from("hello").unwrap();
        assert_eq!(text.to_string(), "hello");
        assert_eq!(text.as_ref(), "hello");
        assert_eq!(String::from(text.clone()), "hello");
        assert_eq!(text.clone().into_string(), "hello");
        assert_eq!(Text::try_from(String::from("hello")).unwrap(), text);
        assert!(Text::try_from("🦀").is_err());
    }
}
