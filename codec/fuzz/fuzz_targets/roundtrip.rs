#![no_main]

use arbitrary::Arbitrary;
use headwire_codec::{Codec, DecodeExt, Encode, EncodeSize, Error, FieldKind, Read, Text, Value};
use libfuzzer_sys::fuzz_target;

fn roundtrip_primitive<T>(v: T)
where
    T: Codec + Read<Cfg = ()> + PartialEq + std::fmt::Debug,
{
    let encoded = v.encode();
    assert_eq!(v.encode_size(), encoded.len());
    let decoded = T::decode(encoded).expect("Failed to decode a successfully encoded input!");
    assert_eq!(v, decoded);
}

// NOTE: Separate float cases to compare bit patterns (NaN != NaN)
fn roundtrip_f32(v: f32) {
    let encoded = v.encode();
    assert_eq!(v.encode_size(), encoded.len());
    let decoded = f32::decode(encoded).expect("Failed to decode f32!");
    assert_eq!(v.to_bits(), decoded.to_bits());
}

fn roundtrip_pair(pair: (f32, f32)) {
    let encoded = pair.encode();
    assert_eq!(pair.encode_size(), encoded.len());
    let decoded = <(f32, f32)>::decode(encoded).expect("Failed to decode pair!");
    assert_eq!(pair.0.to_bits(), decoded.0.to_bits());
    assert_eq!(pair.1.to_bits(), decoded.1.to_bits());
}

fn roundtrip_text(text: String) {
    let text = match Text::new(text) {
        Ok(text) => text,
        Err(Error::UnsupportedCharacter(c)) => {
            // Construction only rejects characters above one octet.
            assert!(c as u32 > 0xFF);
            return;
        }
        Err(err) => panic!("Unexpected construction error: {err}"),
    };

    let encoded = text.encode();
    assert_eq!(text.encode_size(), encoded.len());
    if text.len() > Text::MAX_LEN {
        // Oversized text encodes as a bare zero length octet.
        assert_eq!(&encoded[..], &[0x00]);
        let decoded = Text::decode(encoded).expect("Failed to decode oversized text!");
        assert!(decoded.is_empty());
        return;
    }
    let decoded = Text::decode(encoded).expect("Failed to decode text!");
    assert_eq!(text, decoded);
}

const ALL_KINDS: [FieldKind; 6] = [
    FieldKind::Text,
    FieldKind::F32,
    FieldKind::U16,
    FieldKind::F32Pair,
    FieldKind::U8,
    FieldKind::Bool,
];

fn decode_untrusted(data: &[u8]) {
    // Untrusted bytes may fail to decode but must never panic.
    let _ = Text::decode(data);
    let _ = f32::decode(data);
    let _ = u16::decode(data);
    let _ = <(f32, f32)>::decode(data);
    let _ = u8::decode(data);
    let _ = bool::decode(data);

    for kind in ALL_KINDS {
        let mut buf = data;
        // Every successful read consumes at least one byte, so this walk
        // terminates.
        while let Ok(value) = Value::read_cfg(&mut buf, &kind) {
            assert_eq!(value.kind(), kind);
            let _ = value.encode();
        }
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput<'a> {
    Untrusted(&'a [u8]),
    Text(String),
    F32(f32),
    U16(u16),
    Pair(f32, f32),
    U8(u8),
    Bool(bool),
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Untrusted(data) => decode_untrusted(data),
        FuzzInput::Text(text) => roundtrip_text(text),
        FuzzInput::F32(v) => roundtrip_f32(v),
        FuzzInput::U16(v) => roundtrip_primitive(v),
        FuzzInput::Pair(x, y) => roundtrip_pair((x, y)),
        FuzzInput::U8(v) => roundtrip_primitive(v),
        FuzzInput::Bool(v) => roundtrip_primitive(v),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
