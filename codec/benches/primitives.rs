use bytes::BytesMut;
use criterion::{criterion_group, criterion_main, Criterion};
use headwire_codec::{Encode, ReadExt, Text, Write};
use std::hint::black_box;

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let nick = Text::new("anchorite").unwrap();

    group.bench_function("text", |b| b.iter(|| black_box(nick.encode())));
    group.bench_function("u16", |b| b.iter(|| black_box(0x0102u16.encode())));
    group.bench_function("f32", |b| b.iter(|| black_box(1.5f32.encode())));
    group.bench_function("pair", |b| {
        b.iter(|| black_box((1.5f32, -2.25f32).encode()))
    });
    group.bench_function("header", |b| {
        b.iter(|| {
            let mut buf = BytesMut::with_capacity(22);
            nick.write(&mut buf);
            0x0102u16.write(&mut buf);
            (1.0f32, -1.0f32).write(&mut buf);
            0x2Au8.write(&mut buf);
            true.write(&mut buf);
            black_box(buf)
        })
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let nick = Text::new("anchorite").unwrap();

    let text_wire = nick.encode();
    group.bench_function("text", |b| {
        b.iter(|| {
            let mut buf: &[u8] = &text_wire;
            black_box(Text::read(&mut buf).unwrap())
        })
    });

    let u16_wire = 0x0102u16.encode();
    group.bench_function("u16", |b| {
        b.iter(|| {
            let mut buf: &[u8] = &u16_wire;
            black_box(u16::read(&mut buf).unwrap())
        })
    });

    let pair_wire = (1.5f32, -2.25f32).encode();
    group.bench_function("pair", |b| {
        b.iter(|| {
            let mut buf: &[u8] = &pair_wire;
            black_box(<(f32, f32)>::read(&mut buf).unwrap())
        })
    });

    let mut header_wire = BytesMut::new();
    nick.write(&mut header_wire);
    0x0102u16.write(&mut header_wire);
    (1.0f32, -1.0f32).write(&mut header_wire);
    0x2Au8.write(&mut header_wire);
    true.write(&mut header_wire);
    group.bench_function("header", |b| {
        b.iter(|| {
            let mut buf: &[u8] = &header_wire;
            let nick = Text::read(&mut buf).unwrap();
            let version = u16::read(&mut buf).unwrap();
            let spawn = <(f32, f32)>::read(&mut buf).unwrap();
            let hue = u8::read(&mut buf).unwrap();
            let spectating = bool::read(&mut buf).unwrap();
            black_box((nick, version, spawn, hue, spectating))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
