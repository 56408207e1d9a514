//! Decode/encode throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dxf_codec::codec::{decode_entity, encode_entity, CodecOptions, TagScanner};
use dxf_codec::notification::Diagnostics;
use dxf_codec::schemas;
use dxf_codec::DxfVersion;
use std::io::Cursor;

fn proxy_stream(chunks: usize) -> String {
    let mut stream = String::from("5\n2A\n330\nD0\n330\nE0\n8\nWalls\n90\n498\n91\n512\n");
    for i in 0..chunks {
        stream.push_str(&format!("310\n{:08X}DEADBEEF\n", i));
    }
    stream.push_str("330\nF1\n350\nF2\n360\nF3\n0\nEOF\n");
    stream
}

fn bench_decode(c: &mut Criterion) {
    let stream = proxy_stream(64);
    let options = CodecOptions::default();

    c.bench_function("decode_proxy_64_chunks", |b| {
        b.iter(|| {
            let mut scanner =
                TagScanner::new(Cursor::new(stream.as_bytes().to_vec()), "bench.dxf");
            let mut diagnostics = Diagnostics::new();
            let entity = decode_entity(
                &schemas::ACAD_PROXY_ENTITY,
                &mut scanner,
                &options,
                &mut diagnostics,
            )
            .unwrap();
            black_box(entity)
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let stream = proxy_stream(64);
    let options = CodecOptions::default();
    let mut scanner = TagScanner::new(Cursor::new(stream.into_bytes()), "bench.dxf");
    let mut diagnostics = Diagnostics::new();
    let entity = decode_entity(
        &schemas::ACAD_PROXY_ENTITY,
        &mut scanner,
        &options,
        &mut diagnostics,
    )
    .unwrap();

    c.bench_function("encode_proxy_64_chunks", |b| {
        b.iter(|| {
            let mut diagnostics = Diagnostics::new();
            let tags =
                encode_entity(&entity, DxfVersion::AC1032, &options, &mut diagnostics).unwrap();
            black_box(tags)
        })
    });
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
