//! Shared test utilities for dxf-codec integration tests.

#![allow(dead_code)]

use dxf_codec::codec::registry::EntitySchema;
use dxf_codec::codec::{decode_entity, CodecOptions, Tag, TagScanner};
use dxf_codec::notification::Diagnostics;
use dxf_codec::{DxfVersion, Entity, Result};
use std::io::Cursor;

/// Build a scanner over an in-memory tag stream.
pub fn scanner(stream: &str) -> TagScanner<Cursor<Vec<u8>>> {
    TagScanner::new(Cursor::new(stream.as_bytes().to_vec()), "test.dxf")
}

/// Decode one record from a stream positioned past its `0 / NAME`
/// marker, returning the entity and the diagnostics.
pub fn decode_one(
    schema: &'static EntitySchema,
    stream: &str,
    options: &CodecOptions,
) -> (Result<Entity>, Diagnostics) {
    let mut s = scanner(stream);
    let mut diagnostics = Diagnostics::new();
    let result = decode_entity(schema, &mut s, options, &mut diagnostics);
    (result, diagnostics)
}

/// Render a tag sequence back into stream text (no terminator added),
/// so an encoded record can be decoded again.
pub fn tags_to_stream(tags: &[Tag]) -> String {
    let mut text = String::new();
    for tag in tags {
        text.push_str(&tag.code.to_string());
        text.push('\n');
        text.push_str(&tag.value);
        text.push('\n');
    }
    text
}

/// Re-decode an encoded record: strip the leading `0 / NAME` marker,
/// append a terminator, and run the decoder at `declared`.
pub fn redecode(
    schema: &'static EntitySchema,
    tags: &[Tag],
    declared: DxfVersion,
) -> Entity {
    assert_eq!(tags[0].code, 0, "encoded record must start with its marker");
    let body = tags_to_stream(&tags[1..]) + "0\nEOF\n";
    let options = CodecOptions {
        declared_version: declared,
        ..CodecOptions::default()
    };
    let (result, _) = decode_one(schema, &body, &options);
    result.expect("re-decode of encoded record")
}
