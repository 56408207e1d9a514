//! Encode/decode round-trip tests across entity types and target versions.

mod common;

use common::{decode_one, redecode};
use dxf_codec::codec::value::FieldValue;
use dxf_codec::codec::{encode_entity, CodecOptions, Tag};
use dxf_codec::io::write_store;
use dxf_codec::notification::Diagnostics;
use dxf_codec::schemas;
use dxf_codec::{DxfVersion, Entity, EntityStore, Handle, ObjectIdRef};
use proptest::prelude::*;

fn encode(entity: &Entity, target: DxfVersion) -> Vec<Tag> {
    let options = CodecOptions::default();
    let mut diagnostics = Diagnostics::new();
    encode_entity(entity, target, &options, &mut diagnostics).unwrap()
}

fn sample_tolerance() -> Entity {
    let mut tolerance = Entity::new(&schemas::TOLERANCE);
    tolerance.id_code = 0x9D;
    tolerance.set("layer", FieldValue::Text("Annotations".into()));
    tolerance.set("linetype", FieldValue::Text("DASHED".into()));
    tolerance.set("color", FieldValue::I16(3));
    tolerance.set("dimension_style", FieldValue::Text("ISO-25".into()));
    tolerance.set("text", FieldValue::Text("{\\Fgdt;p}%%v0.5%%vA".into()));
    tolerance.set("insertion_x", FieldValue::Double(10.5));
    tolerance.set("insertion_y", FieldValue::Double(-2.25));
    tolerance.set("direction_y", FieldValue::Double(1.0));
    tolerance
}

fn sample_proxy() -> Entity {
    let mut proxy = Entity::new(&schemas::ACAD_PROXY_ENTITY);
    proxy.id_code = 0x200;
    proxy.set("dictionary_owner_soft", FieldValue::Handle(Handle::new(0xD0)));
    proxy.set("object_owner_soft", FieldValue::Handle(Handle::new(0xE0)));
    proxy.set("application_class_id", FieldValue::I32(512));
    proxy.set("graphics_data_size", FieldValue::I32(4));
    proxy.binary_chunks = vec!["DEADBEEF".to_string(), "CAFE".to_string()];
    proxy.object_ids = vec![
        ObjectIdRef { code: 330, handle: Handle::new(0xF1) },
        ObjectIdRef { code: 350, handle: Handle::new(0xF2) },
        ObjectIdRef { code: 360, handle: Handle::new(0xF3) },
    ];
    proxy
}

/// Fields valid at the target version survive the round trip; fields
/// outside the range are expected to be lost.
fn assert_valid_subset_roundtrips(original: &Entity, target: DxfVersion) {
    let tags = encode(original, target);
    let decoded = redecode(original.schema(), &tags, target);

    assert_eq!(decoded.id_code, original.id_code);
    for spec in original.schema().fields {
        if !spec.valid_at(target) || spec.kind.is_repeatable() {
            continue;
        }
        if let Some(guard) = spec.write_guard {
            if !guard(original.get(spec.name).unwrap()) {
                // suppressed on write; the decoded side holds the default
                continue;
            }
        }
        assert_eq!(
            decoded.get(spec.name),
            original.get(spec.name),
            "{}.{} lost at {}",
            original.schema().name,
            spec.name,
            target.version_string()
        );
    }
}

#[test]
fn tolerance_roundtrips_at_every_supported_version() {
    let tolerance = sample_tolerance();
    for target in [
        DxfVersion::AC1012,
        DxfVersion::AC1014,
        DxfVersion::AC1015,
        DxfVersion::AC1021,
        DxfVersion::AC1032,
    ] {
        assert_valid_subset_roundtrips(&tolerance, target);
    }
}

#[test]
fn proxy_roundtrips_with_chains() {
    let proxy = sample_proxy();
    for target in [DxfVersion::AC1014, DxfVersion::AC1015, DxfVersion::AC1032] {
        let tags = encode(&proxy, target);
        let decoded = redecode(proxy.schema(), &tags, target);

        assert_eq!(decoded.binary_chunks, proxy.binary_chunks);
        assert_eq!(decoded.object_ids, proxy.object_ids);
        if target >= DxfVersion::AC1014 {
            assert_eq!(
                decoded.handle_ref("dictionary_owner_soft"),
                proxy.handle_ref("dictionary_owner_soft")
            );
        }
        if target >= DxfVersion::AC1015 {
            assert_eq!(
                decoded.handle_ref("object_owner_soft"),
                proxy.handle_ref("object_owner_soft")
            );
        }
    }
}

#[test]
fn proxy_wire_name_switches_at_r14() {
    let proxy = sample_proxy();
    assert_eq!(encode(&proxy, DxfVersion::AC1012)[0], Tag::new(0, "ACAD_ZOMBIE_ENTITY"));
    assert_eq!(encode(&proxy, DxfVersion::AC1014)[0], Tag::new(0, "ACAD_PROXY_ENTITY"));
}

#[test]
fn zombie_stream_decodes_back_into_same_proxy() {
    // encode at R13 under the legacy name, decode, and re-encode at 2018
    let proxy = sample_proxy();
    let r13_tags = encode(&proxy, DxfVersion::AC1012);
    let decoded = redecode(proxy.schema(), &r13_tags, DxfVersion::AC1012);
    let modern_tags = encode(&decoded, DxfVersion::AC1032);
    assert_eq!(modern_tags[0], Tag::new(0, "ACAD_PROXY_ENTITY"));
}

#[test]
fn id_code_sentinel_omits_handle_tag() {
    let mut ucs = Entity::new(&schemas::UCS);
    ucs.set("name", FieldValue::Text("Top".into()));

    ucs.id_code = -1;
    let tags = encode(&ucs, DxfVersion::AC1032);
    assert!(tags.iter().all(|t| t.code != 5));

    ucs.id_code = 0x1B;
    let tags = encode(&ucs, DxfVersion::AC1032);
    let handles: Vec<&Tag> = tags.iter().filter(|t| t.code == 5).collect();
    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].value, "1B");
}

#[test]
fn version_gated_fields_are_lost_not_corrupted() {
    let mut light = Entity::new(&schemas::LIGHT);
    light.set("name", FieldValue::Text("sun".into()));
    light.set("intensity", FieldValue::Double(3.5));
    light.set("layer", FieldValue::Text("Lights".into()));

    // encoding for R2000 drops every R2007 field but keeps the common ones
    let options = CodecOptions::default();
    let mut diagnostics = Diagnostics::new();
    let tags = encode_entity(&light, DxfVersion::AC1015, &options, &mut diagnostics).unwrap();
    let decoded = redecode(light.schema(), &tags, DxfVersion::AC1015);

    assert_eq!(decoded.text("layer"), Some("Lights"));
    assert_eq!(decoded.text("name"), Some(""));
    assert_eq!(decoded.double("intensity"), Some(1.0));
}

#[test]
fn write_store_output_is_readable() {
    let mut store = EntityStore::new();
    store.append(sample_tolerance());
    store.append(sample_proxy());
    let mut ucs = Entity::new(&schemas::UCS);
    ucs.set("name", FieldValue::Text("Top".into()));
    store.append(ucs);

    let options = CodecOptions::default();
    let mut diagnostics = Diagnostics::new();
    let mut buffer = Vec::new();
    write_store(&store, DxfVersion::AC1032, &options, &mut diagnostics, &mut buffer).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let mut reader = dxf_codec::io::EntityStreamReader::new(
        std::io::Cursor::new(text.into_bytes()),
        "written.dxf",
        options,
    );
    let reread = reader.read_store().unwrap();
    assert_eq!(reread.len(), 3);
}

proptest! {
    /// Scalar tolerance fields survive encode→decode at the newest
    /// version for arbitrary values.
    #[test]
    fn prop_tolerance_scalars_roundtrip(
        // dyadic rationals: exact under decimal formatting
        ix in (-1_000_000i64..1_000_000i64).prop_map(|n| n as f64 / 64.0),
        iy in (-1_000_000i64..1_000_000i64).prop_map(|n| n as f64 / 64.0),
        dz in (-64_000i64..64_000i64).prop_map(|n| n as f64 / 256.0),
        color in 1i16..255i16,
        handle in 1i64..0xFFFF_FFFFi64,
        layer in "[A-Za-z][A-Za-z0-9_]{0,14}",
        style in "[A-Za-z][A-Za-z0-9-]{0,14}",
    ) {
        let mut tolerance = Entity::new(&schemas::TOLERANCE);
        tolerance.id_code = handle;
        tolerance.set("layer", FieldValue::Text(layer.clone()));
        tolerance.set("color", FieldValue::I16(color));
        tolerance.set("dimension_style", FieldValue::Text(style.clone()));
        tolerance.set("insertion_x", FieldValue::Double(ix));
        tolerance.set("insertion_y", FieldValue::Double(iy));
        tolerance.set("direction_z", FieldValue::Double(dz));

        let tags = encode(&tolerance, DxfVersion::AC1032);
        let decoded = redecode(&schemas::TOLERANCE, &tags, DxfVersion::AC1032);

        prop_assert_eq!(decoded.id_code, handle);
        prop_assert_eq!(decoded.text("layer"), Some(layer.as_str()));
        prop_assert_eq!(decoded.int("color"), Some(i64::from(color)));
        prop_assert_eq!(decoded.text("dimension_style"), Some(style.as_str()));
        prop_assert_eq!(decoded.double("insertion_x"), Some(ix));
        prop_assert_eq!(decoded.double("insertion_y"), Some(iy));
        prop_assert_eq!(decoded.double("direction_z"), Some(dz));
    }

    /// Chunk chains of any size survive the round trip node for node.
    #[test]
    fn prop_chunk_chain_roundtrips(chunks in prop::collection::vec("[0-9A-F]{2,64}", 0..20)) {
        let mut proxy = Entity::new(&schemas::ACAD_PROXY_ENTITY);
        proxy.binary_chunks = chunks.clone();

        let tags = encode(&proxy, DxfVersion::AC1032);
        let decoded = redecode(&schemas::ACAD_PROXY_ENTITY, &tags, DxfVersion::AC1032);
        prop_assert_eq!(decoded.binary_chunks, chunks);
    }
}

#[test]
fn default_only_entity_roundtrips() {
    // a freshly-constructed record encodes to the minimal tag set and
    // decodes back equal (modulo suppressed defaults, which decode to
    // the same defaults)
    for schema in schemas::ALL {
        let entity = Entity::new(schema);
        let tags = encode(&entity, DxfVersion::AC1032);
        if !schema.required.is_empty() {
            // records with hard preconditions cannot round-trip while
            // their required fields are empty
            let body = common::tags_to_stream(&tags[1..]) + "0\nEOF\n";
            let (result, _) = decode_one(schema, &body, &CodecOptions::default());
            assert!(result.is_err(), "{} should reject empty required", schema.name);
            continue;
        }
        let decoded = redecode(schema, &tags, DxfVersion::AC1032);
        assert_eq!(&decoded, &entity, "{} default roundtrip", schema.name);
    }
}
