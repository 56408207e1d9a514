//! ACAD_PROXY_ENTITY schema.
//!
//! Group 330 is overloaded by ordinal position within the record: the
//! first appearance is the dictionary owner, the second the object owner,
//! and every later one joins the open-ended object-id chain together with
//! any 340/350/360 tag. The two pinned specs below come before the chain
//! spec, so first-match lookup resolves the overload declaratively.

use super::{not_bylayer_color, not_default_linetype, not_unit_double, nonzero_int, valid_handle};
use crate::codec::registry::{Backfill, EntitySchema, EntityType, FieldDefault, FieldSpec};
use crate::codec::value::FieldKind;
use crate::types::DxfVersion;

/// ACAD_PROXY_ENTITY; written as ACAD_ZOMBIE_ENTITY for targets up to
/// R13, from the identical in-memory record.
pub static ACAD_PROXY_ENTITY: EntitySchema = EntitySchema {
    entity_type: EntityType::AcadProxyEntity,
    name: "ACAD_PROXY_ENTITY",
    legacy_name: Some(("ACAD_ZOMBIE_ENTITY", DxfVersion::AC1012)),
    min_version: DxfVersion::AC1012,
    required: &[],
    fields: &[
        FieldSpec::new("dictionary_owner_soft", 330, FieldKind::Handle, FieldDefault::Handle(0))
            .since(DxfVersion::AC1014)
            .nth(1)
            .guarded(valid_handle),
        FieldSpec::new("object_owner_soft", 330, FieldKind::Handle, FieldDefault::Handle(0))
            .since(DxfVersion::AC1015)
            .nth(2)
            .guarded(valid_handle),
        FieldSpec::new("entity_subclass", 100, FieldKind::Text, FieldDefault::Text("AcDbEntity"))
            .since(DxfVersion::AC1012)
            .nth(1),
        FieldSpec::new("layer", 8, FieldKind::Text, FieldDefault::Text("0"))
            .backfilled(Backfill::DefaultLayer),
        FieldSpec::new("linetype", 6, FieldKind::Text, FieldDefault::Text("BYLAYER"))
            .guarded(not_default_linetype)
            .backfilled(Backfill::DefaultLinetype),
        FieldSpec::new("color", 62, FieldKind::I16, FieldDefault::I16(256))
            .guarded(not_bylayer_color),
        FieldSpec::new("linetype_scale", 48, FieldKind::Double, FieldDefault::Double(1.0))
            .since(DxfVersion::AC1012)
            .guarded(not_unit_double),
        FieldSpec::new("visibility", 60, FieldKind::I16, FieldDefault::I16(0))
            .guarded(nonzero_int),
        FieldSpec::new("paperspace", 67, FieldKind::I16, FieldDefault::I16(0))
            .since(DxfVersion::AC1012)
            .guarded(nonzero_int),
        FieldSpec::new("proxy_subclass", 100, FieldKind::Text, FieldDefault::Text("AcDbProxyEntity"))
            .since(DxfVersion::AC1012)
            .nth(2),
        FieldSpec::new("proxy_class_id", 90, FieldKind::I32, FieldDefault::I32(498))
            .since(DxfVersion::AC1012),
        FieldSpec::new("application_class_id", 91, FieldKind::I32, FieldDefault::I32(500))
            .since(DxfVersion::AC1012),
        FieldSpec::new("graphics_data_size", 92, FieldKind::I32, FieldDefault::I32(0))
            .since(DxfVersion::AC1012)
            .guarded(nonzero_int),
        FieldSpec::new("entity_data_size", 93, FieldKind::I32, FieldDefault::I32(0))
            .since(DxfVersion::AC1012)
            .guarded(nonzero_int),
        FieldSpec::new("graphics_data", 310, FieldKind::BinaryChunk, FieldDefault::Empty)
            .since(DxfVersion::AC1012),
        FieldSpec::new("object_ids", 330, FieldKind::HandleChain, FieldDefault::Empty)
            .since(DxfVersion::AC1012)
            .with_aliases(&[340, 350, 360]),
        FieldSpec::new("chain_end_marker", 94, FieldKind::I32, FieldDefault::I32(0))
            .since(DxfVersion::AC1015),
        FieldSpec::new("object_drawing_format", 95, FieldKind::I32, FieldDefault::I32(0))
            .since(DxfVersion::AC1015),
        FieldSpec::new("original_data_format", 70, FieldKind::I16, FieldDefault::I16(0))
            .since(DxfVersion::AC1015),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_330_ordinal_overload() {
        let (_, o1) = ACAD_PROXY_ENTITY.lookup(330, 1).unwrap();
        assert_eq!(o1.name, "dictionary_owner_soft");
        let (_, o2) = ACAD_PROXY_ENTITY.lookup(330, 2).unwrap();
        assert_eq!(o2.name, "object_owner_soft");
        for occurrence in 3..6 {
            let (_, spec) = ACAD_PROXY_ENTITY.lookup(330, occurrence).unwrap();
            assert_eq!(spec.name, "object_ids");
        }
    }

    #[test]
    fn test_chain_aliases_any_ordinal() {
        for code in [340, 350, 360] {
            for occurrence in 1..4 {
                let (_, spec) = ACAD_PROXY_ENTITY.lookup(code, occurrence).unwrap();
                assert_eq!(spec.name, "object_ids", "code {code}");
            }
        }
    }

    #[test]
    fn test_legacy_name() {
        assert!(ACAD_PROXY_ENTITY.matches_name("ACAD_ZOMBIE_ENTITY"));
        assert!(ACAD_PROXY_ENTITY.matches_name("ACAD_PROXY_ENTITY"));
        assert!(!ACAD_PROXY_ENTITY.matches_name("PROXY"));
    }

    #[test]
    fn test_class_id_defaults() {
        let idx = ACAD_PROXY_ENTITY.field_index("proxy_class_id").unwrap();
        assert_eq!(ACAD_PROXY_ENTITY.fields[idx].default, FieldDefault::I32(498));
    }
}
