//! UCS table-record schema.

use super::valid_handle;
use crate::codec::registry::{EntitySchema, EntityType, FieldDefault, FieldSpec};
use crate::codec::value::FieldKind;
use crate::types::DxfVersion;

/// UCS (user coordinate system) table record.
pub static UCS: EntitySchema = EntitySchema {
    entity_type: EntityType::Ucs,
    name: "UCS",
    legacy_name: None,
    min_version: DxfVersion::AC1006,
    required: &["name"],
    fields: &[
        FieldSpec::new("owner", 330, FieldKind::Handle, FieldDefault::Handle(0))
            .since(DxfVersion::AC1014)
            .guarded(valid_handle),
        FieldSpec::new("record_subclass", 100, FieldKind::Text, FieldDefault::Text("AcDbSymbolTableRecord"))
            .since(DxfVersion::AC1012)
            .nth(1),
        FieldSpec::new("ucs_subclass", 100, FieldKind::Text, FieldDefault::Text("AcDbUCSTableRecord"))
            .since(DxfVersion::AC1012)
            .nth(2),
        FieldSpec::new("name", 2, FieldKind::Text, FieldDefault::Text("")),
        FieldSpec::new("flags", 70, FieldKind::I16, FieldDefault::I16(0)),
        FieldSpec::new("origin_x", 10, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("origin_y", 20, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("origin_z", 30, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("x_axis_x", 11, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("x_axis_y", 21, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("x_axis_z", 31, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("y_axis_x", 12, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("y_axis_y", 22, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("y_axis_z", 32, FieldKind::Double, FieldDefault::Double(0.0)),
    ],
};
