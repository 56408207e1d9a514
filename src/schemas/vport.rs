//! VPORT table-record schema.

use super::valid_handle;
use crate::codec::registry::{EntitySchema, EntityType, FieldDefault, FieldSpec};
use crate::codec::value::FieldKind;
use crate::types::DxfVersion;

/// VPORT (viewport configuration) table record.
pub static VPORT: EntitySchema = EntitySchema {
    entity_type: EntityType::VPort,
    name: "VPORT",
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
        FieldSpec::new("vport_subclass", 100, FieldKind::Text, FieldDefault::Text("AcDbViewportTableRecord"))
            .since(DxfVersion::AC1012)
            .nth(2),
        FieldSpec::new("name", 2, FieldKind::Text, FieldDefault::Text("")),
        FieldSpec::new("flags", 70, FieldKind::I16, FieldDefault::I16(0)),
        FieldSpec::new("lower_left_x", 10, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("lower_left_y", 20, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("upper_right_x", 11, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("upper_right_y", 21, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("center_x", 12, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("center_y", 22, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("snap_base_x", 13, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("snap_base_y", 23, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("snap_spacing_x", 14, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("snap_spacing_y", 24, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("grid_spacing_x", 15, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("grid_spacing_y", 25, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("view_direction_x", 16, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("view_direction_y", 26, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("view_direction_z", 36, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("view_target_x", 17, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("view_target_y", 27, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("view_target_z", 37, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("view_height", 40, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("aspect_ratio", 41, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("lens_length", 42, FieldKind::Double, FieldDefault::Double(50.0)),
        FieldSpec::new("front_clip", 43, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("back_clip", 44, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("snap_angle", 50, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("view_twist", 51, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("view_mode", 71, FieldKind::I16, FieldDefault::I16(0)),
        FieldSpec::new("circle_zoom", 72, FieldKind::I16, FieldDefault::I16(100)),
        FieldSpec::new("fast_zoom", 73, FieldKind::I16, FieldDefault::I16(1)),
        FieldSpec::new("ucs_icon", 74, FieldKind::I16, FieldDefault::I16(1)),
        FieldSpec::new("snap_on", 75, FieldKind::I16, FieldDefault::I16(0)),
        FieldSpec::new("grid_on", 76, FieldKind::I16, FieldDefault::I16(0)),
        FieldSpec::new("snap_style", 77, FieldKind::I16, FieldDefault::I16(0)),
        FieldSpec::new("snap_isopair", 78, FieldKind::I16, FieldDefault::I16(0)),
    ],
};
