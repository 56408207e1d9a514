//! LIGHT entity schema (photometric lights, introduced with R2007).

use super::{not_bylayer_color, not_default_linetype, valid_handle};
use crate::codec::registry::{Backfill, EntitySchema, EntityType, FieldDefault, FieldSpec};
use crate::codec::value::FieldKind;
use crate::types::DxfVersion;

/// LIGHT entity. Light types for group 70: 1 = distant, 2 = point,
/// 3 = spot.
pub static LIGHT: EntitySchema = EntitySchema {
    entity_type: EntityType::Light,
    name: "LIGHT",
    legacy_name: None,
    min_version: DxfVersion::AC1021,
    required: &[],
    fields: &[
        FieldSpec::new("owner", 330, FieldKind::Handle, FieldDefault::Handle(0))
            .since(DxfVersion::AC1014)
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
        FieldSpec::new("light_subclass", 100, FieldKind::Text, FieldDefault::Text("AcDbLight"))
            .since(DxfVersion::AC1021)
            .nth(2),
        FieldSpec::new("version", 90, FieldKind::I32, FieldDefault::I32(0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("name", 1, FieldKind::Text, FieldDefault::Text(""))
            .since(DxfVersion::AC1021),
        FieldSpec::new("light_type", 70, FieldKind::I16, FieldDefault::I16(1))
            .since(DxfVersion::AC1021),
        FieldSpec::new("status", 290, FieldKind::Bool, FieldDefault::Bool(true))
            .since(DxfVersion::AC1021),
        FieldSpec::new("plot_glyph", 291, FieldKind::Bool, FieldDefault::Bool(false))
            .since(DxfVersion::AC1021),
        FieldSpec::new("intensity", 40, FieldKind::Double, FieldDefault::Double(1.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("position_x", 10, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("position_y", 20, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("position_z", 30, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("target_x", 11, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("target_y", 21, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("target_z", 31, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("attenuation_type", 72, FieldKind::I16, FieldDefault::I16(0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("use_attenuation_limits", 292, FieldKind::Bool, FieldDefault::Bool(false))
            .since(DxfVersion::AC1021),
        FieldSpec::new("attenuation_start_limit", 41, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("attenuation_end_limit", 42, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("hotspot_angle", 50, FieldKind::Double, FieldDefault::Double(45.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("falloff_angle", 51, FieldKind::Double, FieldDefault::Double(50.0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("cast_shadows", 293, FieldKind::Bool, FieldDefault::Bool(true))
            .since(DxfVersion::AC1021),
        FieldSpec::new("shadow_type", 73, FieldKind::I16, FieldDefault::I16(0))
            .since(DxfVersion::AC1021),
        FieldSpec::new("shadow_map_size", 91, FieldKind::I32, FieldDefault::I32(256))
            .since(DxfVersion::AC1021),
        FieldSpec::new("shadow_map_softness", 280, FieldKind::I16, FieldDefault::I16(1))
            .since(DxfVersion::AC1021),
    ],
};
