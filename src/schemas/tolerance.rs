//! TOLERANCE (feature control frame) schema.

use super::{not_bylayer_color, not_default_linetype, not_unit_double, nonzero_double, nonzero_int, valid_handle};
use crate::codec::registry::{Backfill, EntitySchema, EntityType, FieldDefault, FieldSpec};
use crate::codec::value::FieldKind;
use crate::types::DxfVersion;

/// TOLERANCE entity.
///
/// The dimension-style name (group 3) is a hard precondition: AutoCAD
/// cannot render a feature control frame without one, so a record lacking
/// it is rejected outright instead of defaulted.
pub static TOLERANCE: EntitySchema = EntitySchema {
    entity_type: EntityType::Tolerance,
    name: "TOLERANCE",
    legacy_name: None,
    min_version: DxfVersion::AC1012,
    required: &["dimension_style"],
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
        FieldSpec::new("linetype_scale", 48, FieldKind::Double, FieldDefault::Double(1.0))
            .since(DxfVersion::AC1012)
            .guarded(not_unit_double),
        FieldSpec::new("visibility", 60, FieldKind::I16, FieldDefault::I16(0))
            .guarded(nonzero_int),
        FieldSpec::new("paperspace", 67, FieldKind::I16, FieldDefault::I16(0))
            .since(DxfVersion::AC1012)
            .guarded(nonzero_int),
        FieldSpec::new("thickness", 39, FieldKind::Double, FieldDefault::Double(0.0))
            .guarded(nonzero_double),
        FieldSpec::new("fcf_subclass", 100, FieldKind::Text, FieldDefault::Text("AcDbFcf"))
            .since(DxfVersion::AC1012)
            .nth(2),
        FieldSpec::new("dimension_style", 3, FieldKind::Text, FieldDefault::Text("")),
        FieldSpec::new("insertion_x", 10, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("insertion_y", 20, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("insertion_z", 30, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("text", 1, FieldKind::Text, FieldDefault::Text("")),
        FieldSpec::new("direction_x", 11, FieldKind::Double, FieldDefault::Double(1.0)),
        FieldSpec::new("direction_y", 21, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("direction_z", 31, FieldKind::Double, FieldDefault::Double(0.0)),
        FieldSpec::new("extrusion_x", 210, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1012),
        FieldSpec::new("extrusion_y", 220, FieldKind::Double, FieldDefault::Double(0.0))
            .since(DxfVersion::AC1012),
        FieldSpec::new("extrusion_z", 230, FieldKind::Double, FieldDefault::Double(1.0))
            .since(DxfVersion::AC1012),
    ],
};
