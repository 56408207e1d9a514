//! Decoded entity records.
//!
//! An entity is a schema reference plus the decoded slot values, the owned
//! binary-chunk chain (group 310), and the owned object-id chain (groups
//! 330/340/350/360). All strings are initialized to their defaults, never
//! absent.

use crate::codec::registry::{EntitySchema, EntityType};
use crate::codec::value::FieldValue;
use crate::types::{Handle, StandardFlags, ViewModeFlags};

/// One node of an entity's object-id chain.
///
/// The node remembers the actual group code it arrived under, which is
/// what distinguishes the four soft/hard owner/pointer relations when the
/// chain is re-serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectIdRef {
    /// The group code seen on the wire (330, 340, 350, or 360).
    pub code: i32,
    /// The referenced handle.
    pub handle: Handle,
}

/// A decoded (or to-be-encoded) entity record.
#[derive(Debug, Clone)]
pub struct Entity {
    schema: &'static EntitySchema,
    /// Record handle. `-1` means "omit the group-5 tag on write".
    pub id_code: i64,
    slots: Vec<FieldValue>,
    /// Group-310 binary chunks, in stream order. Opaque hex text; the
    /// codec does not decode the nibble pairs.
    pub binary_chunks: Vec<String>,
    /// Object-id chain, in stream order.
    pub object_ids: Vec<ObjectIdRef>,
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        // schemas are compared by identity; there is one static table
        // per entity type
        std::ptr::eq(self.schema, other.schema)
            && self.id_code == other.id_code
            && self.slots == other.slots
            && self.binary_chunks == other.binary_chunks
            && self.object_ids == other.object_ids
    }
}

impl Entity {
    /// Create an empty record with every slot at its schema default.
    pub fn new(schema: &'static EntitySchema) -> Self {
        let slots = schema
            .fields
            .iter()
            .map(|spec| spec.default.materialize())
            .collect();
        Self {
            schema,
            id_code: 0,
            slots,
            binary_chunks: Vec::new(),
            object_ids: Vec::new(),
        }
    }

    /// The schema this record conforms to.
    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    /// The concrete entity type.
    pub fn entity_type(&self) -> EntityType {
        self.schema.entity_type
    }

    /// Current value of a named field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.schema.field_index(name).map(|i| &self.slots[i])
    }

    /// Replace a named field's value. Returns false when the schema has
    /// no such field.
    pub fn set(&mut self, name: &str, value: FieldValue) -> bool {
        match self.schema.field_index(name) {
            Some(i) => {
                self.slots[i] = value;
                true
            }
            None => false,
        }
    }

    pub(crate) fn slot(&self, index: usize) -> &FieldValue {
        &self.slots[index]
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut FieldValue {
        &mut self.slots[index]
    }

    /// Text view of a named field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Double view of a named field.
    pub fn double(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_double)
    }

    /// Integer view (widened to i64) of a named field.
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_int)
    }

    /// Boolean view of a named field.
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    /// Handle view of a named field.
    pub fn handle_ref(&self, name: &str) -> Option<Handle> {
        self.get(name).and_then(FieldValue::as_handle)
    }

    /// Typed view of the standard table-record flags (group 70), when
    /// present.
    pub fn standard_flags(&self) -> Option<StandardFlags> {
        self.int("flags")
            .map(|v| StandardFlags::from_group_value(v as i16))
    }

    /// Typed view of the viewport view-mode bits (group 71), when
    /// present.
    pub fn view_mode_flags(&self) -> Option<ViewModeFlags> {
        self.int("view_mode")
            .map(|v| ViewModeFlags::from_group_value(v as i16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas;

    #[test]
    fn test_new_entity_has_defaults() {
        let entity = Entity::new(&schemas::TOLERANCE);
        assert_eq!(entity.id_code, 0);
        assert_eq!(entity.text("layer"), Some("0"));
        // defaultless so a missing group 3 is detectable
        assert_eq!(entity.text("dimension_style"), Some(""));
        assert!(entity.binary_chunks.is_empty());
        assert!(entity.object_ids.is_empty());
    }

    #[test]
    fn test_no_null_strings_after_init() {
        for schema in schemas::ALL {
            let entity = Entity::new(schema);
            for spec in schema.fields {
                if spec.kind == crate::codec::FieldKind::Text {
                    assert!(
                        entity.text(spec.name).is_some(),
                        "{}.{} not a string",
                        schema.name,
                        spec.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut entity = Entity::new(&schemas::TOLERANCE);
        assert!(entity.set("layer", FieldValue::Text("Walls".into())));
        assert_eq!(entity.text("layer"), Some("Walls"));
        assert!(!entity.set("no_such_field", FieldValue::Empty));
    }

    #[test]
    fn test_standard_flags_view() {
        let mut entity = Entity::new(&schemas::UCS);
        entity.set("flags", FieldValue::I16(64));
        assert_eq!(entity.standard_flags(), Some(StandardFlags::REFERENCED));
    }

    #[test]
    fn test_view_mode_flags_view() {
        let mut entity = Entity::new(&schemas::VPORT);
        entity.set("view_mode", FieldValue::I16(1 | 2));
        let flags = entity.view_mode_flags().unwrap();
        assert!(flags.contains(ViewModeFlags::PERSPECTIVE));
        assert!(flags.contains(ViewModeFlags::FRONT_CLIPPING));
    }
}
