//! Per-entity schema tables.
//!
//! Each table declares, in emission order, every field slot of one entity
//! type: its group code, kind, default, valid version range, and write
//! guard. The shared decoder/encoder engine in [`crate::codec`] interprets
//! these tables; nothing here contains control flow.

use crate::codec::registry::EntitySchema;
use crate::codec::value::FieldValue;

mod light;
mod proxy;
mod tolerance;
mod ucs;
mod vport;

pub use light::LIGHT;
pub use proxy::ACAD_PROXY_ENTITY;
pub use tolerance::TOLERANCE;
pub use ucs::UCS;
pub use vport::VPORT;

/// Every schema this crate ships, in registry order.
pub static ALL: &[&EntitySchema] = &[&ACAD_PROXY_ENTITY, &LIGHT, &TOLERANCE, &UCS, &VPORT];

// Write guards shared across tables. Each receives the slot's current
// value; returning false suppresses the tag.

pub(crate) fn valid_handle(value: &FieldValue) -> bool {
    value.as_handle().is_some_and(|h| h.is_valid())
}

pub(crate) fn not_default_linetype(value: &FieldValue) -> bool {
    value.as_text() != Some("BYLAYER")
}

pub(crate) fn not_bylayer_color(value: &FieldValue) -> bool {
    value.as_int() != Some(256)
}

pub(crate) fn nonzero_int(value: &FieldValue) -> bool {
    value.as_int() != Some(0)
}

pub(crate) fn nonzero_double(value: &FieldValue) -> bool {
    value.as_double() != Some(0.0)
}

pub(crate) fn not_unit_double(value: &FieldValue) -> bool {
    value.as_double() != Some(1.0)
}
