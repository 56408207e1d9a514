//! The generic tag/value codec: scanner, field registry, decoder, encoder.
//!
//! A DXF record is a flat sequence of `(group code, value)` tags terminated
//! by a `0` tag. Every entity type reads and writes the same way; what
//! differs is pure schema data, declared once per type in
//! [`crate::schemas`] and interpreted here by one shared engine.

pub mod decoder;
pub mod encoder;
pub mod registry;
pub mod scanner;
pub mod value;

pub use decoder::decode_entity;
pub use encoder::encode_entity;
pub use registry::{Backfill, EntitySchema, EntityType, FieldSpec, schema_for_name};
pub use scanner::{ScanEvent, TagScanner};
pub use value::{FieldKind, FieldValue};

use crate::types::DxfVersion;

/// One wire tag: a group code and its raw value line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// The DXF group code.
    pub code: i32,
    /// The value line, verbatim.
    pub value: String,
}

impl Tag {
    /// Create a tag.
    pub fn new(code: i32, value: impl Into<String>) -> Self {
        Self {
            code,
            value: value.into(),
        }
    }
}

/// Group code reserved as the record terminator / next-record marker.
pub const RECORD_TERMINATOR: i32 = 0;

/// Group code carrying an embedded comment line.
pub const COMMENT_CODE: i32 = 999;

/// Group code carrying the record handle.
pub const HANDLE_CODE: i32 = 5;

/// `id_code` sentinel: omit the group-5 tag entirely on write.
pub const OMIT_HANDLE: i64 = -1;

/// Configuration threaded explicitly through decode and encode calls.
///
/// Defaults that older C-family DXF libraries keep as process-wide
/// constants live here instead, so streams with different conventions can
/// be processed side by side.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// DXF version the stream declares in its header (`$ACADVER`).
    pub declared_version: DxfVersion,
    /// Layer name substituted when a record leaves its layer empty.
    pub default_layer: String,
    /// Linetype name substituted when a record leaves its linetype empty.
    pub default_linetype: String,
    /// When true the encoder refuses (with an error) to serialize an
    /// entity for a target version that predates it; when false it records
    /// a diagnostic and emits anyway.
    pub strict_versions: bool,
    /// When true, `999` comment lines are echoed through `tracing` at info
    /// level in addition to being recorded as diagnostics.
    pub echo_comments: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            declared_version: DxfVersion::default(),
            default_layer: "0".to_string(),
            default_linetype: "BYLAYER".to_string(),
            strict_versions: false,
            echo_comments: false,
        }
    }
}
