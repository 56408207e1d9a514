//! # dxf-codec
//!
//! A pure Rust tag/value codec for DXF entity records.
//!
//! DXF records all read and write the same way: a flat sequence of
//! `(group code, value)` tags terminated by a `0` tag, serialized back in
//! a fixed order conditioned on the target DXF version. This crate
//! implements that discipline once — a shared scanner, decoder, and
//! encoder driven by declarative per-entity schema tables — instead of a
//! hand-written loop per entity type.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxf_codec::codec::CodecOptions;
//! use dxf_codec::io::EntityStreamReader;
//! use std::io::Cursor;
//!
//! let stream = "0\nUCS\n  5\n1F\n  2\nTop\n 10\n0.0\n 20\n0.0\n  0\nEOF\n";
//! let mut reader = EntityStreamReader::new(
//!     Cursor::new(stream.as_bytes().to_vec()),
//!     "example.dxf",
//!     CodecOptions::default(),
//! );
//! let store = reader.read_store()?;
//! assert_eq!(store.len(), 1);
//! # Ok::<(), dxf_codec::error::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`codec::TagScanner`] — line-numbered tag extraction from a stream
//! - [`codec::registry`] — static per-entity field tables (group code,
//!   kind, default, version range, write guard, occurrence ordinal)
//! - [`codec::decode_entity`] / [`codec::encode_entity`] — the shared
//!   engine interpreting those tables
//! - [`store::EntityStore`] — owned, per-type record collections
//! - [`io`] — the thin `0 / NAME` dispatcher and the wire-format writer
//!
//! Per-tag problems (malformed values, unrecognized group codes) are
//! collected as [`notification::Diagnostics`] and never abort a record;
//! only stream failures, truncated records, and empty required fields
//! are errors.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod codec;
pub mod entity;
pub mod error;
pub mod io;
pub mod notification;
pub mod schemas;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use codec::{decode_entity, encode_entity, CodecOptions, Tag, TagScanner};
pub use entity::{Entity, ObjectIdRef};
pub use error::{DxfError, Result};
pub use notification::{Diagnostic, DiagnosticKind, Diagnostics};
pub use store::{EntityList, EntityStore};
pub use types::{DxfVersion, Handle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_options() {
        let options = CodecOptions::default();
        assert_eq!(options.declared_version, DxfVersion::AC1032);
    }
}
