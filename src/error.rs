//! Error types for dxf-codec

use crate::types::DxfVersion;
use std::io;
use thiserror::Error;

/// Fatal error type for codec operations.
///
/// Non-fatal per-tag issues (malformed values, unrecognized group codes)
/// are reported through [`crate::notification::Diagnostics`] instead and
/// never abort a decode.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error while reading or writing a tag stream
    #[error("IO error in {source_name} at line {line}: {source}")]
    Io {
        /// Underlying IO error
        source: io::Error,
        /// Display name of the stream (file path or label)
        source_name: String,
        /// Line number at which the failure occurred
        line: usize,
    },

    /// A group-code line could not be parsed as an integer
    #[error("parse error in {source_name} at line {line}: {message}")]
    Parse {
        /// Display name of the stream
        source_name: String,
        /// Line number of the offending line
        line: usize,
        /// What was wrong
        message: String,
    },

    /// The stream ended in the middle of a record
    #[error("unexpected end of stream in {source_name} at line {line}")]
    UnexpectedEof {
        /// Display name of the stream
        source_name: String,
        /// Line number reached before the stream ended
        line: usize,
    },

    /// A record is missing a field its type declares as mandatory;
    /// the whole record is discarded, not defaulted
    #[error("{entity} record rejected: required field '{field}' is empty")]
    MissingRequired {
        /// Entity type name
        entity: &'static str,
        /// Name of the empty required field
        field: &'static str,
    },

    /// Strict encoding was requested for a version that predates the entity
    #[error("{entity} has no representation at DXF version {version}")]
    UnsupportedVersion {
        /// Entity type name
        entity: &'static str,
        /// The offending target version
        version: DxfVersion,
    },
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, DxfError>;
