//! Decode/encode diagnostic system.
//!
//! Non-fatal issues encountered while decoding or encoding a record are
//! collected as `Diagnostic` items rather than being silently dropped or
//! causing hard errors. DXF consumers must tolerate vendor extensions and
//! malformed third-party exports, so a bad value leaves its slot at the
//! default and the decode continues.
//!
//! After an operation the caller can inspect the [`Diagnostics`] collection
//! to see what was encountered; each item carries the entity type, stream
//! name, and line number needed to render a useful message.

use std::fmt;

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A value failed to parse for its declared kind; the slot kept its
    /// default.
    MalformedValue,
    /// A group code with no meaning for this entity type; the value was
    /// discarded.
    UnrecognizedCode,
    /// A tag valid only in a DXF version range the current stream is
    /// outside of; the value was still accepted.
    VersionMismatch,
    /// An embedded `999` comment line, surfaced for optional echoing.
    Comment,
    /// Any other recoverable oddity (oversized value, odd sentinel, ...).
    Warning,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedValue => write!(f, "MalformedValue"),
            Self::UnrecognizedCode => write!(f, "UnrecognizedCode"),
            Self::VersionMismatch => write!(f, "VersionMismatch"),
            Self::Comment => write!(f, "Comment"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single diagnostic produced during decoding or encoding.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The category.
    pub kind: DiagnosticKind,
    /// Entity type being processed, if known.
    pub entity: Option<&'static str>,
    /// Display name of the stream (file path or label).
    pub source_name: String,
    /// Line number the issue was observed at (0 when not line-addressed,
    /// e.g. during encoding).
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity {
            Some(entity) => write!(
                f,
                "[{}] {} ({}:{}): {}",
                self.kind, entity, self.source_name, self.line, self.message
            ),
            None => write!(
                f,
                "[{}] {}:{}: {}",
                self.kind, self.source_name, self.line, self.message
            ),
        }
    }
}

/// Collects diagnostics during a decode/encode operation.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a diagnostic. Comments are logged at debug level, everything
    /// else at warn.
    pub fn record(
        &mut self,
        kind: DiagnosticKind,
        entity: Option<&'static str>,
        source_name: &str,
        line: usize,
        message: impl Into<String>,
    ) {
        let diagnostic = Diagnostic {
            kind,
            entity,
            source_name: source_name.to_string(),
            line,
            message: message.into(),
        };
        match kind {
            DiagnosticKind::Comment => tracing::debug!(target: "dxf_codec", "{diagnostic}"),
            _ => tracing::warn!(target: "dxf_codec", "{diagnostic}"),
        }
        self.items.push(diagnostic);
    }

    /// Check if there are any diagnostics.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of diagnostics collected.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of diagnostics of the given kind.
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    /// Iterate over collected diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Surfaced comment texts, in stream order.
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Comment)
            .map(|d| d.message.as_str())
    }

    /// Drop all collected diagnostics.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
