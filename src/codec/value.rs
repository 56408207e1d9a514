//! Field kinds, slot values, and the per-kind parse/format rules.

use crate::types::Handle;

/// DXF-mandated ceiling for a string value line.
pub const MAX_STRING_LEN: usize = 255;

/// Ceiling for one binary-chunk line (group 310, hex nibble pairs).
pub const MAX_CHUNK_LEN: usize = 256;

/// The wire/storage kind of a field slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Verbatim string.
    Text,
    /// Hexadecimal object handle.
    Handle,
    /// Boolean encoded as 0/1.
    Bool,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// Double-precision float.
    Double,
    /// Repeatable group-310 binary chunk; one tag per owned chunk line.
    BinaryChunk,
    /// Repeatable handle chain (groups 330/340/350/360); one tag per
    /// owned object-id node, each remembering its actual group code.
    HandleChain,
}

impl FieldKind {
    /// True for the repeatable kinds that append to an owned chain
    /// instead of filling a scalar slot.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, FieldKind::BinaryChunk | FieldKind::HandleChain)
    }

    /// Parse a raw value line into a slot value. `None` means the value
    /// is malformed for this kind; the caller keeps the slot's default
    /// and records a diagnostic.
    pub fn parse(&self, raw: &str) -> Option<FieldValue> {
        match self {
            FieldKind::Text | FieldKind::BinaryChunk => Some(FieldValue::Text(raw.to_string())),
            FieldKind::Handle | FieldKind::HandleChain => {
                Handle::from_hex(raw).map(FieldValue::Handle)
            }
            FieldKind::Bool => raw.trim().parse::<i32>().ok().map(|v| FieldValue::Bool(v != 0)),
            FieldKind::I16 => raw.trim().parse::<i16>().ok().map(FieldValue::I16),
            FieldKind::I32 => raw.trim().parse::<i32>().ok().map(FieldValue::I32),
            FieldKind::I64 => raw.trim().parse::<i64>().ok().map(FieldValue::I64),
            FieldKind::Double => raw.trim().parse::<f64>().ok().map(FieldValue::Double),
        }
    }
}

/// A decoded slot value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// No scalar value; placeholder for repeatable-kind slots.
    Empty,
    /// String value.
    Text(String),
    /// Object handle.
    Handle(Handle),
    /// Boolean.
    Bool(bool),
    /// 16-bit integer.
    I16(i16),
    /// 32-bit integer.
    I32(i32),
    /// 64-bit integer.
    I64(i64),
    /// Double.
    Double(f64),
}

impl FieldValue {
    /// String view, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Handle view.
    pub fn as_handle(&self) -> Option<Handle> {
        match self {
            FieldValue::Handle(h) => Some(*h),
            _ => None,
        }
    }

    /// Integer view, widened to i64. Booleans widen to 0/1.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Bool(b) => Some(i64::from(*b)),
            FieldValue::I16(v) => Some(i64::from(*v)),
            FieldValue::I32(v) => Some(i64::from(*v)),
            FieldValue::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Double view.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            FieldValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean view.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Wire form of this value.
    pub fn format(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Handle(h) => h.to_hex(),
            FieldValue::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            FieldValue::I16(v) => v.to_string(),
            FieldValue::I32(v) => v.to_string(),
            FieldValue::I64(v) => v.to_string(),
            FieldValue::Double(v) => format_double(*v),
        }
    }
}

/// Format a double with sufficient precision, trimming unnecessary
/// trailing zeros but always including at least one decimal place.
pub fn format_double(value: f64) -> String {
    if value == value.trunc() {
        format!("{:.1}", value)
    } else {
        let formatted = format!("{:.15}", value);
        let trimmed = formatted.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{}0", trimmed)
        } else {
            trimmed.to_string()
        }
    }
}
