//! Field registry: static, per-entity-type declarative tables of field
//! slots, replacing hand-written per-entity dispatch chains.
//!
//! A schema's `fields` array is authoritative twice over: the decoder uses
//! it to route incoming group codes (with per-code occurrence ordinals for
//! overloaded codes), and the encoder walks it in array order to emit tags,
//! so emission order is exactly declaration order.

use super::value::{FieldKind, FieldValue};
use crate::types::{DxfVersion, Handle};
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Concrete entity types this crate ships schemas for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// ACAD_PROXY_ENTITY (ACAD_ZOMBIE_ENTITY before R14)
    AcadProxyEntity,
    /// LIGHT
    Light,
    /// TOLERANCE
    Tolerance,
    /// UCS table record
    Ucs,
    /// VPORT table record
    VPort,
}

impl EntityType {
    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::AcadProxyEntity => "ACAD_PROXY_ENTITY",
            EntityType::Light => "LIGHT",
            EntityType::Tolerance => "TOLERANCE",
            EntityType::Ucs => "UCS",
            EntityType::VPort => "VPORT",
        }
    }
}

/// Compile-time default for a field slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    /// No scalar value (repeatable kinds).
    Empty,
    /// String default.
    Text(&'static str),
    /// Handle default.
    Handle(u64),
    /// Boolean default.
    Bool(bool),
    /// i16 default.
    I16(i16),
    /// i32 default.
    I32(i32),
    /// i64 default.
    I64(i64),
    /// Double default.
    Double(f64),
}

impl FieldDefault {
    /// Materialize the runtime value.
    pub fn materialize(&self) -> FieldValue {
        match self {
            FieldDefault::Empty => FieldValue::Empty,
            FieldDefault::Text(s) => FieldValue::Text((*s).to_string()),
            FieldDefault::Handle(h) => FieldValue::Handle(Handle::new(*h)),
            FieldDefault::Bool(b) => FieldValue::Bool(*b),
            FieldDefault::I16(v) => FieldValue::I16(*v),
            FieldDefault::I32(v) => FieldValue::I32(*v),
            FieldDefault::I64(v) => FieldValue::I64(*v),
            FieldDefault::Double(v) => FieldValue::Double(*v),
        }
    }
}

/// Where an empty-after-decode text slot gets its replacement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backfill {
    /// Leave empty strings alone.
    None,
    /// Reset to the schema default.
    SchemaDefault,
    /// Reset to [`crate::codec::CodecOptions::default_layer`].
    DefaultLayer,
    /// Reset to [`crate::codec::CodecOptions::default_linetype`].
    DefaultLinetype,
}

/// One declared field slot of an entity schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name, unique within its schema.
    pub name: &'static str,
    /// Primary group code.
    pub code: i32,
    /// Extra group codes claimed by this slot (handle chains span
    /// 330/340/350/360).
    pub aliases: &'static [i32],
    /// Wire/storage kind.
    pub kind: FieldKind,
    /// Value used when the tag is omitted from input.
    pub default: FieldDefault,
    /// First DXF version this tag is valid in (inclusive).
    pub min_version: DxfVersion,
    /// Last DXF version this tag is valid in (inclusive).
    pub max_version: DxfVersion,
    /// When set, this slot claims only the nth appearance (1-based) of
    /// its primary code within the record. Codes overloaded by ordinal
    /// position (the proxy entity's 330) declare one pinned spec per
    /// meaning, ahead of any catch-all.
    pub occurrence: Option<u32>,
    /// Emission gate evaluated on the current slot value; `false` skips
    /// the tag even inside the version range.
    pub write_guard: Option<fn(&FieldValue) -> bool>,
    /// Empty-string replacement rule applied after decoding.
    pub backfill: Backfill,
}

impl FieldSpec {
    /// A spec valid in every version, no occurrence pin, no guard.
    pub const fn new(name: &'static str, code: i32, kind: FieldKind, default: FieldDefault) -> Self {
        Self {
            name,
            code,
            aliases: &[],
            kind,
            default,
            min_version: DxfVersion::AC1006,
            max_version: DxfVersion::AC1032,
            occurrence: None,
            write_guard: None,
            backfill: Backfill::None,
        }
    }

    /// Restrict to an inclusive version range.
    pub const fn versions(mut self, min: DxfVersion, max: DxfVersion) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Restrict to `min` and newer.
    pub const fn since(mut self, min: DxfVersion) -> Self {
        self.min_version = min;
        self
    }

    /// Pin to the nth appearance (1-based) of the primary code.
    pub const fn nth(mut self, occurrence: u32) -> Self {
        self.occurrence = Some(occurrence);
        self
    }

    /// Claim additional group codes.
    pub const fn with_aliases(mut self, aliases: &'static [i32]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Gate emission on the slot value.
    pub const fn guarded(mut self, guard: fn(&FieldValue) -> bool) -> Self {
        self.write_guard = Some(guard);
        self
    }

    /// Set the empty-string replacement rule.
    pub const fn backfilled(mut self, backfill: Backfill) -> Self {
        self.backfill = backfill;
        self
    }

    /// True when `code` at the given 1-based `occurrence` belongs to this
    /// slot.
    pub fn claims(&self, code: i32, occurrence: u32) -> bool {
        if self.code == code {
            return match self.occurrence {
                Some(n) => n == occurrence,
                None => true,
            };
        }
        // alias codes carry no ordinal constraint
        self.aliases.contains(&code)
    }

    /// True when the tag is valid at `version`.
    pub fn valid_at(&self, version: DxfVersion) -> bool {
        version >= self.min_version && version <= self.max_version
    }
}

/// Static schema of one entity type.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// The entity type.
    pub entity_type: EntityType,
    /// Canonical wire name.
    pub name: &'static str,
    /// Alternate wire name used for targets at or below the paired
    /// version (`ACAD_ZOMBIE_ENTITY` through R13).
    pub legacy_name: Option<(&'static str, DxfVersion)>,
    /// Oldest DXF version this entity has any representation in.
    pub min_version: DxfVersion,
    /// Field slots in emission order.
    pub fields: &'static [FieldSpec],
    /// Names of fields that must be non-empty for the record to be valid;
    /// a violation rejects the whole record.
    pub required: &'static [&'static str],
}

impl EntitySchema {
    /// Wire name for the given target version.
    pub fn wire_name(&self, target: DxfVersion) -> &'static str {
        if let Some((legacy, up_to)) = self.legacy_name {
            if target <= up_to {
                return legacy;
            }
        }
        self.name
    }

    /// True when `name` is this schema's canonical or legacy wire name.
    pub fn matches_name(&self, name: &str) -> bool {
        if self.name == name {
            return true;
        }
        matches!(self.legacy_name, Some((legacy, _)) if legacy == name)
    }

    /// Resolve a group code at the given 1-based per-code occurrence.
    /// First matching spec in declaration order wins, which is what lets
    /// occurrence-pinned scalar slots shadow a later catch-all chain.
    pub fn lookup(&self, code: i32, occurrence: u32) -> Option<(usize, &FieldSpec)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.claims(code, occurrence))
    }

    /// Index of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }
}

static NAME_REGISTRY: Lazy<AHashMap<&'static str, &'static EntitySchema>> = Lazy::new(|| {
    let mut map = AHashMap::new();
    for schema in crate::schemas::ALL {
        map.insert(schema.name, *schema);
        if let Some((legacy, _)) = schema.legacy_name {
            map.insert(legacy, *schema);
        }
    }
    map
});

/// Resolve a wire name (canonical or legacy) to its schema.
pub fn schema_for_name(name: &str) -> Option<&'static EntitySchema> {
    NAME_REGISTRY.get(name).copied()
}
