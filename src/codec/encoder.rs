//! Entity encoder: walks a schema's emission order and serializes one
//! entity back to a tag sequence for a target DXF version.

use super::registry::EntitySchema;
use super::value::FieldKind;
use super::{CodecOptions, HANDLE_CODE, OMIT_HANDLE, RECORD_TERMINATOR, Tag};
use crate::entity::Entity;
use crate::error::{DxfError, Result};
use crate::notification::{DiagnosticKind, Diagnostics};

/// Encode one entity as a tag sequence for `target`.
///
/// The sequence starts with the `0 / NAME` marker (version-dependent for
/// entities with a legacy wire name) and contains every field valid at
/// `target` whose write guard passes, in schema emission order. Fields
/// outside the target's version range are skipped silently; that loss is
/// the documented re-serialization behavior, not an error.
///
/// When `target` predates the entity type entirely, strict mode returns
/// an error and non-strict mode records a diagnostic and emits anyway.
pub fn encode_entity(
    entity: &Entity,
    target: crate::types::DxfVersion,
    options: &CodecOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Tag>> {
    let schema: &EntitySchema = entity.schema();

    if target < schema.min_version {
        if options.strict_versions {
            return Err(DxfError::UnsupportedVersion {
                entity: schema.name,
                version: target,
            });
        }
        diagnostics.record(
            DiagnosticKind::Warning,
            Some(schema.name),
            "<encode>",
            0,
            format!(
                "target version {} predates this entity (minimum {}); writing anyway",
                target.version_string(),
                schema.min_version.version_string()
            ),
        );
    }

    let mut tags = Vec::new();
    tags.push(Tag::new(RECORD_TERMINATOR, schema.wire_name(target)));

    if entity.id_code != OMIT_HANDLE {
        if entity.id_code < 0 {
            diagnostics.record(
                DiagnosticKind::Warning,
                Some(schema.name),
                "<encode>",
                0,
                format!("negative id_code {}; handle omitted", entity.id_code),
            );
        } else {
            tags.push(Tag::new(HANDLE_CODE, format!("{:X}", entity.id_code)));
        }
    }

    for (index, spec) in schema.fields.iter().enumerate() {
        if !spec.valid_at(target) {
            continue;
        }
        match spec.kind {
            FieldKind::BinaryChunk => {
                for chunk in &entity.binary_chunks {
                    tags.push(Tag::new(spec.code, chunk.clone()));
                }
            }
            FieldKind::HandleChain => {
                for reference in &entity.object_ids {
                    tags.push(Tag::new(reference.code, reference.handle.to_hex()));
                }
            }
            _ => {
                let value = entity.slot(index);
                if let Some(guard) = spec.write_guard {
                    if !guard(value) {
                        continue;
                    }
                }
                tags.push(Tag::new(spec.code, value.format()));
            }
        }
    }

    Ok(tags)
}
