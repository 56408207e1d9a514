//! Entity decoder: drives the tag scanner, routes each group code through
//! the field registry, and materializes one entity record.

use super::registry::{Backfill, EntitySchema};
use super::scanner::{ScanEvent, TagScanner};
use super::value::{FieldKind, FieldValue, MAX_CHUNK_LEN, MAX_STRING_LEN};
use super::{CodecOptions, HANDLE_CODE, Tag};
use crate::entity::{Entity, ObjectIdRef};
use crate::error::{DxfError, Result};
use crate::notification::{DiagnosticKind, Diagnostics};
use ahash::AHashMap;
use std::io::Read;

/// Decode one entity record from the scanner.
///
/// The scanner must be positioned just past the record's `0 / NAME`
/// marker; on success it is positioned past the terminating `0` code,
/// at the next record's name line.
///
/// Per-tag problems (malformed values, unknown group codes) are recorded
/// as diagnostics and never abort the record. The whole record fails only
/// on stream errors, a truncated record, or an empty required field.
pub fn decode_entity<R: Read>(
    schema: &'static EntitySchema,
    scanner: &mut TagScanner<R>,
    options: &CodecOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Entity> {
    let mut entity = Entity::new(schema);
    // one occurrence counter per group code; a single shared counter
    // would alias the ordinal-overloaded codes
    let mut occurrences: AHashMap<i32, u32> = AHashMap::new();

    loop {
        match scanner.next_event()? {
            None => {
                return Err(DxfError::UnexpectedEof {
                    source_name: scanner.source_name().to_string(),
                    line: scanner.line_number(),
                })
            }
            Some(ScanEvent::EndOfEntity) => break,
            Some(ScanEvent::Comment(text)) => {
                if options.echo_comments {
                    tracing::info!(target: "dxf_codec", "comment: {text}");
                }
                diagnostics.record(
                    DiagnosticKind::Comment,
                    Some(schema.name),
                    scanner.source_name(),
                    scanner.line_number(),
                    text,
                );
            }
            Some(ScanEvent::Tag(tag)) => {
                let counter = occurrences.entry(tag.code).or_insert(0);
                *counter += 1;
                let occurrence = *counter;
                dispatch_tag(schema, &mut entity, tag, occurrence, options, scanner, diagnostics);
            }
        }
    }

    // hard preconditions reject the whole record, never default it
    for &required in schema.required {
        let empty = entity.text(required).map_or(true, str::is_empty);
        if empty {
            return Err(DxfError::MissingRequired {
                entity: schema.name,
                field: required,
            });
        }
    }

    backfill_empty_strings(schema, &mut entity, options);

    Ok(entity)
}

fn dispatch_tag<R: Read>(
    schema: &'static EntitySchema,
    entity: &mut Entity,
    tag: Tag,
    occurrence: u32,
    options: &CodecOptions,
    scanner: &TagScanner<R>,
    diagnostics: &mut Diagnostics,
) {
    if tag.code == HANDLE_CODE {
        match i64::from_str_radix(tag.value.trim(), 16) {
            Ok(value) => entity.id_code = value,
            Err(_) => diagnostics.record(
                DiagnosticKind::MalformedValue,
                Some(schema.name),
                scanner.source_name(),
                scanner.line_number(),
                format!("bad handle '{}' for group 5", tag.value),
            ),
        }
        return;
    }

    let Some((index, spec)) = schema.lookup(tag.code, occurrence) else {
        diagnostics.record(
            DiagnosticKind::UnrecognizedCode,
            Some(schema.name),
            scanner.source_name(),
            scanner.line_number(),
            format!("group {} has no meaning here; value discarded", tag.code),
        );
        return;
    };

    match spec.kind {
        FieldKind::BinaryChunk => {
            let mut chunk = tag.value;
            if chunk.len() > MAX_CHUNK_LEN {
                diagnostics.record(
                    DiagnosticKind::Warning,
                    Some(schema.name),
                    scanner.source_name(),
                    scanner.line_number(),
                    format!("group {} chunk exceeds {} chars; truncated", tag.code, MAX_CHUNK_LEN),
                );
                chunk.truncate(MAX_CHUNK_LEN);
            }
            entity.binary_chunks.push(chunk);
        }
        FieldKind::HandleChain => match crate::types::Handle::from_hex(&tag.value) {
            Some(handle) => entity.object_ids.push(ObjectIdRef {
                code: tag.code,
                handle,
            }),
            None => diagnostics.record(
                DiagnosticKind::MalformedValue,
                Some(schema.name),
                scanner.source_name(),
                scanner.line_number(),
                format!("bad handle '{}' for group {}", tag.value, tag.code),
            ),
        },
        _ => {
            // many files carry tags newer than their declared version;
            // accept the value but leave a trace
            if !spec.valid_at(options.declared_version) {
                diagnostics.record(
                    DiagnosticKind::VersionMismatch,
                    Some(schema.name),
                    scanner.source_name(),
                    scanner.line_number(),
                    format!(
                        "group {} ({}) not valid at declared version {}",
                        tag.code,
                        spec.name,
                        options.declared_version.version_string()
                    ),
                );
            }

            let mut raw = tag.value;
            if spec.kind == FieldKind::Text && raw.len() > MAX_STRING_LEN {
                diagnostics.record(
                    DiagnosticKind::Warning,
                    Some(schema.name),
                    scanner.source_name(),
                    scanner.line_number(),
                    format!("group {} string exceeds {} chars; truncated", tag.code, MAX_STRING_LEN),
                );
                raw.truncate(MAX_STRING_LEN);
            }

            match spec.kind.parse(&raw) {
                Some(value) => *entity.slot_mut(index) = value,
                None => diagnostics.record(
                    DiagnosticKind::MalformedValue,
                    Some(schema.name),
                    scanner.source_name(),
                    scanner.line_number(),
                    format!("bad value '{}' for group {} ({}); default kept", raw, tag.code, spec.name),
                ),
            }
        }
    }
}

/// Empty-string fields with a backfill rule are normalized after decode;
/// re-decoding an already-normalized stream is a no-op.
fn backfill_empty_strings(schema: &EntitySchema, entity: &mut Entity, options: &CodecOptions) {
    for (index, spec) in schema.fields.iter().enumerate() {
        if spec.backfill == Backfill::None {
            continue;
        }
        let is_empty = matches!(entity.slot(index), FieldValue::Text(s) if s.is_empty());
        if !is_empty {
            continue;
        }
        let replacement = match spec.backfill {
            Backfill::DefaultLayer => options.default_layer.clone(),
            Backfill::DefaultLinetype => options.default_linetype.clone(),
            Backfill::SchemaDefault | Backfill::None => match spec.default.materialize() {
                FieldValue::Text(s) => s,
                _ => continue,
            },
        };
        *entity.slot_mut(index) = FieldValue::Text(replacement);
    }
}
