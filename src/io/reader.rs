//! Entity stream reader: dispatches `0 / NAME` markers to the codec.
//!
//! Reads a flat entity stream (the body of an ENTITIES or TABLES section)
//! into an [`EntityStore`]. Records of unknown type, and records rejected
//! for a missing required field, are skipped with a diagnostic; the read
//! continues at the next `0` marker.

use crate::codec::registry::schema_for_name;
use crate::codec::scanner::{ScanEvent, TagScanner};
use crate::codec::{decode_entity, CodecOptions};
use crate::error::{DxfError, Result};
use crate::notification::{DiagnosticKind, Diagnostics};
use crate::store::EntityStore;
use std::io::Read;

/// Names that end the stream instead of opening a record.
const END_MARKERS: [&str; 2] = ["EOF", "ENDSEC"];

/// Reader over one entity stream.
pub struct EntityStreamReader<R: Read> {
    scanner: TagScanner<R>,
    options: CodecOptions,
    diagnostics: Diagnostics,
}

impl<R: Read> EntityStreamReader<R> {
    /// Create a reader over `reader`, labelled `source_name` for
    /// diagnostics.
    pub fn new(reader: R, source_name: impl Into<String>, options: CodecOptions) -> Self {
        Self {
            scanner: TagScanner::new(reader, source_name),
            options,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Take ownership of the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    /// Read every record up to `EOF`/`ENDSEC` (or clean end of stream)
    /// into a store.
    pub fn read_store(&mut self) -> Result<EntityStore> {
        let mut store = EntityStore::new();

        // position at the first record marker, tolerating leading
        // comments and stray tags
        if !self.seek_record_marker(None)? {
            return Ok(store);
        }

        loop {
            let name = self.scanner.record_name()?;
            if END_MARKERS.contains(&name.as_str()) {
                break;
            }

            match schema_for_name(&name) {
                Some(schema) => {
                    match decode_entity(schema, &mut self.scanner, &self.options, &mut self.diagnostics) {
                        Ok(entity) => store.append(entity),
                        Err(DxfError::MissingRequired { entity, field }) => {
                            self.diagnostics.record(
                                DiagnosticKind::Warning,
                                Some(entity),
                                self.scanner.source_name(),
                                self.scanner.line_number(),
                                format!("record discarded: required field '{field}' is empty"),
                            );
                        }
                        Err(fatal) => return Err(fatal),
                    }
                    // the decoder consumed through the next `0` marker
                }
                None => {
                    self.diagnostics.record(
                        DiagnosticKind::UnrecognizedCode,
                        None,
                        self.scanner.source_name(),
                        self.scanner.line_number(),
                        format!("unknown record type '{name}'; skipped"),
                    );
                    if !self.seek_record_marker(Some(&name))? {
                        break;
                    }
                }
            }
        }

        Ok(store)
    }

    /// Consume events until the next `0` marker. Returns false on clean
    /// end of stream. `skipping` names the record being discarded, for
    /// diagnostics on its stray tags.
    fn seek_record_marker(&mut self, skipping: Option<&str>) -> Result<bool> {
        loop {
            match self.scanner.next_event()? {
                None => return Ok(false),
                Some(ScanEvent::EndOfEntity) => return Ok(true),
                Some(ScanEvent::Comment(text)) => {
                    self.diagnostics.record(
                        DiagnosticKind::Comment,
                        None,
                        self.scanner.source_name(),
                        self.scanner.line_number(),
                        text,
                    );
                }
                Some(ScanEvent::Tag(tag)) => {
                    if skipping.is_none() {
                        self.diagnostics.record(
                            DiagnosticKind::Warning,
                            None,
                            self.scanner.source_name(),
                            self.scanner.line_number(),
                            format!("group {} before first record marker; discarded", tag.code),
                        );
                    }
                }
            }
        }
    }
}
