//! Tag stream writer: serializes tag sequences in DXF wire form.

use crate::codec::{encode_entity, CodecOptions, Tag};
use crate::error::{DxfError, Result};
use crate::notification::Diagnostics;
use crate::store::EntityStore;
use crate::types::DxfVersion;
use std::io::Write;

/// Writer emitting tags as code/value line pairs.
pub struct TagWriter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> TagWriter<W> {
    /// Create a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    fn io_error(&self, source: std::io::Error) -> DxfError {
        DxfError::Io {
            source,
            source_name: "<output>".to_string(),
            line: self.lines_written,
        }
    }

    /// Write the group code right-aligned in a 3-character field, the
    /// convention AutoCAD itself follows.
    fn write_code(&mut self, code: i32) -> Result<()> {
        let result = if code < 10 {
            writeln!(self.writer, "  {}", code)
        } else if code < 100 {
            writeln!(self.writer, " {}", code)
        } else {
            writeln!(self.writer, "{}", code)
        };
        result.map_err(|e| self.io_error(e))?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write one tag (two physical lines).
    pub fn write_tag(&mut self, tag: &Tag) -> Result<()> {
        self.write_code(tag.code)?;
        writeln!(self.writer, "{}", tag.value).map_err(|e| self.io_error(e))?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of physical lines emitted so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.io_error(e))
    }

    /// Get the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Encode every stored entity at `target` and write the stream, followed
/// by the `0 / EOF` marker.
pub fn write_store<W: Write>(
    store: &EntityStore,
    target: DxfVersion,
    options: &CodecOptions,
    diagnostics: &mut Diagnostics,
    writer: W,
) -> Result<()> {
    let mut tag_writer = TagWriter::new(writer);

    for entity in store.entities() {
        for tag in encode_entity(entity, target, options, diagnostics)? {
            tag_writer.write_tag(&tag)?;
        }
    }

    tag_writer.write_tag(&Tag::new(0, "EOF"))?;
    tag_writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::codec::value::FieldValue;
    use crate::schemas;

    #[test]
    fn test_code_right_alignment() {
        let mut w = TagWriter::new(Vec::new());
        w.write_tag(&Tag::new(5, "2A")).unwrap();
        w.write_tag(&Tag::new(62, "7")).unwrap();
        w.write_tag(&Tag::new(330, "1F")).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(text, "  5\n2A\n 62\n7\n330\n1F\n");
    }

    #[test]
    fn test_lines_written() {
        let mut w = TagWriter::new(Vec::new());
        w.write_tag(&Tag::new(0, "UCS")).unwrap();
        w.write_tag(&Tag::new(2, "Top")).unwrap();
        assert_eq!(w.lines_written(), 4);
    }

    #[test]
    fn test_write_store_ends_with_eof() {
        let mut store = EntityStore::new();
        let mut entity = Entity::new(&schemas::UCS);
        entity.set("name", FieldValue::Text("Top".into()));
        store.append(entity);

        let mut buffer = Vec::new();
        let mut diagnostics = Diagnostics::new();
        write_store(
            &store,
            DxfVersion::AC1032,
            &CodecOptions::default(),
            &mut diagnostics,
            &mut buffer,
        )
        .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("  0\nUCS\n"));
        assert!(text.ends_with("  0\nEOF\n"));
    }
}
