//! Tag scanner: line-numbered extraction of `(group code, value)` tags
//! from an ASCII DXF stream.

use super::{Tag, COMMENT_CODE, RECORD_TERMINATOR};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::{BufReader, Read};

/// One scanned item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A regular data tag.
    Tag(Tag),
    /// An embedded `999` comment line, surfaced rather than dropped.
    Comment(String),
    /// A `0` group code: the current record is finished. The following
    /// value line (the next record's name) is NOT consumed; the outer
    /// dispatcher reads it via [`TagScanner::record_name`].
    EndOfEntity,
}

/// Scanner over an ASCII DXF tag stream.
///
/// Each tag is two physical lines: an integer group code (any surrounding
/// whitespace accepted) followed by its value line. The scanner owns the
/// line counter used by every diagnostic.
pub struct TagScanner<R: Read> {
    reader: BufReader<R>,
    source_name: String,
    line_number: usize,
    /// Non-UTF8 fallback encoding. `None` means Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read> TagScanner<R> {
    /// Create a scanner over `reader`, labelled `source_name` for
    /// diagnostics.
    pub fn new(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            reader: BufReader::new(reader),
            source_name: source_name.into(),
            line_number: 0,
            encoding: None,
        }
    }

    /// Display name of the underlying stream.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Set the fallback encoding for non-UTF8 input.
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    fn io_error(&self, source: std::io::Error) -> DxfError {
        DxfError::Io {
            source,
            source_name: self.source_name.clone(),
            line: self.line_number,
        }
    }

    /// Read a single line, handling non-UTF8 bytes gracefully.
    /// Uses the configured encoding for fallback, or Latin-1 if none set.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(self.io_error(e)),
            }
        }

        self.line_number += 1;

        let line = match String::from_utf8(bytes.clone()) {
            Ok(s) => s,
            Err(_) => {
                if let Some(enc) = self.encoding {
                    let (decoded, _, _) = enc.decode(&bytes);
                    decoded.into_owned()
                } else {
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to code points
                    bytes.iter().map(|&b| b as char).collect()
                }
            }
        };

        Ok(Some(line.trim().to_string()))
    }

    /// Expand the `^J`/`^M`/`^I` control sequences DXF uses in strings.
    fn process_string_value(&self, value: &str) -> String {
        value
            .replace("^J", "\n")
            .replace("^M", "\r")
            .replace("^I", "\t")
            .replace("^ ", "^")
    }

    /// Scan the next event. `Ok(None)` means clean end of stream at a tag
    /// boundary; a stream ending between a code line and its value line is
    /// an error.
    pub fn next_event(&mut self) -> Result<Option<ScanEvent>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let code = code_line.trim().parse::<i32>().map_err(|_| DxfError::Parse {
            source_name: self.source_name.clone(),
            line: self.line_number,
            message: format!("invalid group code '{}'", code_line),
        })?;

        if code == RECORD_TERMINATOR {
            return Ok(Some(ScanEvent::EndOfEntity));
        }

        let value_line = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::UnexpectedEof {
                    source_name: self.source_name.clone(),
                    line: self.line_number,
                })
            }
        };

        let value = self.process_string_value(&value_line);

        if code == COMMENT_CODE {
            return Ok(Some(ScanEvent::Comment(value)));
        }

        Ok(Some(ScanEvent::Tag(Tag { code, value })))
    }

    /// Consume the value line that follows a `0` group code: the name of
    /// the next record (`"TOLERANCE"`, `"ENDSEC"`, `"EOF"`, ...).
    pub fn record_name(&mut self) -> Result<String> {
        match self.read_line()? {
            Some(line) => Ok(line),
            None => Err(DxfError::UnexpectedEof {
                source_name: self.source_name.clone(),
                line: self.line_number,
            }),
        }
    }
}
