//! Batch decoding across files.
//!
//! A single stream is strictly sequential (line numbers and per-code
//! ordinals are file-local state), but independent files have nothing in
//! common, so a batch fans out one file per rayon task.

use crate::codec::CodecOptions;
use crate::error::{DxfError, Result};
use crate::io::EntityStreamReader;
use crate::notification::Diagnostics;
use crate::store::EntityStore;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Outcome of decoding one file in a batch.
pub struct BatchResult {
    /// The file that was decoded.
    pub path: PathBuf,
    /// The decoded store, or the fatal error that stopped this file.
    pub outcome: Result<EntityStore>,
    /// Diagnostics collected for this file (empty on open failures).
    pub diagnostics: Diagnostics,
}

/// Decode many entity-stream files in parallel, one task per file.
pub fn read_entity_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    options: &CodecOptions,
) -> Vec<BatchResult> {
    paths
        .par_iter()
        .map(|path| read_one(path.as_ref(), options))
        .collect()
}

fn read_one(path: &Path, options: &CodecOptions) -> BatchResult {
    let display = path.display().to_string();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return BatchResult {
                path: path.to_path_buf(),
                outcome: Err(DxfError::Io {
                    source: e,
                    source_name: display,
                    line: 0,
                }),
                diagnostics: Diagnostics::new(),
            }
        }
    };

    let mut reader = EntityStreamReader::new(BufReader::new(file), display, options.clone());
    let outcome = reader.read_store();
    BatchResult {
        path: path.to_path_buf(),
        outcome,
        diagnostics: reader.take_diagnostics(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dxf_codec_batch_{name}"));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_batch_mixed_outcomes() {
        let good = write_temp("good.dxf", "0\nUCS\n2\nTop\n0\nEOF\n");
        let missing = std::env::temp_dir().join("dxf_codec_batch_missing.dxf");

        let options = CodecOptions::default();
        let results = read_entity_files(&[good.clone(), missing], &options);
        assert_eq!(results.len(), 2);

        let by_path = |suffix: &str| {
            results
                .iter()
                .find(|r| r.path.to_string_lossy().ends_with(suffix))
                .unwrap()
        };

        let ok = by_path("good.dxf");
        assert_eq!(ok.outcome.as_ref().unwrap().len(), 1);

        let failed = by_path("missing.dxf");
        assert!(matches!(failed.outcome, Err(DxfError::Io { .. })));

        std::fs::remove_file(good).ok();
    }
}
