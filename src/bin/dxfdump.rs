//! Dump the entities and diagnostics of DXF entity-stream files.
//!
//! Usage: `dxfdump [--echo-comments] [--strict] FILE...`

use anyhow::bail;
use dxf_codec::batch::read_entity_files;
use dxf_codec::codec::CodecOptions;
use dxf_codec::notification::DiagnosticKind;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let mut options = CodecOptions::default();
    let mut paths: Vec<PathBuf> = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--echo-comments" => options.echo_comments = true,
            "--strict" => options.strict_versions = true,
            other if other.starts_with("--") => bail!("unknown option: {other}"),
            path => paths.push(PathBuf::from(path)),
        }
    }

    if paths.is_empty() {
        bail!("usage: dxfdump [--echo-comments] [--strict] FILE...");
    }

    let results = read_entity_files(&paths, &options);
    let mut failures = 0usize;

    for result in &results {
        println!("── {}", result.path.display());
        match &result.outcome {
            Ok(store) => {
                for (entity_type, list) in store.iter() {
                    println!("   {:<20} {:>5} record(s)", entity_type.as_str(), list.len());
                    for entity in list.iter() {
                        let handle = if entity.id_code >= 0 {
                            format!("{:X}", entity.id_code)
                        } else {
                            "-".to_string()
                        };
                        let layer = entity.text("layer").unwrap_or("-");
                        println!(
                            "     handle {:<8} layer {:<12} chunks {:<4} ids {}",
                            handle,
                            layer,
                            entity.binary_chunks.len(),
                            entity.object_ids.len()
                        );
                    }
                }
                if store.is_empty() {
                    println!("   (no records)");
                }
            }
            Err(error) => {
                failures += 1;
                println!("   FAILED: {error}");
            }
        }

        for comment in result.diagnostics.comments() {
            println!("   comment: {comment}");
        }
        let issues = result.diagnostics.len()
            - result.diagnostics.count_of(DiagnosticKind::Comment);
        if issues > 0 {
            println!("   {issues} diagnostic(s):");
            for diagnostic in result
                .diagnostics
                .iter()
                .filter(|d| d.kind != DiagnosticKind::Comment)
            {
                println!("     {diagnostic}");
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} file(s) failed", results.len());
    }

    Ok(())
}
