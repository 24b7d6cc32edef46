//! Convert command: TSPLIB files to normalized JSON records.

use crate::error::{CliError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tsplib_norm::{convert_batch, ConversionFailure, ConvertOptions, ProblemRecord};

/// Convert `files`, writing `<input stem>.json` for each success into
/// `output_dir`.
///
/// Every file is attempted; the command fails afterwards if any did. Two
/// inputs mapping to the same output name are not both written: the later
/// one is reported as a failure.
pub(crate) fn run(
    files: &[PathBuf],
    output_dir: &Path,
    jobs: Option<usize>,
    pretty: bool,
) -> Result<()> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(CliError::NotAFile(output_dir.to_path_buf()));
    }
    fs::create_dir_all(output_dir)?;

    let options = match jobs {
        Some(n) => ConvertOptions::new().with_jobs(n),
        None => ConvertOptions::new(),
    };
    let report = convert_batch(files, &options)?;

    let mut failures = report.failures;
    let mut claimed: HashMap<String, &Path> = HashMap::new();
    let mut written = 0usize;

    for (path, record) in &report.converted {
        match write_record(path, record, output_dir, pretty, &mut claimed) {
            Ok(out) => {
                written += 1;
                tracing::info!(input = %path.display(), output = %out.display(), "wrote record");
                println!("  {} -> {}", path.display(), out.display());
            }
            Err(reason) => {
                tracing::warn!(path = %path.display(), error = %reason, "write failed");
                failures.push(ConversionFailure {
                    path: path.clone(),
                    reason,
                });
            }
        }
    }
    for failure in &failures {
        eprintln!("  FAILED {}: {}", failure.path.display(), failure.reason);
    }

    println!("Converted {written}/{} files", files.len());

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::ConversionFailed(format!(
            "{} of {} files failed",
            failures.len(),
            files.len()
        )))
    }
}

/// Output file name for `input`: its stem, which is always a single path
/// component.
fn output_name(input: &Path) -> Option<String> {
    input
        .file_stem()
        .map(|stem| format!("{}.json", stem.to_string_lossy()))
}

fn write_record<'a>(
    path: &'a Path,
    record: &ProblemRecord,
    output_dir: &Path,
    pretty: bool,
    claimed: &mut HashMap<String, &'a Path>,
) -> std::result::Result<PathBuf, String> {
    let name = output_name(path).ok_or_else(|| "input has no file name".to_string())?;
    if let Some(first) = claimed.get(&name) {
        return Err(format!(
            "output {name} already written for {}",
            first.display()
        ));
    }
    let out = output_dir.join(&name);
    let json = record.to_json(pretty).map_err(|e| e.to_string())?;
    fs::write(&out, json).map_err(|e| format!("cannot write {}: {e}", out.display()))?;
    claimed.insert(name, path);
    Ok(out)
}
