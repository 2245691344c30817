//! Batch extraction over a directory tree.
//!
//! Walks a root for `.py` files, applies glob-style exclude patterns, and
//! extracts every eligible file on a rayon pool. A file that fails to read
//! or parse is reported on stderr and skipped; the batch itself never
//! fails.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::model::StructuralModel;

/// Collect eligible Python files under `root`, sorted by file name so batch
/// output is deterministic.
pub fn collect_python_files(root: &Path, exclude: &[String]) -> Vec<PathBuf> {
    let patterns: Vec<Pattern> = exclude
        .iter()
        .filter_map(|raw| match Pattern::new(raw) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!("skipping invalid exclude pattern '{}': {}", raw, err);
                None
            }
        })
        .collect();

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("py"))
        .filter(|path| !is_excluded(path, &patterns))
        .collect()
}

fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    let text = path.to_string_lossy();
    patterns.iter().any(|pattern| pattern.matches(&text))
}

/// Extract every eligible file under `root` in parallel. Per-file failures
/// go to stderr and that file is skipped.
pub fn process_directory(root: &Path, exclude: &[String]) -> Vec<StructuralModel> {
    let files = collect_python_files(root, exclude);
    debug!("extracting {} python files under {}", files.len(), root.display());

    files
        .par_iter()
        .filter_map(|path| match process_file(path) {
            Ok(model) => Some(model),
            Err(err) => {
                eprintln!("Error processing {}: {}", path.display(), err);
                None
            }
        })
        .collect()
}

/// Extract one file and stamp the model with its path.
pub fn process_file(path: &Path) -> anyhow::Result<StructuralModel> {
    let source = fs::read_to_string(path)?;
    let mut model = crate::extract_structure(&source)?;
    model.file_path = Some(path.display().to_string());
    Ok(model)
}
