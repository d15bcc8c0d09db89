//! Batch driver: crops every `*.png` in the showcase folder, one line per file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::cropper::{crop_to_border, CropOutcome, CropSettings};
use crate::error::{CropError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub cropped: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// `public/showcase` next to the directory holding this tool.
pub fn showcase_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let parent = manifest_dir.parent().unwrap_or(&manifest_dir);
    parent.join("public").join("showcase")
}

/// Files directly in `dir` with a `.png` extension, sorted by path.
pub fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "png") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Crop every PNG in `dir`, writing one result line per file to `out`.
///
/// Only a missing directory aborts the run; per-file failures are reported
/// and the loop moves on.
pub fn run_batch<W: Write>(dir: &Path, settings: &CropSettings, out: &mut W) -> Result<BatchSummary> {
    if !dir.is_dir() {
        return Err(CropError::ShowcaseDirNotFound(dir.to_path_buf()));
    }

    let mut summary = BatchSummary::default();

    for path in list_pngs(dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match crop_to_border(&path, settings) {
            Ok(CropOutcome::Cropped { .. }) => {
                summary.cropped += 1;
                writeln!(out, "Cropped: {}", name)?;
            }
            Ok(CropOutcome::Unchanged) => {
                summary.unchanged += 1;
                writeln!(out, "Unchanged (no trim): {}", name)?;
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!(file = %name, error = %e, "crop failed");
                writeln!(out, "Error {}: {}", name, e)?;
            }
        }
    }

    tracing::debug!(?summary, dir = %dir.display(), "batch finished");
    Ok(summary)
}
