// ============================================================
// Layer 4 — Parallel Text Loader
// ============================================================
// Reads line-delimited UTF-8 parallel text from disk.
//
// The expected file format (one pair per line):
//
//   source sentence<TAB>target sentence
//
// This loader only splits the file into lines — field parsing
// and validation belong to the reader. The one liberty taken
// here is skipping lines that are empty after trimming (a
// trailing newline at end of file is near-universal and should
// not abort a run); any other malformation is the reader's
// fail-fast business.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::traits::LineSource;

/// Loads one tab-separated parallel corpus file.
/// Implements the LineSource trait from Layer 3.
pub struct TsvLoader {
    /// Path to the corpus file
    path: PathBuf,
}

impl TsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for TsvLoader {
    fn load_lines(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        let mut skipped = 0usize;
        let lines: Vec<String> = text
            .lines()
            .filter(|l| {
                let keep = !l.trim().is_empty();
                if !keep {
                    skipped += 1;
                }
                keep
            })
            .map(str::to_string)
            .collect();

        if skipped > 0 {
            tracing::debug!("Skipped {} blank line(s) in '{}'", skipped, self.path.display());
        }
        tracing::info!("Loaded {} lines from '{}'", lines.len(), self.path.display());

        Ok(lines)
    }
}
