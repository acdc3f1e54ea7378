// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Saves and restores vocabulary snapshots as JSON.
//
// Why persist the vocabulary?
//   Encoding is only meaningful against the exact vocabulary
//   the model was trained with. Inference-time text must go
//   through the SAME token → id mapping, so the snapshot taken
//   after training preparation is the source of truth for the
//   `encode` command and any embedding application.
//
// Snapshot format: `<dir>/<name>.vocab.json`
//
//   { "name": "en", "tokens": ["<unk>", "<pad>", ...] }
//
// The token list is in id order, reserved tokens first, so the
// whole bidirectional mapping rebuilds from it.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::lang::LanguageCorpus;
use crate::data::vocab::Vocabulary;

/// On-disk form of one language's frozen vocabulary.
#[derive(Debug, Serialize, Deserialize)]
struct VocabSnapshot {
    name: String,
    /// id-ordered token list (index == id)
    tokens: Vec<String>,
}

/// Saves/loads vocabulary snapshots under one directory.
pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.vocab.json"))
    }

    /// Snapshot a finalized corpus. Fails if the vocabulary was
    /// never built — there is nothing meaningful to save before
    /// finalize.
    pub fn save(&self, corpus: &LanguageCorpus) -> Result<PathBuf> {
        let vocab = corpus
            .vocabulary()
            .with_context(|| format!("Cannot snapshot '{}'", corpus.name()))?;

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let snapshot = VocabSnapshot {
            name:   corpus.name().to_string(),
            tokens: vocab.tokens().to_vec(),
        };

        let path = self.path_for(corpus.name());
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!(
            "Saved vocabulary '{}' ({} ids) to '{}'",
            corpus.name(),
            vocab.len(),
            path.display(),
        );
        Ok(path)
    }

    /// Restore a Ready corpus from a snapshot by language name.
    pub fn load(&self, name: &str) -> Result<LanguageCorpus> {
        let path = self.path_for(name);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        let snapshot: VocabSnapshot = serde_json::from_str(&json)
            .with_context(|| format!("Invalid snapshot in '{}'", path.display()))?;

        tracing::info!(
            "Loaded vocabulary '{}' ({} ids) from '{}'",
            snapshot.name,
            snapshot.tokens.len(),
            path.display(),
        );

        let vocab = Vocabulary::from_tokens(snapshot.tokens);
        Ok(LanguageCorpus::from_vocabulary(snapshot.name, vocab))
    }
}
