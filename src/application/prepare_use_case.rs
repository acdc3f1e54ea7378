// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full data-preparation pipeline in order:
//
//   Step 1: Load corpus lines            (Layer 4 - data)
//   Step 2: Shuffle + split train/val    (Layer 4 - data)
//   Step 3: Build the training dataset   (Layer 4 - data)
//           (vocabularies built here)
//   Step 4: Build the validation dataset (Layer 4 - data)
//           (SHARING the training vocabularies)
//   Step 5: Snapshot both vocabularies   (Layer 6 - infra)
//
// Step 4 is the one that is easy to get wrong: the validation
// set must be encoded against the training vocabulary, never
// its own, or ids would mean different tokens across splits.
// The Arc-based LangSpec::Corpus makes that sharing explicit.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §4 (Datasets)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::{LangSpec, TranslationDataset},
    loader::TsvLoader,
    splitter::split_train_val,
};
use crate::domain::traits::LineSource;
use crate::infra::vocab_store::VocabStore;

// ─── Preparation Configuration ────────────────────────────────────────────────
// Everything a preparation run needs. Serialisable so a run can
// be recorded alongside its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub input_file:     String,
    pub artifacts_dir:  String,
    pub source_lang:    String,
    pub target_lang:    String,
    pub train_fraction: f64,
    pub seed:           Option<u64>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input_file:     "data/pairs.tsv".to_string(),
            artifacts_dir:  "artifacts".to_string(),
            source_lang:    "en".to_string(),
            target_lang:    "fr".to_string(),
            train_fraction: 0.8,
            seed:           None,
        }
    }
}

/// Summary of one preparation run, for the CLI to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareReport {
    pub train_pairs:       usize,
    pub val_pairs:         usize,
    pub source_vocab_size: usize,
    pub target_vocab_size: usize,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the pipeline end to end.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the full preparation pipeline end to end.
    /// Returns the datasets (ready for a training loop to wrap in
    /// data loaders) plus a printable summary.
    pub fn execute(&self) -> Result<(TranslationDataset, TranslationDataset, PrepareReport)> {
        let cfg = &self.config;

        // ── Step 1: Load the parallel corpus ──────────────────────────────────
        tracing::info!("Loading parallel text from '{}'", cfg.input_file);
        let lines = TsvLoader::new(&cfg.input_file).load_lines()?;

        // ── Step 2: Shuffle and split the raw lines ───────────────────────────
        // Lines are split BEFORE any counting so validation text
        // never influences the vocabulary
        let (train_lines, val_lines) =
            split_train_val(lines, cfg.train_fraction, cfg.seed);
        tracing::info!(
            "Split: {} train lines, {} validation lines",
            train_lines.len(),
            val_lines.len(),
        );

        // ── Step 3: Build the training dataset ────────────────────────────────
        // Passing language NAMES makes read_parallel build both
        // vocabularies from the training lines
        let train = TranslationDataset::from_lines(
            &train_lines,
            LangSpec::name(&cfg.source_lang),
            LangSpec::name(&cfg.target_lang),
        )
        .context("Building the training dataset failed")?;

        // ── Step 4: Build the validation dataset ──────────────────────────────
        // Passing the training CORPORA shares their vocabularies,
        // so both splits encode through one mapping
        let val = TranslationDataset::from_lines(
            &val_lines,
            LangSpec::corpus(train.source_lang().clone()),
            LangSpec::corpus(train.target_lang().clone()),
        )
        .context("Building the validation dataset failed")?;

        // ── Step 5: Snapshot both vocabularies ────────────────────────────────
        // Inference-time encoding loads these to stay consistent
        // with whatever model gets trained on this data
        let store = VocabStore::new(&cfg.artifacts_dir);
        store.save(train.source_lang())?;
        store.save(train.target_lang())?;

        let report = PrepareReport {
            train_pairs:       dataset_len(&train),
            val_pairs:         dataset_len(&val),
            source_vocab_size: train.source_lang().vocab_size()?,
            target_vocab_size: train.target_lang().vocab_size()?,
        };

        tracing::info!(
            "Prepared {} train / {} val pairs; vocab sizes {} / {}",
            report.train_pairs,
            report.val_pairs,
            report.source_vocab_size,
            report.target_vocab_size,
        );

        Ok((train, val, report))
    }
}

// Dataset::len collides with the slice method namespace, so the
// qualified call lives in one place.
fn dataset_len(ds: &TranslationDataset) -> usize {
    burn::data::dataset::Dataset::len(ds)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    fn write_corpus(tag: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "seq2seq-prep-usecase-{}-{}.tsv",
            tag,
            std::process::id()
        ));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_end_to_end_preparation() {
        let input = write_corpus(
            "e2e",
            "hi there\tsalut toi\nhi there\tsalut toi\nhi there\tsalut toi\nhow are you\tcomment vas tu\n",
        );
        let artifacts = std::env::temp_dir()
            .join(format!("seq2seq-prep-artifacts-{}", std::process::id()));

        let config = PrepareConfig {
            input_file:     input.clone(),
            artifacts_dir:  artifacts.to_string_lossy().into_owned(),
            source_lang:    "en".to_string(),
            target_lang:    "fr".to_string(),
            train_fraction: 0.75,
            seed:           Some(42),
        };

        let (train, val, report) = PrepareUseCase::new(config).execute().unwrap();

        assert_eq!(report.train_pairs, 3);
        assert_eq!(report.val_pairs, 1);
        assert_eq!(report.train_pairs, dataset_len(&train));
        assert_eq!(report.val_pairs, dataset_len(&val));

        // validation shares the training corpora, not copies
        assert!(std::sync::Arc::ptr_eq(train.source_lang(), val.source_lang()));

        // snapshots written for both languages
        assert!(artifacts.join("en.vocab.json").exists());
        assert!(artifacts.join("fr.vocab.json").exists());

        fs::remove_file(input).ok();
        fs::remove_dir_all(artifacts).ok();
    }

    #[test]
    fn test_malformed_corpus_aborts() {
        let input = write_corpus("bad", "good\tline\nno tab here\n");
        let config = PrepareConfig {
            input_file:     input.clone(),
            artifacts_dir:  std::env::temp_dir()
                .join("seq2seq-prep-unused")
                .to_string_lossy()
                .into_owned(),
            train_fraction: 1.0,
            seed:           Some(1),
            ..PrepareConfig::default()
        };

        assert!(PrepareUseCase::new(config).execute().is_err());
        fs::remove_file(input).ok();
    }
}
