// ============================================================
// Layer 4 — Translation Dataset
// ============================================================
// An indexable collection of encoded (source, target) id-pair
// sequences, built eagerly at construction. Encoding up front
// means bad data fails fast and `get` is a plain lookup —
// important because the data loader hits it from many workers.
//
// The two corpora are held behind Arc so a validation or test
// set can share the training vocabulary explicitly: encode the
// new lines against the SAME corpora and ids stay consistent
// across splits. Sharing is opt-in via LangSpec::Corpus, never
// accidental.
//
// Reference: Burn Book §4 (Datasets)

use std::sync::Arc;

use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::error::CorpusError;
use crate::data::lang::LanguageCorpus;
use crate::data::reader::{read_parallel, tokenize_pairs};
use crate::domain::pair::SentencePair;

/// How a dataset gets its language corpora:
/// - `Name`: build fresh vocabularies from the lines themselves
/// - `Corpus`: reuse already-finalized corpora (shared vocab)
///
/// Resolved exactly once at construction — nothing downstream
/// ever branches on this again.
#[derive(Debug, Clone)]
pub enum LangSpec {
    Name(String),
    Corpus(Arc<LanguageCorpus>),
}

impl LangSpec {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn corpus(corpus: Arc<LanguageCorpus>) -> Self {
        Self::Corpus(corpus)
    }
}

/// One encoded sentence pair: [<sos> ids... <eos>] on each side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationItem {
    pub source_ids: Vec<u32>,
    pub target_ids: Vec<u32>,
}

/// Immutable-after-construction dataset of encoded pairs plus
/// the two finalized corpora that produced them.
#[derive(Debug)]
pub struct TranslationDataset {
    source_lang: Arc<LanguageCorpus>,
    target_lang: Arc<LanguageCorpus>,
    items: Vec<TranslationItem>,
}

impl TranslationDataset {
    /// Build from tab-separated lines. Both language specs must be
    /// the same variant:
    ///   (Name, Name)     → read_parallel builds both vocabularies
    ///   (Corpus, Corpus) → lines are tokenized only; the provided
    ///                      vocabularies alone determine encodings
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        source: LangSpec,
        target: LangSpec,
    ) -> Result<Self, CorpusError> {
        match (source, target) {
            (LangSpec::Name(src), LangSpec::Name(tgt)) => {
                let (source_lang, target_lang, pairs) =
                    read_parallel(&src, &tgt, lines)?;
                Self::build(pairs, Arc::new(source_lang), Arc::new(target_lang))
            }
            (LangSpec::Corpus(source_lang), LangSpec::Corpus(target_lang)) => {
                let pairs = tokenize_pairs(lines)?;
                Self::build(pairs, source_lang, target_lang)
            }
            _ => Err(CorpusError::MixedLanguageSpec),
        }
    }

    /// Eagerly encode every pair against the given corpora. Both
    /// corpora must already be finalized or this fails with
    /// VocabularyNotReady.
    pub fn build(
        pairs: Vec<SentencePair>,
        source_lang: Arc<LanguageCorpus>,
        target_lang: Arc<LanguageCorpus>,
    ) -> Result<Self, CorpusError> {
        let mut items = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            items.push(TranslationItem {
                source_ids: source_lang.encode(&pair.source, None)?,
                target_ids: target_lang.encode(&pair.target, None)?,
            });
        }

        tracing::debug!(
            "Encoded {} pairs ({} → {})",
            items.len(),
            source_lang.name(),
            target_lang.name(),
        );

        Ok(Self { source_lang, target_lang, items })
    }

    /// Indexed access with a typed out-of-range error. The Burn
    /// Dataset impl below is the Option-returning equivalent the
    /// data loader uses.
    pub fn get_pair(&self, index: usize) -> Result<&TranslationItem, CorpusError> {
        self.items.get(index).ok_or(CorpusError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn source_lang(&self) -> &Arc<LanguageCorpus> {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &Arc<LanguageCorpus> {
        &self.target_lang
    }
}

// What the training framework's DataLoader drives: get + len.
impl Dataset<TranslationItem> for TranslationDataset {
    fn get(&self, index: usize) -> Option<TranslationItem> {
        self.items.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
