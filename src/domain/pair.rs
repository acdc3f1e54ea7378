// ============================================================
// Layer 3 — SentencePair Domain Type
// ============================================================
// One aligned bilingual example in tokenized form: the source
// sentence's filtered tokens and the target sentence's filtered
// tokens, exactly as add_sentence returned them.
//
// Pairs are produced while reading the parallel corpus and
// consumed twice: once (implicitly, during the same read) to
// populate both frequency counters, and once to produce the
// encoded dataset. Their order is the input line order, which
// is also the dataset's iteration order.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// An aligned, tokenized (source, target) sentence pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentencePair {
    /// Source-language tokens (lower-cased, punctuation-filtered)
    pub source: Vec<String>,

    /// Target-language tokens (lower-cased, punctuation-filtered)
    pub target: Vec<String>,
}

impl SentencePair {
    pub fn new(source: Vec<String>, target: Vec<String>) -> Self {
        Self { source, target }
    }
}
