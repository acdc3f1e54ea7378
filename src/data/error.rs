// ============================================================
// Layer 4 — Data Pipeline Errors
// ============================================================
// Every way corpus construction and encoding can fail,
// as one typed enum so callers can match on the exact cause.
//
// All of these are fatal to the operation that raised them:
//   - Malformed input aborts the whole read (fail-fast,
//     never a best-effort partial corpus)
//   - Lifecycle violations (encode before finalize, finalize
//     twice) are programming errors surfaced as values,
//     not panics
//
// Each variant carries enough context to diagnose the problem
// without a debugger: the 1-based line number, the language
// name, or the offending index.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

/// Errors raised by the data-preparation pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    /// An input line did not split into exactly two tab-separated
    /// fields. `line` is 1-based to match editor line numbers.
    #[error("line {line}: expected exactly one tab-separated sentence pair, found {fields} field(s)")]
    MalformedLine { line: usize, fields: usize },

    /// `finalize_vocabulary` was called before any token was counted.
    #[error("language '{lang}': no tokens were added, cannot build a vocabulary")]
    EmptyVocabulary { lang: String },

    /// encode/decode was called before `finalize_vocabulary`.
    #[error("language '{lang}': vocabulary not built yet, call finalize_vocabulary first")]
    VocabularyNotReady { lang: String },

    /// `add_sentence` or `finalize_vocabulary` was called after the
    /// vocabulary was already frozen. Encodings must stay stable for
    /// the corpus lifetime, so a second finalize is refused rather
    /// than re-derived.
    #[error("language '{lang}': vocabulary already finalized")]
    AlreadyFinalized { lang: String },

    /// Dataset lookup outside [0, len).
    #[error("dataset index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Dataset construction received one language by name and the
    /// other as a built corpus. Both must use the same form.
    #[error("source and target must both be language names or both be built corpora")]
    MixedLanguageSpec,
}
