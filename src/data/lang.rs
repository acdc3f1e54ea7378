// ============================================================
// Layer 4 — Language Corpus
// ============================================================
// Owns one language's text statistics and, once finalized,
// its vocabulary. This is where sentences become id sequences.
//
// Lifecycle — a corpus is always in exactly one of two states:
//
//   Building  counting token frequencies via add_sentence
//       │
//       │  finalize_vocabulary()   (exactly once)
//       ▼
//   Ready     encoding and decoding against a frozen vocabulary
//
// The state is checked on every vocabulary-dependent call and
// violations come back as typed errors, never panics:
//   - encode/decode while Building  → VocabularyNotReady
//   - add_sentence/finalize while Ready → AlreadyFinalized
//
// Once Ready, nothing mutates — the corpus can be shared
// read-only across data-loader workers without locking.
//
// One asymmetry to be aware of: add_sentence drops tokens that
// are pure punctuation before counting them, but encode_raw
// does NOT filter punctuation. This mirrors the original
// training pipeline: training-time sequences come from
// add_sentence's filtered output, while inference-time text
// goes through encode_raw, where unseen punctuation simply
// encodes as <unk>. The two paths are intentionally different.
//
// Reference: Rust Book §6 (Enums), §10 (Traits)
//            Sutskever et al. (2014) seq2seq paper

use crate::data::error::CorpusError;
use crate::data::tokenizer;
use crate::data::vocab::{
    TokenCounter, Vocabulary, EOS, EOS_ID, MIN_FREQ, PAD, PAD_ID, SOS,
    SOS_ID, UNK,
};
use crate::domain::traits::TokenDecoder;

// ─── Lifecycle State ──────────────────────────────────────────────────────────
/// The two-state corpus lifecycle. Building holds the mutable
/// counter; Ready holds the frozen vocabulary. There is no way
/// back from Ready to Building.
#[derive(Debug, Clone)]
enum VocabState {
    Building(TokenCounter),
    Ready(Vocabulary),
}

// ─── LanguageCorpus ───────────────────────────────────────────────────────────
/// One language's accumulated statistics plus (after finalize)
/// its vocabulary. `name` is a plain identifier like "en".
#[derive(Debug, Clone)]
pub struct LanguageCorpus {
    name: String,
    state: VocabState,
}

impl LanguageCorpus {
    /// Create a fresh corpus in the Building state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:  name.into(),
            state: VocabState::Building(TokenCounter::new()),
        }
    }

    /// Rebuild a Ready corpus from a previously frozen vocabulary
    /// (used by the snapshot store and for explicit vocabulary
    /// sharing across train/val/test datasets).
    pub fn from_vocabulary(name: impl Into<String>, vocab: Vocabulary) -> Self {
        Self {
            name:  name.into(),
            state: VocabState::Ready(vocab),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokenize `sentence`, drop pure-punctuation tokens, count the
    /// rest, and return the filtered token list (the caller keeps it
    /// for pairing). Only valid while Building.
    pub fn add_sentence(&mut self, sentence: &str) -> Result<Vec<String>, CorpusError> {
        let counter = match &mut self.state {
            VocabState::Building(c) => c,
            VocabState::Ready(_) => {
                return Err(CorpusError::AlreadyFinalized { lang: self.name.clone() })
            }
        };

        let tokens: Vec<String> = tokenizer::tokenize(sentence)
            .into_iter()
            .filter(|t| !tokenizer::is_punctuation(t))
            .collect();

        for tok in &tokens {
            counter.record(tok);
        }

        Ok(tokens)
    }

    /// Freeze the counter into a Vocabulary. Fails if nothing was
    /// ever counted, and fails on a second call — encode results
    /// must stay stable for the corpus lifetime, so re-deriving is
    /// refused rather than silently repeated.
    pub fn finalize_vocabulary(&mut self) -> Result<(), CorpusError> {
        let counter = match &self.state {
            VocabState::Building(c) => c,
            VocabState::Ready(_) => {
                return Err(CorpusError::AlreadyFinalized { lang: self.name.clone() })
            }
        };

        if counter.is_empty() {
            return Err(CorpusError::EmptyVocabulary { lang: self.name.clone() });
        }

        let vocab = Vocabulary::from_counter(counter, MIN_FREQ);
        tracing::debug!(
            "Finalized vocabulary for '{}': {} ids ({} distinct tokens counted)",
            self.name,
            vocab.len(),
            counter.distinct(),
        );
        self.state = VocabState::Ready(vocab);
        Ok(())
    }

    /// The frozen vocabulary, or VocabularyNotReady while Building.
    pub fn vocabulary(&self) -> Result<&Vocabulary, CorpusError> {
        match &self.state {
            VocabState::Ready(v) => Ok(v),
            VocabState::Building(_) => {
                Err(CorpusError::VocabularyNotReady { lang: self.name.clone() })
            }
        }
    }

    /// Total id count of the frozen vocabulary. This and `pad_id`
    /// are the two values the training loop reads directly.
    pub fn vocab_size(&self) -> Result<usize, CorpusError> {
        Ok(self.vocabulary()?.len())
    }

    /// The padding id. Fixed by the reserved-token layout, so it is
    /// available in either state.
    pub fn pad_id(&self) -> u32 {
        PAD_ID
    }

    /// Wrap `tokens` as [<sos>, ids..., <eos>], mapping unknown
    /// tokens to the <unk> id. If `pad_len` is given and the result
    /// is shorter, right-pad with <pad> up to that length. Longer
    /// sequences are never truncated — they come back at natural
    /// length.
    pub fn encode<S: AsRef<str>>(
        &self,
        tokens: &[S],
        pad_len: Option<usize>,
    ) -> Result<Vec<u32>, CorpusError> {
        let vocab = self.vocabulary()?;

        let mut ids = Vec::with_capacity(tokens.len() + 2);
        ids.push(SOS_ID);
        ids.extend(tokens.iter().map(|t| vocab.token_to_id(t.as_ref())));
        ids.push(EOS_ID);

        if let Some(target) = pad_len {
            while ids.len() < target {
                ids.push(PAD_ID);
            }
        }

        Ok(ids)
    }

    /// Tokenize `sentence` fresh and encode it. Unlike add_sentence
    /// this does NOT drop punctuation tokens (see the module note on
    /// the asymmetry) — punctuation unseen during counting encodes
    /// as <unk>.
    pub fn encode_raw(
        &self,
        sentence: &str,
        pad_len: Option<usize>,
    ) -> Result<Vec<u32>, CorpusError> {
        let tokens = tokenizer::tokenize(sentence);
        self.encode(&tokens, pad_len)
    }

    /// Map ids back to tokens, skipping <sos>/<pad>/<unk>, stopping
    /// before the first <eos>. Ids outside the vocabulary are
    /// skipped the same way <unk> is. Without an <eos> the whole
    /// input is consumed.
    pub fn decode(&self, ids: &[u32]) -> Result<Vec<String>, CorpusError> {
        let vocab = self.vocabulary()?;

        let mut out = Vec::new();
        for &id in ids {
            match vocab.id_to_token(id) {
                Some(EOS) => break,
                Some(SOS) | Some(PAD) | Some(UNK) | None => continue,
                Some(tok) => out.push(tok.to_string()),
            }
        }
        Ok(out)
    }
}

// The seam the external metric scorer (BLEU) consumes — decode and
// nothing else.
impl TokenDecoder for LanguageCorpus {
    fn decode_ids(&self, ids: &[u32]) -> anyhow::Result<Vec<String>> {
        Ok(self.decode(ids)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vocab::UNK_ID;

    /// Corpus with "a", "b", "c" each counted twice → all in vocab.
    fn ready_corpus() -> LanguageCorpus {
        let mut lang = LanguageCorpus::new("en");
        lang.add_sentence("a b c").unwrap();
        lang.add_sentence("a b c").unwrap();
        lang.finalize_vocabulary().unwrap();
        lang
    }

    #[test]
    fn test_add_sentence_filters_punctuation() {
        let mut lang = LanguageCorpus::new("en");
        let toks = lang.add_sentence("Hello, world!").unwrap();
        assert_eq!(toks, vec!["hello", "world"]);
    }

    #[test]
    fn test_encode_before_finalize_fails() {
        let lang = LanguageCorpus::new("en");
        let err = lang.encode(&["a"], None).unwrap_err();
        assert_eq!(err, CorpusError::VocabularyNotReady { lang: "en".into() });
    }

    #[test]
    fn test_finalize_empty_fails() {
        let mut lang = LanguageCorpus::new("fr");
        let err = lang.finalize_vocabulary().unwrap_err();
        assert_eq!(err, CorpusError::EmptyVocabulary { lang: "fr".into() });
    }

    #[test]
    fn test_finalize_twice_fails() {
        let mut lang = ready_corpus();
        let err = lang.finalize_vocabulary().unwrap_err();
        assert_eq!(err, CorpusError::AlreadyFinalized { lang: "en".into() });
    }

    #[test]
    fn test_add_sentence_after_finalize_fails() {
        let mut lang = ready_corpus();
        let err = lang.add_sentence("more text").unwrap_err();
        assert_eq!(err, CorpusError::AlreadyFinalized { lang: "en".into() });
    }

    #[test]
    fn test_encode_brackets_with_sos_eos() {
        let lang = ready_corpus();
        let vocab = lang.vocabulary().unwrap();

        let ids = lang.encode(&["a", "b"], None).unwrap();
        assert_eq!(
            ids,
            vec![SOS_ID, vocab.token_to_id("a"), vocab.token_to_id("b"), EOS_ID]
        );
    }

    #[test]
    fn test_encode_pads_to_length() {
        let lang = ready_corpus();
        // 3 content tokens + sos/eos = 5, padded with 5 more
        let ids = lang.encode(&["a", "b", "c"], Some(10)).unwrap();
        assert_eq!(ids.len(), 10);
        assert_eq!(&ids[5..], &[PAD_ID; 5]);
    }

    #[test]
    fn test_encode_never_truncates() {
        let lang = ready_corpus();
        // natural length 5 > pad_len 3 → returned unpadded
        let ids = lang.encode(&["a", "b", "c"], Some(3)).unwrap();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_unknown_tokens_map_to_unk() {
        let lang = ready_corpus();
        let ids = lang.encode(&["a", "never-seen"], None).unwrap();
        assert_eq!(ids[2], UNK_ID);
    }

    #[test]
    fn test_decode_round_trip() {
        let lang = ready_corpus();
        let ids = lang.encode(&["a", "b", "c"], Some(12)).unwrap();
        let toks = lang.decode(&ids).unwrap();
        assert_eq!(toks, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decode_stops_at_eos() {
        let lang = ready_corpus();
        let a = lang.vocabulary().unwrap().token_to_id("a");
        let b = lang.vocabulary().unwrap().token_to_id("b");

        // everything after <eos> must be ignored
        let toks = lang.decode(&[SOS_ID, a, EOS_ID, b, b]).unwrap();
        assert_eq!(toks, vec!["a"]);
    }

    #[test]
    fn test_decode_without_eos_consumes_everything() {
        let lang = ready_corpus();
        let a = lang.vocabulary().unwrap().token_to_id("a");
        let toks = lang.decode(&[SOS_ID, a, a]).unwrap();
        assert_eq!(toks, vec!["a", "a"]);
    }

    #[test]
    fn test_decode_skips_out_of_range_ids() {
        let lang = ready_corpus();
        let a = lang.vocabulary().unwrap().token_to_id("a");
        let toks = lang.decode(&[a, 9999, a]).unwrap();
        assert_eq!(toks, vec!["a", "a"]);
    }

    #[test]
    fn test_encode_raw_keeps_punctuation_path() {
        let lang = ready_corpus();
        // "," was never counted (add_sentence filtered it), so the
        // raw path encodes it as <unk> instead of dropping it
        let ids = lang.encode_raw("a, b", None).unwrap();
        let vocab = lang.vocabulary().unwrap();
        assert_eq!(
            ids,
            vec![
                SOS_ID,
                vocab.token_to_id("a"),
                UNK_ID,
                vocab.token_to_id("b"),
                EOS_ID
            ]
        );
    }

    #[test]
    fn test_encode_idempotent() {
        let lang = ready_corpus();
        let first  = lang.encode(&["a", "c"], Some(8)).unwrap();
        let second = lang.encode(&["a", "c"], Some(8)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_vocabulary_is_ready() {
        let lang = ready_corpus();
        let snapshot = lang.vocabulary().unwrap().clone();

        let restored = LanguageCorpus::from_vocabulary("en", snapshot);
        let ids_a = restored.encode(&["a"], None).unwrap();
        let ids_b = lang.encode(&["a"], None).unwrap();
        assert_eq!(ids_a, ids_b);
    }
}
