// ============================================================
// Layer 4 — Vocabulary Builder
// ============================================================
// Accumulates token frequencies and freezes them into a
// finite, bidirectional token ↔ id mapping.
//
// Every vocabulary starts with the same four reserved tokens
// at fixed low ids:
//
//   id 0  <unk>  unknown — the default for any lookup miss
//   id 1  <pad>  padding filler for batching
//   id 2  <sos>  start-of-sequence marker
//   id 3  <eos>  end-of-sequence marker
//
// Content tokens follow from id 4, but only those seen at
// least MIN_FREQ times during counting. Rare tokens are left
// out on purpose: a token seen once teaches the model nothing
// and bloats the embedding table, so it encodes as <unk>.
//
// Ordering of content tokens is descending frequency, with
// first-seen order breaking ties. This makes the id assignment
// fully deterministic for a given input corpus.
//
// Reference: Rust Book §8 (HashMaps and Vectors)
//            Sutskever et al. (2014) seq2seq paper

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Reserved Tokens ──────────────────────────────────────────────────────────
// Shared by every Vocabulary instance. The order here IS the id
// assignment — do not reorder.

pub const UNK: &str = "<unk>";
pub const PAD: &str = "<pad>";
pub const SOS: &str = "<sos>";
pub const EOS: &str = "<eos>";

/// Reserved tokens in id order: ids 0..4 are exactly these.
pub const RESERVED: [&str; 4] = [UNK, PAD, SOS, EOS];

pub const UNK_ID: u32 = 0;
pub const PAD_ID: u32 = 1;
pub const SOS_ID: u32 = 2;
pub const EOS_ID: u32 = 3;

/// Minimum number of occurrences for a token to earn its own id.
pub const MIN_FREQ: usize = 2;

// ─── TokenCounter ─────────────────────────────────────────────────────────────
/// Frequency counter that remembers the order tokens were first
/// seen, so id assignment stays deterministic across runs.
#[derive(Debug, Default, Clone)]
pub struct TokenCounter {
    /// token → occurrence count
    counts: HashMap<String, usize>,
    /// tokens in first-seen order (each appears once)
    order: Vec<String>,
}

impl TokenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(n) => *n += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
                self.order.push(token.to_string());
            }
        }
    }

    /// True if no token was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct tokens recorded so far.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Occurrence count for `token` (0 if never seen).
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }
}

// ─── Vocabulary ───────────────────────────────────────────────────────────────
/// A frozen token ↔ id mapping. Immutable after construction,
/// so it is safe to share read-only across threads.
///
/// Invariant: `stoi[itos[id]] == id` for every id in
/// [0, len()), and ids 0..4 are the reserved tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// id → token
    itos: Vec<String>,
    /// token → id
    stoi: HashMap<String, u32>,
}

impl Vocabulary {
    /// Build from accumulated counts: reserved tokens first, then
    /// every token with count ≥ `min_freq` by descending frequency
    /// (ties broken by first-seen order).
    pub fn from_counter(counter: &TokenCounter, min_freq: usize) -> Self {
        // (first_seen_rank, token, count) for tokens that qualify
        let mut ranked: Vec<(usize, &str, usize)> = counter
            .order
            .iter()
            .enumerate()
            .map(|(rank, tok)| (rank, tok.as_str(), counter.counts[tok]))
            .filter(|&(_, _, n)| n >= min_freq)
            .collect();

        // Descending count, then ascending first-seen rank.
        // sort_by is stable but the explicit tie-break keeps the
        // intent visible.
        ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));

        let mut itos: Vec<String> =
            RESERVED.iter().map(|t| t.to_string()).collect();
        itos.extend(ranked.iter().map(|&(_, tok, _)| tok.to_string()));

        Self::from_tokens(itos)
    }

    /// Rebuild from an id-ordered token list (vocabulary snapshots).
    /// The list must start with the reserved tokens — `from_counter`
    /// and the snapshot store both guarantee this.
    pub fn from_tokens(itos: Vec<String>) -> Self {
        let stoi = itos
            .iter()
            .enumerate()
            .map(|(id, tok)| (tok.clone(), id as u32))
            .collect();
        Self { itos, stoi }
    }

    /// Token → id, falling back to the <unk> id on a miss.
    pub fn token_to_id(&self, token: &str) -> u32 {
        self.stoi.get(token).copied().unwrap_or(UNK_ID)
    }

    /// Id → token. None for ids outside [0, len()).
    pub fn id_to_token(&self, id: u32) -> Option<&str> {
        self.itos.get(id as usize).map(String::as_str)
    }

    /// Total number of ids, reserved tokens included.
    pub fn len(&self) -> usize {
        self.itos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itos.is_empty()
    }

    /// True if `token` has its own id (reserved tokens included).
    pub fn contains(&self, token: &str) -> bool {
        self.stoi.contains_key(token)
    }

    /// The full id-ordered token list, for snapshotting.
    pub fn tokens(&self) -> &[String] {
        &self.itos
    }
}
