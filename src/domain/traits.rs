// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// implementations can be swapped without touching the code
// that uses them:
//   - TsvLoader implements LineSource
//   - A future stdin or archive reader could too, and the
//     application layer would not change
//
// TokenDecoder is the seam external evaluation code consumes:
// a BLEU scorer needs decode and nothing else, so that is all
// the trait exposes.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── LineSource ───────────────────────────────────────────────────────────────
/// Any component that can produce the raw lines of a parallel
/// corpus, one "source\ttarget" pair per line.
pub trait LineSource {
    /// Load all lines from this source, in order.
    fn load_lines(&self) -> Result<Vec<String>>;
}

// ─── TokenDecoder ─────────────────────────────────────────────────────────────
/// Maps id sequences back to tokens. This is the only surface
/// the external metric scorer (BLEU) touches.
pub trait TokenDecoder {
    /// Decode `ids` into tokens, with markers and padding removed.
    fn decode_ids(&self, ids: &[u32]) -> Result<Vec<String>>;
}
