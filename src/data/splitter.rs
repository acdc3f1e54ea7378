// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Randomly shuffles the raw line list and splits it into two
// sets before any vocabulary is built:
//   - Training lines:   build the vocabularies AND the train set
//   - Validation lines: encoded against the training vocabulary
//
// Why shuffle before splitting?
//   Parallel corpora are often sorted (by length, by topic, by
//   source document). Without shuffling, the validation set
//   would cover only the tail of that ordering.
//
// Why split LINES and not encoded pairs?
//   The validation set must not influence vocabulary counts —
//   splitting first keeps validation text completely out of
//   finalize_vocabulary.
//
// An explicit seed gives a reproducible split; None uses the
// thread RNG.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `items` and split into (train, validation).
///
/// `train_fraction` is the proportion kept for training,
/// e.g. 0.8 = 80%. The split index is rounded and clamped, so
/// tiny inputs never panic.
pub fn split_train_val<T>(
    mut items: Vec<T>,
    train_fraction: f64,
    seed: Option<u64>,
) -> (Vec<T>, Vec<T>) {
    match seed {
        Some(s) => items.shuffle(&mut StdRng::seed_from_u64(s)),
        None => items.shuffle(&mut rand::thread_rng()),
    }

    let total = items.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;
    let split_at = split_at.min(total);

    // split_off(n) removes [n..] and returns it
    let val = items.split_off(split_at);

    tracing::debug!(
        "Split: {} training, {} validation lines",
        items.len(),
        val.len(),
    );

    (items, val)
}
