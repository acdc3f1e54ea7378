// ============================================================
// Layer 4 — Translation Batcher
// ============================================================
// Implements Burn's Batcher trait to stack variable-length
// encoded pairs into rectangular, GPU-ready tensors.
//
// How batching works here:
//   Input:  Vec of N TranslationItems with ragged lengths
//   Output: two tensors of shape [seq_len, batch_size]
//
// The layout is TIME-MAJOR (sequence length first), matching
// the batch_first=false convention of seq2seq RNN training:
// row t holds token t of every sequence in the batch.
//
// Padding is batch-relative: each side is padded to ITS OWN
// longest sequence in THIS batch, with its own <pad> id.
// Nothing is pre-padded to a global length, so tensor shapes
// vary batch to batch — consumers must not assume a fixed
// seq_len.
//
// The rectangle-building itself lives in `collate`, a pure
// function with no tensor types, so the shape and padding
// logic is testable without a backend.
//
// Reference: Burn Book §4 (Batcher)

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::dataset::TranslationItem;

// ─── PaddedBatch ──────────────────────────────────────────────────────────────
/// One side of a collated batch: a time-major rectangle stored
/// flat. `data.len() == seq_len * batch_size`, and the value at
/// time step t for sequence b sits at `data[t * batch_size + b]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBatch {
    pub data: Vec<i32>,
    pub seq_len: usize,
    pub batch_size: usize,
}

impl PaddedBatch {
    /// The id at time step `t` of sequence `b`.
    pub fn at(&self, t: usize, b: usize) -> i32 {
        self.data[t * self.batch_size + b]
    }
}

/// Pad `seqs` to the longest length among them and lay the ids
/// out time-major. An empty slice collates to a 0×0 rectangle.
pub fn collate(seqs: &[Vec<u32>], pad_id: u32) -> PaddedBatch {
    let batch_size = seqs.len();
    let seq_len = seqs.iter().map(Vec::len).max().unwrap_or(0);

    let mut data = Vec::with_capacity(seq_len * batch_size);
    for t in 0..seq_len {
        for seq in seqs {
            // shorter sequences contribute <pad> past their end
            data.push(seq.get(t).copied().unwrap_or(pad_id) as i32);
        }
    }

    PaddedBatch { data, seq_len, batch_size }
}

// ─── TranslationBatch ─────────────────────────────────────────────────────────
/// A batch ready for the model forward pass. Both tensors are
/// [seq_len, batch_size]; the two seq_lens are independent.
///
/// B is the Burn Backend (e.g. Wgpu, NdArray) — generic so the
/// same batcher works on any device.
#[derive(Debug, Clone)]
pub struct TranslationBatch<B: Backend> {
    /// Source-side ids — shape: [source_seq_len, batch_size]
    pub source: Tensor<B, 2, Int>,

    /// Target-side ids — shape: [target_seq_len, batch_size]
    pub target: Tensor<B, 2, Int>,
}

// ─── TranslationBatcher ───────────────────────────────────────────────────────
/// Holds the per-side pad ids and the target device so tensors
/// are created on the correct GPU/CPU.
#[derive(Clone, Debug)]
pub struct TranslationBatcher<B: Backend> {
    /// <pad> id of the source vocabulary
    pub source_pad_id: u32,

    /// <pad> id of the target vocabulary
    pub target_pad_id: u32,

    /// The device to create tensors on
    pub device: B::Device,
}

impl<B: Backend> TranslationBatcher<B> {
    pub fn new(source_pad_id: u32, target_pad_id: u32, device: B::Device) -> Self {
        Self { source_pad_id, target_pad_id, device }
    }
}

// This is what makes TranslationBatcher work with Burn's
// DataLoader: it calls .batch(items) with each mini-batch.
impl<B: Backend> Batcher<TranslationItem, TranslationBatch<B>>
    for TranslationBatcher<B>
{
    fn batch(&self, items: Vec<TranslationItem>) -> TranslationBatch<B> {
        let sources: Vec<Vec<u32>> =
            items.iter().map(|i| i.source_ids.clone()).collect();
        let targets: Vec<Vec<u32>> =
            items.iter().map(|i| i.target_ids.clone()).collect();

        let src = collate(&sources, self.source_pad_id);
        let tgt = collate(&targets, self.target_pad_id);

        // 1D tensor from the flat rectangle, then reshape to
        // [seq_len, batch_size] — the flat layout is already
        // time-major so no transpose is needed
        let source = Tensor::<B, 1, Int>::from_ints(
            src.data.as_slice(), &self.device
        ).reshape([src.seq_len, src.batch_size]);

        let target = Tensor::<B, 1, Int>::from_ints(
            tgt.data.as_slice(), &self.device
        ).reshape([tgt.seq_len, tgt.batch_size]);

        TranslationBatch { source, target }
    }
}
