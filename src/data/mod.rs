// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from a raw tab-separated
// corpus file all the way to GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   source\ttarget lines
//       │
//       ▼
//   TsvLoader            → reads the file, drops blank lines
//       │
//       ▼
//   split_train_val      → shuffles and splits the raw lines
//       │
//       ▼
//   read_parallel        → tokenizes pairs, counts frequencies,
//       │                  finalizes both vocabularies
//       ▼
//   TranslationDataset   → eagerly encodes every pair,
//       │                  implements Burn's Dataset trait
//       ▼
//   TranslationBatcher   → pads each mini-batch into two
//       │                  [seq_len, batch_size] tensors
//       ▼
//   DataLoader           → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Typed errors for the whole pipeline
pub mod error;

/// Word-punct tokenization (lower-cased, punctuation-aware)
pub mod tokenizer;

/// Frequency counting and the frozen token ↔ id mapping
pub mod vocab;

/// Per-language corpus: counting, finalize, encode, decode
pub mod lang;

/// Tab-separated parallel corpus parsing
pub mod reader;

/// Reads line-delimited parallel text from disk
pub mod loader;

/// Implements Burn's Dataset trait for encoded pairs
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Shuffles and splits raw lines into train/validation sets
pub mod splitter;
