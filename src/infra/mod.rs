// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any business
// layer:
//
//   vocab_store.rs — Vocabulary persistence
//                    Snapshots each finalized vocabulary to
//                    JSON after preparation and restores it
//                    for inference-time encoding, so training
//                    and inference always share one mapping.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Vocabulary snapshot saving and loading
pub mod vocab_store;
