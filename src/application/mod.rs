// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// specific goal (preparing a corpus for training).
//
// Rules for this layer:
//   - No tokenization or encoding math here
//   - No UI or printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus-preparation workflow
pub mod prepare_use_case;
