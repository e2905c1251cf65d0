// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any specific
// business layer:
//
//   tokenizer_store.rs — Tokenizer persistence
//                        Builds a word-level tokenizer from the
//                        triple corpus if none exists, or loads
//                        a previously saved one. Ensures the
//                        same vocabulary is used across runs.
//
// Why is this a separate layer?
//   The tokenizer artifact is used by multiple other layers but
//   belongs to none of them. Keeping it here makes it easy to
//   swap implementations (e.g. load a pretrained BERT
//   tokenizer.json instead of building one).
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Tokenizer building, saving, and loading
pub mod tokenizer_store;
