// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (inspecting a dataset or probing the
// encoding pipeline).
//
// Rules for this layer:
//   - No tokenization or tensor code here
//   - No UI or printing here (that's Layer 1)
//   - No direct file parsing (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Dataset statistics workflow
pub mod inspect_use_case;

// End-to-end encoding probe workflow
pub mod probe_use_case;
