// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from a raw SQuAD JSON file
// all the way to GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   SQuAD JSON file
//       │
//       ▼
//   SquadLoader        → parses the file, flattens the
//                        article/paragraph/qa tree into records
//       │
//       ▼
//   TripleBuilder      → drops unanswerable questions, derives
//                        (question, positive, negative) triples
//       │
//       ▼
//   TripleEncoder      → tokenises each text, truncates and
//                        pads to max_length
//       │
//       ▼
//   RetrievalDataset   → implements Burn's Dataset trait;
//                        tensorises one triple per get(index)
//       │
//       ▼
//   RetrievalBatcher   → stacks items into [batch, max_length]
//                        tensors
//       │
//       ▼
//   DataLoader         → feeds batches to a DPR training loop
//                        (external — not part of this crate)
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Karpukhin et al. (2020) - Dense Passage Retrieval

/// Parses SQuAD-format JSON files into flat records
pub mod loader;

/// Derives retrieval training triples from records
pub mod triples;

/// Tokenises triple texts with fixed truncation/padding
pub mod encoder;

/// Implements Burn's Dataset trait for encoded triples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
