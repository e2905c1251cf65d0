// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// the seams where implementations can be swapped.
//
// By programming against traits instead of concrete types,
// the application layer never needs to know which file format
// the records came from:
//   - SquadLoader implements RecordSource (SQuAD JSON)
//   - A future NaturalQuestionsLoader could implement it too
//   - The use cases only see RecordSource
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::record::SquadRecord;
use crate::error::DataResult;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce flattened Q&A records.
///
/// Implementations:
///   - SquadLoader → parses a SQuAD-format JSON file
///   - (future) loaders for other reading-comprehension formats
pub trait RecordSource {
    /// Load all records from this source, in document order.
    /// Returns the full flat list or the first error encountered.
    fn load_records(&self) -> DataResult<Vec<SquadRecord>>;
}
