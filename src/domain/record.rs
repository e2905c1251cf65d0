// ============================================================
// Layer 3 — SquadRecord Domain Type
// ============================================================
// One flattened question/context/answer entry from a SQuAD file.
//
// The SQuAD schema nests three levels deep
// (article → paragraph → qa), but downstream processing only
// cares about individual question/context pairs, so the loader
// flattens the tree into a Vec of these records, one per qa
// entry, in document order.
//
// SQuAD v2.0 adds unanswerable questions: is_impossible = true
// marks a question whose answer is NOT in the context. Those
// records carry an empty answers list and are dropped before
// triple construction.
//
// Reference: Rajpurkar et al. (2018) - SQuAD 2.0 paper
//            Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// A single flattened SQuAD question-answer record.
/// Immutable after creation — nothing downstream mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadRecord {
    /// The qa entry's unique identifier from the source file
    pub id: String,

    /// The natural language question being asked
    pub question: String,

    /// The full paragraph context the question refers to.
    /// Shared by every qa in the same paragraph, so each record
    /// carries its own copy.
    pub context: String,

    /// All reference answer texts, in source order.
    /// Empty when is_impossible is true.
    pub answers: Vec<String>,

    /// True when the question cannot be answered from the context
    /// (SQuAD v2.0). Defaults to false for v1.1 files.
    pub is_impossible: bool,
}

impl SquadRecord {
    /// Create a new SquadRecord
    pub fn new(
        id:            impl Into<String>,
        question:      impl Into<String>,
        context:       impl Into<String>,
        answers:       Vec<String>,
        is_impossible: bool,
    ) -> Self {
        Self {
            id:       id.into(),
            question: question.into(),
            context:  context.into(),
            answers,
            is_impossible,
        }
    }

    /// Returns true if this record can contribute a training triple:
    /// the question must be answerable from its context
    pub fn is_answerable(&self) -> bool {
        !self.is_impossible
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answerable_when_not_impossible() {
        let r = SquadRecord::new("1", "Q?", "C.", vec!["A".into()], false);
        assert!(r.is_answerable());
    }

    #[test]
    fn test_not_answerable_when_impossible() {
        let r = SquadRecord::new("2", "Q?", "C.", Vec::new(), true);
        assert!(!r.is_answerable());
    }
}
