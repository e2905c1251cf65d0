// ============================================================
// Layer 3 — RetrievalTriple Domain Type
// ============================================================
// One dense-passage-retrieval training example.
//
// DPR trains two encoders (question encoder, passage encoder)
// with a contrastive objective: pull the question embedding
// towards its positive passage and push it away from negatives.
// Each training example is therefore a triple:
//
//   question          — the query text
//   positive_context  — a passage that answers the question
//   negative_context  — a passage that does NOT answer it
//
// In this pipeline the positive is the full SQuAD paragraph
// (no answer-span localisation), and the negative is the same
// paragraph with its characters reversed. The reversal is an
// explicit placeholder for a real negative sampler (e.g. BM25
// hard negatives or in-batch negatives) and is preserved as-is.
//
// Reference: Karpukhin et al. (2020) - Dense Passage Retrieval
//            Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// A (question, positive passage, negative passage) training triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalTriple {
    /// The natural language question
    pub question: String,

    /// A passage that contains the answer — here the full
    /// paragraph context, verbatim
    pub positive_context: String,

    /// A passage that does not answer the question — here the
    /// character-reversed context (placeholder strategy)
    pub negative_context: String,
}

impl RetrievalTriple {
    /// Create a new RetrievalTriple
    pub fn new(
        question:         impl Into<String>,
        positive_context: impl Into<String>,
        negative_context: impl Into<String>,
    ) -> Self {
        Self {
            question:         question.into(),
            positive_context: positive_context.into(),
            negative_context: negative_context.into(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_kept_verbatim() {
        let t = RetrievalTriple::new("Q?", "pos", "sop");
        assert_eq!(t.question, "Q?");
        assert_eq!(t.positive_context, "pos");
        assert_eq!(t.negative_context, "sop");
    }
}
