// ============================================================
// Layer 4 — Triple Builder
// ============================================================
// Turns flat SquadRecords into DPR training triples.
//
// The transformation per record:
//   - is_impossible = true  → dropped, no triple, no error
//   - is_impossible = false → one RetrievalTriple:
//       question          = record.question
//       positive_context  = record.context, verbatim
//       negative_context  = record.context, characters reversed
//
// About the reversed negative:
//   This is a PLACEHOLDER negative-sampling strategy, kept
//   exactly as-is. A real DPR pipeline would mine hard negatives
//   (BM25 top passages without the answer) or use in-batch
//   negatives. The reversal merely guarantees a string that is
//   lexically related but does not read as the answer passage.
//
// An answerable record with an empty answers list is malformed:
//   the first answer anchors the positive passage, so we surface
//   DataError::EmptyAnswers rather than silently skipping.
//
// Reference: Karpukhin et al. (2020) - Dense Passage Retrieval
//            Rust Book §13 (Iterators)

use crate::domain::record::SquadRecord;
use crate::domain::triple::RetrievalTriple;
use crate::error::{DataError, DataResult};

pub struct TripleBuilder;

impl TripleBuilder {
    /// Create a new TripleBuilder instance
    pub fn new() -> Self {
        Self
    }

    /// Build one triple per answerable record, preserving order.
    /// Records with is_impossible = true are dropped silently.
    pub fn build(&self, records: &[SquadRecord]) -> DataResult<Vec<RetrievalTriple>> {
        let mut triples = Vec::with_capacity(records.len());

        for record in records {
            // Unanswerable questions contribute nothing to DPR training
            if !record.is_answerable() {
                continue;
            }

            // The first answer is the one the triple is anchored on;
            // any further reference answers are discarded
            let _answer = record.answers.first().ok_or_else(|| {
                DataError::EmptyAnswers { qa_id: record.id.clone() }
            })?;

            // Positive passage: the full paragraph, unchanged.
            // No answer-span localisation happens here.
            let positive_context = record.context.clone();

            // Negative passage: the same paragraph with its character
            // sequence reversed — the documented placeholder strategy.
            // chars().rev() reverses on char boundaries, so multi-byte
            // UTF-8 text stays valid.
            let negative_context: String = record.context.chars().rev().collect();

            triples.push(RetrievalTriple {
                question: record.question.clone(),
                positive_context,
                negative_context,
            });
        }

        tracing::info!(
            "Built {} triples from {} records ({} unanswerable dropped)",
            triples.len(),
            records.len(),
            records.len() - triples.len(),
        );
        Ok(triples)
    }
}

impl Default for TripleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn answerable(id: &str, question: &str, context: &str) -> SquadRecord {
        SquadRecord::new(id, question, context, vec!["A".into()], false)
    }

    #[test]
    fn test_one_triple_per_answerable_record_in_order() {
        let records = vec![
            answerable("1", "Q1?", "ctx one"),
            SquadRecord::new("2", "Q2?", "ctx two", Vec::new(), true),
            answerable("3", "Q3?", "ctx three"),
        ];

        let triples = TripleBuilder::new().build(&records).unwrap();

        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].question, "Q1?");
        assert_eq!(triples[1].question, "Q3?");
    }

    #[test]
    fn test_positive_is_context_verbatim() {
        let records = vec![answerable("1", "Q?", "Paris is the capital.")];
        let triples = TripleBuilder::new().build(&records).unwrap();
        assert_eq!(triples[0].positive_context, "Paris is the capital.");
    }

    #[test]
    fn test_negative_is_reversed_context() {
        let records = vec![answerable("1", "Q?", "Paris is the capital.")];
        let triples = TripleBuilder::new().build(&records).unwrap();
        assert_eq!(triples[0].negative_context, ".latipac eht si siraP");
    }

    #[test]
    fn test_negative_reverses_back_to_positive() {
        // Round-trip property of the placeholder strategy
        let records = vec![answerable("1", "Q?", "abc déf")];
        let triples = TripleBuilder::new().build(&records).unwrap();
        let back: String = triples[0].negative_context.chars().rev().collect();
        assert_eq!(back, triples[0].positive_context);
    }

    #[test]
    fn test_impossible_records_raise_no_error() {
        // Unanswerable with empty answers is the normal v2.0 shape —
        // dropped before any answers access
        let records = vec![SquadRecord::new("1", "Q?", "C.", Vec::new(), true)];
        let triples = TripleBuilder::new().build(&records).unwrap();
        assert!(triples.is_empty());
    }

    #[test]
    fn test_answerable_with_empty_answers_is_an_error() {
        let records = vec![SquadRecord::new("qa-3", "Q?", "C.", Vec::new(), false)];
        let err = TripleBuilder::new().build(&records).unwrap_err();
        match err {
            DataError::EmptyAnswers { qa_id } => assert_eq!(qa_id, "qa-3"),
            other => panic!("expected EmptyAnswers, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_answers_are_discarded() {
        let records = vec![SquadRecord::new(
            "1", "Q?", "C.",
            vec!["first".into(), "second".into()],
            false,
        )];
        // Only the first answer is consulted; no trace of the others
        let triples = TripleBuilder::new().build(&records).unwrap();
        assert_eq!(triples.len(), 1);
    }
}
