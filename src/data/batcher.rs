// ============================================================
// Layer 4 — Triple Batcher
// ============================================================
// Implements Burn's Batcher trait to stack individual
// EncodedTriples into batch tensors.
//
// What is a Batcher?
//   A Batcher takes a list of individual samples and stacks
//   them into a single batch tensor. Contrastive DPR training
//   in particular wants whole batches: the other positives in
//   a batch double as extra negatives.
//
// How batching works here:
//   Input:  Vec of N EncodedTriples, each stream of length S
//   Output: RetrievalBatch with tensors of shape [N, S]
//
//   Every stream is already padded to the same max_length by
//   the TripleEncoder, so stacking along a new leading dim
//   needs no dynamic padding.
//
// Reference: Burn Book §4 (Batcher)
//            Karpukhin et al. (2020) - in-batch negatives

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::{EncodedText, EncodedTriple};

// ─── RetrievalBatch ───────────────────────────────────────────────────────────
/// A batch of encoded triples ready for the two-tower forward
/// pass. All tensors have batch_size as their first dimension.
#[derive(Debug, Clone)]
pub struct RetrievalBatch<B: Backend> {
    /// Question token ids — shape: [batch_size, max_length]
    pub question_ids: Tensor<B, 2, Int>,
    /// Question attention masks — shape: [batch_size, max_length]
    pub question_mask: Tensor<B, 2, Int>,

    /// Positive passage token ids — shape: [batch_size, max_length]
    pub positive_ids: Tensor<B, 2, Int>,
    /// Positive passage attention masks — shape: [batch_size, max_length]
    pub positive_mask: Tensor<B, 2, Int>,

    /// Negative passage token ids — shape: [batch_size, max_length]
    pub negative_ids: Tensor<B, 2, Int>,
    /// Negative passage attention masks — shape: [batch_size, max_length]
    pub negative_mask: Tensor<B, 2, Int>,
}

// ─── RetrievalBatcher ─────────────────────────────────────────────────────────
/// Stateless batcher — the dataset already placed every tensor
/// on the right device, so stacking is all that remains.
#[derive(Clone, Debug, Default)]
pub struct RetrievalBatcher;

impl RetrievalBatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Stack one field across all items into a [batch, max_length] tensor
fn stack_field<B: Backend>(
    items: &[EncodedTriple<B>],
    field: impl Fn(&EncodedTriple<B>) -> &EncodedText<B>,
    ids: bool,
) -> Tensor<B, 2, Int> {
    let rows: Vec<Tensor<B, 1, Int>> = items
        .iter()
        .map(|item| {
            let text = field(item);
            if ids {
                text.token_ids.clone()
            } else {
                text.attention_mask.clone()
            }
        })
        .collect();

    Tensor::stack(rows, 0)
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// The DataLoader calls .batch(items) with each mini-batch of
// samples pulled from the RetrievalDataset.
impl<B: Backend> Batcher<EncodedTriple<B>, RetrievalBatch<B>> for RetrievalBatcher {
    fn batch(&self, items: Vec<EncodedTriple<B>>) -> RetrievalBatch<B> {
        RetrievalBatch {
            question_ids:  stack_field(&items, |t| &t.question, true),
            question_mask: stack_field(&items, |t| &t.question, false),
            positive_ids:  stack_field(&items, |t| &t.positive, true),
            positive_mask: stack_field(&items, |t| &t.positive, false),
            negative_ids:  stack_field(&items, |t| &t.negative, true),
            negative_mask: stack_field(&items, |t| &t.negative, false),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::RetrievalDataset;
    use crate::data::encoder::TripleEncoder;
    use crate::domain::triple::RetrievalTriple;
    use crate::infra::tokenizer_store::build_word_level;

    type TestBackend = burn::backend::NdArray;

    fn test_items(n: usize, max_length: usize) -> Vec<EncodedTriple<TestBackend>> {
        let triples: Vec<RetrievalTriple> = (0..n)
            .map(|i| {
                RetrievalTriple::new(
                    format!("question number {i}"),
                    format!("passage number {i} is here"),
                    format!("ereh si {i} rebmun egassap"),
                )
            })
            .collect();

        let corpus: Vec<String> = triples
            .iter()
            .flat_map(|t| [t.question.clone(), t.positive_context.clone()])
            .collect();
        let tokenizer = build_word_level(&corpus, 64).unwrap();
        let encoder   = TripleEncoder::new(tokenizer, max_length);
        let dataset   = RetrievalDataset::new(triples, encoder, Default::default());

        (0..n).map(|i| dataset.get(i).unwrap()).collect()
    }

    #[test]
    fn test_batch_shape_is_n_by_max_length() {
        let items = test_items(3, 16);
        let batch = RetrievalBatcher::new().batch(items);

        assert_eq!(batch.question_ids.dims(),  [3, 16]);
        assert_eq!(batch.question_mask.dims(), [3, 16]);
        assert_eq!(batch.positive_ids.dims(),  [3, 16]);
        assert_eq!(batch.positive_mask.dims(), [3, 16]);
        assert_eq!(batch.negative_ids.dims(),  [3, 16]);
        assert_eq!(batch.negative_mask.dims(), [3, 16]);
    }

    #[test]
    fn test_single_item_batch() {
        let items = test_items(1, 8);
        let batch = RetrievalBatcher::new().batch(items);
        assert_eq!(batch.question_ids.dims(), [1, 8]);
    }
}
