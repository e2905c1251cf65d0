// ============================================================
// Layer 4 — Retrieval Dataset
// ============================================================
// Presents the triple list as an indexable collection and turns
// each triple into tensors on access.
//
// What happens on get(index):
//   1. Bounds check — out-of-range is a typed error
//   2. Tokenise question / positive / negative independently
//      (three calls to the same TripleEncoder)
//   3. Convert each u32 stream into a 1-D Int tensor on the
//      configured device
//
// There is NO caching: every access re-tokenises and rebuilds
// the tensors. get(index) is a pure function of the index and
// the immutable triple list, so burn's multi-worker DataLoader
// can call it from several threads without synchronisation
// (the tokenizer encodes through &self).
//
// B is the Burn Backend (e.g. NdArray, Wgpu) — generic so the
// same dataset works on any device.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Karpukhin et al. (2020) - Dense Passage Retrieval

use burn::{
    data::dataset::Dataset,
    prelude::*,
};

use crate::data::encoder::{TextEncoding, TripleEncoder};
use crate::domain::triple::RetrievalTriple;
use crate::error::{DataError, DataResult};

// ─── EncodedText ──────────────────────────────────────────────────────────────
/// One text's encoding as device tensors, each of shape [max_length]
#[derive(Debug, Clone)]
pub struct EncodedText<B: Backend> {
    /// Token ids — shape: [max_length]
    pub token_ids: Tensor<B, 1, Int>,

    /// Attention mask — shape: [max_length], 1 = real, 0 = padding
    pub attention_mask: Tensor<B, 1, Int>,

    /// Segment ids — shape: [max_length], all zeros here
    pub token_type_ids: Tensor<B, 1, Int>,
}

/// One dataset item: the three encoded texts of a triple
#[derive(Debug, Clone)]
pub struct EncodedTriple<B: Backend> {
    pub question: EncodedText<B>,
    pub positive: EncodedText<B>,
    pub negative: EncodedText<B>,
}

// ─── RetrievalDataset ─────────────────────────────────────────────────────────
/// Wraps the immutable triple list, the encoder, and the device
/// tensors are created on. Stored state is never mutated.
pub struct RetrievalDataset<B: Backend> {
    triples: Vec<RetrievalTriple>,
    encoder: TripleEncoder,
    device: B::Device,
}

impl<B: Backend> RetrievalDataset<B> {
    /// Create a new RetrievalDataset over the given triples
    pub fn new(triples: Vec<RetrievalTriple>, encoder: TripleEncoder, device: B::Device) -> Self {
        Self { triples, encoder, device }
    }

    /// Number of triples in the dataset
    pub fn size(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// The encoder's configured maximum sequence length
    pub fn max_length(&self) -> usize {
        self.encoder.max_length()
    }

    /// Tokenise and tensorise the triple at `index`.
    /// Recomputed on every call — nothing is cached.
    pub fn get(&self, index: usize) -> DataResult<EncodedTriple<B>> {
        let triple = self.triples.get(index).ok_or(DataError::IndexOutOfRange {
            index,
            size: self.triples.len(),
        })?;

        let enc = self.encoder.encode_triple(triple)?;

        Ok(EncodedTriple {
            question: self.to_tensors(&enc.question),
            positive: self.to_tensors(&enc.positive),
            negative: self.to_tensors(&enc.negative),
        })
    }

    /// Convert one TextEncoding into 1-D Int tensors on the device.
    /// Burn Int tensors are built from i32, so the u32 token ids
    /// are cast first (BERT-scale vocab ids fit comfortably).
    fn to_tensors(&self, enc: &TextEncoding) -> EncodedText<B> {
        let ids:   Vec<i32> = enc.token_ids.iter().map(|&x| x as i32).collect();
        let mask:  Vec<i32> = enc.attention_mask.iter().map(|&x| x as i32).collect();
        let types: Vec<i32> = enc.token_type_ids.iter().map(|&x| x as i32).collect();

        EncodedText {
            token_ids:      Tensor::<B, 1, Int>::from_ints(ids.as_slice(), &self.device),
            attention_mask: Tensor::<B, 1, Int>::from_ints(mask.as_slice(), &self.device),
            token_type_ids: Tensor::<B, 1, Int>::from_ints(types.as_slice(), &self.device),
        }
    }
}

// ─── Burn Dataset Trait Implementation ────────────────────────────────────────
// This is what lets burn's DataLoader consume the dataset:
// it calls .get(index) and .len() to pull individual items.
// Burn's trait signals a bad index with None, so the typed
// error collapses to Option here; callers who need the error
// use the inherent get() above.
impl<B: Backend> Dataset<EncodedTriple<B>> for RetrievalDataset<B> {
    fn get(&self, index: usize) -> Option<EncodedTriple<B>> {
        RetrievalDataset::get(self, index).ok()
    }

    fn len(&self) -> usize {
        self.triples.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::tokenizer_store::build_word_level;

    type TestBackend = burn::backend::NdArray;

    fn test_dataset(max_length: usize) -> RetrievalDataset<TestBackend> {
        let triples = vec![
            RetrievalTriple::new(
                "what is the capital",
                "paris is the capital",
                "latipac eht si sirap",
            ),
            RetrievalTriple::new(
                "where is the tower",
                "the tower is in paris",
                "sirap ni si rewot eht",
            ),
        ];

        let corpus: Vec<String> = triples
            .iter()
            .flat_map(|t| [t.question.clone(), t.positive_context.clone()])
            .collect();
        let tokenizer = build_word_level(&corpus, 64).unwrap();
        let encoder   = TripleEncoder::new(tokenizer, max_length);

        RetrievalDataset::new(triples, encoder, Default::default())
    }

    #[test]
    fn test_size_matches_triple_count() {
        let ds = test_dataset(16);
        assert_eq!(ds.size(), 2);
        assert_eq!(Dataset::len(&ds), 2);
    }

    #[test]
    fn test_get_returns_three_encodings_of_max_length() {
        let ds   = test_dataset(16);
        let item = ds.get(0).unwrap();

        for enc in [&item.question, &item.positive, &item.negative] {
            assert_eq!(enc.token_ids.dims(),      [16]);
            assert_eq!(enc.attention_mask.dims(), [16]);
            assert_eq!(enc.token_type_ids.dims(), [16]);
        }
    }

    #[test]
    fn test_out_of_range_index_is_typed_error() {
        let ds  = test_dataset(16);
        let err = ds.get(2).unwrap_err();
        match err {
            DataError::IndexOutOfRange { index, size } => {
                assert_eq!(index, 2);
                assert_eq!(size, 2);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
        // The burn trait maps the same failure to None
        assert!(Dataset::get(&ds, 2).is_none());
    }

    #[test]
    fn test_repeated_access_recomputes_identically() {
        let ds = test_dataset(16);
        let a  = ds.get(1).unwrap();
        let b  = ds.get(1).unwrap();

        // NdArray's IntElem is i64, so that is what into_data() yields
        let ids_a: Vec<i64> = a.question.token_ids.into_data().value;
        let ids_b: Vec<i64> = b.question.token_ids.into_data().value;
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_default_max_length_is_256() {
        use crate::data::encoder::DEFAULT_MAX_LENGTH;
        assert_eq!(DEFAULT_MAX_LENGTH, 256);

        let ds   = test_dataset(DEFAULT_MAX_LENGTH);
        let item = ds.get(0).unwrap();
        assert_eq!(item.positive.token_ids.dims(), [256]);
    }
}
