// ============================================================
// Layer 4 — Triple Encoder
// ============================================================
// Wraps the HuggingFace tokenizer with the fixed encoding policy
// every text in a triple goes through:
//
//   1. Tokenise the text (tokenizers crate)
//   2. Truncate to max_length tokens
//   3. Pad with [PAD] (id 0) up to max_length
//   4. Carry the attention mask (1 = real token, 0 = padding)
//      and the token type ids alongside
//
// The output is a structured TextEncoding with named fields
// rather than an open key→value map, so downstream code gets
// compile-time checked access to each stream.
//
// Every encoding leaves this module with all three vectors at
// exactly max_length — the batcher relies on that to stack
// samples without dynamic padding.
//
// Reference: Devlin et al. (2019) - BERT paper (input format)
//            tokenizers crate documentation

use tokenizers::Tokenizer;

use crate::domain::triple::RetrievalTriple;
use crate::error::{DataError, DataResult};

/// Default maximum sequence length in tokens.
/// DPR passages are single paragraphs, so 256 is plenty.
pub const DEFAULT_MAX_LENGTH: usize = 256;

/// [PAD] token id, fixed at 0 by BERT convention
const PAD_ID: u32 = 0;

// ─── TextEncoding ─────────────────────────────────────────────────────────────
/// The tokenizer output for one text, already truncated and
/// padded to max_length. All three vectors have the same length.
#[derive(Debug, Clone)]
pub struct TextEncoding {
    /// Token ids, padded with [PAD] (0)
    pub token_ids: Vec<u32>,

    /// 1 for real tokens, 0 for padding positions
    pub attention_mask: Vec<u32>,

    /// Segment ids — all zeros here since each text is encoded
    /// on its own (no question+passage pairing in this pipeline)
    pub token_type_ids: Vec<u32>,
}

impl TextEncoding {
    /// Sequence length — identical for all three streams
    pub fn len(&self) -> usize {
        self.token_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_ids.is_empty()
    }
}

/// One fully encoded triple: the three texts, each tokenised
/// independently with the same configuration.
#[derive(Debug, Clone)]
pub struct TripleEncoding {
    pub question: TextEncoding,
    pub positive: TextEncoding,
    pub negative: TextEncoding,
}

// ─── TripleEncoder ────────────────────────────────────────────────────────────
/// Holds the tokenizer and the fixed encoding configuration.
/// Encoding goes through &self, so one encoder can be shared
/// across data-loading workers without synchronisation.
pub struct TripleEncoder {
    tokenizer: Tokenizer,
    max_length: usize,
}

impl TripleEncoder {
    /// Create a new TripleEncoder with an explicit max_length
    pub fn new(tokenizer: Tokenizer, max_length: usize) -> Self {
        Self { tokenizer, max_length }
    }

    /// Create a TripleEncoder with the default max_length (256)
    pub fn with_default_length(tokenizer: Tokenizer) -> Self {
        Self::new(tokenizer, DEFAULT_MAX_LENGTH)
    }

    /// The configured maximum sequence length
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Encode one text: tokenise, truncate to max_length,
    /// pad to max_length.
    pub fn encode(&self, text: &str) -> DataResult<TextEncoding> {
        // `true` = apply the tokenizer's post-processing
        // (special tokens, if its pipeline defines any)
        let enc = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| DataError::Tokenize(e.to_string()))?;

        let mut token_ids:      Vec<u32> = enc.get_ids().to_vec();
        let mut attention_mask: Vec<u32> = enc.get_attention_mask().to_vec();
        let mut token_type_ids: Vec<u32> = enc.get_type_ids().to_vec();

        // Truncate-then-pad gives exactly max_length everywhere.
        // Mask and type ids pad with 0: padding positions are
        // ignored by attention and belong to no segment.
        pad_or_truncate(&mut token_ids,      self.max_length, PAD_ID);
        pad_or_truncate(&mut attention_mask, self.max_length, 0);
        pad_or_truncate(&mut token_type_ids, self.max_length, 0);

        Ok(TextEncoding { token_ids, attention_mask, token_type_ids })
    }

    /// Encode all three texts of a triple with the same
    /// configuration — three independent tokenizer calls.
    pub fn encode_triple(&self, triple: &RetrievalTriple) -> DataResult<TripleEncoding> {
        Ok(TripleEncoding {
            question: self.encode(&triple.question)?,
            positive: self.encode(&triple.positive_context)?,
            negative: self.encode(&triple.negative_context)?,
        })
    }
}

/// Pad with `pad_value` or truncate so `vec.len() == target`
fn pad_or_truncate(vec: &mut Vec<u32>, target: usize, pad_value: u32) {
    if vec.len() < target {
        vec.resize(target, pad_value);
    } else {
        vec.truncate(target);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::tokenizer_store::build_word_level;

    fn test_encoder(max_length: usize) -> TripleEncoder {
        let corpus = vec![
            "paris is the capital of france".to_string(),
            "what is the capital".to_string(),
        ];
        let tokenizer = build_word_level(&corpus, 64).unwrap();
        TripleEncoder::new(tokenizer, max_length)
    }

    #[test]
    fn test_all_streams_padded_to_max_length() {
        let encoder = test_encoder(16);
        let enc     = encoder.encode("paris is the capital").unwrap();

        assert_eq!(enc.token_ids.len(),      16);
        assert_eq!(enc.attention_mask.len(), 16);
        assert_eq!(enc.token_type_ids.len(), 16);
    }

    #[test]
    fn test_mask_marks_real_tokens_then_padding() {
        let encoder = test_encoder(8);
        let enc     = encoder.encode("paris is the capital").unwrap();

        // 4 words → 4 real positions, then padding
        assert_eq!(&enc.attention_mask[..4], &[1, 1, 1, 1]);
        assert_eq!(&enc.attention_mask[4..], &[0, 0, 0, 0]);
        assert_eq!(&enc.token_ids[4..],      &[0, 0, 0, 0]);
    }

    #[test]
    fn test_long_text_truncated() {
        let encoder = test_encoder(4);
        let enc     = encoder.encode("paris is the capital of france").unwrap();

        assert_eq!(enc.len(), 4);
        // Everything kept is a real token
        assert_eq!(enc.attention_mask, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_triple_encoded_with_same_configuration() {
        let encoder = test_encoder(16);
        let triple  = RetrievalTriple::new(
            "what is the capital",
            "paris is the capital",
            "latipac eht si sirap",
        );

        let enc = encoder.encode_triple(&triple).unwrap();
        assert_eq!(enc.question.len(), 16);
        assert_eq!(enc.positive.len(), 16);
        assert_eq!(enc.negative.len(), 16);
    }

    #[test]
    fn test_unknown_words_map_to_unk_not_error() {
        let encoder = test_encoder(8);
        // Reversed text is mostly out-of-vocabulary
        let enc = encoder.encode("latipac eht si sirap").unwrap();
        assert_eq!(enc.len(), 8);
        assert_eq!(enc.attention_mask[0], 1);
    }
}
