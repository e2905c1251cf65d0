// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Manages tokenizer building, saving, and loading.
//
// In tokenizers 0.15, train_from_files requires Trainer::Model
// to equal ModelWrapper. The correct approach is to build the
// tokenizer JSON manually and load it back, bypassing the
// trainer type mismatch entirely. The JSON is assembled
// in-memory (so tests never touch disk) and persisted next to
// the other run artifacts so every run encodes with the same
// vocabulary.
//
// The vocabulary is word-level, built from the triple corpus
// (questions and positive passages — the reversed negatives
// would only pollute it with mirror words; out-of-vocabulary
// tokens map to [UNK] anyway).
//
// Reference: Sennrich et al. (2016) BPE paper (what we bypass)

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokenizers::Tokenizer;

use crate::domain::triple::RetrievalTriple;

/// Build a word-level tokenizer from raw texts, entirely
/// in-memory. Special tokens get fixed IDs matching the BERT
/// convention ([PAD]=0, [UNK]=1, [CLS]=101, [SEP]=102).
pub fn build_word_level(texts: &[String], vocab_size: usize) -> Result<Tokenizer> {
    // ── Step 1: Build vocabulary from word frequencies ────────────────────────
    let mut freq: HashMap<String, usize> = HashMap::new();

    for text in texts {
        for word in text.split_whitespace() {
            // Normalise to lowercase, strip punctuation from edges
            let w = word.to_lowercase();
            let w = w.trim_matches(|c: char| !c.is_alphanumeric());
            if !w.is_empty() {
                *freq.entry(w.to_string()).or_insert(0) += 1;
            }
        }
    }

    // Sort by frequency descending, take top vocab_size - 5
    // (reserve 5 slots for special tokens)
    let mut words: Vec<(String, usize)> = freq.into_iter().collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(vocab_size.saturating_sub(5));

    // ── Step 2: Build vocab JSON ──────────────────────────────────────────────
    let mut vocab = serde_json::json!({
        "[PAD]":  0,
        "[UNK]":  1,
        "[CLS]":  101,
        "[SEP]":  102,
        "[MASK]": 103,
    });

    let mut next_id = 104usize;
    for (word, _) in &words {
        if vocab.get(word).is_none() {
            vocab[word] = serde_json::json!(next_id);
            next_id += 1;
        }
    }

    // ── Step 3: Assemble tokenizer JSON in HuggingFace format ─────────────────
    // This is the same format Tokenizer::from_file() reads
    let tokenizer_json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0,   "content": "[PAD]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1,   "content": "[UNK]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 101, "content": "[CLS]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 102, "content": "[SEP]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 103, "content": "[MASK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": {
            "type": "BertNormalizer",
            "clean_text": true,
            "handle_chinese_chars": true,
            "strip_accents": null,
            "lowercase": true
        },
        "pre_tokenizer": {
            "type": "Whitespace"
        },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": vocab,
            "unk_token": "[UNK]"
        }
    });

    Tokenizer::from_bytes(serde_json::to_vec(&tokenizer_json)?)
        .map_err(|e| anyhow::anyhow!("Cannot load built tokenizer: {e}"))
}

/// Persists the tokenizer so training and later encoding runs
/// share the same vocabulary.
pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Load the persisted tokenizer, or build a new one from the
    /// triple corpus and save it.
    pub fn load_or_build(
        &self,
        triples:    &[RetrievalTriple],
        vocab_size: usize,
    ) -> Result<Tokenizer> {
        let tok_path = self.dir.join("tokenizer.json");
        if tok_path.exists() {
            tracing::info!("Loading existing tokenizer from disk");
            self.load()
        } else {
            tracing::info!("Building new tokenizer (vocab_size={})", vocab_size);
            self.build_and_save(triples, vocab_size)
        }
    }

    /// Load a previously saved tokenizer from its JSON file
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.dir.join("tokenizer.json");
        Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", path.display(), e
            ))
    }

    /// Build a word-level tokenizer from the triples' questions
    /// and positive passages, then persist it.
    fn build_and_save(&self, triples: &[RetrievalTriple], vocab_size: usize) -> Result<Tokenizer> {
        std::fs::create_dir_all(&self.dir).ok();

        let texts: Vec<String> = triples
            .iter()
            .flat_map(|t| [t.question.clone(), t.positive_context.clone()])
            .collect();

        let tokenizer = build_word_level(&texts, vocab_size)?;

        let tok_path = self.dir.join("tokenizer.json");
        tokenizer
            .save(&tok_path, true)
            .map_err(|e| anyhow::anyhow!("Cannot save tokenizer: {e}"))
            .with_context(|| format!("writing '{}'", tok_path.display()))?;

        tracing::info!("Tokenizer saved to '{}'", tok_path.display());
        Ok(tokenizer)
    }
}
