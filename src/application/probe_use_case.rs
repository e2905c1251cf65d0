// ============================================================
// Layer 2 — ProbeUseCase
// ============================================================
// Exercises the full encoding pipeline end to end on the CPU
// backend and reports the tensor shapes a training loop would
// receive:
//
//   Step 1: Load and flatten the SQuAD file   (Layer 4 - data)
//   Step 2: Build the triples                 (Layer 4 - data)
//   Step 3: Load or build the tokenizer       (Layer 6 - infra)
//   Step 4: Encode one triple by index        (Layer 4 - data)
//   Step 5: Pull one batch through Burn's
//           DataLoader                        (Layer 4 - data)
//
// A DPR training loop plugs in after step 5 — it would swap the
// NdArray backend for a GPU one and consume every batch instead
// of the first.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use anyhow::{Context, Result};
use burn::data::dataloader::DataLoaderBuilder;

use crate::data::{
    batcher::RetrievalBatcher,
    dataset::RetrievalDataset,
    encoder::{TripleEncoder, DEFAULT_MAX_LENGTH},
    loader::SquadLoader,
    triples::TripleBuilder,
};
use crate::domain::traits::RecordSource;
use crate::infra::tokenizer_store::TokenizerStore;

// Tokenization and tensor stacking are CPU work; no GPU needed
type ProbeBackend = burn::backend::NdArray;

// ─── Probe Configuration ──────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub squad_file:    String,
    pub artifacts_dir: String,
    pub index:         usize,
    pub max_seq_len:   usize,
    pub batch_size:    usize,
    pub vocab_size:    usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            squad_file:    "data/train-v2.0.json".to_string(),
            artifacts_dir: "artifacts".to_string(),
            index:         0,
            max_seq_len:   DEFAULT_MAX_LENGTH,
            batch_size:    8,
            vocab_size:    30522,
        }
    }
}

/// What the probe observed — printed by the CLI layer
#[derive(Debug, Clone)]
pub struct ProbeSummary {
    /// Per-stream sequence length of the encoded triple
    pub encoded_len: usize,

    /// [batch_size, max_seq_len] of the first batch, or None if
    /// the dataset was empty
    pub batch_dims: Option<[usize; 2]>,
}

// ─── ProbeUseCase ─────────────────────────────────────────────────────────────
pub struct ProbeUseCase {
    config: ProbeConfig,
}

impl ProbeUseCase {
    /// Create a new ProbeUseCase with the given configuration
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Run the probe end to end
    pub fn execute(&self) -> Result<ProbeSummary> {
        let cfg = &self.config;

        // ── Step 1: Load and flatten the SQuAD file ───────────────────────────
        tracing::info!("Loading SQuAD file '{}'", cfg.squad_file);
        let records = SquadLoader::new(&cfg.squad_file).load_records()?;
        tracing::info!("Loaded {} records", records.len());

        // ── Step 2: Build the triples ─────────────────────────────────────────
        let triples = TripleBuilder::new().build(&records)?;
        tracing::info!("Built {} triples", triples.len());

        // ── Step 3: Load or build the tokenizer ───────────────────────────────
        let store     = TokenizerStore::new(&cfg.artifacts_dir);
        let tokenizer = store.load_or_build(&triples, cfg.vocab_size)?;

        // ── Step 4: Encode one triple by index ────────────────────────────────
        let encoder = TripleEncoder::new(tokenizer, cfg.max_seq_len);
        let device  = Default::default();
        let dataset: RetrievalDataset<ProbeBackend> =
            RetrievalDataset::new(triples, encoder, device);

        let item = dataset
            .get(cfg.index)
            .with_context(|| format!("cannot encode triple {}", cfg.index))?;

        tracing::info!(
            "Triple {}: question {:?}, positive {:?}, negative {:?}",
            cfg.index,
            item.question.token_ids.dims(),
            item.positive.token_ids.dims(),
            item.negative.token_ids.dims(),
        );

        // ── Step 5: Pull one batch through Burn's DataLoader ──────────────────
        // The same path a training loop takes; shuffling and
        // multi-worker loading are the DataLoader's business.
        let dataloader = DataLoaderBuilder::new(RetrievalBatcher::new())
            .batch_size(cfg.batch_size)
            .build(dataset);

        let batch_dims = dataloader.iter().next().map(|batch| {
            tracing::info!(
                "First batch: question_ids {:?}, positive_ids {:?}, negative_ids {:?}",
                batch.question_ids.dims(),
                batch.positive_ids.dims(),
                batch.negative_ids.dims(),
            );
            batch.question_ids.dims()
        });

        Ok(ProbeSummary {
            encoded_len: item.question.token_ids.dims()[0],
            batch_dims,
        })
    }
}
