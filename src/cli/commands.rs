// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `inspect` and `probe`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::inspect_use_case::InspectConfig;
use crate::application::probe_use_case::ProbeConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a SQuAD file and print dataset statistics
    Inspect(InspectArgs),

    /// Encode one triple and one batch, printing tensor shapes
    Probe(ProbeArgs),
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the SQuAD-format JSON file
    #[arg(long, default_value = "data/train-v2.0.json")]
    pub squad_file: String,
}

/// Convert CLI InspectArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig { squad_file: a.squad_file }
    }
}

/// All arguments for the `probe` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Path to the SQuAD-format JSON file
    #[arg(long, default_value = "data/train-v2.0.json")]
    pub squad_file: String,

    /// Directory where the tokenizer artifact is saved/loaded
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: String,

    /// Which triple to encode
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    /// Maximum number of tokens per encoded text
    /// (every stream is truncated and padded to this length)
    #[arg(long, default_value_t = 256)]
    pub max_seq_len: usize,

    /// Number of triples per batch pulled from the DataLoader
    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,

    /// Vocabulary budget when a new tokenizer has to be built
    #[arg(long, default_value_t = 30522)]
    pub vocab_size: usize,
}

impl From<ProbeArgs> for ProbeConfig {
    fn from(a: ProbeArgs) -> Self {
        ProbeConfig {
            squad_file:    a.squad_file,
            artifacts_dir: a.artifacts_dir,
            index:         a.index,
            max_seq_len:   a.max_seq_len,
            batch_size:    a.batch_size,
            vocab_size:    a.vocab_size,
        }
    }
}
