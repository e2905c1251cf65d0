// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `inspect` — parses a SQuAD file and prints statistics
//   2. `probe`   — encodes one triple and one batch, printing
//                  the tensor shapes a training loop would see
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, ProbeArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "squad-dpr",
    version = "0.1.0",
    about = "Reshape SQuAD data into retrieval training triples and probe the encoding pipeline."
)]
pub struct Cli {
    /// The subcommand to run (inspect or probe)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    /// Destructure first: the args move out of the enum, so nothing
    /// may hold on to the rest of `self` afterwards.
    pub fn run(self) -> Result<()> {
        let Cli { command } = self;
        match command {
            Commands::Inspect(args) => Self::run_inspect(args),
            Commands::Probe(args)   => Self::run_probe(args),
        }
    }

    /// Handles the `inspect` subcommand
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let use_case = InspectUseCase::new(args.into());
        let report   = use_case.execute()?;

        println!("{report}");
        Ok(())
    }

    /// Handles the `probe` subcommand
    fn run_probe(args: ProbeArgs) -> Result<()> {
        use crate::application::probe_use_case::ProbeUseCase;

        let use_case = ProbeUseCase::new(args.into());
        let summary  = use_case.execute()?;

        println!("Encoded triple: {} tokens per stream.", summary.encoded_len);
        match summary.batch_dims {
            Some([n, s]) => println!("First batch: {n} samples x {s} tokens per stream."),
            None         => println!("Dataset is empty — nothing to batch."),
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_run_dispatches_inspect_by_value() {
        // `run` consumes the Cli and moves the args out of the
        // subcommand enum — dispatch must work end to end
        let json = r#"{"data":[{"paragraphs":[{
            "context":"Paris is the capital.",
            "qas":[{"id":"1","question":"What is the capital?",
                    "answers":[{"text":"Paris"}],"is_impossible":false}]
        }]}]}"#;
        let path = std::env::temp_dir().join("squad-dpr-test-cli-dispatch.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(json.as_bytes()).unwrap();

        let cli = Cli {
            command: Commands::Inspect(InspectArgs {
                squad_file: path.to_string_lossy().into_owned(),
            }),
        };
        assert!(cli.run().is_ok());
    }
}
