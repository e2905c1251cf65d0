// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Parses a SQuAD file and summarises what the triple pipeline
// would make of it, without touching the tokenizer:
//
//   Step 1: Load and flatten the SQuAD file   (Layer 4 - data)
//   Step 2: Count answerable vs unanswerable  (here)
//   Step 3: Build the triples                 (Layer 4 - data)
//
// Useful before a long training run: a malformed file or a
// surprising answerable/unanswerable ratio shows up here in
// seconds instead of minutes into tokenization.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::fmt;

use anyhow::Result;

use crate::data::{loader::SquadLoader, triples::TripleBuilder};
use crate::domain::traits::RecordSource;

// ─── Inspect Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Path to the SQuAD JSON file to inspect
    pub squad_file: String,
}

/// Summary statistics over one SQuAD file and its derived triples
#[derive(Debug, Clone)]
pub struct DatasetReport {
    /// Total flattened records (one per qa entry)
    pub records: usize,

    /// Records with is_impossible = false
    pub answerable: usize,

    /// Records with is_impossible = true (dropped by the builder)
    pub unanswerable: usize,

    /// Triples produced — always equals `answerable` when the
    /// file is well-formed
    pub triples: usize,

    /// Mean positive-passage length in characters
    pub avg_context_chars: f64,
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset report:")?;
        writeln!(f, "  Records:            {}", self.records)?;
        writeln!(f, "  Answerable:         {}", self.answerable)?;
        writeln!(f, "  Unanswerable:       {}", self.unanswerable)?;
        writeln!(f, "  Triples:            {}", self.triples)?;
        write!  (f, "  Avg context length: {:.1} chars", self.avg_context_chars)
    }
}

// ─── InspectUseCase ───────────────────────────────────────────────────────────
pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    /// Create a new InspectUseCase with the given configuration
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Run the inspection and return the report
    pub fn execute(&self) -> Result<DatasetReport> {
        // ── Step 1: Load and flatten the SQuAD file ───────────────────────────
        tracing::info!("Inspecting '{}'", self.config.squad_file);
        let loader  = SquadLoader::new(&self.config.squad_file);
        let records = loader.load_records()?;

        // ── Step 2: Count answerable vs unanswerable ──────────────────────────
        let answerable   = records.iter().filter(|r| r.is_answerable()).count();
        let unanswerable = records.len() - answerable;

        // ── Step 3: Build the triples ─────────────────────────────────────────
        let triples = TripleBuilder::new().build(&records)?;

        let total_chars: usize = triples.iter().map(|t| t.positive_context.len()).sum();
        let avg_context_chars = if triples.is_empty() {
            0.0
        } else {
            total_chars as f64 / triples.len() as f64
        };

        Ok(DatasetReport {
            records: records.len(),
            answerable,
            unanswerable,
            triples: triples.len(),
            avg_context_chars,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_report_counts_match_file() {
        let json = r#"{"data":[{"paragraphs":[{
            "context":"Paris is the capital.",
            "qas":[
                {"id":"1","question":"What is the capital?",
                 "answers":[{"text":"Paris"}],"is_impossible":false},
                {"id":"2","question":"Unanswerable?",
                 "answers":[],"is_impossible":true}
            ]}]}]}"#;

        let path = std::env::temp_dir().join("squad-dpr-test-inspect.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(json.as_bytes()).unwrap();

        let report = InspectUseCase::new(InspectConfig {
            squad_file: path.to_string_lossy().into_owned(),
        })
        .execute()
        .unwrap();

        assert_eq!(report.records, 2);
        assert_eq!(report.answerable, 1);
        assert_eq!(report.unanswerable, 1);
        assert_eq!(report.triples, 1);
        assert!((report.avg_context_chars - 21.0).abs() < 1e-9);
    }
}
