// ============================================================
// Layer 4 — SQuAD Loader
// ============================================================
// Parses a SQuAD-format JSON file into flat SquadRecords.
//
// How SQuAD files are structured:
//   {
//     "data": [                       ← array of articles
//       {
//         "paragraphs": [             ← array of paragraphs
//           {
//             "context": "...",       ← the passage text
//             "qas": [                ← questions on this passage
//               {
//                 "id": "...",
//                 "question": "...",
//                 "answers": [{"text": "...", ...}],
//                 "is_impossible": false   ← optional (v2.0 only)
//               }
//             ]
//           }
//         ]
//       }
//     ]
//   }
//
// We walk this tree in source order (article → paragraph → qa)
// and emit one SquadRecord per qa entry, so downstream code
// never has to deal with the nesting.
//
// Error mapping:
//   - invalid JSON / missing "data"  → DataError::Parse
//     (serde reports both as deserialization failures)
//   - qa entry without "answers"     → DataError::MissingField
//     (modelled as Option so the whole file still parses and we
//      can report WHICH entry is broken)
//
// Reference: Rajpurkar et al. (2018) - SQuAD 2.0 paper
//            Rust Book §9 (Error Handling)
//            serde_json crate documentation

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::domain::record::SquadRecord;
use crate::domain::traits::RecordSource;
use crate::error::{DataError, DataResult};

// ─── Raw schema structs ───────────────────────────────────────────────────────
// These mirror the JSON structure one-to-one. They exist only
// for deserialization and never leave this module — the public
// output is the flat SquadRecord.

#[derive(Debug, Deserialize)]
struct SquadFile {
    data: Vec<SquadArticle>,
}

#[derive(Debug, Deserialize)]
struct SquadArticle {
    paragraphs: Vec<SquadParagraph>,
}

#[derive(Debug, Deserialize)]
struct SquadParagraph {
    context: String,
    qas: Vec<SquadQa>,
}

#[derive(Debug, Deserialize)]
struct SquadQa {
    id: String,
    question: String,

    /// Option so a missing key surfaces as MissingField for this
    /// specific entry instead of failing the whole-file parse
    answers: Option<Vec<SquadAnswer>>,

    /// v1.1 files have no is_impossible key — default to false
    #[serde(default)]
    is_impossible: bool,
}

#[derive(Debug, Deserialize)]
struct SquadAnswer {
    text: String,
}

// ─── SquadLoader ──────────────────────────────────────────────────────────────
/// Loads and flattens one SQuAD-format JSON file.
/// Implements the RecordSource trait from Layer 3.
pub struct SquadLoader {
    /// Path to the SQuAD JSON file
    path: PathBuf,
}

impl SquadLoader {
    /// Create a new SquadLoader pointed at a JSON file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Read and parse the file, returning one record per qa entry
    /// in document order.
    pub fn load(&self) -> DataResult<Vec<SquadRecord>> {
        let file = File::open(&self.path).map_err(|e| {
            DataError::Parse(format!("cannot open '{}': {e}", self.path.display()))
        })?;

        // Buffered reading — SQuAD train files are ~40 MB
        let reader = BufReader::new(file);
        let parsed: SquadFile = serde_json::from_reader(reader)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let records = flatten(parsed)?;

        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Implement the RecordSource trait so the application layer
/// can call load_records() without knowing about SQuAD internals
impl RecordSource for SquadLoader {
    fn load_records(&self) -> DataResult<Vec<SquadRecord>> {
        self.load()
    }
}

/// Walk the parsed tree in source order and emit flat records.
/// Each qa entry keeps its own copy of the paragraph context.
fn flatten(file: SquadFile) -> DataResult<Vec<SquadRecord>> {
    let mut records = Vec::new();

    for article in file.data {
        for paragraph in article.paragraphs {
            for qa in paragraph.qas {
                // The schema requires answers; an absent key is a
                // malformed entry, not an empty list
                let answers = qa.answers.ok_or(DataError::MissingField {
                    field: "answers",
                    qa_id: qa.id.clone(),
                })?;

                records.push(SquadRecord {
                    id:            qa.id,
                    question:      qa.question,
                    context:       paragraph.context.clone(),
                    answers:       answers.into_iter().map(|a| a.text).collect(),
                    is_impossible: qa.is_impossible,
                });
            }
        }
    }

    Ok(records)
}
