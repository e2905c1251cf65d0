// ============================================================
// Data-Layer Error Taxonomy
// ============================================================
// Every failure the data pipeline can produce, as one typed enum.
//
// Why a typed enum instead of anyhow everywhere?
//   The pipeline has a small, closed set of failure modes and
//   callers (training scripts) are expected to fail fast on all
//   of them. A typed enum lets tests assert on the exact failure
//   and keeps the taxonomy visible in one place. The application
//   and CLI layers still use anyhow and convert via `?`.
//
// The four failure modes:
//   Parse          — the input file is not valid JSON, or the
//                    top-level "data" key is missing
//   MissingField   — a qa entry has no "answers" key at all
//   EmptyAnswers   — an answerable record reached the triple
//                    builder with zero answers
//   IndexOutOfRange — dataset element access outside [0, size)
//   Tokenize       — the external tokenizer collaborator failed
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

/// All errors produced by the data pipeline.
/// None of these are recovered locally — they propagate straight
/// to the caller, which is expected to fail fast.
#[derive(Debug, Error)]
pub enum DataError {
    /// The SQuAD file is not valid JSON or lacks the top-level
    /// `data` key (serde reports both as deserialization failures)
    #[error("cannot parse SQuAD JSON: {0}")]
    Parse(String),

    /// A required schema field is absent from a qa entry
    #[error("qa entry '{qa_id}' is missing required field '{field}'")]
    MissingField {
        field: &'static str,
        qa_id: String,
    },

    /// An answerable record (is_impossible = false) has no answers,
    /// so there is no first answer to validate the triple against
    #[error("answerable record '{qa_id}' has an empty answers list")]
    EmptyAnswers { qa_id: String },

    /// Dataset element access outside the valid range
    #[error("index {index} out of range for dataset of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// The tokenizer collaborator returned an error
    #[error("tokenization failed: {0}")]
    Tokenize(String),
}

/// Result alias used throughout the data layer
pub type DataResult<T> = Result<T, DataError>;

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_name_the_offender() {
        let e = DataError::MissingField { field: "answers", qa_id: "qa-7".into() };
        assert!(e.to_string().contains("qa-7"));
        assert!(e.to_string().contains("answers"));

        let e = DataError::IndexOutOfRange { index: 5, size: 3 };
        assert!(e.to_string().contains('5'));
        assert!(e.to_string().contains('3'));
    }

    #[test]
    fn test_serde_error_converts_to_parse() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: DataError = bad.unwrap_err().into();
        assert!(matches!(err, DataError::Parse(_)));
    }
}
