//! Interchange boundary — fail-fast parsing of scanned-book JSON.
//!
//! Collaborators hand the corpus over as JSON in the scanned-text pipeline's
//! shape. Shape problems are caught here, as a typed [`CorpusError`], before
//! anything reaches the matcher; the matcher itself never surfaces an error.

use thiserror::Error;

use crate::types::{Book, SearchRequest};

/// Why a corpus or request document was rejected at the boundary.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Not syntactically valid JSON, or a field had the wrong type for the
    /// scanned-text shape.
    #[error("malformed corpus document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON whose root is not an array of books.
    #[error("corpus root must be an array of books, got {found}")]
    NotAnArray { found: &'static str },
}

/// Parse a corpus document: a JSON array of book objects.
pub fn parse_corpus(json: &str) -> Result<Vec<Book>, CorpusError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(CorpusError::NotAnArray {
            found: json_kind(&value),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a full search request (`SearchTerm` plus `Corpus`; either may be
/// null or absent).
pub fn parse_request(json: &str) -> Result<SearchRequest, CorpusError> {
    Ok(serde_json::from_str(json)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
