//! fib — Find In Books
//!
//! Locates whole-word occurrences of a search term inside a corpus of
//! scanned book text and reports, for each occurrence, the identifying
//! location (ISBN, page, line).
//!
//! # Architecture
//!
//! ```text
//! corpus JSON ──► corpus (boundary) ──► search ──► SearchResult
//! ```
//!
//! The search layer is a pure, total function of its inputs: null terms,
//! null or empty corpora, and incomplete records all degrade to defined
//! results, never errors. Shape validation happens once, at the interchange
//! boundary, before the matcher runs. No state is retained between calls —
//! each scan is a single pass over the corpus in book-then-line order.

pub mod corpus;
pub mod search;
pub mod types;

pub use corpus::{parse_corpus, parse_request, CorpusError};
pub use search::find_term;
pub use types::{
    Book, ContentLine, Locator, Match, SearchRequest, SearchResult, NOT_AVAILABLE,
};
