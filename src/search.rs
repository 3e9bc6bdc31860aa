//! Search layer — the word-boundary term matcher.
//!
//! [`find_term`] scans every content line of every book, in order, testing
//! each line against a boundary pattern built fresh from the search term: the
//! term must be flanked on each side by a non-word character or the start/end
//! of the line. `"no"` does not match `"now"`; matching is case-sensitive;
//! multi-word terms match literally, space included.
//!
//! The matcher is total: null terms, null or empty corpora, and incomplete
//! records all degrade to defined results. Nothing in this module panics or
//! returns an error.

use regex::Regex;

use crate::types::{Book, Match, SearchRequest, SearchResult};

/// Scan `corpus` for whole-word occurrences of `search_term`.
///
/// The output echoes the term exactly as given (empty string and `None` both
/// carry through) and lists one [`Match`] per content line satisfying the
/// boundary predicate, in book-then-line order. Matches in a book or line
/// missing identifying fields report the `"N/A"` sentinel for those fields
/// and the scan continues.
///
/// ```
/// use fib::{find_term, Book, ContentLine};
///
/// let corpus = vec![Book {
///     isbn: Some("9780000528531".into()),
///     content: vec![ContentLine {
///         page: Some(31),
///         line: Some(8),
///         text: "now simply went on by her own momentum.".into(),
///     }],
///     ..Book::default()
/// }];
///
/// let found = find_term(Some("now"), Some(&corpus));
/// assert_eq!(found.results.len(), 1);
/// assert_eq!(found.results[0].isbn, "9780000528531");
///
/// // "no" is a substring of "now", not a standalone token.
/// assert!(find_term(Some("no"), Some(&corpus)).results.is_empty());
/// ```
pub fn find_term(search_term: Option<&str>, corpus: Option<&[Book]>) -> SearchResult {
    let mut output = SearchResult {
        search_term: search_term.map(str::to_owned),
        results: Vec::new(),
    };

    // A null term matches nothing; the null itself still echoes through.
    let Some(term) = search_term else {
        return output;
    };
    let Some(books) = corpus else {
        return output;
    };
    let Some(pattern) = boundary_pattern(term) else {
        return output;
    };

    tracing::debug!(term, books = books.len(), "scanning corpus");

    for book in books {
        for line in &book.content {
            if pattern.is_match(&line.text) {
                output.results.push(Match {
                    isbn: book.isbn_or_na(),
                    page: line.page_locator(),
                    line: line.line_locator(),
                });
            }
        }
    }

    tracing::debug!(term, matches = output.results.len(), "scan complete");
    output
}

impl SearchRequest {
    /// Run this request through [`find_term`].
    pub fn run(&self) -> SearchResult {
        find_term(self.search_term.as_deref(), self.corpus.as_deref())
    }
}

/// Build the boundary pattern for one term: the escaped term with a non-word
/// character or line start/end required on each side.
///
/// The term is escaped so metacharacters match literally (`"dark-"`,
/// `"momentum."`). An escaped term cannot produce an invalid pattern; the
/// `None` arm keeps the caller total regardless.
fn boundary_pattern(term: &str) -> Option<Regex> {
    let pattern = format!(r"(?:^|\W){}(?:$|\W)", regex::escape(term));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(error) => {
            tracing::warn!(term, %error, "boundary pattern failed to compile");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
