//! Test builders — ergonomic constructors for `Book` and `ContentLine`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use fib::{Book, ContentLine, Locator, Match};

// ---------------------------------------------------------------------------
// BookBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Book`] test fixtures.
///
/// # Example
///
/// ```rust
/// let book = BookBuilder::new()
///     .isbn("9780000528531")
///     .line(31, 8, "now simply went on by her own momentum.")
///     .build();
/// ```
pub struct BookBuilder {
    title: Option<String>,
    isbn: Option<String>,
    content: Vec<ContentLine>,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            isbn: None,
            content: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Append a fully-tagged content line.
    pub fn line(mut self, page: u32, line: u32, text: &str) -> Self {
        self.content.push(ContentLine {
            page: Some(page),
            line: Some(line),
            text: text.to_string(),
        });
        self
    }

    /// Append a content line with explicit (possibly absent) tags.
    pub fn tagged(mut self, page: Option<u32>, line: Option<u32>, text: &str) -> Self {
        self.content.push(ContentLine {
            page,
            line,
            text: text.to_string(),
        });
        self
    }

    pub fn build(self) -> Book {
        Book {
            title: self.title,
            isbn: self.isbn,
            content: self.content,
        }
    }
}

impl Default for BookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a one-line book with a full set of identifying fields.
pub fn single_line_book(isbn: &str, page: u32, line: u32, text: &str) -> Book {
    BookBuilder::new().isbn(isbn).line(page, line, text).build()
}

/// The absent-field sentinel, short enough to keep expectation tables flat.
pub const NA: Locator = Locator::NotAvailable;

/// A concrete page/line locator.
pub fn loc(n: u32) -> Locator {
    Locator::Number(n)
}

/// Build the expected [`Match`] for a result assertion.
///
/// ```rust
/// let expected = vec![found("9780000528531", loc(31), loc(8)), found("N/A", loc(24), NA)];
/// ```
pub fn found(isbn: &str, page: Locator, line: Locator) -> Match {
    Match {
        isbn: isbn.to_string(),
        page,
        line,
    }
}
