//! Core types for fib — Find In Books.
//!
//! This module defines the scanned-text data model shared by the interchange
//! boundary and the matcher: the input-side [`Book`] and [`ContentLine`], the
//! [`SearchRequest`] envelope, and the output-side [`SearchResult`] with its
//! [`Match`] records and number-or-sentinel [`Locator`] fields.
//!
//! Wire names are the scanned-text pipeline's PascalCase names (`ISBN`,
//! `Content`, `Page`, …), mapped via serde attributes. Every identifying
//! field is optional on the way in; on the way out a missing or falsy field
//! is reported as the [`NOT_AVAILABLE`] sentinel instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder reported for any identifying field that is missing or falsy.
pub const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// Input side — the scanned corpus
// ---------------------------------------------------------------------------

/// One scanned book: identifying metadata plus its ordered content lines.
///
/// A book with no `ISBN` is still searchable; matches in it report the
/// `"N/A"` sentinel instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    /// Display title. Not consulted by matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ISBN identifier. Absent or empty ⇒ reported as `"N/A"`.
    #[serde(rename = "ISBN", default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// Ordered scanned lines. May be empty.
    #[serde(default)]
    pub content: Vec<ContentLine>,
}

impl Book {
    /// ISBN under the truthiness rule: present and non-empty, else `"N/A"`.
    pub fn isbn_or_na(&self) -> String {
        match self.isbn.as_deref() {
            Some(isbn) if !isbn.is_empty() => isbn.to_string(),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

/// One unit of scanned text within a book, tagged with its page/line location.
///
/// `Page` and `Line` may each be absent from a given record. A record missing
/// `Text` deserializes as the empty string rather than failing shape
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default)]
    pub text: String,
}

impl ContentLine {
    /// The page field resolved under the truthiness rule.
    pub fn page_locator(&self) -> Locator {
        Locator::from_field(self.page)
    }

    /// The line field resolved under the truthiness rule.
    pub fn line_locator(&self) -> Locator {
        Locator::from_field(self.line)
    }
}

/// A search call: the term plus the corpus to scan. Either may be null in
/// the wire form and both stay null-aware in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub corpus: Option<Vec<Book>>,
}

// ---------------------------------------------------------------------------
// Output side — the result set
// ---------------------------------------------------------------------------

/// The result of one scan: the term exactly as given (empty string and null
/// both carry through unmodified) and one [`Match`] per satisfying content
/// line, in book-then-line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    pub search_term: Option<String>,
    pub results: Vec<Match>,
}

/// The location of one matching content line. Each field is independently
/// resolved: a missing or falsy source field becomes the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Match {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub page: Locator,
    pub line: Locator,
}

/// Resolved form of a `Page`/`Line` field: a concrete number or `"N/A"`.
///
/// Serializes as a bare JSON number or the sentinel string, the shape the
/// scanned-text pipeline consumes, and renders the same way via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    Number(u32),
    NotAvailable,
}

impl Locator {
    /// Resolve an optional numeric field under the truthiness rule: a
    /// present, non-zero value is kept; absent or zero collapses to the
    /// sentinel.
    pub fn from_field(field: Option<u32>) -> Self {
        match field {
            Some(n) if n != 0 => Locator::Number(n),
            _ => Locator::NotAvailable,
        }
    }
}

impl From<u32> for Locator {
    fn from(n: u32) -> Self {
        Locator::Number(n)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Number(n) => write!(f, "{n}"),
            Locator::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for Locator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Locator::Number(n) => serializer.serialize_u32(*n),
            Locator::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Locator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LocatorVisitor;

        impl serde::de::Visitor<'_> for LocatorVisitor {
            type Value = Locator;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a page/line number or the string \"N/A\"")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Locator, E> {
                u32::try_from(v)
                    .map(Locator::Number)
                    .map_err(|_| E::custom(format!("locator {v} out of range")))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Locator, E> {
                u32::try_from(v)
                    .map(Locator::Number)
                    .map_err(|_| E::custom(format!("locator {v} out of range")))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Locator, E> {
                if v == NOT_AVAILABLE {
                    Ok(Locator::NotAvailable)
                } else {
                    Err(E::custom(format!("expected \"N/A\", got {v:?}")))
                }
            }
        }

        deserializer.deserialize_any(LocatorVisitor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
