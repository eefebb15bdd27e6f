//! Backend JSON as it arrives, and the mapping into catalog types.
//!
//! The catalog API is loosely typed: ids and prices show up as numbers or
//! strings, relation lists can be missing or `null`, and payloads may or may
//! not be wrapped in a `{ "data": ... }` envelope. Everything lenient lives
//! here so the page code only sees [`BookDetail`] and [`BookSummary`].

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::catalog::model::{BookAuthor, BookDetail, BookSummary, Category, Price};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(value) => value,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    String(String),
}

impl NumberOrString {
    fn as_id(&self) -> Option<String> {
        let id = match self {
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.trim().to_owned(),
        };
        (!id.is_empty()).then_some(id)
    }

    fn as_price(&self) -> Option<Price> {
        let value = match self {
            Self::Number(n) => n.as_f64()?,
            Self::String(s) => s.trim().parse::<f64>().ok()?,
        };
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        Some(Price((value * 100.0).round() as u64))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBook {
    #[serde(default)]
    pub id: Option<NumberOrString>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<NumberOrString>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub isbn: Option<NumberOrString>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub categories: Option<Value>,
    #[serde(default)]
    pub book_authors: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(default)]
    id: Option<NumberOrString>,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBookAuthor {
    #[serde(default)]
    book_writter: Option<RawWriter>,
}

#[derive(Debug, Deserialize)]
struct RawWriter {
    #[serde(default)]
    name: Option<String>,
}

impl RawBook {
    pub fn into_detail(self) -> BookDetail {
        let slug = non_blank(self.slug).unwrap_or_default();
        BookDetail {
            id: self.id.as_ref().and_then(NumberOrString::as_id).unwrap_or_default(),
            title: non_blank(self.title).unwrap_or_else(|| slug.clone()),
            slug,
            description: self.description.filter(|d| !d.trim().is_empty()),
            price: self.price.as_ref().and_then(NumberOrString::as_price),
            cover: non_blank(self.cover),
            isbn: self.isbn.as_ref().and_then(NumberOrString::as_id),
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            categories: list_entries::<RawCategory>(self.categories, "categories")
                .into_iter()
                .filter_map(|c| {
                    let label = non_blank(c.category)?;
                    let id = c.id.as_ref().and_then(NumberOrString::as_id).unwrap_or_default();
                    Some(Category { id, label })
                })
                .collect(),
            authors: list_entries::<RawBookAuthor>(self.book_authors, "book_authors")
                .into_iter()
                .map(|a| BookAuthor {
                    name: a.book_writter.and_then(|w| non_blank(w.name)),
                })
                .collect(),
        }
    }

    pub fn into_summary(self) -> BookSummary {
        let slug = non_blank(self.slug).unwrap_or_default();
        BookSummary {
            id: self.id.as_ref().and_then(NumberOrString::as_id).unwrap_or_default(),
            title: non_blank(self.title).unwrap_or_else(|| slug.clone()),
            slug,
            price: self.price.as_ref().and_then(NumberOrString::as_price),
            cover: non_blank(self.cover),
        }
    }
}

/// Entries of a relation list; non-arrays map to empty and malformed entries are skipped.
fn list_entries<T: serde::de::DeserializeOwned>(value: Option<Value>, field: &str) -> Vec<T> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(field, %err, "skipping malformed entry");
                None
            }
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse a single-book response body.
pub fn parse_book(body: &str) -> anyhow::Result<BookDetail> {
    let envelope: Envelope<RawBook> = serde_json::from_str(body)?;
    Ok(envelope.into_inner().into_detail())
}

/// Parse a list response body.
pub fn parse_books(body: &str) -> anyhow::Result<Vec<RawBook>> {
    let envelope: Envelope<Vec<RawBook>> = serde_json::from_str(body)?;
    Ok(envelope.into_inner())
}
