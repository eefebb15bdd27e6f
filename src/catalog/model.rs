use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Price in sen (1/100 rupiah).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(pub u64);

impl Price {
    pub fn from_rupiah(rupiah: u64) -> Self {
        Self(rupiah.saturating_mul(100))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn rupiah(self) -> u64 {
        self.0 / 100
    }

    pub fn sen(self) -> u64 {
        self.0 % 100
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub label: String,
}

/// An author association; `name` is `None` when the writer record is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookAuthor {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDetail {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Raw author-supplied HTML. Never rendered without sanitizing.
    pub description: Option<String>,
    pub price: Option<Price>,
    pub cover: Option<String>,
    pub isbn: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub categories: Vec<Category>,
    pub authors: Vec<BookAuthor>,
}

impl BookDetail {
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            price: self.price,
            cover: self.cover.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub price: Option<Price>,
    pub cover: Option<String>,
}
