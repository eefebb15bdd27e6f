use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::StatusCode;

use crate::catalog::model::{BookDetail, BookSummary};
use crate::catalog::wire::{self, RawBook};

/// Characters escaped when a slug is placed in a single path segment.
pub(crate) const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[async_trait]
pub trait BookSource: Send + Sync {
    async fn book_by_slug(&self, slug: &str) -> anyhow::Result<Option<BookDetail>>;
    async fn recommended(&self, count: usize) -> anyhow::Result<Vec<BookSummary>>;
}

/// Catalog backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBookSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookSource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        let parsed = url::Url::parse(&base_url)
            .with_context(|| format!("invalid catalog api url: {base_url}"))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("catalog api url must be http/https: {base_url}");
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build catalog http client")?;
        Ok(Self { base_url, client })
    }

    fn book_url(&self, slug: &str) -> String {
        let slug = utf8_percent_encode(slug, PATH_SEGMENT);
        format!("{}/books/{slug}", self.base_url)
    }

    fn recommended_url(&self, count: usize) -> String {
        format!("{}/books/recommended?limit={count}", self.base_url)
    }

    async fn get_text(&self, url: &str) -> anyhow::Result<Option<String>> {
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("catalog api error ({status}): {body}");
        }
        let text = resp.text().await.context("read catalog response body")?;
        Ok(Some(text))
    }
}

#[async_trait]
impl BookSource for HttpBookSource {
    async fn book_by_slug(&self, slug: &str) -> anyhow::Result<Option<BookDetail>> {
        let url = self.book_url(slug);
        let Some(body) = self.get_text(&url).await? else {
            return Ok(None);
        };
        let book = wire::parse_book(&body).with_context(|| format!("parse book: {url}"))?;
        Ok(Some(book))
    }

    async fn recommended(&self, count: usize) -> anyhow::Result<Vec<BookSummary>> {
        let url = self.recommended_url(count);
        let Some(body) = self.get_text(&url).await? else {
            return Ok(Vec::new());
        };
        let books = wire::parse_books(&body).with_context(|| format!("parse books: {url}"))?;
        Ok(books
            .into_iter()
            .map(RawBook::into_summary)
            .take(count)
            .collect())
    }
}

/// In-memory catalog, e.g. loaded from an exported JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticBookSource {
    books: Vec<BookDetail>,
}

impl StaticBookSource {
    pub fn new(books: Vec<BookDetail>) -> Self {
        Self { books }
    }

    /// Load a JSON array of books, bare or inside a `{ "data": [...] }` envelope.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let body = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read catalog: {}", path.display()))?;
        let books = wire::parse_books(&body)
            .with_context(|| format!("parse catalog: {}", path.display()))?;
        let books = books.into_iter().map(RawBook::into_detail).collect::<Vec<_>>();
        tracing::info!(path = %path.display(), books = books.len(), "loaded static catalog");
        Ok(Self::new(books))
    }
}

#[async_trait]
impl BookSource for StaticBookSource {
    async fn book_by_slug(&self, slug: &str) -> anyhow::Result<Option<BookDetail>> {
        Ok(self.books.iter().find(|b| b.slug == slug).cloned())
    }

    async fn recommended(&self, count: usize) -> anyhow::Result<Vec<BookSummary>> {
        Ok(self
            .books
            .iter()
            .take(count)
            .map(BookDetail::summary)
            .collect())
    }
}
