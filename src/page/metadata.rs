use serde::Serialize;

use crate::catalog::model::BookDetail;
use crate::catalog::source::BookSource;
use crate::config::SiteConfig;
use crate::page::format::cover_url;
use crate::page::sanitize::description_text;

pub const NOT_FOUND_TITLE: &str = "Buku Tidak Ditemukan";

/// Document head and social-preview values for one book page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub open_graph: Option<OpenGraph>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: Option<String>,
    pub image: String,
}

impl PageMetadata {
    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_owned(),
            description: None,
            open_graph: None,
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.open_graph.as_ref().map(|og| og.image.as_str())
    }
}

pub fn synthesize_metadata(book: Option<&BookDetail>, config: &SiteConfig) -> PageMetadata {
    let Some(book) = book else {
        return PageMetadata::not_found();
    };

    let description = book
        .description
        .as_deref()
        .map(description_text)
        .filter(|d| !d.is_empty());

    PageMetadata {
        title: format!("{} | {}", book.title, config.site_name),
        description: description.clone(),
        open_graph: Some(OpenGraph {
            title: book.title.clone(),
            description,
            image: cover_url(&config.storage_base_url, book.cover.as_deref()),
        }),
    }
}

/// Metadata entry point; reads the book on its own rather than sharing the render path's result.
pub async fn generate_metadata(
    source: &dyn BookSource,
    slug: &str,
    config: &SiteConfig,
) -> PageMetadata {
    let book = source.book_by_slug(slug).await.unwrap_or_else(|err| {
        tracing::warn!(slug, ?err, "metadata lookup failed; using placeholder");
        None
    });
    synthesize_metadata(book.as_ref(), config)
}
