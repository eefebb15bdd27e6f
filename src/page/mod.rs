//! The book detail page: slug → fetch → existence gate → metadata → view → markup.

pub mod fetch;
pub mod format;
pub mod markup;
pub mod metadata;
pub mod sanitize;
pub mod slug;
pub mod view;

use maud::Markup;

use crate::catalog::model::{BookDetail, BookSummary};
use crate::catalog::source::BookSource;
use crate::config::SiteConfig;
use crate::page::fetch::{PageData, fetch_page_data};
use crate::page::metadata::{PageMetadata, generate_metadata};
use crate::page::view::{BookView, compose_view};

/// Result of the existence gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Existence {
    Found {
        book: BookDetail,
        recommended: Vec<BookSummary>,
    },
    NotFound,
}

impl From<PageData> for Existence {
    fn from(data: PageData) -> Self {
        match data.book {
            Some(book) => Self::Found {
                book,
                recommended: data.recommended,
            },
            None => Self::NotFound,
        }
    }
}

#[derive(Debug)]
pub enum PageOutcome {
    Found(RenderedPage),
    NotFound,
}

#[derive(Debug)]
pub struct RenderedPage {
    pub metadata: PageMetadata,
    pub view: BookView,
    pub markup: Markup,
}

/// Render the page for `slug`.
///
/// `source` should be a per-request [`RequestScope`](crate::catalog::scope::RequestScope)
/// when the backend lookup is expensive; metadata is read through it separately.
pub async fn render_book(source: &dyn BookSource, slug: &str, config: &SiteConfig) -> PageOutcome {
    let data = fetch_page_data(source, slug, config.recommended_count).await;

    let (book, recommended) = match Existence::from(data) {
        Existence::Found { book, recommended } => (book, recommended),
        Existence::NotFound => {
            tracing::info!(slug, "book not found");
            return PageOutcome::NotFound;
        }
    };

    let metadata = generate_metadata(source, slug, config).await;
    let view = compose_view(&book, &recommended, config);
    let markup = markup::render_book_page(&metadata, &view);
    tracing::debug!(slug, recommended = recommended.len(), "rendered book page");

    PageOutcome::Found(RenderedPage {
        metadata,
        view,
        markup,
    })
}
