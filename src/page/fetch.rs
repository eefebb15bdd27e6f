use crate::catalog::model::{BookDetail, BookSummary};
use crate::catalog::source::BookSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub book: Option<BookDetail>,
    pub recommended: Vec<BookSummary>,
}

/// Fetch the book and the recommendations concurrently and wait for both.
///
/// Backend failures are logged and read as "absent" / "empty".
pub async fn fetch_page_data(source: &dyn BookSource, slug: &str, count: usize) -> PageData {
    let (book, recommended) = tokio::join!(source.book_by_slug(slug), source.recommended(count));

    let book = book.unwrap_or_else(|err| {
        tracing::warn!(slug, ?err, "book lookup failed; treating as absent");
        None
    });
    let recommended = recommended.unwrap_or_else(|err| {
        tracing::warn!(count, ?err, "recommendations failed; treating as empty");
        Vec::new()
    });

    PageData { book, recommended }
}
