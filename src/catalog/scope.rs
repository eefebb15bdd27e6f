use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::catalog::model::{BookDetail, BookSummary};
use crate::catalog::source::BookSource;

/// A [`BookSource`] view that lives for one request and memoizes slug lookups.
///
/// The page render and the metadata entry point each ask for the book on their
/// own; inside one scope the backend sees a single lookup per slug. Failed
/// lookups are not memoized. A scope must not outlive its request.
pub struct RequestScope {
    inner: Arc<dyn BookSource>,
    books: Mutex<HashMap<String, Arc<OnceCell<Option<BookDetail>>>>>,
}

impl RequestScope {
    pub fn new(inner: Arc<dyn BookSource>) -> Self {
        Self {
            inner,
            books: Mutex::new(HashMap::new()),
        }
    }

    fn cell(&self, slug: &str) -> Arc<OnceCell<Option<BookDetail>>> {
        let mut books = self
            .books
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Arc::clone(books.entry(slug.to_owned()).or_default())
    }
}

#[async_trait]
impl BookSource for RequestScope {
    async fn book_by_slug(&self, slug: &str) -> anyhow::Result<Option<BookDetail>> {
        let cell = self.cell(slug);
        let book = cell
            .get_or_try_init(|| self.inner.book_by_slug(slug))
            .await?;
        Ok(book.clone())
    }

    async fn recommended(&self, count: usize) -> anyhow::Result<Vec<BookSummary>> {
        self.inner.recommended(count).await
    }
}
