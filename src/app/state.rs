use std::sync::Arc;

use crate::catalog::scope::RequestScope;
use crate::catalog::source::BookSource;
use crate::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn BookSource>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(source: Arc<dyn BookSource>, config: SiteConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }

    /// Fresh memoizing view over the catalog for a single request.
    pub fn request_scope(&self) -> RequestScope {
        RequestScope::new(Arc::clone(&self.source))
    }
}
