use std::collections::HashMap;
use std::fmt;

/// Route parameter the book identifier is read from.
pub const SLUG_PARAM: &str = "slug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Presence is the only check; unknown slugs are the catalog's problem.
pub fn resolve_slug(params: &HashMap<String, String>) -> Option<Slug> {
    let slug = params.get(SLUG_PARAM)?.trim();
    if slug.is_empty() {
        return None;
    }
    Some(Slug(slug.to_owned()))
}
