use std::collections::HashSet;
use std::sync::LazyLock;

use ammonia::Builder;

/// Maximum length (in characters) of the plain-text description used in page metadata.
pub const METADATA_DESCRIPTION_CHARS: usize = 160;

static DESCRIPTION_POLICY: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .url_schemes(HashSet::from(["http", "https", "mailto"]))
        .link_rel(Some("noopener noreferrer nofollow"));
    builder
});

static TEXT_ONLY: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::empty();
    builder.clean_content_tags(HashSet::from(["script", "style"]));
    builder
});

/// Clean author-supplied description HTML for direct embedding in the page.
///
/// Scripts, styles, frames and `on*` handlers are dropped; rich-text markup
/// (paragraphs, emphasis, lists, headings, tables, links, images) is kept.
pub fn sanitize_description(raw: &str) -> String {
    DESCRIPTION_POLICY.clean(raw).to_string()
}

/// Plain-text projection of the description for `<meta>` tags.
pub fn description_text(raw: &str) -> String {
    // Tags become word breaks so adjacent blocks don't run together.
    let escaped = TEXT_ONLY.clean(&raw.replace('<', " <")).to_string();
    // html5ever escapes exactly these four in text nodes.
    let text = escaped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&text, METADATA_DESCRIPTION_CHARS)
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}
