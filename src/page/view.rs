use percent_encoding::utf8_percent_encode;

use crate::catalog::model::{BookDetail, BookSummary};
use crate::catalog::source::PATH_SEGMENT;
use crate::config::SiteConfig;
use crate::page::format::{cover_url, format_date_id, format_rupiah, whatsapp_link};
use crate::page::sanitize::sanitize_description;

pub const AUTHOR_SEPARATOR: &str = ", ";
pub const MISSING_VALUE: &str = "-";

/// Everything the book page shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookView {
    pub title: String,
    pub cover_url: String,
    /// Publish date plus optional ISBN suffix; `None` when neither is known.
    pub subtitle: Option<String>,
    pub badges: Vec<String>,
    pub authors: Option<String>,
    pub price: String,
    pub order_url: String,
    pub details: Vec<DetailItem>,
    /// Sanitized; safe to embed without escaping.
    pub description_html: Option<String>,
    pub recommendations: Vec<RecommendationCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCard {
    pub href: String,
    pub title: String,
    pub cover_url: String,
    pub price: String,
}

pub fn compose_view(
    book: &BookDetail,
    recommended: &[BookSummary],
    config: &SiteConfig,
) -> BookView {
    let labels = book
        .categories
        .iter()
        .map(|c| c.label.clone())
        .collect::<Vec<_>>();

    BookView {
        title: book.title.clone(),
        cover_url: cover_url(&config.storage_base_url, book.cover.as_deref()),
        subtitle: subtitle(book, config),
        authors: author_line(book),
        price: format_rupiah(book.price),
        order_url: whatsapp_link(&config.contact_number, &book.title),
        details: vec![
            DetailItem {
                label: "ISBN",
                value: book.isbn.clone().unwrap_or_else(|| MISSING_VALUE.to_owned()),
            },
            DetailItem {
                label: "Kategori",
                value: if labels.is_empty() {
                    MISSING_VALUE.to_owned()
                } else {
                    labels.join(AUTHOR_SEPARATOR)
                },
            },
        ],
        badges: labels,
        description_html: book
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(sanitize_description),
        recommendations: recommended
            .iter()
            .filter(|r| r.slug != book.slug && !r.slug.is_empty())
            .take(config.recommended_count)
            .map(|r| RecommendationCard {
                href: format!("/book/{}", utf8_percent_encode(&r.slug, PATH_SEGMENT)),
                title: r.title.clone(),
                cover_url: cover_url(&config.storage_base_url, r.cover.as_deref()),
                price: format_rupiah(r.price),
            })
            .collect(),
    }
}

fn subtitle(book: &BookDetail, config: &SiteConfig) -> Option<String> {
    let date = book
        .created_at
        .map(|at| format_date_id(at, config.utc_offset()));
    match (date, book.isbn.as_deref()) {
        (None, None) => None,
        (Some(date), None) => Some(date),
        (None, Some(isbn)) => Some(format!("ISBN: {isbn}")),
        (Some(date), Some(isbn)) => Some(format!("{date} | ISBN: {isbn}")),
    }
}

/// Resolved author names joined; `None` when nothing resolves.
pub fn author_line(book: &BookDetail) -> Option<String> {
    let names = book
        .authors
        .iter()
        .filter_map(|a| a.name.as_deref())
        .collect::<Vec<_>>();
    if names.is_empty() {
        return None;
    }
    Some(names.join(AUTHOR_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::wire::parse_book;

    fn book(json: &str) -> BookDetail {
        parse_book(json).unwrap()
    }

    #[test]
    fn author_line_skips_unresolved_names() {
        let b = book(
            r#"{"book_authors": [
                {"book_writter": {"name": "A"}},
                {"book_writter": {"name": null}},
                {"book_writter": {"name": "B"}}
            ]}"#,
        );
        assert_eq!(author_line(&b).as_deref(), Some("A, B"));
    }

    #[test]
    fn author_line_absent_when_nothing_resolves() {
        let none = book(r#"{"book_authors": [{"book_writter": null}, {}]}"#);
        let empty = book(r#"{"book_authors": []}"#);
        assert_eq!(author_line(&none), None);
        assert_eq!(author_line(&empty), None);
    }

    #[test]
    fn badges_follow_category_order() {
        let b = book(
            r#"{"categories": [
                {"id": 3, "category": "Sejarah"},
                {"id": 1, "category": "Fiksi"},
                {"id": 2, "category": "Anak"}
            ]}"#,
        );
        let view = compose_view(&b, &[], &SiteConfig::default());
        assert_eq!(view.badges, vec!["Sejarah", "Fiksi", "Anak"]);
        assert_eq!(view.details[1].value, "Sejarah, Fiksi, Anak");
    }

    #[test]
    fn empty_fields_fall_back() {
        let b = book(r#"{"slug": "x", "title": "X", "description": "   "}"#);
        let view = compose_view(&b, &[], &SiteConfig::default());

        assert!(view.badges.is_empty());
        assert_eq!(view.subtitle, None);
        assert_eq!(view.price, "Rp. 0");
        assert_eq!(view.description_html, None);
        assert_eq!(view.cover_url, "http://127.0.0.1:8000/storage/no-image.png");
        assert_eq!(view.details[0].value, "-");
        assert_eq!(view.details[1].value, "-");
    }

    #[test]
    fn subtitle_combines_date_and_isbn() {
        let b = book(r#"{"created_at": "2024-08-17T03:00:00Z", "isbn": "978-602"}"#);
        let view = compose_view(&b, &[], &SiteConfig::default());
        assert_eq!(
            view.subtitle.as_deref(),
            Some("17 Agustus 2024 | ISBN: 978-602")
        );
    }

    #[test]
    fn recommendations_exclude_current_book() {
        let current = book(r#"{"slug": "a", "title": "A"}"#);
        let others = ["a", "b", "c"]
            .iter()
            .map(|s| book(&format!(r#"{{"slug": "{s}", "price": 10000}}"#)).summary())
            .collect::<Vec<_>>();

        let view = compose_view(&current, &others, &SiteConfig::default());
        let hrefs = view
            .recommendations
            .iter()
            .map(|r| r.href.as_str())
            .collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["/book/b", "/book/c"]);
        assert_eq!(view.recommendations[0].price, "Rp10.000");
    }

    #[test]
    fn recommendation_links_escape_slug() {
        let current = book(r#"{"slug": "a", "title": "A"}"#);
        let others = vec![book(r#"{"slug": "buku #1?edisi=2", "title": "B"}"#).summary()];

        let view = compose_view(&current, &others, &SiteConfig::default());
        assert_eq!(view.recommendations[0].href, "/book/buku%20%231%3Fedisi=2");
    }
}
