use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::page::metadata::PageMetadata;
use crate::page::view::{BookView, DetailItem, RecommendationCard};

pub const ORDER_LABEL: &str = "Pesan via WhatsApp";

fn head(meta: &PageMetadata) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (meta.title) }
            @if let Some(description) = &meta.description {
                meta name="description" content=(description);
            }
            @if let Some(og) = &meta.open_graph {
                meta property="og:title" content=(og.title);
                @if let Some(description) = &og.description {
                    meta property="og:description" content=(description);
                }
                meta property="og:image" content=(og.image);
            }
        }
    }
}

fn detail_item(item: &DetailItem) -> Markup {
    html! {
        div class="detail-item" {
            dt class="text-sm text-gray-500" { (item.label) }
            dd class="font-medium text-gray-800" { (item.value) }
        }
    }
}

fn recommendation(card: &RecommendationCard) -> Markup {
    html! {
        li class="recommendation" {
            a href=(card.href) {
                img src=(card.cover_url) alt=(card.title) width="200" height="300" loading="lazy";
                span class="recommendation-title" { (card.title) }
                span class="recommendation-price" { (card.price) }
            }
        }
    }
}

pub fn render_book_page(meta: &PageMetadata, view: &BookView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            (head(meta))
            body {
                section class="book-detail" {
                    div class="book-cover" {
                        img src=(view.cover_url) title=(view.title) alt=(view.title) width="500" height="750";
                    }
                    div class="book-info" {
                        h1 class="book-title" { (view.title) }
                        @if let Some(subtitle) = &view.subtitle {
                            p class="book-subtitle" { (subtitle) }
                        }
                        @if !view.badges.is_empty() {
                            div class="book-categories" {
                                @for badge in &view.badges {
                                    span class="badge badge-outline badge-primary" { (badge) }
                                }
                            }
                        }
                        @if let Some(authors) = &view.authors {
                            p class="book-authors" {
                                "ditulis oleh "
                                span class="font-semibold" { (authors) }
                            }
                        }
                        div class="book-price" {
                            span class="price" { (view.price) }
                        }
                        a class="order-button" href=(view.order_url) target="_blank" rel="noopener noreferrer" {
                            span { (ORDER_LABEL) }
                        }
                        hr;
                        h2 { "Detail Buku" }
                        dl class="book-details" {
                            @for item in &view.details {
                                (detail_item(item))
                            }
                        }
                        @if let Some(description) = &view.description_html {
                            hr;
                            h2 { "Deskripsi" }
                            div class="book-description prose" {
                                (PreEscaped(description))
                            }
                        }
                    }
                }
                @if !view.recommendations.is_empty() {
                    section class="book-recommendations" {
                        h2 { "Rekomendasi Buku" }
                        ul {
                            @for card in &view.recommendations {
                                (recommendation(card))
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_not_found() -> Markup {
    let meta = PageMetadata::not_found();
    html! {
        (DOCTYPE)
        html lang="id" {
            (head(&meta))
            body {
                section class="not-found" {
                    h1 { "404" }
                    p { (meta.title) }
                    a href="/" { "Kembali ke beranda" }
                }
            }
        }
    }
}
