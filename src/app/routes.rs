use std::collections::HashMap;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::app::state::AppState;
use crate::page::markup::render_not_found;
use crate::page::metadata::generate_metadata;
use crate::page::slug::resolve_slug;
use crate::page::{PageOutcome, render_book};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok\n" }))
        .route("/book/:slug", get(book_page))
        .route("/book/:slug/metadata", get(book_metadata))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn book_page(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
) -> Response {
    let Some(slug) = resolve_slug(&params) else {
        return not_found().await;
    };
    tracing::debug!(%slug, "render book page");

    let scope = state.request_scope();
    match render_book(&scope, slug.as_str(), &state.config).await {
        PageOutcome::Found(page) => {
            let mut resp = page.markup.into_response();
            resp.headers_mut().insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache"),
            );
            resp
        }
        PageOutcome::NotFound => not_found().await,
    }
}

async fn book_metadata(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
) -> Response {
    let Some(slug) = resolve_slug(&params) else {
        return (StatusCode::NOT_FOUND, "slug is required").into_response();
    };
    tracing::debug!(%slug, "book metadata");

    let scope = state.request_scope();
    let metadata = generate_metadata(&scope, slug.as_str(), &state.config).await;
    Json(metadata).into_response()
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, render_not_found()).into_response()
}
