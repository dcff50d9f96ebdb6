use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing, Json, Router,
};
use embassy_core_news_contracts::{NewsFeatureService, NewsPageQuery};
use embassy_models::{locale::Locale, news::NewsListing};

use crate::models::news::ApiNewsPage;

pub fn router(service: Arc<impl NewsFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/news", routing::get(archive))
        .route("/api/news/latest", routing::get(latest))
        .with_state(service)
}

type RawQuery = Query<Vec<(String, String)>>;

async fn archive(
    service: State<Arc<impl NewsFeatureService>>,
    Query(query): RawQuery,
) -> Json<ApiNewsPage> {
    let page = service.page(
        locale(&query),
        NewsListing::Archive,
        NewsPageQuery {
            page: first(&query, "page"),
            item: first(&query, "item"),
        },
    );
    Json(page.into())
}

async fn latest(
    service: State<Arc<impl NewsFeatureService>>,
    Query(query): RawQuery,
) -> Json<ApiNewsPage> {
    let page = service.page(
        locale(&query),
        NewsListing::Latest,
        NewsPageQuery {
            page: first(&query, "newsPage"),
            item: None,
        },
    );
    Json(page.into())
}

fn locale(query: &[(String, String)]) -> Locale {
    Locale::normalize(first(query, "locale").as_deref().unwrap_or_default())
}

/// Repeated query parameters are reduced to their first value.
fn first(query: &[(String, String)], key: &str) -> Option<String> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.clone())
}
