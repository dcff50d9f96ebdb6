use embassy_core_news_contracts::NewsPage;
use embassy_models::{
    locale::Locale,
    news::{NewsItem, NewsListing},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiNewsPage {
    pub locale: Locale,
    pub dir: &'static str,
    pub listing: NewsListing,
    pub items: Vec<ApiNewsItem>,
    pub page: u64,
    pub total_pages: u64,
    pub page_size: usize,
    pub focus: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiNewsItem {
    pub slug: String,
    pub day: String,
    pub month: String,
    pub title: String,
    pub excerpt: String,
}

impl From<NewsPage> for ApiNewsPage {
    fn from(value: NewsPage) -> Self {
        Self {
            locale: value.locale,
            dir: if value.locale.is_rtl() { "rtl" } else { "ltr" },
            listing: value.listing,
            items: value.items.into_iter().map(Into::into).collect(),
            page: value.page,
            total_pages: value.total_pages,
            page_size: *value.page_size,
            focus: value.focus,
        }
    }
}

impl From<NewsItem> for ApiNewsItem {
    fn from(value: NewsItem) -> Self {
        Self {
            slug: value.slug,
            day: value.day,
            month: value.month,
            title: value.title,
            excerpt: value.excerpt,
        }
    }
}
