use embassy_models::{
    locale::Locale,
    news::{NewsItem, NewsListing},
    pagination::PageSize,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NewsFeatureService: Send + Sync + 'static {
    /// Resolve the raw query parameters of a news listing to the page that
    /// should be displayed.
    fn page(&self, locale: Locale, listing: NewsListing, query: NewsPageQuery) -> NewsPage;
}

/// Raw query parameters of a news listing. Both values come straight from
/// public URLs and may be malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsPageQuery {
    pub page: Option<String>,
    /// Slug of an item that should be visible on the resolved page. Only
    /// used by [`NewsListing::Archive`].
    pub item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsPage {
    pub locale: Locale,
    pub listing: NewsListing,
    pub items: Vec<NewsItem>,
    /// 1-based, always within `1..=total_pages`.
    pub page: u64,
    pub total_pages: u64,
    pub page_size: PageSize,
    /// Slug of the item that determined `page`, if any.
    pub focus: Option<String>,
}

#[cfg(feature = "mock")]
impl MockNewsFeatureService {
    pub fn with_page(
        mut self,
        locale: Locale,
        listing: NewsListing,
        query: NewsPageQuery,
        result: NewsPage,
    ) -> Self {
        self.expect_page()
            .once()
            .with(
                mockall::predicate::eq(locale),
                mockall::predicate::eq(listing),
                mockall::predicate::eq(query),
            )
            .return_once(|_, _, _| result);
        self
    }
}
