use serde::Serialize;

use crate::pagination::PageSize;

/// One announcement of the news archive, already projected into a display
/// locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// Stable identifier, used as the anchor for deep links.
    pub slug: String,
    pub day: String,
    pub month: String,
    pub title: String,
    pub excerpt: String,
}

/// Listings of the website that show news items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsListing {
    /// "Latest news" section of the home page.
    Latest,
    /// The paginated news archive.
    Archive,
}

/// Returns the 1-based page on which the first item with the given `slug`
/// appears.
pub fn find_page_containing_slug(
    items: &[NewsItem],
    slug: &str,
    page_size: PageSize,
) -> Option<u64> {
    items
        .iter()
        .position(|item| item.slug == slug)
        .map(|index| (index / *page_size) as u64 + 1)
}
