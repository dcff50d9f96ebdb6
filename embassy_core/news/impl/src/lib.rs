use embassy_core_news_contracts::{NewsFeatureService, NewsPage, NewsPageQuery};
use embassy_models::{
    locale::Locale,
    news::{find_page_containing_slug, NewsListing},
    pagination::{clamp_page, paginate, parse_page_number, total_pages, PageSize},
};
use embassy_utils::trace_instrument;

pub use crate::catalog::localize_catalog;

mod catalog;

#[derive(Debug, Clone, Copy)]
pub struct NewsFeatureServiceImpl {
    config: NewsFeatureConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsFeatureConfig {
    pub latest_page_size: PageSize,
    pub archive_page_size: PageSize,
}

impl NewsFeatureServiceImpl {
    pub fn new(config: NewsFeatureConfig) -> Self {
        Self { config }
    }
}

impl NewsFeatureService for NewsFeatureServiceImpl {
    #[trace_instrument(skip(self))]
    fn page(&self, locale: Locale, listing: NewsListing, query: NewsPageQuery) -> NewsPage {
        let items = localize_catalog(locale);
        let page_size = match listing {
            NewsListing::Latest => self.config.latest_page_size,
            NewsListing::Archive => self.config.archive_page_size,
        };
        let total_pages = total_pages(items.len(), page_size);

        // a deep link to an item wins over the requested page
        let focus = match listing {
            NewsListing::Archive => query
                .item
                .filter(|slug| !slug.is_empty())
                .and_then(|slug| {
                    find_page_containing_slug(&items, &slug, page_size).map(|page| (slug, page))
                }),
            NewsListing::Latest => None,
        };
        let requested = match &focus {
            Some((_, page)) => *page,
            None => parse_page_number(query.page.as_deref()),
        };
        let page = clamp_page(requested, total_pages);

        NewsPage {
            locale,
            listing,
            items: paginate(&items, page, page_size).to_vec(),
            page,
            total_pages,
            page_size,
            focus: focus.map(|(slug, _)| slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sut() -> NewsFeatureServiceImpl {
        NewsFeatureServiceImpl::new(NewsFeatureConfig {
            latest_page_size: PageSize::try_new(3).unwrap(),
            archive_page_size: PageSize::try_new(6).unwrap(),
        })
    }

    fn query(page: Option<&str>, item: Option<&str>) -> NewsPageQuery {
        NewsPageQuery {
            page: page.map(Into::into),
            item: item.map(Into::into),
        }
    }

    fn slugs(page: &NewsPage) -> Vec<&str> {
        page.items.iter().map(|item| item.slug.as_str()).collect()
    }

    #[test]
    fn latest_first_page() {
        let result = sut().page(Locale::En, NewsListing::Latest, query(None, None));

        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 3);
        assert_eq!(*result.page_size, 3);
        assert_eq!(
            slugs(&result),
            [
                "minister-commerce-meeting",
                "independence-day-reception",
                "consular-hours-update"
            ]
        );
        assert_eq!(result.focus, None);
    }

    #[test]
    fn latest_last_page_is_partial() {
        let result = sut().page(Locale::Ar, NewsListing::Latest, query(Some("3"), None));

        assert_eq!(result.page, 3);
        assert_eq!(
            slugs(&result),
            ["visa-advisory-summer", "diaspora-community-dialogue"]
        );
        assert_eq!(result.items[0].month, "يوليو");
    }

    #[test]
    fn latest_ignores_item() {
        let result = sut().page(
            Locale::En,
            NewsListing::Latest,
            query(Some("2"), Some("diaspora-community-dialogue")),
        );

        assert_eq!(result.page, 2);
        assert_eq!(result.focus, None);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        for (raw, expected) in [("99", 2), ("0", 1), ("-4", 1), ("abc", 1), ("2xyz", 2)] {
            let result = sut().page(Locale::En, NewsListing::Archive, query(Some(raw), None));
            assert_eq!(result.page, expected, "{raw:?}");
            assert!(!result.items.is_empty());
        }
    }

    #[test]
    fn archive_item_takes_precedence() {
        let result = sut().page(
            Locale::En,
            NewsListing::Archive,
            query(Some("1"), Some("visa-advisory-summer")),
        );

        assert_eq!(result.page, 2);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.focus.as_deref(), Some("visa-advisory-summer"));
        assert!(slugs(&result).contains(&"visa-advisory-summer"));
    }

    #[test]
    fn archive_unknown_item_falls_back_to_page() {
        let result = sut().page(
            Locale::En,
            NewsListing::Archive,
            query(Some("2"), Some("no-such-item")),
        );

        assert_eq!(result.page, 2);
        assert_eq!(result.focus, None);
        assert_eq!(
            slugs(&result),
            ["visa-advisory-summer", "diaspora-community-dialogue"]
        );
    }

    #[test]
    fn archive_empty_item_is_ignored() {
        let result = sut().page(Locale::En, NewsListing::Archive, query(None, Some("")));

        assert_eq!(result.page, 1);
        assert_eq!(result.focus, None);
        assert_eq!(result.items.len(), 6);
    }

    #[test]
    fn every_item_is_reachable() {
        let sut = sut();
        for item in localize_catalog(Locale::En) {
            let result = sut.page(
                Locale::En,
                NewsListing::Archive,
                query(None, Some(&item.slug)),
            );
            assert!(result.items.contains(&item), "{}", item.slug);
        }
    }
}
