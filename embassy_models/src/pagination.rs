//! Page arithmetic for the small, in-memory listings of the website.
//!
//! All functions are total: malformed or stale page parameters from public
//! URLs degrade to a valid page instead of producing an error.

use nutype::nutype;

#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        Display,
        Deref,
        TryFrom,
        Serialize,
        Deserialize
    )
)]
pub struct PageSize(usize);

/// Parses a raw `page` query value into a page number `>= 1`.
///
/// Follows integer-prefix semantics: leading whitespace and an optional sign
/// are accepted and anything after the leading digits is ignored (`"3abc"`
/// is page 3). Missing, non-numeric, zero or negative values yield `1`;
/// values that don't fit into a `u64` saturate.
pub fn parse_page_number(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 1;
    };

    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let page = digits.fold(None, |acc: Option<u64>, digit| {
        Some(
            acc.unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0')),
        )
    });

    match page {
        Some(page) if !negative => page.max(1),
        _ => 1,
    }
}

/// Number of pages needed for `len` items. Always at least one, so that an
/// empty listing is "page 1 of 1".
pub fn total_pages(len: usize, page_size: PageSize) -> u64 {
    len.div_ceil(*page_size).max(1) as u64
}

/// Clamps `requested` into `[1, max(total_pages, 1)]`.
pub fn clamp_page(requested: u64, total_pages: u64) -> u64 {
    requested.clamp(1, total_pages.max(1))
}

/// Returns the items on the 1-based `page`, or an empty slice if the page is
/// out of range.
pub fn paginate<T>(items: &[T], page: u64, page_size: PageSize) -> &[T] {
    let start = page
        .checked_sub(1)
        .and_then(|page| page.checked_mul(*page_size as u64))
        .and_then(|start| usize::try_from(start).ok());

    match start {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(*page_size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::try_new(n).unwrap()
    }

    #[test]
    fn page_size_must_be_positive() {
        assert!(PageSize::try_new(0).is_err());
        assert_eq!(*size(6), 6);
    }

    #[test]
    fn parse_page_number_valid() {
        for (input, expected) in [
            ("1", 1),
            ("2", 2),
            ("42", 42),
            ("  7", 7),
            ("+3", 3),
            ("3abc", 3),
            ("2.9", 2),
            ("007", 7),
            ("99999999999999999999999999", u64::MAX),
        ] {
            assert_eq!(parse_page_number(Some(input)), expected, "input: {input:?}");
        }
    }

    #[test]
    fn parse_page_number_fallback() {
        assert_eq!(parse_page_number(None), 1);
        for input in [
            "", "0", "-1", "-0", "-42", "abc", "NaN", "Infinity", " ", "+", "-", "x2",
        ] {
            assert_eq!(parse_page_number(Some(input)), 1, "input: {input:?}");
        }
    }

    #[test]
    fn total_pages_never_zero() {
        assert_eq!(total_pages(0, size(6)), 1);
        assert_eq!(total_pages(1, size(6)), 1);
        assert_eq!(total_pages(6, size(6)), 1);
        assert_eq!(total_pages(7, size(6)), 2);
        assert_eq!(total_pages(8, size(3)), 3);
    }

    #[test]
    fn clamp_page_within_bounds() {
        for total in 1..=5 {
            for requested in [0, 1, 2, 3, 4, 5, 6, 100, u64::MAX] {
                let page = clamp_page(requested, total);
                assert!((1..=total).contains(&page), "{requested} / {total} -> {page}");
            }
        }
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(2, 4), 2);
    }

    #[test]
    fn paginate_slices() {
        let items = (1..=8).collect::<Vec<_>>();
        assert_eq!(paginate(&items, 1, size(3)), [1, 2, 3]);
        assert_eq!(paginate(&items, 2, size(3)), [4, 5, 6]);
        assert_eq!(paginate(&items, 3, size(3)), [7, 8]);
        assert_eq!(paginate(&items, 1, size(10)), items.as_slice());
    }

    #[test]
    fn paginate_out_of_range_is_empty() {
        let items = (1..=8).collect::<Vec<_>>();
        assert!(paginate(&items, 4, size(3)).is_empty());
        assert!(paginate(&items, 0, size(3)).is_empty());
        assert!(paginate(&items, u64::MAX, size(3)).is_empty());
        assert!(paginate::<u8>(&[], 1, size(3)).is_empty());
    }
}
