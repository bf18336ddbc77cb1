use domain::query::PageInfo;

/// `ceil(total_count / limit)`; zero matches means zero pages.
pub fn max_page(total_count: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_count.div_ceil(limit)
}

/// Build pagination metadata once the store has counted the matches.
///
/// `next_cursor` is always `page + 1`; whether it is surfaced is decided
/// by [`PageInfo::cursor`].
pub fn resolve(page: u64, limit: u64, total_count: u64) -> PageInfo {
    PageInfo {
        total_count,
        max_page: max_page(total_count, limit),
        next_cursor: page.saturating_add(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_page_rounds_up() {
        assert_eq!(max_page(95, 10), 10);
        assert_eq!(max_page(100, 10), 10);
        assert_eq!(max_page(101, 10), 11);
        assert_eq!(max_page(1, 10), 1);
    }

    #[test]
    fn max_page_is_zero_without_matches() {
        assert_eq!(max_page(0, 10), 0);
    }

    #[test]
    fn resolve_computes_next_cursor() {
        let info = resolve(1, 10, 95);
        assert_eq!(
            info,
            PageInfo {
                total_count: 95,
                max_page: 10,
                next_cursor: 2,
            }
        );
        assert_eq!(info.cursor(), Some(2));
    }

    #[test]
    fn cursor_hidden_on_last_page() {
        let info = resolve(10, 10, 95);
        assert_eq!(info.next_cursor, 11);
        assert_eq!(info.cursor(), None);
    }

    #[test]
    fn cursor_hidden_for_empty_results() {
        let info = resolve(1, 10, 0);
        assert_eq!(info.max_page, 0);
        assert_eq!(info.cursor(), None);
    }
}
