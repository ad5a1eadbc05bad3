/// Upper bound on page size for every paginated endpoint.
pub const MAX_PER_PAGE: u64 = 100;

/// Default page size when the client does not ask for one.
pub const DEFAULT_PER_PAGE: u64 = 20;

/// Clamps a requested page size into `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(entries: u64) -> u64 {
    entries.clamp(1, MAX_PER_PAGE)
}

/// Number of pages needed to show `total` items `per_page` at a time.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_page_size() {
        assert_eq!(clamp_per_page(0), 1);
        assert_eq!(clamp_per_page(20), 20);
        assert_eq!(clamp_per_page(1000), MAX_PER_PAGE);
    }

    #[test]
    fn computes_total_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 0);
    }
}
