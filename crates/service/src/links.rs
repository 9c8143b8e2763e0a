//! Navigation link builder: first/previous/next/last URIs for one page.

use models::{NavigationLinks, PageRequest};

fn page_uri(base_path: &str, limit: i64, page: i64, sort: &str) -> String {
    format!("{base_path}?limit={limit}&page={page}&sort={sort}")
}

/// Build navigation links for the current page.
///
/// `previous` is emitted for `page > 1` and `next` for
/// `page < total_pages`, otherwise they stay empty. An out-of-range page
/// (`page > total_pages`) never advertises `previous`, while `next` is
/// left as computed; this asymmetry mirrors the long-standing observed
/// behavior and is pinned by tests.
pub fn build_links(req: &PageRequest, total_pages: i64, base_path: &str) -> NavigationLinks {
    let mut links = NavigationLinks {
        first: page_uri(base_path, req.limit, 1, &req.sort),
        previous: String::new(),
        next: String::new(),
        last: page_uri(base_path, req.limit, total_pages, &req.sort),
    };

    if req.page > 1 {
        links.previous = page_uri(base_path, req.limit, req.page - 1, &req.sort);
    }
    if req.page < total_pages {
        links.next = page_uri(base_path, req.limit, req.page + 1, &req.sort);
    }
    if req.page > total_pages {
        links.previous = String::new();
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::PageRequest;

    fn req(page: i64) -> PageRequest {
        PageRequest::build(10, page, "created_at", "", 10).unwrap()
    }

    #[test]
    fn first_and_last_are_always_present() {
        let links = build_links(&req(1), 3, "/invoices");
        assert_eq!(links.first, "/invoices?limit=10&page=1&sort=created_at");
        assert_eq!(links.last, "/invoices?limit=10&page=3&sort=created_at");
    }

    #[test]
    fn first_page_has_no_previous() {
        let links = build_links(&req(1), 3, "/invoices");
        assert_eq!(links.previous, "");
        assert_eq!(links.next, "/invoices?limit=10&page=2&sort=created_at");
    }

    #[test]
    fn middle_page_has_both_neighbors() {
        let links = build_links(&req(2), 3, "/invoices");
        assert_eq!(links.previous, "/invoices?limit=10&page=1&sort=created_at");
        assert_eq!(links.next, "/invoices?limit=10&page=3&sort=created_at");
    }

    #[test]
    fn last_page_has_no_next() {
        let links = build_links(&req(3), 3, "/invoices");
        assert_eq!(links.next, "");
        assert_eq!(links.previous, "/invoices?limit=10&page=2&sort=created_at");
    }

    #[test]
    fn out_of_range_page_drops_previous() {
        let links = build_links(&req(5), 3, "/invoices");
        // page 5 of 3: previous is forced empty even though page > 1
        assert_eq!(links.previous, "");
        assert_eq!(links.next, "");
    }
}
