//! Windower: converts a normalized request plus a row count into the
//! offset the data layer needs and the metadata the client sees.

use models::{Direction, PageRequest, PageResult};

/// Row offset for a normalized `(limit, page)` pair.
///
/// Callers must normalize first (`page >= 1`); `offset(limit, 1)` is 0.
pub fn offset(limit: i64, page: i64) -> i64 {
    page * limit - limit
}

/// Compute page metadata for the window the client receives.
///
/// `item_from`/`item_to` describe the page in sorted client order: for
/// descending listings the window is counted backward from `total_rows`,
/// so page 1 still covers the first rows returned. A `page` beyond the
/// last page is not clamped; the caller renders the empty window instead
/// of failing.
///
/// # Examples
/// ```
/// use models::PageRequest;
/// use service::window::paginate;
/// let req = PageRequest::build(10, 3, "created_at", "asc", 10).unwrap();
/// let meta = paginate(&req, 25);
/// assert_eq!(meta.total_pages, 3);
/// assert_eq!((meta.item_from, meta.item_to), (21, 25));
/// ```
pub fn paginate(req: &PageRequest, total_rows: i64) -> PageResult {
    let mut result = PageResult {
        limit: req.limit,
        page: req.page,
        sort: req.sort.clone(),
        total_rows,
        total_pages: 0,
        item_from: 0,
        item_to: 0,
    };

    if total_rows == 0 {
        return result;
    }

    result.total_pages = (total_rows + req.limit - 1) / req.limit;

    let (from_row, to_row) = match req.direction {
        Direction::Ascending => {
            let from = (req.page - 1) * req.limit;
            let to = (from + req.limit).min(total_rows);
            (from, to)
        }
        Direction::Descending => {
            let to = total_rows - (req.page - 1) * req.limit;
            let from = (to - req.limit).max(0);
            (from, to)
        }
    };

    result.item_from = from_row + 1;
    result.item_to = to_row;
    result
}
