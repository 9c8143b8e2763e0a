use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::errors::PageError;

/// Validated, normalized pagination parameters for one request.
///
/// Built once from raw query input, immutable afterwards. After `build`
/// succeeds the invariants hold: `limit` is in `1..=max_limit` and
/// `page >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: i64,
    pub page: i64,
    pub sort: String,
    pub direction: Direction,
}

impl PageRequest {
    /// Validate and normalize raw pagination input.
    ///
    /// Negative `limit` or `page` is rejected; everything else is
    /// normalized: `limit` of zero or above `max_limit` falls back to
    /// `max_limit`, `page` of zero becomes 1, and `direction` resolves
    /// case-insensitively with `Ascending` as the catch-all.
    ///
    /// # Examples
    /// ```
    /// use models::{Direction, PageRequest};
    /// let req = PageRequest::build(0, 0, "created_at", "desc", 10).unwrap();
    /// assert_eq!(req.limit, 10);
    /// assert_eq!(req.page, 1);
    /// assert_eq!(req.direction, Direction::Descending);
    /// ```
    pub fn build(
        limit: i64,
        page: i64,
        sort: &str,
        direction: &str,
        max_limit: i64,
    ) -> Result<PageRequest, PageError> {
        if limit < 0 {
            return Err(PageError::InvalidLimit(limit));
        }
        if page < 0 {
            return Err(PageError::InvalidPage(page));
        }

        let limit = if limit == 0 || limit > max_limit {
            max_limit
        } else {
            limit
        };
        let page = if page == 0 { 1 } else { page };

        Ok(PageRequest {
            limit,
            page,
            sort: sort.to_string(),
            direction: Direction::parse(direction),
        })
    }
}
