//! SQL fragment helpers for the data-fetching collaborator.
//!
//! Only fragment text is produced here; parameter binding and field
//! whitelisting stay with the collaborator that runs the query.

use models::Direction;

use crate::window;

/// `LIMIT n OFFSET m` for raw, possibly-unnormalized input.
///
/// `limit == 0 && page == 0` is the "no pagination requested" sentinel
/// and collapses to an empty fragment; a zero page alone still floors to
/// page 1.
pub fn limit_offset_clause(limit: i64, page: i64) -> String {
    if limit == 0 && page == 0 {
        return String::new();
    }
    let page = if page == 0 { 1 } else { page };
    format!("LIMIT {} OFFSET {}", limit, window::offset(limit, page))
}

/// `ORDER BY <sort> <ASC|DESC>` for the requested ordering.
pub fn order_by_clause(sort: &str, direction: Direction) -> String {
    format!("ORDER BY {} {}", sort, direction.as_sql())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_yields_empty_fragment() {
        assert_eq!(limit_offset_clause(0, 0), "");
    }

    #[test]
    fn zero_page_alone_floors_to_first_page() {
        assert_eq!(limit_offset_clause(5, 0), "LIMIT 5 OFFSET 0");
    }

    #[test]
    fn offset_advances_with_page() {
        assert_eq!(limit_offset_clause(5, 1), "LIMIT 5 OFFSET 0");
        assert_eq!(limit_offset_clause(5, 3), "LIMIT 5 OFFSET 10");
    }

    #[test]
    fn order_by_uses_direction_keyword() {
        assert_eq!(
            order_by_clause("created_at", Direction::Descending),
            "ORDER BY created_at DESC"
        );
        assert_eq!(
            order_by_clause("name", Direction::Ascending),
            "ORDER BY name ASC"
        );
    }
}
