use serde::{Deserialize, Serialize};

/// Page metadata derived from a request and the matching row count.
///
/// `item_from`/`item_to` are 1-based inclusive bounds of the current page
/// in the sorted order the client receives, not in storage order. Both
/// are 0 when the result set is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub limit: i64,
    pub page: i64,
    pub sort: String,
    pub total_rows: i64,
    pub total_pages: i64,
    pub item_from: i64,
    pub item_to: i64,
}
