use serde::{Deserialize, Serialize};

/// HATEOAS navigation links for one page of results.
///
/// `previous` and `next` are empty strings when there is no such page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLinks {
    pub first: String,
    pub previous: String,
    pub next: String,
    pub last: String,
}
