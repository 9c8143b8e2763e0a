use serde::{Deserialize, Serialize};

/// Raw pagination query parameters as an HTTP layer binds them.
///
/// Absent `limit`/`page` deserialize to 0 and are normalized downstream;
/// absent `sort` falls back to `created_at`, absent `direction` to the
/// empty string (which resolves to ascending).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawPageParams {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default)]
    pub direction: String,
}

fn default_sort() -> String {
    "created_at".to_string()
}

impl Default for RawPageParams {
    fn default() -> Self {
        Self {
            limit: 0,
            page: 0,
            sort: default_sort(),
            direction: String::new(),
        }
    }
}
