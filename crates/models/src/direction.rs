use serde::{Deserialize, Serialize};

/// Sort direction for a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Parse a raw direction string, case-insensitively.
    ///
    /// Anything that is not `"desc"` (including the empty string) resolves
    /// to `Ascending`; unrecognized input is normalized, never rejected.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    /// SQL keyword for an `ORDER BY` clause.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Ascending => "ASC",
            Direction::Descending => "DESC",
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, Direction::Descending)
    }
}
