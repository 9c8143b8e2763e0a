use async_trait::async_trait;

use crate::errors::ServiceError;

/// Data-fetch collaborator behind a paginated listing.
///
/// The engine only hands over the computed `limit`/`offset` pair and the
/// `ORDER BY` fragment; query construction, binding, and execution are
/// the implementor's concern.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Row: Send + Sync;

    /// Count of all logical rows matching the listing, independent of paging.
    async fn count(&self) -> Result<i64, ServiceError>;

    /// Fetch one page of rows in the requested order.
    async fn fetch(
        &self,
        limit: i64,
        offset: i64,
        order_by: &str,
    ) -> Result<Vec<Self::Row>, ServiceError>;
}

/// Simple in-memory source for tests and doc examples
pub mod mock {
    use super::*;

    /// Serves pages out of a `Vec`, treating insertion order as ascending
    /// sort order. A `DESC` order-by fragment reverses it.
    pub struct MockPageSource<T> {
        rows: Vec<T>,
    }

    impl<T> MockPageSource<T> {
        pub fn new(rows: Vec<T>) -> Self {
            Self { rows }
        }
    }

    #[async_trait]
    impl<T: Clone + Send + Sync> PageSource for MockPageSource<T> {
        type Row = T;

        async fn count(&self) -> Result<i64, ServiceError> {
            Ok(self.rows.len() as i64)
        }

        async fn fetch(
            &self,
            limit: i64,
            offset: i64,
            order_by: &str,
        ) -> Result<Vec<Self::Row>, ServiceError> {
            let mut rows = self.rows.clone();
            if order_by.trim_end().ends_with("DESC") {
                rows.reverse();
            }
            Ok(rows
                .into_iter()
                .skip(offset.max(0) as usize)
                .take(limit.max(0) as usize)
                .collect())
        }
    }
}
