use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use common::types::RawPageParams;
use configs::PagingConfig;
use models::{NavigationLinks, PageRequest, PageResult};

use crate::errors::ServiceError;
use crate::source::PageSource;
use crate::{links, query, window};

/// Response envelope for one page of results.
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub meta: PageResult,
    pub links: NavigationLinks,
}

/// Listing service independent of web framework: turns raw pagination
/// input into a fetched, windowed, linked page over a `PageSource`.
pub struct PageService<S: PageSource> {
    source: Arc<S>,
    cfg: PagingConfig,
}

impl<S: PageSource> PageService<S> {
    pub fn new(source: Arc<S>, cfg: PagingConfig) -> Self {
        Self { source, cfg }
    }

    /// Validate and normalize raw query parameters against the configured
    /// page-size cap, falling back to the configured sort field when the
    /// caller supplies none.
    pub fn build_request(&self, params: &RawPageParams) -> Result<PageRequest, ServiceError> {
        let sort = if params.sort.trim().is_empty() {
            &self.cfg.default_sort
        } else {
            &params.sort
        };
        let req = PageRequest::build(
            params.limit,
            params.page,
            sort,
            &params.direction,
            self.cfg.max_limit,
        )?;
        Ok(req)
    }

    /// Serve one page: count, fetch, window, link.
    ///
    /// A well-formed page number past the last page is not an error; it
    /// yields an empty data set with out-of-range metadata.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use common::types::RawPageParams;
    /// use configs::PagingConfig;
    /// use service::source::mock::MockPageSource;
    /// use service::PageService;
    /// let source = Arc::new(MockPageSource::new((1..=25).collect::<Vec<i64>>()));
    /// let svc = PageService::new(source, PagingConfig::default());
    /// let params = RawPageParams { limit: 10, page: 3, ..Default::default() };
    /// let page = tokio_test::block_on(svc.fetch_page(&params, "/items")).unwrap();
    /// assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
    /// assert_eq!((page.meta.item_from, page.meta.item_to), (21, 25));
    /// assert_eq!(page.links.next, "");
    /// ```
    #[instrument(skip(self, params), fields(limit = params.limit, page = params.page, sort = %params.sort))]
    pub async fn fetch_page(
        &self,
        params: &RawPageParams,
        base_path: &str,
    ) -> Result<Paged<S::Row>, ServiceError> {
        let req = self.build_request(params)?;

        let total_rows = self.source.count().await?;
        let meta = window::paginate(&req, total_rows);

        let data = if total_rows == 0 {
            Vec::new()
        } else {
            let order_by = query::order_by_clause(&req.sort, req.direction);
            self.source
                .fetch(req.limit, window::offset(req.limit, req.page), &order_by)
                .await?
        };

        debug!(
            total_rows,
            total_pages = meta.total_pages,
            item_from = meta.item_from,
            item_to = meta.item_to,
            rows = data.len(),
            "page_served"
        );

        let links = links::build_links(&req, meta.total_pages, base_path);
        Ok(Paged { data, meta, links })
    }
}
