use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use common::types::RawPageParams;
use common::utils::logging::init_logging_default;
use service::source::mock::MockPageSource;
use service::PageService;

#[derive(Debug, Clone, Serialize)]
struct Invoice {
    id: i64,
    customer: String,
    total_cents: i64,
}

fn sample_invoices(n: i64) -> Vec<Invoice> {
    (1..=n)
        .map(|id| Invoice {
            id,
            customer: format!("customer-{:03}", id),
            total_cents: id * 1_250,
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging_default();
    info!(service = "demo", event = "logger_init", "tracing subscriber initialized");

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.paging,
        Err(e) => {
            warn!(error = %e, "no usable config file, using built-in paging defaults");
            configs::PagingConfig::default()
        }
    };
    info!(max_limit = cfg.max_limit, default_sort = %cfg.default_sort, "paging config loaded");

    let source = Arc::new(MockPageSource::new(sample_invoices(37)));
    let svc = PageService::new(source, cfg);

    // Walk the listing forward, then show the newest-first view of page 1.
    for page in [1, 4] {
        let params = RawPageParams {
            limit: 10,
            page,
            ..Default::default()
        };
        let served = svc.fetch_page(&params, "/invoices").await?;
        println!("{}", serde_json::to_string_pretty(&served)?);
    }

    let newest_first = RawPageParams {
        limit: 10,
        page: 1,
        direction: "desc".into(),
        ..Default::default()
    };
    let served = svc.fetch_page(&newest_first, "/invoices").await?;
    println!("{}", serde_json::to_string_pretty(&served)?);

    Ok(())
}
