//! Pagination engine on top of the `models` value objects.
//! - Windower: offset + page metadata math, direction aware.
//! - Link builder: first/previous/next/last navigation URIs.
//! - Query helpers: `LIMIT/OFFSET` and `ORDER BY` fragments for a
//!   data-fetching collaborator.
//! - `PageService`: orchestrates one listing request over a `PageSource`.

pub mod errors;
pub mod links;
pub mod page_service;
pub mod query;
pub mod source;
pub mod window;

pub use errors::ServiceError;
pub use page_service::{Paged, PageService};
pub use source::PageSource;
