pub mod errors;
pub mod direction;
pub mod request;
pub mod result;
pub mod links;

pub use direction::Direction;
pub use links::NavigationLinks;
pub use request::PageRequest;
pub use result::PageResult;
