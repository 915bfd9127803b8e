pub mod engine;
pub mod extract;
pub mod fetch;
pub mod price;

pub use crate::domain::model::{Listing, PriceFormat, SearchResults};
pub use crate::domain::ports::PageFetcher;
pub use crate::utils::error::Result;
