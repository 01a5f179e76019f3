pub mod catalog;
pub mod collection;
pub mod error;
pub mod models;

pub use catalog::CatalogClient;
pub use collection::CollectionClient;
pub use error::{ApiError, ApiResult};
pub use models::*;
