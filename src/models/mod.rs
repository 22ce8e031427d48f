pub mod catalog;
pub mod movie;

pub use catalog::{Catalog, CatalogEntry};
pub use movie::{MovieRecord, Recommendation};
