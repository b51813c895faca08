mod catalog;
mod library;

pub use catalog::{CatalogProvider, SampleCatalog};
pub use library::Library;
