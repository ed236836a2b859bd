pub mod catalog_search;

pub use catalog_search::CatalogSearchTool;
