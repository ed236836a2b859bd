//! Pandora catalog search: content type mapping, query construction and the
//! single GraphQL request behind the `pandora_search_catalog` tool.

pub mod client;
pub mod content_type;
pub mod error;
pub mod query;
pub mod token;

pub use client::{CatalogClient, ErrorResult, SearchResult};
pub use content_type::ContentType;
pub use error::CatalogError;
pub use token::{StaticTokenProvider, TokenProvider};
