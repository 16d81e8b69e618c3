//! # vitalea-core
//!
//! Core types and algorithms for the Vitalea CMS client.
//!
//! This crate provides the pure (no I/O) half of the CMS access layer:
//! the query description and its encoder, the response envelope and content
//! normalization, and the `ContentSource` trait the HTTP client implements.

pub mod content;
pub mod defaults;
pub mod error;
pub mod query;
pub mod traits;

// Re-export commonly used types at crate root
pub use content::{entries, entry, file_url, media_url, Envelope, MediaShape, Meta, PaginationMeta};
pub use error::{Error, Result};
pub use query::{CmsQuery, Pagination, Populate, PopulateNode, PublicationState, Sort};
pub use traits::ContentSource;
