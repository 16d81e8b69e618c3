//! # vitalea-cms
//!
//! HTTP client for the Vitalea headless CMS.
//!
//! This crate provides:
//! - `CmsClient`, a `reqwest`-backed implementation of
//!   `vitalea_core::ContentSource`
//! - Per-page fetch helpers with the populate shapes each page needs
//! - Render-ready models distilled from raw entries
//!
//! # Example
//!
//! ```rust,no_run
//! use vitalea_cms::{pages, BlogPost, CmsClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = CmsClient::from_env().unwrap();
//!     let envelope = pages::blog_posts(&client, "it", 1).await.unwrap();
//!     for post in BlogPost::from_envelope(&envelope) {
//!         println!("{} ({})", post.title, post.slug);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod models;
pub mod pages;

// Scripted content source for tests
#[cfg(test)]
pub mod mock;

// Re-export core types
pub use vitalea_core::*;

pub use client::CmsClient;
pub use config::CmsConfig;
pub use models::BlogPost;
