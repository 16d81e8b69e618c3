//! Backend trait definitions.

use async_trait::async_trait;

use crate::content::Envelope;
use crate::error::Result;
use crate::query::CmsQuery;

/// A source of CMS content.
///
/// The HTTP client in `vitalea-cms` is the production implementation; tests
/// substitute scripted sources. All operations return the raw [`Envelope`] —
/// normalization is the caller's step, so a source never interprets payloads.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch a single-type resource (e.g. "home", "about").
    async fn fetch_single(&self, content_type: &str, query: &CmsQuery) -> Result<Envelope>;

    /// Fetch a collection-type resource (e.g. "blog-post").
    async fn fetch_collection(&self, content_type: &str, query: &CmsQuery) -> Result<Envelope>;

    /// Fetch one entry of a collection type by id.
    async fn fetch_entry(&self, content_type: &str, id: &str, query: &CmsQuery)
        -> Result<Envelope>;
}
