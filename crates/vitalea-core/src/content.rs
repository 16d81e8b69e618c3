//! Content envelope and normalization for CMS responses.
//!
//! The CMS wraps every response in a `{ data, meta }` envelope, and media
//! fields arrive in one of several shapes depending on API version and
//! populate depth. This module extracts render-ready values from that
//! heterogeneity without ever panicking: absence of expected structure is
//! modeled as `None`, not as a fault.

use serde::Deserialize;
use serde_json::Value;

/// The `{ data, meta }` wrapper the CMS puts around every response.
///
/// `data` may be a single object, an array of objects, or null; the envelope
/// is decoded as-is and interpreted by [`entry`] / [`entries`].
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Inner payload. Absent or explicit null both decode to `Value::Null`.
    #[serde(default)]
    pub data: Value,
    /// Pagination counters and other response metadata.
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Response metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

/// Pagination counters reported under `meta.pagination`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    pub total: u64,
}

impl Envelope {
    /// The single entry in this envelope, if any. See [`entry`].
    pub fn entry(&self) -> Option<&Value> {
        entry(&self.data)
    }

    /// The list of entries in this envelope. See [`entries`].
    pub fn entries(&self) -> &[Value] {
        entries(&self.data)
    }

    /// Pagination counters, when the CMS reported them.
    pub fn pagination(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref().and_then(|meta| meta.pagination.as_ref())
    }
}

/// Extract the single record from a `data` payload.
///
/// An object is returned directly. A non-empty array yields its first
/// element — the "collection filtered down to one" case, e.g. a slug lookup.
/// Null, absence, and empty arrays yield `None`.
pub fn entry(data: &Value) -> Option<&Value> {
    match data {
        Value::Object(_) => Some(data),
        Value::Array(items) => items.first(),
        _ => None,
    }
}

/// Extract the record list from a `data` payload.
///
/// Returns an empty slice when `data` is not an array.
pub fn entries(data: &Value) -> &[Value] {
    match data {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    }
}

/// The media-reference shapes the CMS has been observed to emit, in
/// resolution priority order.
///
/// Kept as an explicit enum (rather than inlined property probing) so the
/// order is auditable and each shape is testable in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaShape {
    /// A bare URL string.
    BareUrl,
    /// `{ url: "..." }` — flat upload object.
    FlatUrl,
    /// `{ data: { attributes: { url: "..." } } }` — enveloped single media.
    EnvelopedUrl,
    /// `{ data: [{ attributes: { url: "..." } }] }` — enveloped multi media;
    /// the first item wins.
    EnvelopedListUrl,
}

impl MediaShape {
    /// Resolution priority, first match wins.
    pub const PRIORITY: [MediaShape; 4] = [
        MediaShape::BareUrl,
        MediaShape::FlatUrl,
        MediaShape::EnvelopedUrl,
        MediaShape::EnvelopedListUrl,
    ];

    /// Try to read a URL out of `value` assuming this shape.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a str> {
        match self {
            MediaShape::BareUrl => value.as_str(),
            MediaShape::FlatUrl => value.get("url")?.as_str(),
            MediaShape::EnvelopedUrl => value
                .get("data")?
                .get("attributes")?
                .get("url")?
                .as_str(),
            MediaShape::EnvelopedListUrl => value
                .get("data")?
                .as_array()?
                .first()?
                .get("attributes")?
                .get("url")?
                .as_str(),
        }
    }
}

/// Resolve a media field (image) to its URL, trying every known shape in
/// priority order.
///
/// The returned URL may be relative; prefixing the CMS origin is the
/// caller's concern (see `CmsClient::absolute_url`), which keeps this
/// function free of configuration. Bare strings are a fixed point: feeding
/// the output back in returns it unchanged.
pub fn media_url(value: &Value) -> Option<&str> {
    MediaShape::PRIORITY
        .iter()
        .find_map(|shape| shape.resolve(value))
}

/// Resolve a downloadable-file field (e.g. a CV document) to its URL.
///
/// Identical resolution to [`media_url`]; kept as a distinct entry point
/// because call sites differ semantically, not structurally.
pub fn file_url(value: &Value) -> Option<&str> {
    media_url(value)
}

// =============================================================================
// TESTS
// =============================================================================
