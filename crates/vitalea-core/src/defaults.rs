//! Centralized default constants for the Vitalea CMS client.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// CMS ENDPOINT
// =============================================================================

/// Default CMS base URL (local Strapi development server).
pub const CMS_BASE_URL: &str = "http://localhost:1337";

/// Path prefix for CMS content endpoints.
pub const CMS_API_PREFIX: &str = "/api";

/// Default request timeout (seconds). Content payloads are small; anything
/// slower than this means the CMS is down, not busy.
pub const CMS_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// CONTENT
// =============================================================================

/// Default UI locale. The practice's primary audience is Italian.
pub const DEFAULT_LOCALE: &str = "it";

/// Page size for the blog post listing.
pub const BLOG_PAGE_SIZE: u32 = 12;

/// Sort expression for the blog post listing (newest first).
pub const BLOG_SORT: &str = "publishedAt:desc";
