//! Per-page content fetchers.
//!
//! One helper per content type the site renders, each pairing the content
//! type name with the populate shape its page needs. The query constructors
//! are exposed separately from the fetch helpers so the encoded shapes can be
//! asserted without a transport.
//!
//! Locale is always an explicit argument — the UI's current language is
//! context at the call site, never ambient state down here.

use vitalea_core::{defaults, CmsQuery, ContentSource, Envelope, PublicationState, Result};

/// Query for the site header (logo).
pub fn header_query() -> CmsQuery {
    CmsQuery::new().populate_paths(["logo"])
}

/// Query for the home page.
pub fn home_query(locale: &str) -> CmsQuery {
    CmsQuery::new()
        .locale(locale)
        .populate_paths([
            "hero.primaryCta",
            "hero.secondaryCta",
            "stats",
            "services",
            "services.cards",
            "services.cards.icon",
            "testimonials",
            "cta",
            "cta.primaryCta",
        ])
}

/// Query for the about page (practice story, values, downloadable CV).
pub fn about_query(locale: &str) -> CmsQuery {
    CmsQuery::new()
        .locale(locale)
        .populate_paths([
            "story",
            "story.image",
            "story.socialLinks",
            "values",
            "values.items",
            "CV",
        ])
}

/// Query for the contact page.
pub fn contact_query(locale: &str) -> CmsQuery {
    CmsQuery::new()
        .locale(locale)
        .populate_paths(["heros", "form", "contactInfo", "contactInfo.items"])
}

/// Query for the FAQ page.
pub fn faq_query(locale: &str) -> CmsQuery {
    CmsQuery::new()
        .locale(locale)
        .populate_paths(["faqs", "faqs.Questions", "contactPrompt"])
}

/// Query for the specialization page.
pub fn specialization_query(locale: &str) -> CmsQuery {
    CmsQuery::new()
        .locale(locale)
        .populate_paths([
            "heros",
            "specializations",
            "specializations.listItems",
            "cta",
            "cta.primaryCta",
            "cta.secondaryCta",
        ])
}

/// Query for the blog landing page (hero copy, not the posts).
pub fn blog_page_query(locale: &str) -> CmsQuery {
    CmsQuery::new().locale(locale).populate_paths(["hero"])
}

/// Query for a page of blog posts, newest first. Published entries only —
/// drafts must never reach the public listing.
pub fn blog_posts_query(locale: &str, page: u32) -> CmsQuery {
    CmsQuery::new()
        .locale(locale)
        .populate_paths(["Image", "author", "author.avatar", "Article"])
        .sort_many([defaults::BLOG_SORT])
        .page(page, defaults::BLOG_PAGE_SIZE)
        .publication_state(PublicationState::Live)
}

/// Query for a single blog post looked up by slug.
///
/// Slug lookups go through the collection endpoint with an equality filter;
/// the caller takes the first entry of the response.
pub fn blog_post_by_slug_query(slug: &str) -> CmsQuery {
    CmsQuery::new().filter("slug", slug).populate_paths(["Image"])
}

/// Fetch the site header.
pub async fn header<S: ContentSource + ?Sized>(source: &S) -> Result<Envelope> {
    source.fetch_single("header", &header_query()).await
}

/// Fetch the home page.
pub async fn home<S: ContentSource + ?Sized>(source: &S, locale: &str) -> Result<Envelope> {
    source.fetch_single("home", &home_query(locale)).await
}

/// Fetch the about page.
pub async fn about<S: ContentSource + ?Sized>(source: &S, locale: &str) -> Result<Envelope> {
    source.fetch_single("about", &about_query(locale)).await
}

/// Fetch the contact page.
pub async fn contact<S: ContentSource + ?Sized>(source: &S, locale: &str) -> Result<Envelope> {
    source.fetch_single("contact", &contact_query(locale)).await
}

/// Fetch the FAQ page.
pub async fn faq<S: ContentSource + ?Sized>(source: &S, locale: &str) -> Result<Envelope> {
    source.fetch_single("faq", &faq_query(locale)).await
}

/// Fetch the specialization page.
pub async fn specialization<S: ContentSource + ?Sized>(
    source: &S,
    locale: &str,
) -> Result<Envelope> {
    source
        .fetch_single("specialization", &specialization_query(locale))
        .await
}

/// Fetch the blog landing page.
pub async fn blog_page<S: ContentSource + ?Sized>(source: &S, locale: &str) -> Result<Envelope> {
    source.fetch_single("blog-page", &blog_page_query(locale)).await
}

/// Fetch a page of blog posts.
pub async fn blog_posts<S: ContentSource + ?Sized>(
    source: &S,
    locale: &str,
    page: u32,
) -> Result<Envelope> {
    source
        .fetch_collection("blog-posts", &blog_posts_query(locale, page))
        .await
}

/// Fetch a single blog post by slug.
pub async fn blog_post_by_slug<S: ContentSource + ?Sized>(
    source: &S,
    slug: &str,
) -> Result<Envelope> {
    source
        .fetch_collection("blog-posts", &blog_post_by_slug_query(slug))
        .await
}

// =============================================================================
// TESTS
// =============================================================================
