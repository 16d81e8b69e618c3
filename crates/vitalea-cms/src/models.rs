//! Render-ready models distilled from raw CMS entries.

use chrono::{DateTime, Utc};
use serde_json::Value;

use vitalea_core::{media_url, Envelope};

/// A blog post as the listing page renders it.
///
/// Every field degrades gracefully: a post with a malformed `publishedAt` or
/// a missing cover still lists, it just renders without that piece.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time: Option<u32>,
    /// Cover image URL, possibly relative (see `CmsClient::absolute_url`).
    pub cover_url: Option<String>,
}

impl BlogPost {
    /// Distill a raw entry into a render model.
    pub fn from_entry(entry: &Value) -> Self {
        // The content type's media field is capitalized ("Image"); accept
        // the lowercase spelling too since older entries carry it.
        let cover = entry
            .get("Image")
            .and_then(media_url)
            .or_else(|| entry.get("image").and_then(media_url));

        Self {
            id: entry.get("id").and_then(Value::as_i64),
            title: string_field(entry, "title"),
            slug: string_field(entry, "slug"),
            description: entry
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            published_at: entry
                .get("publishedAt")
                .and_then(Value::as_str)
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            reading_time: entry
                .get("readingTime")
                .and_then(Value::as_u64)
                .map(|n| n as u32),
            cover_url: cover.map(str::to_string),
        }
    }

    /// Distill every entry of a collection envelope.
    pub fn from_envelope(envelope: &Envelope) -> Vec<Self> {
        envelope.entries().iter().map(Self::from_entry).collect()
    }
}

fn string_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_entry_full() {
        let entry = json!({
            "id": 7,
            "title": "Eating for energy",
            "slug": "eating-for-energy",
            "description": "Small changes, big difference.",
            "publishedAt": "2026-03-02T09:30:00.000Z",
            "readingTime": 4,
            "Image": { "data": { "attributes": { "url": "/uploads/energy.jpg" } } }
        });

        let post = BlogPost::from_entry(&entry);
        assert_eq!(post.id, Some(7));
        assert_eq!(post.title, "Eating for energy");
        assert_eq!(post.slug, "eating-for-energy");
        assert_eq!(post.description.as_deref(), Some("Small changes, big difference."));
        assert_eq!(post.reading_time, Some(4));
        assert_eq!(post.cover_url.as_deref(), Some("/uploads/energy.jpg"));
        assert_eq!(
            post.published_at.unwrap().to_rfc3339(),
            "2026-03-02T09:30:00+00:00"
        );
    }

    #[test]
    fn test_from_entry_tolerates_missing_fields() {
        let post = BlogPost::from_entry(&json!({}));
        assert_eq!(post.id, None);
        assert_eq!(post.title, "");
        assert_eq!(post.slug, "");
        assert!(post.description.is_none());
        assert!(post.published_at.is_none());
        assert!(post.cover_url.is_none());
    }

    #[test]
    fn test_from_entry_malformed_date_is_none() {
        let entry = json!({ "title": "x", "publishedAt": "yesterday-ish" });
        assert!(BlogPost::from_entry(&entry).published_at.is_none());
    }

    #[test]
    fn test_from_entry_lowercase_image_fallback() {
        let entry = json!({ "image": { "url": "/uploads/cover.png" } });
        assert_eq!(
            BlogPost::from_entry(&entry).cover_url.as_deref(),
            Some("/uploads/cover.png")
        );
    }

    #[test]
    fn test_from_envelope() {
        let envelope: Envelope = serde_json::from_value(json!({
            "data": [{ "title": "a" }, { "title": "b" }]
        }))
        .unwrap();

        let posts = BlogPost::from_envelope(&envelope);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "a");
        assert_eq!(posts[1].title, "b");
    }
}
