//! Scripted content source for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use vitalea_core::{CmsQuery, ContentSource, Envelope, Error, Result};

/// A `ContentSource` that returns a fixed payload and records every call.
pub struct RecordingSource {
    payload: Value,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl RecordingSource {
    /// Create a source that answers every fetch with `payload`.
    pub fn returning(payload: Value) -> Self {
        Self {
            payload,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The most recent `(operation, content_type, encoded_query)` triple.
    pub fn last_call(&self) -> (String, String, String) {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no calls recorded")
    }

    fn record(&self, op: &str, content_type: &str, query: &CmsQuery) {
        self.calls
            .lock()
            .unwrap()
            .push((op.to_string(), content_type.to_string(), query.encode()));
    }

    fn envelope(&self) -> Result<Envelope> {
        serde_json::from_value(self.payload.clone())
            .map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[async_trait]
impl ContentSource for RecordingSource {
    async fn fetch_single(&self, content_type: &str, query: &CmsQuery) -> Result<Envelope> {
        self.record("single", content_type, query);
        self.envelope()
    }

    async fn fetch_collection(&self, content_type: &str, query: &CmsQuery) -> Result<Envelope> {
        self.record("collection", content_type, query);
        self.envelope()
    }

    async fn fetch_entry(&self, content_type: &str, id: &str, query: &CmsQuery) -> Result<Envelope> {
        self.record("entry", &format!("{}/{}", content_type, id), query);
        self.envelope()
    }
}
