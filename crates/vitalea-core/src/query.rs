//! CMS query description and encoder.
//!
//! This module models the query surface of a Strapi-style REST content API:
//! population of nested relations, field selection, sorting, equality
//! filters, pagination, locale, and publication state. [`CmsQuery::encode`]
//! serializes the description into the bracketed query-string syntax the API
//! expects (`populate[0]=story.image&fields[]=title&...`).
//!
//! The encoder is a pure function: no I/O, no error states. Emission order is
//! fixed (populate, fields, sort, filters, pagination, locale,
//! publicationState) and pinned by tests, because downstream request caching
//! and log grepping both key on the literal string.
//!
//! # Example
//!
//! ```
//! use vitalea_core::query::CmsQuery;
//!
//! let query = CmsQuery::new()
//!     .populate_paths(["Image", "author", "author.avatar"])
//!     .sort_many(["publishedAt:desc"])
//!     .page(1, 12)
//!     .locale("it");
//!
//! assert!(query.encode().starts_with("populate[0]=Image"));
//! ```

use urlencoding::encode as url_encode;

/// Which related/nested content to include in a response.
///
/// The consuming API omits relations by default; population opts them in.
/// Nested mappings are flattened to dotted leaf paths at encode time because
/// deep object syntax is not reliably accepted — `story: { image: All }`
/// encodes as `populate[N]=story.image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Populate {
    /// A single relation name.
    Field(String),
    /// An ordered list of relation names or dotted paths.
    Fields(Vec<String>),
    /// A nested mapping, ordered so flattening is deterministic.
    Nested(Vec<(String, PopulateNode)>),
}

/// A node inside a nested [`Populate`] mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulateNode {
    /// Populate this relation fully (the source's `true` / `"*"` leaf).
    All,
    /// Descend into sub-relations.
    Nested(Vec<(String, PopulateNode)>),
}

/// Sort expression(s) of the form `field:direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sort {
    /// Emits `sort=expr`.
    Single(String),
    /// Emits one `sort[]=expr` pair per entry, in order.
    Many(Vec<String>),
}

/// Pagination window. Absent keys are omitted from the encoding entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub start: Option<u32>,
    pub limit: Option<u32>,
}

impl Pagination {
    /// Create an empty pagination window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 1-based page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the number of entries per page.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the 0-based entry offset.
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the maximum number of entries to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check if no pagination key is set.
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.page_size.is_none() && self.start.is_none() && self.limit.is_none()
    }
}

/// Draft-vs-published selector for content endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationState {
    /// Published entries only.
    Live,
    /// Published and draft entries.
    Preview,
}

impl PublicationState {
    /// Wire value for the `publicationState` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationState::Live => "live",
            PublicationState::Preview => "preview",
        }
    }
}

/// A structured content-query description.
///
/// Every field is optional; an empty query encodes to the empty string.
/// Constructed per request and immutable once built — locale in particular is
/// explicit here rather than ambient state, so call sites stay testable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmsQuery {
    /// Related content to include.
    pub populate: Option<Populate>,
    /// Restrict the response to these fields.
    pub fields: Vec<String>,
    /// Sort expression(s).
    pub sort: Option<Sort>,
    /// Equality filters, in insertion order. Values are string-coerced at
    /// insertion; richer operators are not modeled.
    pub filters: Vec<(String, String)>,
    /// Pagination window.
    pub pagination: Option<Pagination>,
    /// Language tag for localized content.
    pub locale: Option<String>,
    /// Draft-vs-published selector.
    pub publication_state: Option<PublicationState>,
}

impl CmsQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a single relation.
    pub fn populate(mut self, field: impl Into<String>) -> Self {
        self.populate = Some(Populate::Field(field.into()));
        self
    }

    /// Populate an ordered list of relation names or dotted paths.
    pub fn populate_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.populate = Some(Populate::Fields(paths.into_iter().map(Into::into).collect()));
        self
    }

    /// Populate from a nested mapping (flattened to dotted paths on encode).
    pub fn populate_nested(mut self, nodes: Vec<(String, PopulateNode)>) -> Self {
        self.populate = Some(Populate::Nested(nodes));
        self
    }

    /// Restrict the response to the given fields.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set a single sort expression (`field:direction`).
    pub fn sort(mut self, expr: impl Into<String>) -> Self {
        self.sort = Some(Sort::Single(expr.into()));
        self
    }

    /// Set an ordered list of sort expressions.
    pub fn sort_many<I, S>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = Some(Sort::Many(exprs.into_iter().map(Into::into).collect()));
        self
    }

    /// Add an equality filter. The value is string-coerced; unexpected types
    /// become their display form rather than being rejected.
    pub fn filter(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((field.into(), value.to_string()));
        self
    }

    /// Set the pagination window.
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Shorthand for page-based pagination.
    pub fn page(self, page: u32, page_size: u32) -> Self {
        self.pagination(Pagination::new().page(page).page_size(page_size))
    }

    /// Set the locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the publication state.
    pub fn publication_state(mut self, state: PublicationState) -> Self {
        self.publication_state = Some(state);
        self
    }

    /// Check if the query has no parameters set.
    pub fn is_empty(&self) -> bool {
        self.populate.is_none()
            && self.fields.is_empty()
            && self.sort.is_none()
            && self.filters.is_empty()
            && self.pagination.as_ref().map_or(true, Pagination::is_empty)
            && self.locale.is_none()
            && self.publication_state.is_none()
    }

    /// Flat `(key, value)` pairs in emission order, values not yet encoded.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(populate) = &self.populate {
            for (index, path) in populate_leaf_paths(populate).into_iter().enumerate() {
                pairs.push((format!("populate[{}]", index), path));
            }
        }

        for field in &self.fields {
            pairs.push(("fields[]".to_string(), field.clone()));
        }

        match &self.sort {
            Some(Sort::Single(expr)) => pairs.push(("sort".to_string(), expr.clone())),
            Some(Sort::Many(exprs)) => {
                for expr in exprs {
                    pairs.push(("sort[]".to_string(), expr.clone()));
                }
            }
            None => {}
        }

        for (field, value) in &self.filters {
            pairs.push((format!("filters[{}]", field), value.clone()));
        }

        if let Some(pagination) = &self.pagination {
            // Fixed key order; unset keys are omitted rather than emitted
            // with an empty value.
            let keys = [
                ("page", pagination.page),
                ("pageSize", pagination.page_size),
                ("start", pagination.start),
                ("limit", pagination.limit),
            ];
            for (key, value) in keys {
                if let Some(value) = value {
                    pairs.push((format!("pagination[{}]", key), value.to_string()));
                }
            }
        }

        if let Some(locale) = &self.locale {
            pairs.push(("locale".to_string(), locale.clone()));
        }

        if let Some(state) = &self.publication_state {
            pairs.push(("publicationState".to_string(), state.as_str().to_string()));
        }

        pairs
    }

    /// Encode to a URL query string, without a leading `?`.
    ///
    /// Values are percent-encoded; keys are emitted literally since they are
    /// crate-constructed bracket paths the API consumes unescaped.
    pub fn encode(&self) -> String {
        let pairs = self.pairs();
        let mut out = String::new();
        for (key, value) in &pairs {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(&url_encode(value));
        }
        out
    }
}

/// Flatten a populate description into its ordered dotted leaf paths.
///
/// Depth-first, left-to-right; duplicate leaf paths are kept once (first
/// occurrence wins) so aliased routes to the same relation cannot emit the
/// parameter twice.
fn populate_leaf_paths(populate: &Populate) -> Vec<String> {
    let mut paths = Vec::new();
    match populate {
        Populate::Field(field) => push_unique(&mut paths, field.clone()),
        Populate::Fields(fields) => {
            for field in fields {
                push_unique(&mut paths, field.clone());
            }
        }
        Populate::Nested(nodes) => flatten_nodes(nodes, "", &mut paths),
    }
    paths
}

fn flatten_nodes(nodes: &[(String, PopulateNode)], prefix: &str, paths: &mut Vec<String>) {
    for (key, node) in nodes {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            PopulateNode::All => push_unique(paths, path),
            PopulateNode::Nested(children) => flatten_nodes(children, &path, paths),
        }
    }
}

fn push_unique(paths: &mut Vec<String>, path: String) {
    // Populate lists are a handful of entries; a linear scan beats a set.
    if !paths.contains(&path) {
        paths.push(path);
    }
}

// =============================================================================
// TESTS
// =============================================================================
