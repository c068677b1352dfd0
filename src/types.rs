// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search front end.
//!
//! These types define how documents, match metadata, spans, and display
//! segments fit together. The index itself is opaque (see [`crate::query`]);
//! everything here is what flows in and out of it.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Span**: `start + length <= text.len()`, and both ends sit on UTF-8
//!   char boundaries. `Span::NONE` (`{0, 0}`) is the "no match" sentinel;
//!   filter it out before slicing.
//!
//! - **Segment**: an ordered, non-overlapping partition of a display window,
//!   plus optional `"..."` ellipsis markers. Concatenating segment texts and
//!   stripping the inserted markers reproduces the window exactly.
//!
//! - **DocRef**: `"docId"` or `"docId-sectionId"`. Split happens on the
//!   *first* `-`, so document ids must not contain one.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// DOCUMENT STORE
// =============================================================================

/// A subsection of a document with its own anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: u32,
    pub text: String,
    pub hash: String,
}

/// One searchable document, immutable once loaded.
///
/// `keyword` is optional metadata; `titles` holds the in-page sections a hit
/// can deep-link to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub component: String,
    pub version: String,
    pub url: String,
    #[serde(default)]
    pub titles: Vec<Section>,
}

impl Document {
    /// Look up a facet-filterable field by name.
    ///
    /// Returns `None` for fields that don't exist on documents, which a facet
    /// predicate treats as "does not match".
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "title" => Some(&self.title),
            "text" => Some(&self.text),
            "keyword" => self.keyword.as_deref(),
            "component" => Some(&self.component),
            "version" => Some(&self.version),
            "url" => Some(&self.url),
            _ => None,
        }
    }

    /// Find the section a reference points at.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.titles
            .iter()
            .find(|section| section.id.to_string() == section_id)
    }
}

/// Display metadata for one component/version pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVersion {
    pub title: String,
    pub display_version: String,
}

/// The loaded document store: everything the index refers to by id.
///
/// `component_versions` is keyed by `"component/version"`, the same scheme
/// the site generator uses when it emits the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub documents: BTreeMap<String, Document>,
    #[serde(default)]
    pub component_versions: BTreeMap<String, ComponentVersion>,
}

impl Store {
    /// Parse a store from its JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Display metadata for the component/version a document belongs to.
    pub fn component_version(&self, doc: &Document) -> Option<&ComponentVersion> {
        self.component_versions
            .get(&format!("{}/{}", doc.component, doc.version))
    }
}

// =============================================================================
// MATCH METADATA
// =============================================================================

/// Per-field statistics the index reports for one matched term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldMatch {
    pub frequency: u32,
}

/// What the index says matched: term → field name → match statistics.
///
/// Ephemeral, produced per query and consumed once per hit. The inversion
/// [`MatchMetadata::fields_to_terms`] is what highlighting wants: for each
/// field, which terms hit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMetadata(pub BTreeMap<String, BTreeMap<String, FieldMatch>>);

impl MatchMetadata {
    /// Record a term match in a field.
    pub fn record(&mut self, term: &str, field: &str) {
        self.0
            .entry(term.to_string())
            .or_default()
            .entry(field.to_string())
            .or_default()
            .frequency += 1;
    }

    /// Invert the mapping: field name → matched terms, in term order.
    pub fn fields_to_terms(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut by_field: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (term, fields) in &self.0 {
            for field in fields.keys() {
                by_field.entry(field.as_str()).or_default().push(term.as_str());
            }
        }
        by_field
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// REFERENCES AND HITS
// =============================================================================

/// A parsed index reference: document id plus optional section id.
///
/// The index encodes references as `"docId"` or `"docId-sectionId"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocRef {
    pub doc_id: String,
    pub section_id: Option<String>,
}

impl DocRef {
    /// Parse a reference string, splitting on the first `-`.
    pub fn parse(reference: &str) -> Self {
        match reference.split_once('-') {
            Some((doc_id, section_id)) => DocRef {
                doc_id: doc_id.to_string(),
                section_id: Some(section_id.to_string()),
            },
            None => DocRef {
                doc_id: reference.to_string(),
                section_id: None,
            },
        }
    }

}

impl fmt::Display for DocRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.section_id {
            Some(section_id) => write!(f, "{}-{}", self.doc_id, section_id),
            None => write!(f, "{}", self.doc_id),
        }
    }
}

/// One search result: a document/section reference plus its match metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub doc_ref: DocRef,
    pub metadata: MatchMetadata,
}

// =============================================================================
// SPANS AND SEGMENTS
// =============================================================================

/// A half-open byte range `[start, start + length)` within a field's text.
///
/// Offsets are byte offsets into UTF-8 text and always sit on char
/// boundaries. A zero-length span is the locator's "no match" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    /// The "no match" sentinel.
    pub const NONE: Span = Span { start: 0, length: 0 };

    pub fn new(start: usize, length: usize) -> Self {
        Span { start, length }
    }

    /// Exclusive end offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Whether this span marks an actual match.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.length > 0
    }

    /// Whether this span fits inside a text of the given byte length.
    #[inline]
    pub fn fits(&self, text_len: usize) -> bool {
        self.length > 0 && self.end() <= text_len
    }
}

/// What kind of display node a segment becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Plain text, possibly carrying an ellipsis marker.
    Text,
    /// A highlighted match.
    Mark,
}

/// One piece of a highlighted excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment {
            kind: SegmentKind::Text,
            text: text.into(),
        }
    }

    pub fn mark(text: impl Into<String>) -> Self {
        Segment {
            kind: SegmentKind::Mark,
            text: text.into(),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Everything that can go wrong during a search.
///
/// Only `QueryParse` is recoverable: callers treat it as "no results" and
/// may log it when a debug flag is set. Anything else belongs on an
/// operator-facing channel; the user-visible effect is still an empty
/// result set. Degenerate highlight input (zero-length or out-of-bounds
/// spans) is not an error at all - it is silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The raw query string is not valid per the index's query grammar.
    #[error("invalid search query `{query}`: {message}")]
    QueryParse { query: String, message: String },

    /// Any other failure during query execution.
    #[error("search failed: {0}")]
    Unexpected(String),
}
