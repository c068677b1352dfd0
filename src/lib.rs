// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tiered full-text search front end with snippet highlighting and facets.
//!
//! This crate is the algorithmic core of a documentation search box: it
//! does not build the token index (that is an opaque dependency behind the
//! [`query::Index`] trait) and it does not render anything. What it does:
//!
//! - escalate a query through exact → prefix → substring tiers until
//!   something matches ([`search`]),
//! - combine results with facet filters, AND within a filter, OR across
//!   filters ([`facet`]),
//! - re-locate matched terms inside each displayed field ([`locate`]) and
//!   compress the matches into a snippet-bounded text/mark segment list a
//!   result dropdown can render ([`highlight`]).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌───────────────┐
//! │   query.rs   │───▶│  search.rs   │───▶│ highlight.rs  │
//! │ (Clause,     │    │ (tiered      │    │ (segments per │
//! │  Index seam) │    │  escalation) │    │  field)       │
//! └──────────────┘    └──────┬───────┘    └──────┬────────┘
//!                            │                   │
//!                     ┌──────▼───────┐    ┌──────▼────────┐
//!                     │   facet.rs   │    │   locate.rs   │
//!                     │ (AND/OR      │    │ (token spans  │
//!                     │  predicates) │    │  via index's  │
//!                     └──────────────┘    │  separator)   │
//!                                         └───────────────┘
//! ```
//!
//! Everything is synchronous and side-effect-free; a caller layering this
//! over an async index only has to discard stale responses itself - at most
//! one result set is ever "current".
//!
//! # Usage
//!
//! ```
//! use docfind::facet::FacetFilters;
//! use docfind::search::search;
//! use docfind::testing::MemoryIndex;
//! use docfind::types::Store;
//!
//! let store = Store::default();
//! let index = MemoryIndex::new(&store);
//! let facets = FacetFilters::compile(&["component:server"]);
//! let hits = search(&index, &store.documents, "instal", &facets).unwrap();
//! assert!(hits.is_empty());
//! ```

pub mod facet;
pub mod highlight;
pub mod locate;
pub mod query;
pub mod search;
pub mod state;
pub mod testing;
pub mod types;

// Re-exports for the common path
pub use facet::{FacetFilter, FacetFilters};
pub use highlight::{build_highlighted_text, highlight_hit, HighlightedHit, DEFAULT_SNIPPET_LENGTH};
pub use locate::{default_separator, find_term_position, term_positions};
pub use query::{Clause, Index, Presence, QueryParseError, Wildcard};
pub use search::{resolve_hit, search, ResolvedHit};
pub use state::{FilterState, KeyValueStore};
pub use types::{
    ComponentVersion, DocRef, Document, FieldMatch, Hit, MatchMetadata, SearchError, Section,
    Segment, SegmentKind, Span, Store,
};
