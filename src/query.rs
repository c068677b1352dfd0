// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The seam between this crate and the token index it queries.
//!
//! The index is an opaque dependency: it was built elsewhere, it owns the
//! tokenizer, and we refuse to reimplement it. All we ask of it is two
//! capabilities: parse a raw query string into [`Clause`]s using its native
//! grammar, and execute a clause list into hits. Tier escalation then
//! becomes pure data transformation over `Vec<Clause>` - no mutable query
//! object, no callbacks.
//!
//! Anything implementing [`Index`] plugs in here: the in-memory index in
//! [`crate::testing`], or an adapter over a real search engine.

use thiserror::Error;

use crate::types::{Hit, SearchError};

/// How a clause participates in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Contributes to the score if present (the default).
    Optional,
    /// Must match (`+term`).
    Required,
    /// Must not match (`-term`). Never wildcarded by tier escalation.
    Prohibited,
}

/// Wildcard positions on a clause's term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// Exact term.
    None,
    /// `term*` - prefix matching.
    Trailing,
    /// `*term*` - substring matching.
    Both,
}

/// One parsed query clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub term: String,
    /// Restrict the clause to one field, `None` for all fields.
    pub field: Option<String>,
    pub presence: Presence,
    pub wildcard: Wildcard,
    /// Whether the index may run its text-normalization pipeline on the
    /// term. Escalated tiers disable it so the added `*` survives.
    pub use_pipeline: bool,
}

impl Clause {
    /// A plain optional clause, the way the grammar produces bare terms.
    pub fn term(term: impl Into<String>) -> Self {
        Clause {
            term: term.into(),
            field: None,
            presence: Presence::Optional,
            wildcard: Wildcard::None,
            use_pipeline: true,
        }
    }
}

/// The raw query string is not valid per the index's query grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse query `{query}`: {message}")]
pub struct QueryParseError {
    pub query: String,
    pub message: String,
}

impl QueryParseError {
    pub fn new(query: impl Into<String>, message: impl Into<String>) -> Self {
        QueryParseError {
            query: query.into(),
            message: message.into(),
        }
    }
}

impl From<QueryParseError> for SearchError {
    fn from(err: QueryParseError) -> Self {
        SearchError::QueryParse {
            query: err.query,
            message: err.message,
        }
    }
}

/// The opaque token index.
///
/// `parse` applies the index's native query grammar; `execute` runs a
/// clause list and reports hits with per-term, per-field match metadata.
/// Both are synchronous and side-effect-free; the executor calls them in
/// sequence and never caches across calls.
pub trait Index {
    /// Parse a raw query string into clauses.
    fn parse(&self, query: &str) -> Result<Vec<Clause>, QueryParseError>;

    /// Execute a clause list against the index.
    fn execute(&self, clauses: &[Clause]) -> Result<Vec<Hit>, SearchError>;
}
