// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet filters: `"component:server;version:2.1"` compiled to predicates.
//!
//! The grammar is deliberately flat: clauses joined by `;`, each clause a
//! `field:value` pair split on the first `:`. No escaping of `:` or `;`
//! inside values is defined; richer values need a richer grammar, not a
//! quiet extension of this one.
//!
//! The combination rule has an asymmetry that must not be "fixed":
//! clauses within one filter are ANDed (a specific component AND a specific
//! version), while distinct filters are ORed (show documents matching
//! filter A or filter B). And no filters at all means everything passes.

use crate::types::Document;

/// One compiled facet filter: a conjunction of `field = value` clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    clauses: Vec<(String, String)>,
}

impl FacetFilter {
    /// Compile a `field1:value1;field2:value2` string.
    ///
    /// A clause without `:` compiles to the whole clause as field name and
    /// an empty value; it can only match a document whose field is the
    /// empty string.
    pub fn compile(filter: &str) -> Self {
        let clauses = filter
            .split(';')
            .filter(|clause| !clause.is_empty())
            .map(|clause| match clause.split_once(':') {
                Some((field, value)) => (field.to_string(), value.to_string()),
                None => (clause.to_string(), String::new()),
            })
            .collect();
        FacetFilter { clauses }
    }

    /// True iff *every* clause's field exists on the document and equals
    /// its value (case-sensitive string equality).
    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| doc.field(field) == Some(value.as_str()))
    }
}

/// Zero or more facet filters combined with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetFilters {
    filters: Vec<FacetFilter>,
}

impl FacetFilters {
    /// Compile a set of active filter strings.
    pub fn compile<S: AsRef<str>>(filters: &[S]) -> Self {
        FacetFilters {
            filters: filters
                .iter()
                .map(|filter| FacetFilter::compile(filter.as_ref()))
                .collect(),
        }
    }

    /// No active filters means everything passes.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// True when no filters are active, otherwise true iff *any* filter
    /// matches the document.
    pub fn allows(&self, doc: &Document) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|filter| filter.matches(doc))
    }
}
