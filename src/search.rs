// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-tier search core: exact → prefix → substring.
//!
//! Search-as-you-type queries are usually fragments of the word the user
//! wants, so an exact query alone would flicker between "results" and
//! "nothing" on every keystroke. The escalation ladder fixes that: run the
//! query as parsed; if the filtered result set is empty, wildcard every
//! positive term at the tail (`qui` → `qui*`); if still empty, wildcard
//! both ends (`*qui*`). The first tier that produces anything wins, and
//! the later tiers never run.
//!
//! Prohibited (`-term`) clauses are never wildcarded - loosening an
//! exclusion would do the opposite of what the user asked.
//!
//! Facet filters are re-applied at every tier because each tier sees a
//! different candidate set; nothing is cached between tiers. Every call is
//! a pure function of its inputs, which is also why there is no retry
//! anywhere: retrying the same inputs gives the same answer.

use std::collections::BTreeMap;

use tracing::{debug, error};

use crate::facet::FacetFilters;
use crate::query::{Clause, Index, Presence, Wildcard};
use crate::types::{Document, Hit, SearchError, Section, Store};

/// Run a raw query through the tier ladder, facet-filtering each tier.
///
/// Returns the first tier's non-empty filtered hits, or an empty vector
/// when even the substring tier finds nothing - an empty set is a normal,
/// valid outcome, not an error.
///
/// A query the index's grammar cannot parse yields
/// [`SearchError::QueryParse`] and no tier runs.
pub fn search(
    index: &dyn Index,
    documents: &BTreeMap<String, Document>,
    raw_query: &str,
    facets: &FacetFilters,
) -> Result<Vec<Hit>, SearchError> {
    let clauses = match index.parse(raw_query) {
        Ok(clauses) => clauses,
        Err(err) => {
            debug!(query = raw_query, %err, "query did not parse");
            return Err(err.into());
        }
    };

    // Tier 1: the query exactly as parsed.
    let exact = filtered(index, documents, &clauses, facets)?;
    if !exact.is_empty() {
        return Ok(exact);
    }

    // Tier 2: trailing wildcard on every positive term.
    let prefix = filtered(index, documents, &escalate(&clauses, Wildcard::Trailing), facets)?;
    if !prefix.is_empty() {
        return Ok(prefix);
    }

    // Tier 3: wildcard both ends.
    filtered(index, documents, &escalate(&clauses, Wildcard::Both), facets)
}

/// Loosen every non-prohibited clause to the given wildcard mode and turn
/// the index's normalization pipeline off for it, so the index matches the
/// term fragment literally.
fn escalate(clauses: &[Clause], wildcard: Wildcard) -> Vec<Clause> {
    clauses
        .iter()
        .cloned()
        .map(|mut clause| {
            if clause.presence != Presence::Prohibited {
                clause.wildcard = wildcard;
                clause.use_pipeline = false;
            }
            clause
        })
        .collect()
}

fn filtered(
    index: &dyn Index,
    documents: &BTreeMap<String, Document>,
    clauses: &[Clause],
    facets: &FacetFilters,
) -> Result<Vec<Hit>, SearchError> {
    let hits = match index.execute(clauses) {
        Ok(hits) => hits,
        Err(err) => {
            error!(%err, "query execution failed");
            return Err(err);
        }
    };

    Ok(hits
        .into_iter()
        .filter(|hit| {
            // A hit referencing a document the store doesn't know is dropped.
            documents
                .get(&hit.doc_ref.doc_id)
                .is_some_and(|doc| facets.allows(doc))
        })
        .collect())
}

/// A hit resolved against the store: the document, and the section the
/// reference points into (when it does).
#[derive(Debug, Clone, Copy)]
pub struct ResolvedHit<'a> {
    pub doc: &'a Document,
    pub section: Option<&'a Section>,
}

/// Resolve a hit's reference to its document and section.
///
/// Returns `None` for hits whose document is missing from the store; the
/// executor already filters those out, so `None` here means the hit and
/// store are from different generations.
pub fn resolve_hit<'a>(store: &'a Store, hit: &Hit) -> Option<ResolvedHit<'a>> {
    let doc = store.documents.get(&hit.doc_ref.doc_id)?;
    let section = hit
        .doc_ref
        .section_id
        .as_deref()
        .and_then(|section_id| doc.section(section_id));
    Some(ResolvedHit { doc, section })
}
