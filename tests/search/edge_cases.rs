// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Degenerate queries and user-typed operators.

use docfind::facet::FacetFilters;
use docfind::search::search;
use docfind::testing::MemoryIndex;
use docfind::types::SearchError;

use super::common::{doc_ids, fixture_store, search_fixture};

#[test]
fn empty_query_is_a_valid_zero_clause_search() {
    let store = fixture_store();
    let hits = search_fixture(&store, "");
    assert!(hits.is_empty());
}

#[test]
fn whitespace_only_query_matches_nothing() {
    let store = fixture_store();
    let hits = search_fixture(&store, "   \t  ");
    assert!(hits.is_empty());
}

#[test]
fn unknown_field_is_a_recoverable_parse_error() {
    let store = fixture_store();
    let index = MemoryIndex::new(&store);

    let err = search(&index, &store.documents, "author:smith", &FacetFilters::default())
        .expect_err("unknown field should fail to parse");
    match err {
        SearchError::QueryParse { query, .. } => assert_eq!(query, "author:smith"),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn bare_wildcard_term_is_a_parse_error() {
    let store = fixture_store();
    let index = MemoryIndex::new(&store);

    let result = search(&index, &store.documents, "*", &FacetFilters::default());
    assert!(matches!(result, Err(SearchError::QueryParse { .. })));
}

#[test]
fn user_typed_trailing_wildcard_works_at_the_exact_tier() {
    let store = fixture_store();
    let hits = search_fixture(&store, "install*");

    let ids = doc_ids(&hits);
    assert!(ids.contains(&"1"));
    assert!(ids.contains(&"3"));
}

#[test]
fn matching_is_case_insensitive() {
    let store = fixture_store();
    let upper = search_fixture(&store, "INSTALLER");
    let lower = search_fixture(&store, "installer");
    assert_eq!(upper, lower);
}

#[test]
fn multibyte_queries_do_not_panic() {
    let store = fixture_store();
    let hits = search_fixture(&store, "héllo wörld");
    assert!(hits.is_empty());
}
