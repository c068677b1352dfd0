// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet filtering across the escalation tiers.

use super::common::{doc_ids, fixture_store, search_fixture, search_fixture_faceted};

#[test]
fn empty_filter_set_allows_everything() {
    let store = fixture_store();
    let unfiltered = search_fixture(&store, "erver");
    let filtered = search_fixture_faceted(&store, "erver", &[]);
    assert_eq!(unfiltered, filtered);
}

#[test]
fn single_filter_restricts_to_one_component() {
    let store = fixture_store();
    let hits = search_fixture_faceted(&store, "erver", &["component:server"]);

    assert!(!hits.is_empty());
    for id in doc_ids(&hits) {
        assert_ne!(id, "4", "client docs must be filtered out");
    }
}

#[test]
fn clauses_within_a_filter_are_conjunctive() {
    let store = fixture_store();
    let hits = search_fixture_faceted(&store, "install", &["component:server;version:2.0"]);

    // Docs 1 and 3 both match "install"; only doc 3 is server 2.0.
    assert_eq!(doc_ids(&hits), vec!["3"]);
}

#[test]
fn separate_filters_are_disjunctive() {
    let store = fixture_store();
    let hits = search_fixture_faceted(
        &store,
        "erver",
        &["component:client", "component:server;version:2.1"],
    );

    let ids = doc_ids(&hits);
    assert!(ids.contains(&"4"), "client passes the first filter");
    assert!(
        ids.iter().any(|id| *id == "1" || *id == "2"),
        "server 2.1 passes the second filter"
    );
    assert!(!ids.contains(&"3"), "server 2.0 passes neither filter");
}

#[test]
fn filters_apply_before_escalation_decides_a_tier_won() {
    let store = fixture_store();

    // "installer" matches exactly in server docs only. With a client-only
    // filter the exact tier is emptied out, so escalation continues, and
    // the final result is still empty rather than a leaked server hit.
    let hits = search_fixture_faceted(&store, "installer", &["component:client"]);
    assert!(hits.is_empty());
}

#[test]
fn unsatisfiable_filter_yields_no_results() {
    let store = fixture_store();
    let hits = search_fixture_faceted(&store, "erver", &["component:desktop"]);
    assert!(hits.is_empty());
}
