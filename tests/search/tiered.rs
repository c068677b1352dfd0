// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Three-tier escalation over a realistic fixture store.

use super::common::{doc_ids, fixture_store, search_fixture};

// ============================================================================
// TIER 1: EXACT MATCH
// ============================================================================

#[test]
fn exact_token_matches_without_escalation() {
    let store = fixture_store();
    let hits = search_fixture(&store, "installer");

    assert!(!hits.is_empty(), "should find exact matches for 'installer'");
    assert!(doc_ids(&hits).contains(&"1"));
    // Doc 3 talks about "installation", not "installer"; the exact tier
    // must not pull it in.
    assert!(!doc_ids(&hits).contains(&"3"));
}

#[test]
fn exact_match_reports_the_matched_field() {
    let store = fixture_store();
    let hits = search_fixture(&store, "configuration");

    let doc_hit = hits
        .iter()
        .find(|hit| hit.doc_ref.doc_id == "2" && hit.doc_ref.section_id.is_none())
        .expect("configuration reference should match");
    let fields = doc_hit.metadata.fields_to_terms();
    assert_eq!(fields.get("text"), Some(&vec!["configuration"]));
}

// ============================================================================
// TIER 2: PREFIX MATCH
// ============================================================================

#[test]
fn fragment_escalates_to_prefix_tier() {
    let store = fixture_store();
    let hits = search_fixture(&store, "install");

    // "install" is no token in the store, but "installer", "installing" and
    // "installation" all carry the prefix.
    let ids = doc_ids(&hits);
    assert!(ids.contains(&"1"));
    assert!(ids.contains(&"3"));
    assert!(!ids.contains(&"4"));
}

#[test]
fn prefix_tier_surfaces_section_references() {
    let store = fixture_store();
    let hits = search_fixture(&store, "install");

    let section_hit = hits
        .iter()
        .find(|hit| hit.doc_ref.section_id.is_some())
        .expect("the 'Running the installer' section should match");
    assert_eq!(section_hit.doc_ref.doc_id, "1");
    assert_eq!(section_hit.doc_ref.section_id.as_deref(), Some("5"));
}

// ============================================================================
// TIER 3: SUBSTRING MATCH
// ============================================================================

#[test]
fn inner_fragment_escalates_to_substring_tier() {
    let store = fixture_store();
    let hits = search_fixture(&store, "erver");

    // "erver" only occurs inside "server"; both earlier tiers come up empty.
    let ids = doc_ids(&hits);
    assert!(ids.contains(&"1"));
    assert!(ids.contains(&"4"), "'server' in the client guide text should match");
}

#[test]
fn unmatched_query_returns_empty_after_all_tiers() {
    let store = fixture_store();
    let hits = search_fixture(&store, "kubernetes");
    assert!(hits.is_empty());
}

// ============================================================================
// PRESENCE MODIFIERS
// ============================================================================

#[test]
fn prohibited_term_excludes_documents() {
    let store = fixture_store();
    let all = search_fixture(&store, "configuration");
    assert!(doc_ids(&all).contains(&"2"));

    let without = search_fixture(&store, "configuration -overrides");
    assert_eq!(
        doc_ids(&without),
        vec!["1"],
        "doc 2 contains the prohibited token"
    );
}

#[test]
fn required_term_narrows_results() {
    let store = fixture_store();
    let hits = search_fixture(&store, "configuration +validates");

    // Both docs 1 and 2 mention configuration; only doc 1 validates.
    assert_eq!(doc_ids(&hits), vec!["1"]);
}

#[test]
fn field_scoped_term_only_matches_that_field() {
    let store = fixture_store();
    let hits = search_fixture(&store, "title:quickstart");
    assert_eq!(doc_ids(&hits), vec!["4"]);

    let none = search_fixture(&store, "text:quickstart");
    assert!(none.is_empty(), "'quickstart' only occurs in a title");
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn results_are_stable_across_repeated_searches() {
    let store = fixture_store();
    for query in ["installer", "install", "erver", "kubernetes"] {
        let first = search_fixture(&store, query);
        let second = search_fixture(&store, query);
        assert_eq!(first, second, "query {query:?} should be deterministic");
    }
}
