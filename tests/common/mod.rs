// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test fixtures.

#![allow(dead_code)]

use docfind::facet::FacetFilters;
use docfind::search::search;
use docfind::testing::MemoryIndex;
use docfind::types::{ComponentVersion, Document, Hit, Section, Store};

/// Build a document with sensible defaults for fixture use.
pub fn make_doc(id: &str, title: &str, text: &str, component: &str, version: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        keyword: None,
        component: component.to_string(),
        version: version.to_string(),
        url: format!("/{component}/{version}/{id}.html"),
        titles: vec![],
    }
}

pub fn make_section(id: u32, text: &str) -> Section {
    Section {
        id,
        text: text.to_string(),
        hash: format!("_{}", text.to_lowercase().replace(' ', "_")),
    }
}

/// A small documentation site: two components, one with two versions.
pub fn fixture_store() -> Store {
    let mut server_install = make_doc(
        "1",
        "Installing the server",
        "Download the archive, unpack it, and run the installer script. \
         The installer validates your configuration before starting.",
        "server",
        "2.1",
    );
    server_install.keyword = Some("install, setup, server".to_string());
    server_install.titles = vec![
        make_section(2, "Prerequisites"),
        make_section(5, "Running the installer"),
    ];

    let server_config = make_doc(
        "2",
        "Configuration reference",
        "Every configuration key the server understands, with defaults and \
         environment variable overrides for container deployments.",
        "server",
        "2.1",
    );

    let server_old = make_doc(
        "3",
        "Installing the server",
        "Legacy installation instructions kept for the maintenance branch.",
        "server",
        "2.0",
    );

    let client_guide = make_doc(
        "4",
        "Client quickstart",
        "Connect the client to a running server and issue your first query.",
        "client",
        "1.0",
    );

    let mut store = Store::default();
    for doc in [server_install, server_config, server_old, client_guide] {
        store.documents.insert(doc.id.clone(), doc);
    }
    store.component_versions.insert(
        "server/2.1".to_string(),
        ComponentVersion {
            title: "Server".to_string(),
            display_version: "2.1".to_string(),
        },
    );
    store.component_versions.insert(
        "server/2.0".to_string(),
        ComponentVersion {
            title: "Server".to_string(),
            display_version: "2.0 LTS".to_string(),
        },
    );
    store.component_versions.insert(
        "client/1.0".to_string(),
        ComponentVersion {
            title: "Client".to_string(),
            display_version: "1.0".to_string(),
        },
    );
    store
}

/// Run an unfaceted search against the fixture store.
pub fn search_fixture(store: &Store, query: &str) -> Vec<Hit> {
    let index = MemoryIndex::new(store);
    search(&index, &store.documents, query, &FacetFilters::default())
        .expect("fixture search should not fail")
}

/// Run a faceted search against the fixture store.
pub fn search_fixture_faceted(store: &Store, query: &str, filters: &[&str]) -> Vec<Hit> {
    let index = MemoryIndex::new(store);
    let facets = FacetFilters::compile(filters);
    search(&index, &store.documents, query, &facets).expect("fixture search should not fail")
}

/// Document ids of a hit list, in order.
pub fn doc_ids(hits: &[Hit]) -> Vec<&str> {
    hits.iter().map(|hit| hit.doc_ref.doc_id.as_str()).collect()
}
