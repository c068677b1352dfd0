// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! User filter selections and their persistence seam.
//!
//! Which components are checked and which version each one is pinned to
//! outlives a single search; the hosting page persists it (historically a
//! cookie jar) and restores it on load. The core doesn't care where the
//! bytes live - it only needs a `get`/`set` capability, so that is all
//! [`KeyValueStore`] asks for.
//!
//! Restoring from a corrupt or missing value resets to defaults rather
//! than failing; losing a checkbox selection is not worth an error path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::facet::FacetFilters;

const COMPONENTS_KEY: &str = "filter-components";
const COMPONENT_VERSION_KEY: &str = "filter-components-version";

/// External key-value persistence (a cookie jar, a config file, a test map).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The user's active filter selections.
///
/// `facets` holds the currently checked facet-filter strings exactly as the
/// UI produced them (`"component:server;version:2.1"`); `components` and
/// `component_version` are the longer-lived per-component toggles the UI
/// rebuilds `facets` from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub facets: Vec<String>,
    #[serde(default)]
    pub components: BTreeMap<String, bool>,
    #[serde(default)]
    pub component_version: BTreeMap<String, String>,
}

impl FilterState {
    /// Compile the active facet strings into predicates.
    pub fn facet_filters(&self) -> FacetFilters {
        FacetFilters::compile(&self.facets)
    }

    /// Persist the long-lived selections.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        if let Ok(components) = serde_json::to_string(&self.components) {
            store.set(COMPONENTS_KEY, &components);
        }
        if let Ok(versions) = serde_json::to_string(&self.component_version) {
            store.set(COMPONENT_VERSION_KEY, &versions);
        }
    }

    /// Restore selections, falling back to defaults on any malformed value.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let components = store
            .get(COMPONENTS_KEY)
            .and_then(|value| serde_json::from_str(&value).ok())
            .unwrap_or_default();
        let component_version = store
            .get(COMPONENT_VERSION_KEY)
            .and_then(|value| serde_json::from_str(&value).ok())
            .unwrap_or_default();
        FilterState {
            facets: Vec::new(),
            components,
            component_version,
        }
    }
}
