// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docfind command-line interface.
//!
//! One command: load a store JSON, run the tiered search against an
//! in-memory index, print highlighted excerpts. `--facet` can be given
//! multiple times; facets OR together the same way the search box's
//! checkboxes do. `--debug` turns on the diagnostics the web UI hides
//! behind its debug URL parameter.

pub mod display;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "docfind",
    about = "Search a documentation store with tiered query escalation",
    version
)]
pub struct Cli {
    /// The query string
    pub query: String,

    /// Path to the store JSON (documents + component versions)
    #[arg(short, long)]
    pub store: String,

    /// Active facet filter, e.g. "component:server;version:2.1" (repeatable)
    #[arg(short, long)]
    pub facet: Vec<String>,

    /// Snippet budget in bytes of context around the first match
    #[arg(long, default_value_t = crate_snippet_default())]
    pub snippet_length: usize,

    /// Emit results as JSON segment lists instead of text
    #[arg(long)]
    pub json: bool,

    /// Log query-parse diagnostics
    #[arg(long)]
    pub debug: bool,
}

fn crate_snippet_default() -> usize {
    docfind::highlight::DEFAULT_SNIPPET_LENGTH
}
