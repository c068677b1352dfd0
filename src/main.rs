// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Demo front end: tiered search over a store JSON, rendered to a terminal.

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use docfind::facet::FacetFilters;
use docfind::highlight::highlight_hit;
use docfind::locate::default_separator;
use docfind::search::{resolve_hit, search};
use docfind::testing::MemoryIndex;
use docfind::types::{SearchError, Store};

mod cli;
use cli::display::{render_header, render_segments, render_title, use_color};
use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug { "docfind=debug" } else { "docfind=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let payload = fs::read_to_string(&cli.store)
        .map_err(|err| format!("cannot read store {}: {err}", cli.store))?;
    let store = Store::from_json(&payload)
        .map_err(|err| format!("cannot parse store {}: {err}", cli.store))?;

    let index = MemoryIndex::new(&store);
    let facets = FacetFilters::compile(&cli.facet);

    let hits = match search(&index, &store.documents, &cli.query, &facets) {
        Ok(hits) => hits,
        // Recoverable: an unparseable query reads as "no results".
        Err(SearchError::QueryParse { .. }) => Vec::new(),
        Err(err) => return Err(err.to_string()),
    };

    if hits.is_empty() {
        println!("No results found for query \"{}\"", cli.query);
        return Ok(());
    }

    let separator = default_separator();
    let color = use_color();
    let mut current_component: Option<String> = None;

    let mut json_results = Vec::new();
    for hit in &hits {
        let Some(resolved) = resolve_hit(&store, hit) else {
            continue;
        };
        let highlighted = highlight_hit(
            &hit.metadata,
            resolved.section,
            resolved.doc,
            &separator,
            cli.snippet_length,
        );

        if cli.json {
            json_results.push(serde_json::json!({
                "ref": hit.doc_ref.to_string(),
                "url": resolved.doc.url,
                "pageTitle": highlighted.page_title,
                "sectionTitle": highlighted.section_title,
                "pageContent": highlighted.page_content,
                "pageKeyword": highlighted.page_keyword,
            }));
            continue;
        }

        // Group header whenever the component/version changes, like the
        // dropdown's section headers.
        if let Some(cv) = store.component_version(resolved.doc) {
            let header = format!("{} {}", cv.title, cv.display_version);
            if current_component.as_deref() != Some(header.as_str()) {
                println!("{}", render_header(&header, color));
                current_component = Some(header);
            }
        }

        println!("{}", render_title(&highlighted.page_title, color));
        if !highlighted.section_title.is_empty() {
            println!("  {}", render_segments(&highlighted.section_title, color));
        }
        println!("  {}", render_segments(&highlighted.page_content, color));
        // Keywords only earn a line when one of them actually matched
        if highlighted
            .page_keyword
            .iter()
            .any(|segment| segment.kind == docfind::types::SegmentKind::Mark)
        {
            println!(
                "  keywords: {}",
                render_segments(&highlighted.page_keyword, color)
            );
        }
        let anchor = resolved
            .section
            .map(|section| format!("#{}", section.hash))
            .unwrap_or_default();
        println!("  {}{}", resolved.doc.url, anchor);
        println!();
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json_results).map_err(|err| err.to_string())?
        );
    }

    Ok(())
}
