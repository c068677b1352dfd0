// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning match spans into something a result list can render.
//!
//! [`build_highlighted_text`] is the workhorse: text plus spans in,
//! alternating text/mark segments out, windowed to a snippet budget so a
//! 40KB page body becomes a one-line excerpt around the first match.
//! [`highlight_hit`] applies it to the four fields a result displays
//! (page title, section title, body, keywords).
//!
//! Only one window is ever produced - the one centered on the first match.
//! Later matches inside the window get their own marks; matches outside it
//! are invisible. That is deliberate: the excerpt answers "why did this
//! document match", not "where are all the matches".
//!
//! Degenerate spans (zero length, running past the text) are dropped
//! silently per policy, and a span overlapping the previous one is skipped
//! so segments always form a clean partition of the window.

use regex::Regex;

use crate::locate::term_positions;
use crate::types::{Document, MatchMetadata, Section, Segment, Span};

/// Ellipsis marker inserted at truncated window edges.
pub const ELLIPSIS: &str = "...";

/// Snippet budget used when the caller has no opinion.
pub const DEFAULT_SNIPPET_LENGTH: usize = 100;

/// Split `text` into text/mark segments around the given match spans.
///
/// `snippet_length` bounds how much context appears before the first span's
/// start and after its end; `0` means "no budget" and the window is the
/// whole text. Truncated edges carry a literal `"..."`.
///
/// Invalid spans are dropped. If none survive, the result is a single text
/// segment: `text` truncated to the budget, with `"..."` when truncation
/// happened. The result is never empty for non-empty `text`.
pub fn build_highlighted_text(
    text: &str,
    positions: &[Span],
    snippet_length: usize,
) -> Vec<Segment> {
    let text_len = text.len();

    let mut valid: Vec<Span> = positions
        .iter()
        .copied()
        .filter(|position| position.fits(text_len))
        .collect();

    if valid.is_empty() {
        let cut = if snippet_length >= text_len {
            text_len
        } else {
            floor_char_boundary(text, snippet_length)
        };
        let mut excerpt = text[..cut].to_string();
        if snippet_length < text_len {
            excerpt.push_str(ELLIPSIS);
        }
        return vec![Segment::text(excerpt)];
    }

    valid.sort_by_key(|position| position.start);
    let first = valid[0];

    // Display window: whole text, unless a budget forces a window centered
    // on the first span, extended snippet_length bytes each way.
    let mut window_start = 0;
    let mut window_end = text_len;
    if snippet_length > 0 && text_len > snippet_length {
        window_start = floor_char_boundary(text, first.start.saturating_sub(snippet_length));
        window_end = ceil_char_boundary(text, (first.end() + snippet_length).min(text_len));
    }

    let mut segments = Vec::new();

    if first.start > 0 {
        let prefix = if window_start > 0 { ELLIPSIS } else { "" };
        segments.push(Segment::text(format!(
            "{}{}",
            prefix,
            &text[window_start..first.start]
        )));
    }

    let mut last_end = 0usize;
    for span in valid
        .iter()
        .filter(|span| span.start >= window_start && span.end() <= window_end)
    {
        // A span overlapping the previous mark would break the partition;
        // the earlier span wins.
        if span.start < last_end {
            continue;
        }
        if last_end > 0 && span.start > last_end {
            segments.push(Segment::text(text[last_end..span.start].to_string()));
        }
        segments.push(Segment::mark(text[span.start..span.end()].to_string()));
        last_end = span.end();
    }

    if last_end < window_end {
        let mut tail = text[last_end..window_end].to_string();
        if window_end < text_len {
            tail.push_str(ELLIPSIS);
        }
        segments.push(Segment::text(tail));
    }

    segments
}

/// The four independently highlighted fields of one search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightedHit {
    pub page_title: Vec<Segment>,
    pub section_title: Vec<Segment>,
    pub page_content: Vec<Segment>,
    pub page_keyword: Vec<Segment>,
}

/// Highlight every displayed field of a hit.
///
/// Title terms highlight both the page title and the section title (when the
/// hit points into a section); text and keyword terms highlight their own
/// fields. A missing section or keyword yields an empty segment list for
/// that slot.
pub fn highlight_hit(
    metadata: &MatchMetadata,
    section: Option<&Section>,
    doc: &Document,
    separator: &Regex,
    snippet_length: usize,
) -> HighlightedHit {
    let by_field = metadata.fields_to_terms();
    let title_terms = by_field.get("title").cloned().unwrap_or_default();
    let text_terms = by_field.get("text").cloned().unwrap_or_default();
    let keyword_terms = by_field.get("keyword").cloned().unwrap_or_default();

    HighlightedHit {
        page_title: highlight_field(&doc.title, &title_terms, separator, snippet_length),
        section_title: section
            .map(|section| highlight_field(&section.text, &title_terms, separator, snippet_length))
            .unwrap_or_default(),
        page_content: highlight_field(&doc.text, &text_terms, separator, snippet_length),
        page_keyword: doc
            .keyword
            .as_deref()
            .map(|keyword| highlight_field(keyword, &keyword_terms, separator, snippet_length))
            .unwrap_or_default(),
    }
}

fn highlight_field(
    text: &str,
    terms: &[&str],
    separator: &Regex,
    snippet_length: usize,
) -> Vec<Segment> {
    let positions = term_positions(terms, text, separator);
    build_highlighted_text(text, &positions, snippet_length)
}

/// Largest char boundary `<= index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest char boundary `>= index`.
fn ceil_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
