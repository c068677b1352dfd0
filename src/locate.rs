// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where did the term actually land in the text?
//!
//! The index reports *that* a term matched a field, not *where*. To highlight
//! anything we have to re-find the term ourselves, and we have to do it with
//! the exact same token boundaries the index used at build time - otherwise
//! the highlight drifts off the word the index matched. That is why the
//! separator is a caller-supplied [`Regex`] rather than hardcoded whitespace.
//!
//! Matching is containment, not equality: the index hands back stemmed terms
//! ("instal" for "installing"), so the token merely has to contain the term.
//! The whole token is highlighted, which is also what a reader wants to see.

use regex::Regex;

use crate::types::Span;

/// The separator the index's tokenizer uses at build time: whitespace or `-`.
///
/// Use this when the index was built with default tokenization; pass the
/// index's own pattern otherwise.
pub fn default_separator() -> Regex {
    Regex::new(r"[\s\-]").expect("default separator pattern is valid")
}

/// Find the first token of `text` containing `term`, case-insensitively.
///
/// Tokens are maximal runs of non-separator chars; end-of-string counts as a
/// boundary. Returns the whole token's byte span (not just the matched
/// substring), or [`Span::NONE`] when no token contains the term. Callers
/// must filter the sentinel out before slicing.
///
/// Only the first occurrence is ever located; multiple occurrences of the
/// same term in one field are not separately highlighted.
pub fn find_term_position(term: &str, text: &str, separator: &Regex) -> Span {
    if term.is_empty() {
        return Span::NONE;
    }
    let term = term.to_lowercase();

    let mut token_start: Option<usize> = None;
    let mut buf = [0u8; 4];

    for (offset, ch) in text.char_indices() {
        if separator.is_match(ch.encode_utf8(&mut buf)) {
            if let Some(start) = token_start.take() {
                if token_contains(&text[start..offset], &term) {
                    return Span::new(start, offset - start);
                }
            }
        } else if token_start.is_none() {
            token_start = Some(offset);
        }
    }

    // End-of-string is an implicit boundary.
    if let Some(start) = token_start {
        if token_contains(&text[start..], &term) {
            return Span::new(start, text.len() - start);
        }
    }

    Span::NONE
}

/// Locate every distinct term in `text`, dropping misses and ordering the
/// survivors by start offset - the shape the segmenter expects.
pub fn term_positions(terms: &[&str], text: &str, separator: &Regex) -> Vec<Span> {
    let mut positions: Vec<Span> = terms
        .iter()
        .map(|term| find_term_position(term, text, separator))
        .filter(Span::is_match)
        .collect();
    positions.sort_by_key(|span| span.start);
    positions
}

#[inline]
fn token_contains(token: &str, lowercase_term: &str) -> bool {
    token.to_lowercase().contains(lowercase_term)
}
