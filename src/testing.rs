// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A small in-memory token index for tests and the demo CLI.
//!
//! This module is always compiled but hidden from documentation. The core
//! treats the index as an opaque dependency; `MemoryIndex` exists so the
//! executor has something real to escalate against without dragging a
//! search engine into the dependency tree. It tokenizes a [`Store`] with
//! the same separator the locator uses, which is exactly the alignment the
//! highlighter's contract requires.
//!
//! The query grammar is the subset a search box produces: bare terms,
//! `+term` (required), `-term` (prohibited), `field:term` scoping, and
//! `*` wildcards at either end. Unknown fields and empty terms are parse
//! errors, which doubles as the recoverable-failure path for tests.

#![doc(hidden)]

use regex::Regex;

use crate::locate::default_separator;
use crate::query::{Clause, Index, Presence, QueryParseError, Wildcard};
use crate::types::{Hit, MatchMetadata, SearchError, Store};

const SEARCHABLE_FIELDS: [&str; 3] = ["title", "text", "keyword"];

/// One indexed entry: a document or a document section.
#[derive(Debug, Clone)]
struct Entry {
    reference: String,
    /// (field name, lowercased tokens)
    fields: Vec<(&'static str, Vec<String>)>,
}

/// In-memory inverted view over a [`Store`].
#[derive(Debug)]
pub struct MemoryIndex {
    entries: Vec<Entry>,
}

impl MemoryIndex {
    /// Index a store with the default tokenizer separator.
    pub fn new(store: &Store) -> Self {
        Self::with_separator(store, &default_separator())
    }

    /// Index a store, splitting tokens on the given separator.
    pub fn with_separator(store: &Store, separator: &Regex) -> Self {
        let mut entries = Vec::new();
        for (doc_id, doc) in &store.documents {
            let mut fields = vec![
                ("title", tokenize(&doc.title, separator)),
                ("text", tokenize(&doc.text, separator)),
            ];
            if let Some(keyword) = &doc.keyword {
                fields.push(("keyword", tokenize(keyword, separator)));
            }
            entries.push(Entry {
                reference: doc_id.clone(),
                fields,
            });

            for section in &doc.titles {
                entries.push(Entry {
                    reference: format!("{}-{}", doc_id, section.id),
                    fields: vec![("title", tokenize(&section.text, separator))],
                });
            }
        }
        MemoryIndex { entries }
    }
}

fn tokenize(text: &str, separator: &Regex) -> Vec<String> {
    separator
        .split(&text.to_lowercase())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn token_matches(token: &str, clause: &Clause) -> bool {
    match clause.wildcard {
        Wildcard::None => token == clause.term,
        Wildcard::Trailing => token.starts_with(&clause.term),
        Wildcard::Both => token.contains(&clause.term),
    }
}

impl Index for MemoryIndex {
    fn parse(&self, query: &str) -> Result<Vec<Clause>, QueryParseError> {
        let mut clauses = Vec::new();
        for raw in query.split_whitespace() {
            let (presence, rest) = match raw.strip_prefix('+') {
                Some(rest) => (Presence::Required, rest),
                None => match raw.strip_prefix('-') {
                    Some(rest) => (Presence::Prohibited, rest),
                    None => (Presence::Optional, raw),
                },
            };

            let (field, rest) = match rest.split_once(':') {
                Some((field, rest)) => {
                    if !SEARCHABLE_FIELDS.contains(&field) {
                        return Err(QueryParseError::new(
                            query,
                            format!("unknown field `{field}`"),
                        ));
                    }
                    (Some(field.to_string()), rest)
                }
                None => (None, rest),
            };

            let leading = rest.starts_with('*');
            let trailing = rest.ends_with('*') && rest.len() > 1;
            let term = rest.trim_matches('*');
            if term.is_empty() {
                return Err(QueryParseError::new(query, format!("empty term in `{raw}`")));
            }
            let wildcard = match (leading, trailing) {
                (true, _) => Wildcard::Both,
                (false, true) => Wildcard::Trailing,
                (false, false) => Wildcard::None,
            };

            clauses.push(Clause {
                term: term.to_lowercase(),
                field,
                presence,
                wildcard,
                use_pipeline: wildcard == Wildcard::None,
            });
        }
        Ok(clauses)
    }

    fn execute(&self, clauses: &[Clause]) -> Result<Vec<Hit>, SearchError> {
        let mut hits = Vec::new();

        for entry in &self.entries {
            let mut metadata = MatchMetadata::default();
            let mut required_miss = false;
            let mut prohibited_hit = false;

            for clause in clauses {
                let mut matched = false;
                for (field, tokens) in &entry.fields {
                    if clause.field.as_deref().is_some_and(|scoped| scoped != *field) {
                        continue;
                    }
                    for token in tokens {
                        if token_matches(token, clause) {
                            matched = true;
                            if clause.presence != Presence::Prohibited {
                                metadata.record(&clause.term, field);
                            }
                        }
                    }
                }
                match clause.presence {
                    Presence::Required if !matched => required_miss = true,
                    Presence::Prohibited if matched => prohibited_hit = true,
                    _ => {}
                }
            }

            if !metadata.is_empty() && !required_miss && !prohibited_hit {
                hits.push(Hit {
                    doc_ref: crate::types::DocRef::parse(&entry.reference),
                    metadata,
                });
            }
        }

        Ok(hits)
    }
}
