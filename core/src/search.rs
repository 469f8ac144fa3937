//! Boolean and Vector Space Model retrieval over an in-memory collection.
//!
//! Both entry points are stateless across calls: the Vector Space search
//! rebuilds its inverted index from the current collection every time.

use std::collections::{HashMap, HashSet};

use crate::document::{DocId, Document, TermView};
use crate::index::InvertedIndex;
use crate::stemmer::stem;

/// Options for [`boolean_search`].
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Which term list of each document the query runs over.
    pub view: TermView,
    /// When set, only score-1 documents are returned; otherwise every
    /// document appears with score 1.0 or 0.0 in collection order.
    pub matches_only: bool,
}

impl SearchOptions {
    pub fn new(view: TermView) -> Self {
        Self {
            view,
            matches_only: false,
        }
    }

    /// The legacy convention of the earlier evaluation tooling: stemmed
    /// views returned only the matching documents, unstemmed views
    /// returned a score for every document.
    pub fn compat(filtered: bool, stemmed: bool) -> Self {
        let view = TermView::from_flags(filtered, stemmed);
        Self {
            view,
            matches_only: stemmed,
        }
    }
}

/// Split a query into lowercase terms, stemming them for stemmed views.
fn query_terms(query: &str, view: TermView) -> Vec<String> {
    let terms = query.to_lowercase();
    let terms = terms.split_whitespace();
    if view.is_stemmed() {
        terms.map(stem).collect()
    } else {
        terms.map(str::to_string).collect()
    }
}

/// Conjunctive Boolean search: a document matches iff every query term is
/// present in its selected term view.
///
/// An empty or whitespace-only query scores every document 0 (so with
/// `matches_only` the result is empty).
pub fn boolean_search<'a>(
    query: &str,
    collection: &'a [Document],
    options: SearchOptions,
) -> Vec<(f64, &'a Document)> {
    let terms = query_terms(query, options.view);

    let mut results = Vec::with_capacity(collection.len());
    for doc in collection {
        let score = if terms.is_empty() {
            0.0
        } else {
            let doc_terms: HashSet<String> =
                doc.view(options.view).iter().map(|t| t.to_lowercase()).collect();
            if terms.iter().all(|t| doc_terms.contains(t)) {
                1.0
            } else {
                0.0
            }
        };
        results.push((score, doc));
    }

    if options.matches_only {
        results.retain(|&(score, _)| score == 1.0);
    }
    tracing::debug!(
        query,
        hits = results.iter().filter(|&&(s, _)| s == 1.0).count(),
        "boolean search"
    );
    results
}

/// Vector Space Model search with additive tf-idf scoring.
///
/// For each query term present in the index, every posting `(doc, tf)`
/// contributes `(1 + ln tf) * ln(N / df)` to that document's score. Query
/// terms absent from the index are skipped. Every document of the
/// collection appears in the result (score 0.0 when nothing matched);
/// ordering follows the collection, sorting is the caller's job.
pub fn vector_space_search<'a>(
    query: &str,
    collection: &'a [Document],
    view: TermView,
) -> Vec<(f64, &'a Document)> {
    if collection.is_empty() {
        return Vec::new();
    }

    let terms = query_terms(query, view);
    if terms.is_empty() {
        return collection.iter().map(|doc| (0.0, doc)).collect();
    }

    let index = InvertedIndex::build(collection, view);
    let mut scores: HashMap<DocId, f64> = HashMap::new();

    for term in &terms {
        let Some(postings) = index.postings(term) else {
            continue;
        };
        let idf = index.idf(term).unwrap_or(0.0);
        for posting in postings {
            let tf_weight = 1.0 + f64::from(posting.tf).ln();
            *scores.entry(posting.doc_id).or_insert(0.0) += tf_weight * idf;
        }
    }

    collection
        .iter()
        .map(|doc| (scores.get(&doc.document_id).copied().unwrap_or(0.0), doc))
        .collect()
}
