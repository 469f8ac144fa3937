use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::document::{DocId, Document, TermView};

/// One document's entry in a term's posting list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    /// Occurrences of the term in the document's selected view; always >= 1.
    pub tf: u32,
}

/// In-memory inverted index over one term view of a collection.
///
/// Built fresh per search call; nothing is persisted or kept across calls.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
    doc_lengths: HashMap<DocId, usize>,
    num_docs: u32,
}

impl InvertedIndex {
    /// Build the index from the given view of every document.
    ///
    /// Term counting is per document, then merged, so the build cost is
    /// linear in the total number of tokens.
    pub fn build(collection: &[Document], view: TermView) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut doc_lengths = HashMap::new();

        for doc in collection {
            let terms = doc.view(view);
            let mut tf_counts: HashMap<String, u32> = HashMap::new();
            for term in terms.iter() {
                *tf_counts.entry(term.to_lowercase()).or_insert(0) += 1;
            }
            doc_lengths.insert(doc.document_id, terms.len());
            for (term, tf) in tf_counts {
                postings.entry(term).or_default().push(Posting {
                    doc_id: doc.document_id,
                    tf,
                });
            }
        }

        let index = Self {
            postings,
            doc_lengths,
            num_docs: collection.len() as u32,
        };
        tracing::debug!(
            num_docs = index.num_docs,
            num_terms = index.postings.len(),
            ?view,
            "built inverted index"
        );
        index
    }

    pub fn num_docs(&self) -> u32 {
        self.num_docs
    }

    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Number of documents containing the term at least once.
    pub fn document_frequency(&self, term: &str) -> u32 {
        self.postings.get(term).map_or(0, |p| p.len() as u32)
    }

    /// `ln(N / df)`; `None` for terms absent from the index.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let df = self.document_frequency(term);
        if df == 0 {
            return None;
        }
        Some((f64::from(self.num_docs) / f64::from(df)).ln())
    }

    /// Length of one document's selected view, in tokens.
    pub fn doc_length(&self, doc_id: DocId) -> Option<usize> {
        self.doc_lengths.get(&doc_id).copied()
    }
}
