use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::stemmer::stem;
use crate::stopwords::{FrequencyFilter, StopwordList};
use crate::tokenizer::{flatten_text, tokenize};

pub type DocId = u32;

/// Which term list of a document a search runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermView {
    Raw,
    Filtered,
    Stemmed,
    FilteredStemmed,
}

impl TermView {
    pub fn from_flags(filtered: bool, stemmed: bool) -> Self {
        match (filtered, stemmed) {
            (false, false) => TermView::Raw,
            (true, false) => TermView::Filtered,
            (false, true) => TermView::Stemmed,
            (true, true) => TermView::FilteredStemmed,
        }
    }

    /// Query terms are stemmed before lookup for the stemmed views.
    pub fn is_stemmed(self) -> bool {
        matches!(self, TermView::Stemmed | TermView::FilteredStemmed)
    }
}

/// A single document in a collection.
///
/// `terms` is fixed at construction and is the ground truth all derived
/// term lists are computed from. The derived lists (`filtered_terms`,
/// `stemmed_terms`, `filtered_stemmed_terms`) start empty and are
/// materialized by the four `apply_*` entry points; each call overwrites
/// the previous value of its target field as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub document_id: DocId,
    pub title: String,
    pub author: String,
    pub origin: String,
    pub raw_text: String,
    terms: Vec<String>,
    #[serde(default)]
    filtered_terms: Vec<String>,
    #[serde(default)]
    stemmed_terms: Vec<String>,
    #[serde(default)]
    filtered_stemmed_terms: Vec<String>,
}

impl Document {
    pub fn new(
        document_id: DocId,
        title: impl Into<String>,
        author: impl Into<String>,
        origin: impl Into<String>,
        raw_text: impl Into<String>,
        terms: Vec<String>,
    ) -> Self {
        Self {
            document_id,
            title: title.into(),
            author: author.into(),
            origin: origin.into(),
            raw_text: raw_text.into(),
            terms,
            filtered_terms: Vec::new(),
            stemmed_terms: Vec::new(),
            filtered_stemmed_terms: Vec::new(),
        }
    }

    /// Build a document by flattening and tokenizing raw text.
    pub fn from_raw_text(
        document_id: DocId,
        title: impl Into<String>,
        author: impl Into<String>,
        origin: impl Into<String>,
        text: &str,
    ) -> Self {
        let raw_text = flatten_text(text);
        let terms = tokenize(&raw_text);
        Self::new(document_id, title, author, origin, raw_text, terms)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn filtered_terms(&self) -> &[String] {
        &self.filtered_terms
    }

    pub fn stemmed_terms(&self) -> &[String] {
        &self.stemmed_terms
    }

    pub fn filtered_stemmed_terms(&self) -> &[String] {
        &self.filtered_stemmed_terms
    }

    /// Replace `filtered_terms` with the terms not on the stopword list.
    /// Kept terms are stored lowercased.
    pub fn apply_stopword_list(&mut self, list: &StopwordList) {
        self.filtered_terms = list.filter(&self.terms);
    }

    /// Replace `filtered_terms` with the terms the frequency filter keeps.
    pub fn apply_frequency_filter(&mut self, filter: &FrequencyFilter) {
        self.filtered_terms = filter.filter(&self.terms);
    }

    /// Replace `stemmed_terms` with the stem of every entry in `terms`.
    pub fn apply_stemming(&mut self) {
        self.stemmed_terms = self.terms.iter().map(|t| stem(t)).collect();
    }

    /// Replace `filtered_stemmed_terms` with the stem of every entry in
    /// `filtered_terms`. Empty when no filter has been applied.
    pub fn apply_stemming_filtered(&mut self) {
        self.filtered_stemmed_terms = self.filtered_terms.iter().map(|t| stem(t)).collect();
    }

    /// The term list backing the given view.
    ///
    /// Reading a stemmed view that has not been materialized derives it on
    /// demand from the corresponding unstemmed list without mutating the
    /// document; the `FilteredStemmed` view of an unfiltered document is
    /// empty.
    pub fn view(&self, view: TermView) -> Cow<'_, [String]> {
        match view {
            TermView::Raw => Cow::Borrowed(self.terms.as_slice()),
            TermView::Filtered => Cow::Borrowed(self.filtered_terms.as_slice()),
            TermView::Stemmed => {
                if self.stemmed_terms.is_empty() && !self.terms.is_empty() {
                    Cow::Owned(self.terms.iter().map(|t| stem(t)).collect())
                } else {
                    Cow::Borrowed(self.stemmed_terms.as_slice())
                }
            }
            TermView::FilteredStemmed => {
                if self.filtered_stemmed_terms.is_empty() && !self.filtered_terms.is_empty() {
                    Cow::Owned(self.filtered_terms.iter().map(|t| stem(t)).collect())
                } else {
                    Cow::Borrowed(self.filtered_stemmed_terms.as_slice())
                }
            }
        }
    }
}
