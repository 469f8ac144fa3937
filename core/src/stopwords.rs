//! Stopword filtering: a fixed word list or corpus-frequency thresholds.
//!
//! Both strategies produce a new filtered term list; kept terms are stored
//! lowercased. Applying either to a document overwrites its previous
//! `filtered_terms` wholesale.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::document::Document;

/// A fixed, case-insensitive set of stopwords.
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    /// Parse a stopword file: one word per line, blank lines ignored,
    /// matching is case-insensitive.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keep every term not on the list, lowercased.
    pub fn filter(&self, terms: &[String]) -> Vec<String> {
        terms
            .iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !self.words.contains(t))
            .collect()
    }
}

/// How a term's corpus frequency is computed for threshold filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyMode {
    /// Fraction of documents containing the term at least once.
    #[default]
    DocumentFrequency,
    /// Fraction of all term occurrences that are this term.
    CollectionFrequency,
}

/// Rare/common cutoffs for [`FrequencyFilter`]. A term is a stopword when
/// its frequency is `>= common` or `<= rare`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrequencyThresholds {
    pub rare: f64,
    pub common: f64,
}

/// A stopword classifier computed from a reference collection.
///
/// An empty reference collection is a degenerate case: the filter then
/// yields an empty term list rather than an error.
#[derive(Debug, Clone)]
pub struct FrequencyFilter {
    stopwords: HashSet<String>,
    empty_reference: bool,
}

impl FrequencyFilter {
    pub fn from_collection(
        collection: &[Document],
        mode: FrequencyMode,
        thresholds: FrequencyThresholds,
    ) -> Self {
        let (counts, total) = match mode {
            FrequencyMode::DocumentFrequency => {
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for doc in collection {
                    let unique: HashSet<&str> = doc.terms().iter().map(String::as_str).collect();
                    for term in unique {
                        *counts.entry(term).or_insert(0) += 1;
                    }
                }
                (counts, collection.len())
            }
            FrequencyMode::CollectionFrequency => {
                let mut counts: HashMap<&str, usize> = HashMap::new();
                let mut total = 0usize;
                for doc in collection {
                    for term in doc.terms() {
                        *counts.entry(term.as_str()).or_insert(0) += 1;
                        total += 1;
                    }
                }
                (counts, total)
            }
        };

        if total == 0 {
            return Self {
                stopwords: HashSet::new(),
                empty_reference: true,
            };
        }

        let stopwords = counts
            .into_iter()
            .filter(|&(_, count)| {
                let freq = count as f64 / total as f64;
                freq >= thresholds.common || freq <= thresholds.rare
            })
            .map(|(term, _)| term.to_string())
            .collect();

        Self {
            stopwords,
            empty_reference: false,
        }
    }

    /// The terms classified as stopwords.
    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }

    /// Keep every term not classified as a stopword, lowercased. Yields an
    /// empty list when the reference collection was empty.
    pub fn filter(&self, terms: &[String]) -> Vec<String> {
        if self.empty_reference {
            return Vec::new();
        }
        terms
            .iter()
            .filter(|t| !self.stopwords.contains(t.as_str()))
            .map(|t| t.to_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: u32, terms: &[&str]) -> Document {
        Document::new(
            id,
            format!("doc {id}"),
            "tester",
            "fixture",
            terms.join(" "),
            terms.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn list_filter_is_case_insensitive_and_lowercases() {
        let list = StopwordList::from_words(["The"]);
        let kept = list.filter(&["The".into(), "Cat".into(), "sat".into()]);
        assert_eq!(kept, vec!["cat", "sat"]);
    }

    #[test]
    fn from_text_skips_blank_lines() {
        let list = StopwordList::from_text("the\n\n  and  \n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("AND"));
    }

    #[test]
    fn document_frequency_mode() {
        let docs = vec![
            doc(0, &["the", "cat"]),
            doc(1, &["the", "dog"]),
            doc(2, &["the", "cat", "dog"]),
        ];
        // "the" appears in 3/3 docs, "cat" and "dog" in 2/3
        let filter = FrequencyFilter::from_collection(
            &docs,
            FrequencyMode::DocumentFrequency,
            FrequencyThresholds { rare: 0.0, common: 0.9 },
        );
        assert!(filter.stopwords().contains("the"));
        assert!(!filter.stopwords().contains("cat"));
    }

    #[test]
    fn collection_frequency_mode() {
        let docs = vec![doc(0, &["a", "a", "a", "b"])];
        // "a" is 3/4 of all occurrences, "b" is 1/4
        let filter = FrequencyFilter::from_collection(
            &docs,
            FrequencyMode::CollectionFrequency,
            FrequencyThresholds { rare: 0.0, common: 0.5 },
        );
        assert!(filter.stopwords().contains("a"));
        assert!(!filter.stopwords().contains("b"));
    }

    #[test]
    fn rare_threshold_drops_singletons() {
        let docs = vec![
            doc(0, &["cat", "rare"]),
            doc(1, &["cat"]),
            doc(2, &["cat"]),
        ];
        let filter = FrequencyFilter::from_collection(
            &docs,
            FrequencyMode::DocumentFrequency,
            FrequencyThresholds { rare: 0.34, common: 1.1 },
        );
        assert!(filter.stopwords().contains("rare"));
        assert!(!filter.stopwords().contains("cat"));
    }
}
