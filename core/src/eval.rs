//! Precision/recall evaluation against externally supplied ground truth.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::document::{DocId, Document};

/// Precision and recall of a retrieved set against a relevant set.
///
/// Both metrics are defined as 0.0 when either input set is empty, a
/// deliberate simplification over leaving them undefined.
pub fn precision_recall(
    retrieved: &HashSet<DocId>,
    relevant: &HashSet<DocId>,
) -> (f64, f64) {
    if retrieved.is_empty() || relevant.is_empty() {
        return (0.0, 0.0);
    }
    let hits = retrieved.intersection(relevant).count() as f64;
    (
        hits / retrieved.len() as f64,
        hits / relevant.len() as f64,
    )
}

/// Ground truth: lowercase query term -> names of the relevant documents.
///
/// Names are matched to documents by normalized substring comparison
/// against titles, a best-effort informational mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroundTruth {
    entries: HashMap<String, Vec<String>>,
}

impl GroundTruth {
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolve the relevant document ids for a query term. Unknown terms
    /// and unmatched names yield an empty set.
    pub fn relevant_ids(&self, term: &str, collection: &[Document]) -> HashSet<DocId> {
        let Some(names) = self.entries.get(&term.to_lowercase()) else {
            return HashSet::new();
        };
        let mut ids = HashSet::new();
        for name in names {
            let needle = normalize_name(name);
            if needle.is_empty() {
                continue;
            }
            for doc in collection {
                let title = normalize_name(&doc.title);
                if !title.is_empty() && (title.contains(&needle) || needle.contains(&title)) {
                    ids.insert(doc.document_id);
                }
            }
        }
        ids
    }
}

/// Lowercase and strip everything but alphanumerics, so punctuation and
/// spacing differences don't break name matching.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_sets() {
        let retrieved: HashSet<DocId> = [1, 2].into();
        let relevant: HashSet<DocId> = [2, 3].into();
        assert_eq!(precision_recall(&retrieved, &relevant), (0.5, 0.5));
    }

    #[test]
    fn parses_ground_truth_json() {
        let gt: GroundTruth =
            serde_json::from_str(r#"{"band": ["The Speckled Band"], "crown": []}"#).unwrap();
        assert_eq!(gt.terms().count(), 2);
        assert!(!gt.is_empty());
    }

    #[test]
    fn resolves_names_by_normalized_substring() {
        let docs = vec![
            Document::new(0, "The Speckled Band", "Doyle", "Adventures", "", vec![]),
            Document::new(1, "A Case of Identity", "Doyle", "Adventures", "", vec![]),
        ];
        let gt = GroundTruth::new(HashMap::from([(
            "band".to_string(),
            vec!["speckled band".to_string()],
        )]));
        let ids = gt.relevant_ids("BAND", &docs);
        assert_eq!(ids, HashSet::from([0]));
        assert!(gt.relevant_ids("unknown", &docs).is_empty());
    }
}
