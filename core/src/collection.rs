//! Build document collections from already-downloaded text content.
//!
//! Fetching the content (network or file I/O) is the caller's concern;
//! this module only slices, matches, and tokenizes.

use anyhow::{bail, Result};
use regex::Regex;

use crate::document::Document;
use crate::tokenizer::{flatten_text, tokenize};

/// Split a multi-story text into documents.
///
/// Only lines in `[start_line, end_line)` (0-based, `end_line` defaulting
/// to the end of the content) are searched. `pattern` must have at least
/// two capture groups: the first is the document title, the second its
/// body. Documents get sequential ids starting at 0, in match order, with
/// the given author and origin.
pub fn parse_collection(
    content: &str,
    author: &str,
    origin: &str,
    start_line: usize,
    end_line: Option<usize>,
    pattern: &Regex,
) -> Result<Vec<Document>> {
    if pattern.captures_len() < 3 {
        bail!("pattern needs two capture groups (title, body), has {}", pattern.captures_len() - 1);
    }

    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();
    let end_line = end_line.unwrap_or(lines.len()).min(lines.len());
    if start_line >= end_line {
        bail!("invalid line range: start {start_line} is not before end {end_line}");
    }
    let text = lines[start_line..end_line].join("\n");

    let mut documents = Vec::new();
    for (document_id, caps) in pattern.captures_iter(&text).enumerate() {
        let (Some(title), Some(body)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let raw_text = flatten_text(body.as_str());
        let terms = tokenize(&raw_text);
        documents.push(Document::new(
            document_id as u32,
            title.as_str().trim(),
            author,
            origin,
            raw_text,
            terms,
        ));
    }

    tracing::info!(num_docs = documents.len(), origin, "parsed collection");
    Ok(documents)
}
