use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[a-z0-9']+").expect("valid regex");
}

/// Tokenize text into lowercase alphanumeric-plus-apostrophe terms
/// using NFKC normalization.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized)
        .map(|mat| mat.as_str().to_string())
        .collect()
}

/// Collapse newlines to single spaces, as stored in `Document::raw_text`.
pub fn flatten_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The cat's hat, 42 times!");
        assert_eq!(t, vec!["the", "cat's", "hat", "42", "times"]);
    }

    #[test]
    fn normalizes_and_lowercases() {
        let t = tokenize("Caf\u{00e9} MENU");
        assert_eq!(t[1], "menu");
    }

    #[test]
    fn flattens_newlines() {
        assert_eq!(flatten_text("one\ntwo\r\n  three"), "one two three");
    }
}
