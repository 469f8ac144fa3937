//! Porter suffix-stripping stemmer.
//!
//! Operates on lowercase ASCII input; non-ASCII words and words of two
//! characters or fewer are returned lowercased, otherwise unchanged.

/// Stem a single word with the Porter rule cascade.
///
/// Pure and deterministic: the same input always yields the same output.
pub fn stem(word: &str) -> String {
    let mut w = word.to_lowercase();
    if !w.is_ascii() || w.len() <= 2 {
        return w;
    }

    step1a(&mut w);
    step1b(&mut w);
    step1c(&mut w);
    replace_first_suffix(&mut w, STEP2_RULES);
    replace_first_suffix(&mut w, STEP3_RULES);
    step4(&mut w);
    step5a(&mut w);
    step5b(&mut w);
    w
}

/// A letter is a consonant unless it is `aeiou`; `y` is a consonant only
/// when not preceded by a consonant (position 0 `y` always is).
fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// The Porter measure: the number of vowel-run to consonant-run
/// transitions after any leading consonant run.
fn measure(w: &[u8]) -> usize {
    let n = w.len();
    let mut m = 0;
    let mut i = 0;

    while i < n && is_consonant(w, i) {
        i += 1;
    }
    while i < n {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i >= n {
            break;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
    }
    m
}

fn contains_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// Consonant-vowel-consonant ending where the final consonant is not
/// `w`, `x`, or `y`.
fn cvc_ending(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

/// Plural normalization: `sses -> ss`, `ies -> i`, keep `ss`, strip a
/// trailing lone `s`.
fn step1a(w: &mut String) {
    if w.ends_with("sses") || w.ends_with("ies") {
        w.truncate(w.len() - 2);
    } else if w.ends_with("ss") {
        // unchanged
    } else if w.ends_with('s') && w.len() > 1 {
        w.truncate(w.len() - 1);
    }
}

/// Past-tense and participle normalization.
fn step1b(w: &mut String) {
    if w.ends_with("eed") {
        if measure(&w.as_bytes()[..w.len() - 3]) > 0 {
            w.truncate(w.len() - 1);
        }
    } else if w.ends_with("ed") {
        if contains_vowel(&w.as_bytes()[..w.len() - 2]) {
            w.truncate(w.len() - 2);
            step1b_fixup(w);
        }
    } else if w.ends_with("ing") && contains_vowel(&w.as_bytes()[..w.len() - 3]) {
        w.truncate(w.len() - 3);
        step1b_fixup(w);
    }
}

/// Runs after `ed`/`ing` removal to repair the exposed stem.
fn step1b_fixup(w: &mut String) {
    if w.ends_with("at") || w.ends_with("bl") || w.ends_with("iz") {
        w.push('e');
    } else if ends_double_consonant(w.as_bytes())
        && !matches!(w.as_bytes()[w.len() - 1], b'l' | b's' | b'z')
    {
        w.truncate(w.len() - 1);
    } else if measure(w.as_bytes()) == 1 && cvc_ending(w.as_bytes()) {
        w.push('e');
    }
}

/// `y -> i` when the rest of the stem contains a vowel.
fn step1c(w: &mut String) {
    if w.ends_with('y') && contains_vowel(&w.as_bytes()[..w.len() - 1]) {
        w.truncate(w.len() - 1);
        w.push('i');
    }
}

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Apply at most one substitution: the first suffix that matches ends the
/// pass, whether or not its measure gate lets it fire.
fn replace_first_suffix(w: &mut String, rules: &[(&str, &str)]) {
    for &(suffix, replacement) in rules {
        if w.ends_with(suffix) {
            let stem_len = w.len() - suffix.len();
            if measure(&w.as_bytes()[..stem_len]) > 0 {
                w.truncate(stem_len);
                w.push_str(replacement);
            }
            break;
        }
    }
}

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Suffix removal for long stems (measure > 1); `ion` only comes off a
/// stem ending in `s` or `t`. First match ends the pass.
fn step4(w: &mut String) {
    for &suffix in STEP4_SUFFIXES {
        if w.ends_with(suffix) {
            let stem_len = w.len() - suffix.len();
            if measure(&w.as_bytes()[..stem_len]) > 1 {
                if suffix == "ion" {
                    if stem_len > 0 && matches!(w.as_bytes()[stem_len - 1], b's' | b't') {
                        w.truncate(stem_len);
                    }
                } else {
                    w.truncate(stem_len);
                }
            }
            break;
        }
    }
}

/// Strip a trailing `e` from long enough stems.
fn step5a(w: &mut String) {
    if w.ends_with('e') {
        let stem = &w.as_bytes()[..w.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !cvc_ending(stem)) {
            w.truncate(w.len() - 1);
        }
    }
}

/// Collapse a trailing double `l`.
fn step5b(w: &mut String) {
    if measure(w.as_bytes()) > 1 && ends_double_consonant(w.as_bytes()) && w.ends_with('l') {
        w.truncate(w.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_pass_through_lowercased() {
        assert_eq!(stem("It"), "it");
        assert_eq!(stem("a"), "a");
    }

    #[test]
    fn measure_counts_vc_transitions() {
        assert_eq!(measure(b"tr"), 0);
        assert_eq!(measure(b"tree"), 1);
        assert_eq!(measure(b"trouble"), 2);
        assert_eq!(measure(b"oaten"), 2);
    }

    #[test]
    fn y_consonant_rule() {
        // leading y is a consonant, y after a consonant is a vowel
        assert!(is_consonant(b"yes", 0));
        assert!(!is_consonant(b"sky", 2));
        assert!(is_consonant(b"say", 2));
    }

    #[test]
    fn plural_and_participle_forms() {
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("singing"), "sing");
        assert_eq!(stem("files"), "file");
    }

    #[test]
    fn derivational_suffixes() {
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("electriciti"), "electr");
        assert_eq!(stem("hopeful"), "hope");
        assert_eq!(stem("goodness"), "good");
        assert_eq!(stem("oscillation"), "oscil");
    }
}
