//! Text canonicalization and tokenization for answer comparison.

use std::collections::HashSet;

/// Canonicalize free text for comparison.
///
/// Lowercases, maps curly apostrophes and long dashes to ASCII, turns
/// brackets and every other character outside `[a-z0-9 ']` into a space,
/// then collapses whitespace and trims.
pub fn normalize(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        spaced.push(canonical_char(ch));
    }
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn canonical_char(ch: char) -> char {
    let ch = match ch {
        '\u{2019}' => '\'',
        '\u{2013}' | '\u{2014}' => '-',
        other => other,
    };
    match ch {
        'a'..='z' | '0'..='9' | '\'' => ch,
        _ => ' ',
    }
}

/// Word tokens (maximal `[a-z0-9]+` runs) of the normalized text.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// The token plus its likely singular forms.
///
/// `bodies` also yields `body` (and `bodie`), `edges` yields `edge`;
/// words ending in `ss` and tokens of three characters or fewer are left
/// alone. Order is stable and entries are unique.
pub fn token_variants(token: &str) -> Vec<String> {
    let mut out = vec![token.to_string()];
    if token.len() > 3 {
        if token.len() > 4 {
            if let Some(stem) = token.strip_suffix("ies") {
                out.push(format!("{stem}y"));
            }
        }
        if token.ends_with('s') && !token.ends_with("ss") {
            out.push(token[..token.len() - 1].to_string());
        }
    }

    let mut seen = HashSet::new();
    out.retain(|v| !v.is_empty() && seen.insert(v.clone()));
    out
}

/// Union of [`token_variants`] over all tokens.
pub fn token_presence_set<S: AsRef<str>>(tokens: &[S]) -> HashSet<String> {
    tokens
        .iter()
        .flat_map(|t| token_variants(t.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_noise() {
        assert_eq!(normalize("  Good   TIMING!! "), "good timing");
        assert_eq!(normalize("Edge (clean) [entry]"), "edge clean entry");
        assert_eq!(normalize("skater\u{2019}s well\u{2013}timed"), "skater's well timed");
        assert_eq!(normalize("a\tb\nc"), "a b c");
        assert_eq!(normalize("???"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in [
            "Very good height and very good length",
            "Steps before the jump, unexpected / creative entry",
            "  (Effortless)   throughout\u{2014}including rhythm ",
            "Don\u{2019}t   stop",
            "Ünïcödé Ärger",
            "",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn tokenize_splits_on_apostrophes() {
        assert_eq!(tokenize("Don't STOP now"), vec!["don", "t", "stop", "now"]);
        assert_eq!(tokenize("1) Good take-off"), vec!["1", "good", "take", "off"]);
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn variants_cover_plurals() {
        assert_eq!(token_variants("edges"), vec!["edges", "edge"]);
        assert_eq!(token_variants("bodies"), vec!["bodies", "body", "bodie"]);
        assert_eq!(token_variants("class"), vec!["class"]);
        assert_eq!(token_variants("its"), vec!["its"]);
        assert_eq!(token_variants("ties"), vec!["ties", "tie"]);
        assert_eq!(token_variants("jump"), vec!["jump"]);
    }

    #[test]
    fn presence_set_unions_variants() {
        let set = token_presence_set(&tokenize("Strong edges, good lifts"));
        for word in ["strong", "edges", "edge", "good", "lifts", "lift"] {
            assert!(set.contains(word), "missing {word}");
        }
        assert_eq!(set.len(), 6);
        assert!(token_presence_set::<String>(&[]).is_empty());
    }
}
