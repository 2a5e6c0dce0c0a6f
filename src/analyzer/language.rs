//! Language heuristic: count how many of each language's marker words occur.

use std::collections::HashSet;

use crate::types::LanguageCode;

/// Marker words per language, in tie-break priority order.
const MARKERS: [(LanguageCode, [&str; 8]); 4] = [
    (
        LanguageCode::En,
        ["the", "is", "and", "to", "of", "in", "that", "for"],
    ),
    (
        LanguageCode::Es,
        ["el", "la", "de", "que", "y", "en", "es", "por"],
    ),
    (
        LanguageCode::Fr,
        ["le", "de", "un", "et", "être", "à", "il", "que"],
    ),
    (
        LanguageCode::De,
        ["der", "die", "und", "in", "den", "von", "zu", "das"],
    ),
];

/// Guess the language of `text`.
pub fn detect(text: &str) -> LanguageCode {
    let lowered = text.to_lowercase();
    let words: HashSet<&str> = lowered.split_whitespace().collect();

    let mut best = (LanguageCode::Unknown, 0usize);
    for (code, markers) in &MARKERS {
        let hits = markers.iter().filter(|m| words.contains(*m)).count();
        // Strictly greater keeps the earlier language on ties.
        if hits > best.1 {
            best = (*code, hits);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english() {
        assert_eq!(
            detect("the cat is happy and ready to go in the end of all"),
            LanguageCode::En
        );
    }

    #[test]
    fn test_spanish() {
        assert_eq!(detect("el perro es grande y por eso la casa"), LanguageCode::Es);
    }

    #[test]
    fn test_french() {
        assert_eq!(detect("il est à la maison et un chat"), LanguageCode::Fr);
    }

    #[test]
    fn test_german() {
        assert_eq!(detect("Der Hund und die Katze von zu Hause"), LanguageCode::De);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detect(""), LanguageCode::Unknown);
        assert_eq!(detect("xyzzy plugh"), LanguageCode::Unknown);
    }

    #[test]
    fn test_tie_prefers_priority_order() {
        // "in" is both English and German; "de" both Spanish and French.
        assert_eq!(detect("in"), LanguageCode::En);
        assert_eq!(detect("de"), LanguageCode::Es);
    }

    #[test]
    fn test_punctuation_blocks_match() {
        assert_eq!(detect("the, is."), LanguageCode::Unknown);
    }
}
