//! Case-insensitive in-document search with surrounding context.

use crate::constants::search::CONTEXT_CHARS;
use crate::types::{Result, SearchMatch, ValidationError, ValidationErrorKind};

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Find every occurrence of `query` in `text`, ignoring case.
///
/// Matches may overlap. Positions are character indices into `text`.
pub fn search(text: &str, query: &str) -> Result<Vec<SearchMatch>> {
    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::MissingField, "query is empty")
            .with_field("query")
            .into());
    }

    let chars: Vec<char> = text.chars().collect();
    let folded: Vec<char> = chars.iter().copied().map(fold).collect();
    let width = needle.len();

    let matches = folded
        .windows(width)
        .enumerate()
        .filter(|(_, window)| *window == needle.as_slice())
        .map(|(position, _)| {
            let end = position + width;
            let context_start = position.saturating_sub(CONTEXT_CHARS);
            let context_end = (end + CONTEXT_CHARS).min(chars.len());
            SearchMatch {
                position,
                text: chars[position..end].iter().collect(),
                context: chars[context_start..context_end].iter().collect(),
            }
        })
        .collect();

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_keeps_original_casing() {
        let matches = search("Rust and rust and RUST", "rust").unwrap();
        let found: Vec<(usize, &str)> = matches
            .iter()
            .map(|m| (m.position, m.text.as_str()))
            .collect();
        assert_eq!(found, vec![(0, "Rust"), (9, "rust"), (18, "RUST")]);
    }

    #[test]
    fn test_overlapping_matches() {
        let matches = search("aaaa", "aa").unwrap();
        let positions: Vec<usize> = matches.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_context_window() {
        let text = format!("{}needle{}", "x".repeat(60), "y".repeat(60));
        let matches = search(&text, "NEEDLE").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].position, 60);
        assert_eq!(
            matches[0].context,
            format!("{}needle{}", "x".repeat(50), "y".repeat(50))
        );
    }

    #[test]
    fn test_positions_are_characters() {
        let matches = search("ééé café", "CAFÉ").unwrap();
        assert_eq!(matches[0].position, 4);
        assert_eq!(matches[0].text, "café");
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(search("text", "").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_query_longer_than_text() {
        assert!(search("ab", "abc").unwrap().is_empty());
    }
}
