//! Shared text splitting rules.
//!
//! Every sub-analysis that needs sentences or words goes through these so the
//! delimiters stay identical across statistics, summaries and outlines.

/// Sentence terminators. Runs of them collapse into one boundary once empty
/// segments are filtered out.
const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Raw sentence segments, untrimmed and possibly empty.
pub fn sentence_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_DELIMITERS)
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length in characters rather than bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_segments_split_on_runs() {
        let kept: Vec<&str> = sentence_segments("One. Two?! Three...")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(kept, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_word_count_any_whitespace() {
        assert_eq!(word_count("a  b\tc\nd"), 4);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_char_len_counts_code_points() {
        assert_eq!(char_len("être"), 4);
        assert_eq!("être".len(), 5);
    }
}
