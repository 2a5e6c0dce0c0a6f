//! Keyword Extractor
//!
//! Frequency ranking of content words. Punctuation becomes whitespace, short
//! tokens and common English function words are dropped, and the remaining
//! tokens are ranked by count with first-seen order breaking ties.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::text::char_len;
use crate::constants::keywords::{MAX_DISCARDED_LEN, RELEVANCE_PRECISION};
use crate::types::{Keyword, round_to};

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
        "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
        "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
        "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
        "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into",
        "year", "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
        "look", "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
        "how", "our", "work", "first", "well", "way", "even", "new", "want", "because", "any",
        "these", "give", "day", "most", "us", "is", "was", "are", "been", "has", "had", "were",
        "said", "did", "having", "may", "should",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` is excluded from keyword ranking.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Top `top_n` keywords of `text`, most frequent first.
pub fn extract(text: &str, top_n: usize) -> Vec<Keyword> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    // Insertion-ordered counts so equal frequencies keep first-seen order.
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut retained = 0usize;

    for token in normalized.split_whitespace() {
        if char_len(token) <= MAX_DISCARDED_LEN || is_stop_word(token) {
            continue;
        }
        retained += 1;
        match index.get(token) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(token, order.len());
                order.push((token, 1));
            }
        }
    }

    if retained == 0 {
        return Vec::new();
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));

    order
        .into_iter()
        .take(top_n)
        .map(|(term, frequency)| Keyword {
            term: term.to_string(),
            frequency,
            relevance: round_to(
                frequency as f64 / retained as f64 * 100.0,
                RELEVANCE_PRECISION,
            ),
        })
        .collect()
}
