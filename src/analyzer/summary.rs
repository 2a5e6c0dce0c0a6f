//! Extractive Summarizer
//!
//! Picks whole sentences from the text. Long sentences near the start score
//! highest: `words * (1 - position / total * 0.5)`. Selected sentences are
//! emitted in their original order.

use super::text::{char_len, sentence_segments, word_count};
use crate::constants::summary::{MAX_CANDIDATES, MIN_SENTENCE_CHARS, POSITION_DISCOUNT};

/// Sentences long enough to be summary material, trimmed, in order.
fn retained_sentences(text: &str) -> Vec<&str> {
    sentence_segments(text)
        .map(str::trim)
        .filter(|s| char_len(s) > MIN_SENTENCE_CHARS)
        .collect()
}

fn join_sentences(sentences: &[&str]) -> String {
    let mut summary = sentences.join(". ");
    summary.push('.');
    summary
}

/// Summarize `text` into at most `max_sentences` original sentences.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = retained_sentences(text);

    if sentences.len() <= max_sentences {
        return join_sentences(&sentences);
    }

    let total = sentences.len() as f64;
    let mut scored: Vec<(f64, &str)> = sentences
        .iter()
        .take(MAX_CANDIDATES)
        .enumerate()
        .map(|(position, sentence)| {
            let discount = 1.0 - position as f64 / total * POSITION_DISCOUNT;
            (word_count(sentence) as f64 * discount, *sentence)
        })
        .collect();

    // Stable: equal scores keep candidate order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    let top: Vec<&str> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(_, sentence)| sentence)
        .collect();

    // Matching is by text, so a duplicated sentence may surface at either
    // of its positions.
    let selected: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|sentence| top.contains(sentence))
        .take(max_sentences)
        .collect();

    join_sentences(&selected)
}
