//! Statistics Calculator
//!
//! Counts characters, words, lines, paragraphs and sentences of the trimmed
//! text and derives averages plus a reading-time estimate. Never fails.

use super::text::{char_len, sentence_segments};
use crate::constants::statistics::{
    RATIO_PRECISION, READING_TIME_PRECISION, WORDS_PER_MINUTE,
};
use crate::types::{Statistics, ratio, round_to};

/// Calculate statistics for `text` after trimming surrounding whitespace.
pub fn calculate(text: &str) -> Statistics {
    let clean = text.trim();
    if clean.is_empty() {
        return Statistics::default();
    }

    let words: Vec<&str> = clean.split_whitespace().collect();
    let word_count = words.len();
    let word_chars: usize = words.iter().map(|w| char_len(w)).sum();

    let sentence_count = sentence_segments(clean)
        .filter(|s| !s.trim().is_empty())
        .count();

    let paragraph_count = clean
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();

    Statistics {
        character_count: char_len(clean),
        // Only spaces and line feeds are stripped here; tabs still count.
        character_count_no_spaces: clean.chars().filter(|c| *c != ' ' && *c != '\n').count(),
        word_count,
        line_count: clean.split('\n').count(),
        paragraph_count,
        sentence_count,
        average_word_length: round_to(ratio(word_chars, word_count), RATIO_PRECISION),
        average_sentence_length: round_to(ratio(word_count, sentence_count), RATIO_PRECISION),
        reading_time: round_to(word_count as f64 / WORDS_PER_MINUTE, READING_TIME_PRECISION),
    }
}
