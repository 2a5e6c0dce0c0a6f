//! Structure Analyzer
//!
//! Recovers a document outline from plain text, line by line:
//! - Headings: short lines followed by a long line
//! - List items: bullet, numbered and lettered markers
//!
//! Runs on every analysis regardless of options. Positions are zero-based
//! line indices over a line-feed split of the untrimmed text.

use std::sync::LazyLock;

use regex::Regex;

use super::text::word_count;
use crate::constants::structure::{
    BODY_MIN_WORDS_EXCLUSIVE, HEADING_MAX_WORDS, HEADING_MIN_WORDS_EXCLUSIVE,
    LEVEL_TWO_MAX_WORDS,
};
use crate::types::{Heading, ListItem, ListKind, StructureReport};

static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-*•]\s+").unwrap());
static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+[.)]\s+").unwrap());
static LETTERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[a-z][.)]\s+").unwrap());

/// Outline analyzer over a borrowed text
pub struct StructureAnalyzer<'a> {
    lines: Vec<&'a str>,
}

impl<'a> StructureAnalyzer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
        }
    }

    /// Perform complete structure analysis
    pub fn analyze(&self) -> StructureReport {
        let headings = self.find_headings();
        let list_items = self.find_list_items();
        let has_structure = !headings.is_empty() || !list_items.is_empty();

        StructureReport {
            headings,
            list_items,
            has_structure,
        }
    }

    fn find_headings(&self) -> Vec<Heading> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(position, line)| {
                let text = line.trim();
                let words = word_count(text);
                if words <= HEADING_MIN_WORDS_EXCLUSIVE || words > HEADING_MAX_WORDS {
                    return None;
                }

                let next = self.lines.get(position + 1)?;
                if word_count(next) <= BODY_MIN_WORDS_EXCLUSIVE {
                    return None;
                }

                Some(Heading {
                    text: text.to_string(),
                    position,
                    level: heading_level(text, words),
                })
            })
            .collect()
    }

    fn find_list_items(&self) -> Vec<ListItem> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(position, line)| {
                classify_list_item(line).map(|kind| ListItem {
                    text: line.trim().to_string(),
                    position,
                    kind,
                })
            })
            .collect()
    }
}

/// First matching marker wins. Lettered markers collapse into `Numbered`.
fn classify_list_item(line: &str) -> Option<ListKind> {
    if BULLET_ITEM.is_match(line) {
        Some(ListKind::Bullet)
    } else if NUMBERED_ITEM.is_match(line) || LETTERED_ITEM.is_match(line) {
        Some(ListKind::Numbered)
    } else {
        None
    }
}

fn heading_level(text: &str, words: usize) -> u8 {
    if is_all_uppercase(text) {
        1
    } else if words <= LEVEL_TWO_MAX_WORDS {
        2
    } else {
        3
    }
}

/// At least one cased character and no lowercase ones.
fn is_all_uppercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Convenience wrapper over [`StructureAnalyzer`].
pub fn analyze(text: &str) -> StructureReport {
    StructureAnalyzer::new(text).analyze()
}
