//! Global Constants
//!
//! Centralized constants for the text heuristics.
//! All magic numbers should be defined here with documentation.

/// Statistics calculator constants
pub mod statistics {
    /// Reading rate used for the reading-time estimate
    pub const WORDS_PER_MINUTE: f64 = 200.0;

    /// Decimal places for averages
    pub const RATIO_PRECISION: u32 = 2;

    /// Decimal places for reading time
    pub const READING_TIME_PRECISION: u32 = 1;
}

/// Keyword extraction constants
pub mod keywords {
    /// Default number of keywords returned
    pub const DEFAULT_TOP_N: usize = 20;

    /// Tokens this short (in characters) or shorter are discarded
    pub const MAX_DISCARDED_LEN: usize = 3;

    /// Decimal places for relevance percentages
    pub const RELEVANCE_PRECISION: u32 = 2;
}

/// Extractive summary constants
pub mod summary {
    /// Default number of sentences in a summary
    pub const DEFAULT_MAX_SENTENCES: usize = 5;

    /// Sentences must be longer than this (trimmed, in characters) to be kept
    pub const MIN_SENTENCE_CHARS: usize = 20;

    /// Only this many leading sentences are scored
    pub const MAX_CANDIDATES: usize = 50;

    /// Maximum discount applied to the last sentence's score
    pub const POSITION_DISCOUNT: f64 = 0.5;
}

/// Structure detection constants
pub mod structure {
    /// Heading candidates need strictly more words than this
    pub const HEADING_MIN_WORDS_EXCLUSIVE: usize = 3;

    /// Heading candidates may have at most this many words
    pub const HEADING_MAX_WORDS: usize = 10;

    /// The line after a heading needs strictly more words than this
    pub const BODY_MIN_WORDS_EXCLUSIVE: usize = 10;

    /// Non-uppercase headings this short get level 2, longer ones level 3
    pub const LEVEL_TWO_MAX_WORDS: usize = 5;
}

/// In-document search constants
pub mod search {
    /// Characters of context captured on each side of a match
    pub const CONTEXT_CHARS: usize = 50;
}

/// Tool dispatcher constants
pub mod tools {
    /// Default page size for `list_documents`
    pub const DEFAULT_LIST_LIMIT: usize = 50;
}
