//! Analysis Report Value Types
//!
//! Plain value types produced by the analyzer and the document-tree helpers.
//! None of them hold a reference back to the source text or tree.

use serde::{Deserialize, Serialize};

// =============================================================================
// Statistics
// =============================================================================

/// Word, sentence and layout statistics for a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub word_count: usize,
    pub line_count: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
    /// Characters per word, 2 decimals
    pub average_word_length: f64,
    /// Words per sentence, 2 decimals
    pub average_sentence_length: f64,
    /// Minutes at a fixed reading rate, 1 decimal
    pub reading_time: f64,
}

// =============================================================================
// Keywords
// =============================================================================

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub frequency: usize,
    /// Share of all retained tokens, as a percentage with 2 decimals
    pub relevance: f64,
}

// =============================================================================
// Links
// =============================================================================

/// A unique URL found in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: String,
    pub domain: String,
    pub scheme: String,
    /// Literal substring occurrences of `url` anywhere in the text
    pub occurrence_count: usize,
}

// =============================================================================
// Language
// =============================================================================

/// Heuristic language classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Es,
    Fr,
    De,
    #[default]
    Unknown,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
            LanguageCode::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Structure
// =============================================================================

/// Outline detected from line shapes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    pub headings: Vec<Heading>,
    pub list_items: Vec<ListItem>,
    pub has_structure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    /// Zero-based line index
    pub position: usize,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    /// Zero-based line index
    pub position: usize,
    pub kind: ListKind,
}

/// List item marker family. Lettered items (`a.`, `b)`) report as `Numbered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Numbered,
}

// =============================================================================
// Tables
// =============================================================================

/// A table lifted out of a document tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub row_count: usize,
    /// Width of the first row, 0 when there are no rows
    pub column_count: usize,
    pub cells: Vec<Vec<String>>,
}

// =============================================================================
// Search
// =============================================================================

/// One case-insensitive hit of an in-document search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Character index of the match
    pub position: usize,
    /// Matched span in its original casing
    pub text: String,
    /// Up to 50 characters either side of the match
    pub context: String,
}

// =============================================================================
// Full Report
// =============================================================================

/// Result of one `analyze` call. Optional sections are present only when
/// their step was selected; `structure` is always computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<Keyword>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
    pub structure: StructureReport,
    /// Filled by callers that also hold the document tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<Table>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_serialize_camel_case() {
        let stats = Statistics {
            character_count: 10,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["characterCount"], 10);
        assert!(json.get("characterCountNoSpaces").is_some());
        assert!(json.get("readingTime").is_some());
    }

    #[test]
    fn test_language_code_serialization() {
        assert_eq!(serde_json::to_string(&LanguageCode::En).unwrap(), "\"en\"");
        assert_eq!(
            serde_json::to_string(&LanguageCode::Unknown).unwrap(),
            "\"unknown\""
        );
        assert_eq!(LanguageCode::De.to_string(), "de");
    }

    #[test]
    fn test_report_skips_absent_sections() {
        let report = AnalysisReport::default();
        let json = serde_json::to_value(&report).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(json["structure"]["hasStructure"], false);
        assert!(json["structure"]["listItems"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_link_and_table_keys() {
        let link = Link {
            url: "http://example.com".into(),
            domain: "example.com".into(),
            scheme: "http".into(),
            occurrence_count: 2,
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["occurrenceCount"], 2);

        let table = Table {
            row_count: 1,
            column_count: 1,
            cells: vec![vec!["a".into()]],
        };
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["rowCount"], 1);
        assert_eq!(json["columnCount"], 1);
        assert_eq!(json["cells"][0][0], "a");
    }

    #[test]
    fn test_list_kind_serialization() {
        assert_eq!(serde_json::to_string(&ListKind::Bullet).unwrap(), "\"bullet\"");
        assert_eq!(
            serde_json::to_string(&ListKind::Numbered).unwrap(),
            "\"numbered\""
        );
    }
}
