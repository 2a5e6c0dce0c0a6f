pub mod error;
pub mod report;
pub mod utils;

pub use error::{DocsightError, Result, ResultExt, ValidationError, ValidationErrorKind};
pub use report::{
    AnalysisReport, Heading, Keyword, LanguageCode, Link, ListItem, ListKind, SearchMatch,
    Statistics, StructureReport, Table,
};
pub use utils::{json_array, json_object, json_string, ratio, round_to};

// =============================================================================
// Domain Newtypes
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for document IDs
///
/// Prevents accidental mixing of document IDs with other string types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_transparent_serde() {
        let id = DocumentId::new("1AbC");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1AbC\"");
        let back: DocumentId = serde_json::from_str("\"1AbC\"").unwrap();
        assert_eq!(back, id);
        assert_eq!(back.as_str(), "1AbC");
    }
}
