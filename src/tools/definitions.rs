//! Tool names, definitions and typed requests.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analyzer::AnalysisOptions;
use crate::constants::tools::DEFAULT_LIST_LIMIT;
use crate::types::{DocsightError, DocumentId, Result, ValidationError, ValidationErrorKind};

// =============================================================================
// Tool Names
// =============================================================================

/// Every operation the dispatcher knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    ReadDocument,
    AnalyzeContent,
    SearchDocuments,
    ExtractTables,
    ListDocuments,
    GetMetadata,
}

impl ToolName {
    pub const ALL: [ToolName; 6] = [
        ToolName::ReadDocument,
        ToolName::AnalyzeContent,
        ToolName::SearchDocuments,
        ToolName::ExtractTables,
        ToolName::ListDocuments,
        ToolName::GetMetadata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::ReadDocument => "read_document",
            ToolName::AnalyzeContent => "analyze_content",
            ToolName::SearchDocuments => "search_documents",
            ToolName::ExtractTables => "extract_tables",
            ToolName::ListDocuments => "list_documents",
            ToolName::GetMetadata => "get_metadata",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(ToolName::as_str).collect()
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolName::ReadDocument => "Read the full content of a document",
            ToolName::AnalyzeContent => {
                "Analyze document content (statistics, keywords, summary, links, language, tables)"
            }
            ToolName::SearchDocuments => "Search for text within a document",
            ToolName::ExtractTables => "Extract every table of a document as a cell grid",
            ToolName::ListDocuments => "List available documents, most recently modified first",
            ToolName::GetMetadata => "Get metadata about a document",
        }
    }

    fn parameters(&self) -> Vec<(&'static str, ParameterDefinition)> {
        let document_id = (
            "document_id",
            ParameterDefinition::required("string", "The ID of the document"),
        );
        match self {
            ToolName::ReadDocument => vec![
                document_id,
                (
                    "format",
                    ParameterDefinition::optional(
                        "string",
                        "Output format: plain_text, structured, or full",
                    ),
                ),
            ],
            ToolName::AnalyzeContent => vec![
                document_id,
                (
                    "options",
                    ParameterDefinition::optional(
                        "object",
                        "Analysis options: wordCount, extractKeywords, summarize, extractLinks, \
                         detectLanguage, extractTables, topKeywords, maxSummarySentences",
                    ),
                ),
            ],
            ToolName::SearchDocuments => vec![
                document_id,
                (
                    "query",
                    ParameterDefinition::required("string", "Text to search for"),
                ),
            ],
            ToolName::ExtractTables | ToolName::GetMetadata => vec![document_id],
            ToolName::ListDocuments => vec![(
                "max_results",
                ParameterDefinition::optional("integer", "Maximum number of documents to return"),
            )],
        }
    }

    /// Self-describing definition for clients
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.as_str(),
            description: self.description(),
            parameters: self
                .parameters()
                .into_iter()
                .map(|(name, def)| (name.to_string(), def))
                .collect(),
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = DocsightError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| DocsightError::UnknownTool {
                name: s.to_string(),
                available: Self::names(),
            })
    }
}

/// Definition of a single tool parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub required: bool,
}

impl ParameterDefinition {
    fn required(kind: &'static str, description: &'static str) -> Self {
        Self {
            kind,
            description,
            required: true,
        }
    }

    fn optional(kind: &'static str, description: &'static str) -> Self {
        Self {
            kind,
            description,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: BTreeMap<String, ParameterDefinition>,
}

/// Definitions of every tool, in declaration order
pub fn tool_definitions() -> Vec<ToolDefinition> {
    ToolName::ALL.iter().map(ToolName::definition).collect()
}

// =============================================================================
// Typed Requests
// =============================================================================

/// How `read_document` returns the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadFormat {
    #[default]
    PlainText,
    Structured,
    Full,
}

/// A fully decoded tool invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
    ReadDocument {
        document_id: DocumentId,
        format: ReadFormat,
    },
    AnalyzeContent {
        document_id: DocumentId,
        options: AnalysisOptions,
    },
    SearchDocuments {
        document_id: DocumentId,
        query: String,
    },
    ExtractTables {
        document_id: DocumentId,
    },
    ListDocuments {
        max_results: usize,
    },
    GetMetadata {
        document_id: DocumentId,
    },
}

#[derive(Deserialize)]
struct DocumentParams {
    document_id: DocumentId,
}

#[derive(Deserialize)]
struct ReadParams {
    document_id: DocumentId,
    #[serde(default)]
    format: ReadFormat,
}

#[derive(Deserialize)]
struct SearchParams {
    document_id: DocumentId,
    query: String,
}

#[derive(Deserialize)]
struct ListParams {
    #[serde(default = "default_list_limit")]
    max_results: usize,
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

fn decode<T: serde::de::DeserializeOwned>(params: &Value) -> Result<T> {
    serde_json::from_value(params.clone()).map_err(|e| {
        ValidationError::new(ValidationErrorKind::Type, e.to_string())
            .with_field("parameters")
            .into()
    })
}

impl ToolRequest {
    /// Decode `params` for the named tool. `null` parameters read as `{}`.
    pub fn decode(tool: ToolName, params: &Value) -> Result<Self> {
        let empty = Value::Object(Default::default());
        let params = match params {
            Value::Null => &empty,
            Value::Object(_) => params,
            other => {
                return Err(ValidationError::wrong_type("object", other)
                    .with_field("parameters")
                    .into());
            }
        };

        let request = match tool {
            ToolName::ReadDocument => {
                let p: ReadParams = decode(params)?;
                ToolRequest::ReadDocument {
                    document_id: p.document_id,
                    format: p.format,
                }
            }
            ToolName::AnalyzeContent => {
                let p: DocumentParams = decode(params)?;
                let options =
                    AnalysisOptions::from_value(params.get("options").unwrap_or(&Value::Null))?;
                ToolRequest::AnalyzeContent {
                    document_id: p.document_id,
                    options,
                }
            }
            ToolName::SearchDocuments => {
                let p: SearchParams = decode(params)?;
                ToolRequest::SearchDocuments {
                    document_id: p.document_id,
                    query: p.query,
                }
            }
            ToolName::ExtractTables => {
                let p: DocumentParams = decode(params)?;
                ToolRequest::ExtractTables {
                    document_id: p.document_id,
                }
            }
            ToolName::ListDocuments => {
                let p: ListParams = decode(params)?;
                ToolRequest::ListDocuments {
                    max_results: p.max_results,
                }
            }
            ToolName::GetMetadata => {
                let p: DocumentParams = decode(params)?;
                ToolRequest::GetMetadata {
                    document_id: p.document_id,
                }
            }
        };
        Ok(request)
    }

    pub fn tool(&self) -> ToolName {
        match self {
            ToolRequest::ReadDocument { .. } => ToolName::ReadDocument,
            ToolRequest::AnalyzeContent { .. } => ToolName::AnalyzeContent,
            ToolRequest::SearchDocuments { .. } => ToolName::SearchDocuments,
            ToolRequest::ExtractTables { .. } => ToolName::ExtractTables,
            ToolRequest::ListDocuments { .. } => ToolName::ListDocuments,
            ToolRequest::GetMetadata { .. } => ToolName::GetMetadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_name_round_trip() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
        }
        let err = "share_document".parse::<ToolName>().unwrap_err();
        assert!(matches!(err, DocsightError::UnknownTool { ref available, .. } if available.len() == 6));
    }

    #[test]
    fn test_definitions() {
        let defs = tool_definitions();
        assert_eq!(defs.len(), 6);
        let search = defs.iter().find(|d| d.name == "search_documents").unwrap();
        assert!(search.parameters["query"].required);
        assert!(search.parameters["document_id"].required);
        let json = serde_json::to_value(search).unwrap();
        assert_eq!(json["parameters"]["query"]["type"], "string");
    }

    #[test]
    fn test_decode_read_defaults_to_plain_text() {
        let request =
            ToolRequest::decode(ToolName::ReadDocument, &json!({"document_id": "d1"})).unwrap();
        assert_eq!(
            request,
            ToolRequest::ReadDocument {
                document_id: DocumentId::new("d1"),
                format: ReadFormat::PlainText,
            }
        );
    }

    #[test]
    fn test_decode_analyze_options() {
        let request = ToolRequest::decode(
            ToolName::AnalyzeContent,
            &json!({"document_id": "d1", "options": {"extractTables": true}}),
        )
        .unwrap();
        match request {
            ToolRequest::AnalyzeContent { options, .. } => {
                assert!(options.extract_tables);
                assert!(options.word_count);
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_decode_list_defaults() {
        let request = ToolRequest::decode(ToolName::ListDocuments, &Value::Null).unwrap();
        assert_eq!(request, ToolRequest::ListDocuments { max_results: 50 });
        assert_eq!(request.tool(), ToolName::ListDocuments);
    }

    #[test]
    fn test_decode_errors_are_invalid_input() {
        let missing = ToolRequest::decode(ToolName::GetMetadata, &json!({})).unwrap_err();
        assert!(missing.is_invalid_input());

        let wrong = ToolRequest::decode(ToolName::SearchDocuments, &json!("d1")).unwrap_err();
        assert!(wrong.is_invalid_input());

        let bad_format = ToolRequest::decode(
            ToolName::ReadDocument,
            &json!({"document_id": "d1", "format": "pdf"}),
        )
        .unwrap_err();
        assert!(bad_format.is_invalid_input());
    }
}
