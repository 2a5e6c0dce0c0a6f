//! Tool Dispatcher
//!
//! Decodes `{"tool": name, "parameters": {...}}` requests, executes them
//! against a document source, and wraps the outcome in a response envelope.
//! Failures never escape `handle`; they become `success: false` envelopes
//! carrying the error text unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use super::definitions::{ReadFormat, ToolName, ToolRequest};
use crate::analyzer::analyze;
use crate::document::{DocumentSource, extract_tables, extract_text, search};
use crate::types::{DocsightError, Result};

/// Response envelope for a single tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub success: bool,
    pub tool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_tools: Option<Vec<String>>,
}

impl ToolResponse {
    fn ok(tool: ToolName, result: Value) -> Self {
        Self {
            success: true,
            tool: Some(tool.to_string()),
            result: Some(result),
            error: None,
            available_tools: None,
        }
    }

    fn failed(tool: Option<String>, err: &DocsightError) -> Self {
        let available_tools = match err {
            DocsightError::UnknownTool { available, .. } => {
                Some(available.iter().map(|s| s.to_string()).collect())
            }
            _ => None,
        };
        Self {
            success: false,
            tool,
            result: None,
            error: Some(err.to_string()),
            available_tools,
        }
    }
}

/// Executes tool requests against a document source
pub struct ToolDispatcher<S: DocumentSource> {
    source: S,
}

impl<S: DocumentSource> ToolDispatcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Handle a raw request and always produce an envelope
    pub fn handle(&self, request: &Value) -> ToolResponse {
        let name = request.get("tool").and_then(Value::as_str);

        let outcome = self.decode(name, request).and_then(|req| {
            let tool = req.tool();
            self.execute(req).map(|result| (tool, result))
        });

        match outcome {
            Ok((tool, result)) => ToolResponse::ok(tool, result),
            Err(e) => {
                warn!(tool = name.unwrap_or("<missing>"), "Tool call failed: {}", e);
                ToolResponse::failed(name.map(String::from), &e)
            }
        }
    }

    fn decode(&self, name: Option<&str>, request: &Value) -> Result<ToolRequest> {
        let name = name.ok_or_else(|| DocsightError::invalid_input("request has no 'tool' name"))?;
        let tool: ToolName = name.parse()?;
        let params = request.get("parameters").unwrap_or(&Value::Null);
        ToolRequest::decode(tool, params)
    }

    /// Execute a decoded request
    pub fn execute(&self, request: ToolRequest) -> Result<Value> {
        info!(tool = %request.tool(), source = self.source.name(), "Executing tool");

        match request {
            ToolRequest::ReadDocument {
                document_id,
                format,
            } => match format {
                ReadFormat::PlainText => Ok(json!({
                    "content": self.source.document_text(&document_id)?
                })),
                ReadFormat::Structured => Ok(json!({
                    "document": self.source.read_document(&document_id)?
                })),
                ReadFormat::Full => {
                    let document = self.source.read_document(&document_id)?;
                    Ok(json!({
                        "text": extract_text(&document)?,
                        "document": document,
                    }))
                }
            },
            ToolRequest::AnalyzeContent {
                document_id,
                options,
            } => {
                let document = self.source.read_document(&document_id)?;
                let text = extract_text(&document)?;
                let mut report = analyze(&text, &options);
                if options.extract_tables {
                    report.tables = Some(extract_tables(&document)?);
                }
                Ok(serde_json::to_value(report)?)
            }
            ToolRequest::SearchDocuments { document_id, query } => {
                let text = self.source.document_text(&document_id)?;
                let matches = search(&text, &query)?;
                Ok(json!({
                    "query": query,
                    "count": matches.len(),
                    "matches": matches,
                }))
            }
            ToolRequest::ExtractTables { document_id } => {
                let document = self.source.read_document(&document_id)?;
                let tables = extract_tables(&document)?;
                Ok(json!({
                    "count": tables.len(),
                    "tables": tables,
                }))
            }
            ToolRequest::ListDocuments { max_results } => {
                let documents = self.source.list_documents(max_results)?;
                Ok(json!({
                    "count": documents.len(),
                    "documents": documents,
                }))
            }
            ToolRequest::GetMetadata { document_id } => Ok(serde_json::to_value(
                self.source.document_metadata(&document_id)?,
            )?),
        }
    }
}
