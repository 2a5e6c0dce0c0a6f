//! Docsight - Document Content Analysis
//!
//! Turns document text into structural and statistical insight, and serves
//! a small set of document tools over a pluggable document source.
//!
//! ## Core Features
//!
//! - **Text Analysis**: statistics, keywords, extractive summary, links,
//!   language heuristic, and an always-on structural outline
//! - **Document Trees**: table extraction, plain-text flattening, search
//! - **Tool Dispatch**: typed requests executed against a `DocumentSource`
//! - **Layered Config**: defaults, global and project TOML, `DOCSIGHT_*` env
//!
//! ## Quick Start
//!
//! ```ignore
//! use docsight::{AnalysisOptions, analyze};
//!
//! let report = analyze(&text, &AnalysisOptions::all());
//! println!("{} words", report.statistics.unwrap().word_count);
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: the text analysis pipeline
//! - [`document`]: document tree helpers and document sources
//! - [`tools`]: tool definitions and the dispatcher
//! - [`config`]: configuration types and loader

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod document;
pub mod tools;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{AnalysisConfig, Config, ConfigLoader, StoreConfig};

// Error Types
pub use types::error::{DocsightError, Result, ResultExt, ValidationError};

// Report Types
pub use types::{AnalysisReport, DocumentId, LanguageCode, Table};

// =============================================================================
// Analysis Re-exports
// =============================================================================

pub use analyzer::{AnalysisOptions, AnalysisStep, Analyzer, analyze, analyze_value};

// =============================================================================
// Document & Tool Re-exports
// =============================================================================

pub use document::{DocumentSource, LocalDocumentStore, extract_tables, extract_text, search};
pub use tools::{ToolDispatcher, ToolName, ToolRequest, ToolResponse};
