//! Text Analyzer Module
//!
//! Turns extracted document text into structural and statistical insight:
//! - Word, sentence and layout statistics
//! - Keyword ranking and extractive summaries
//! - Link extraction and a language heuristic
//! - Outline (headings and list items), always computed
//!
//! Every function here is a pure synchronous computation over borrowed text.

pub mod keywords;
pub mod language;
pub mod links;
pub mod statistics;
pub mod structure;
pub mod summary;
mod text;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::{keywords::DEFAULT_TOP_N, summary::DEFAULT_MAX_SENTENCES};
use crate::types::{AnalysisReport, DocsightError, Result, ValidationError, ValidationErrorKind};

pub use structure::StructureAnalyzer;

// =============================================================================
// Options
// =============================================================================

/// Which analyses to run. Deserializes from a loose camelCase object where
/// unknown keys are ignored and missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisOptions {
    /// Statistics
    pub word_count: bool,
    pub extract_keywords: bool,
    pub summarize: bool,
    pub extract_links: bool,
    pub detect_language: bool,
    /// Read by callers holding the document tree; `analyze` ignores it
    pub extract_tables: bool,
    pub top_keywords: usize,
    pub max_summary_sentences: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            word_count: true,
            extract_keywords: false,
            summarize: false,
            extract_links: false,
            detect_language: false,
            extract_tables: false,
            top_keywords: DEFAULT_TOP_N,
            max_summary_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

impl AnalysisOptions {
    /// Every optional analysis enabled, with default limits.
    pub fn all() -> Self {
        Self {
            word_count: true,
            extract_keywords: true,
            summarize: true,
            extract_links: true,
            detect_language: true,
            extract_tables: true,
            ..Self::default()
        }
    }

    /// Parse an untyped options bag. `null` means defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        let options: Self = match value {
            Value::Null => Self::default(),
            Value::Object(_) => serde_json::from_value(value.clone()).map_err(|e| {
                ValidationError::new(ValidationErrorKind::Type, e.to_string()).with_field("options")
            })?,
            other => {
                return Err(ValidationError::wrong_type("object", other)
                    .with_field("options")
                    .into());
            }
        };
        options.validate()?;
        Ok(options)
    }

    /// Reject limits that would make a step meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.top_keywords == 0 {
            return Err(ValidationError::new(ValidationErrorKind::Range, "must be at least 1")
                .with_field("topKeywords")
                .into());
        }
        if self.max_summary_sentences == 0 {
            return Err(ValidationError::new(ValidationErrorKind::Range, "must be at least 1")
                .with_field("maxSummarySentences")
                .into());
        }
        Ok(())
    }

    /// The optional steps selected by these options, in pipeline order.
    pub fn steps(&self) -> Vec<AnalysisStep> {
        let mut steps = Vec::with_capacity(5);
        if self.word_count {
            steps.push(AnalysisStep::Statistics);
        }
        if self.extract_keywords {
            steps.push(AnalysisStep::Keywords);
        }
        if self.summarize {
            steps.push(AnalysisStep::Summary);
        }
        if self.extract_links {
            steps.push(AnalysisStep::Links);
        }
        if self.detect_language {
            steps.push(AnalysisStep::Language);
        }
        steps
    }
}

/// One independent, option-gated analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStep {
    Statistics,
    Keywords,
    Summary,
    Links,
    Language,
}

impl std::fmt::Display for AnalysisStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStep::Statistics => write!(f, "statistics"),
            AnalysisStep::Keywords => write!(f, "keywords"),
            AnalysisStep::Summary => write!(f, "summary"),
            AnalysisStep::Links => write!(f, "links"),
            AnalysisStep::Language => write!(f, "language"),
        }
    }
}

// =============================================================================
// Analyzer
// =============================================================================

/// Runs the selected steps over a text
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalysisOptions,
}

impl Analyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Perform complete analysis
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let mut report = AnalysisReport::default();

        for step in self.options.steps() {
            debug!(%step, chars = text.len(), "Running analysis step");
            self.run_step(step, text, &mut report);
        }

        report.structure = structure::analyze(text);
        report
    }

    fn run_step(&self, step: AnalysisStep, text: &str, report: &mut AnalysisReport) {
        match step {
            AnalysisStep::Statistics => report.statistics = Some(statistics::calculate(text)),
            AnalysisStep::Keywords => {
                report.keywords = Some(keywords::extract(text, self.options.top_keywords))
            }
            AnalysisStep::Summary => {
                report.summary = Some(summary::summarize(
                    text,
                    self.options.max_summary_sentences,
                ))
            }
            AnalysisStep::Links => report.links = Some(links::extract(text)),
            AnalysisStep::Language => report.language = Some(language::detect(text)),
        }
    }
}

/// Analyze `text` with `options`.
pub fn analyze(text: &str, options: &AnalysisOptions) -> AnalysisReport {
    Analyzer::new(options.clone()).analyze(text)
}

/// Analyze untyped input, failing fast when `text` is not a string or
/// `options` is not an options object.
pub fn analyze_value(text: &Value, options: &Value) -> Result<AnalysisReport> {
    let text = text.as_str().ok_or_else(|| {
        DocsightError::from(ValidationError::wrong_type("string", text).with_field("text"))
    })?;
    let options = AnalysisOptions::from_value(options)?;
    Ok(analyze(text, &options))
}
