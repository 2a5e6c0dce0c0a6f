//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/docsight/) and project (.docsight/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analyzer::AnalysisOptions;
use crate::constants::{keywords::DEFAULT_TOP_N, summary::DEFAULT_MAX_SENTENCES};
use crate::types::{DocsightError, Result};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Default analysis selection
    pub analysis: AnalysisConfig,

    /// Local document store
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            analysis: AnalysisConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `DocsightError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.analysis.top_keywords == 0 {
            return Err(DocsightError::Config(
                "analysis.top_keywords must be greater than 0".to_string(),
            ));
        }

        if self.analysis.max_summary_sentences == 0 {
            return Err(DocsightError::Config(
                "analysis.max_summary_sentences must be greater than 0".to_string(),
            ));
        }

        if self.store.root.as_os_str().is_empty() {
            return Err(DocsightError::Config(
                "store.root must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Analysis Configuration
// =============================================================================

/// Analyses enabled when the caller does not say otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub word_count: bool,
    pub extract_keywords: bool,
    pub summarize: bool,
    pub extract_links: bool,
    pub detect_language: bool,
    pub extract_tables: bool,

    /// Keyword cap
    pub top_keywords: usize,

    /// Summary sentence cap
    pub max_summary_sentences: usize,
}

impl Default for AnalysisConfig {
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

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            word_count: config.word_count,
            extract_keywords: config.extract_keywords,
            summarize: config.summarize,
            extract_links: config.extract_links,
            detect_language: config.detect_language,
            extract_tables: config.extract_tables,
            top_keywords: config.top_keywords,
            max_summary_sentences: config.max_summary_sentences,
        }
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding `<id>.json` document trees
    pub root: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(".docsight/documents"),
        }
    }
}
