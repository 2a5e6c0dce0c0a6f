//! Analyze Command
//!
//! Runs the text analyzer over a file (or stdin) and prints the report.
//! Configured defaults apply first; command-line flags override them.

use std::path::PathBuf;

use tracing::info;

use crate::analyzer::{AnalysisOptions, Analyzer};
use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, OutputFormat, print_structured, read_input, read_text};
use crate::types::{AnalysisReport, ListKind, Result};

/// Flags accepted by `docsight analyze`
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRunOptions {
    pub file: Option<PathBuf>,
    pub keywords: bool,
    pub summarize: bool,
    pub links: bool,
    pub language: bool,
    pub all: bool,
    pub no_stats: bool,
    pub top: Option<usize>,
    pub sentences: Option<usize>,
    pub format: OutputFormat,
}

impl AnalyzeRunOptions {
    /// Layer the flags over configured options
    pub fn resolve(&self, base: AnalysisOptions) -> Result<AnalysisOptions> {
        let mut options = if self.all {
            AnalysisOptions {
                top_keywords: base.top_keywords,
                max_summary_sentences: base.max_summary_sentences,
                ..AnalysisOptions::all()
            }
        } else {
            base
        };

        options.extract_keywords |= self.keywords;
        options.summarize |= self.summarize;
        options.extract_links |= self.links;
        options.detect_language |= self.language;
        if self.no_stats {
            options.word_count = false;
        }
        if let Some(top) = self.top {
            options.top_keywords = top;
        }
        if let Some(sentences) = self.sentences {
            options.max_summary_sentences = sentences;
        }

        options.validate()?;
        Ok(options)
    }
}

pub fn run(context: &CommandContext, opts: AnalyzeRunOptions) -> Result<()> {
    let options = opts.resolve(AnalysisOptions::from(&context.config.analysis))?;

    let text = match &opts.file {
        Some(path) => read_text(path)?,
        None => read_input(None)?,
    };
    info!(chars = text.len(), steps = options.steps().len(), "Analyzing text");

    let report = Analyzer::new(options).analyze(&text);

    match opts.format {
        OutputFormat::Text => {
            print_report(&Output::new(), &report);
            Ok(())
        }
        format => print_structured(&report, format),
    }
}

fn print_report(out: &Output, report: &AnalysisReport) {
    out.header("Document Analysis");

    if let Some(stats) = &report.statistics {
        out.section("Statistics");
        out.field("Characters", stats.character_count);
        out.field("Characters (no spaces)", stats.character_count_no_spaces);
        out.field("Words", stats.word_count);
        out.field("Lines", stats.line_count);
        out.field("Paragraphs", stats.paragraph_count);
        out.field("Sentences", stats.sentence_count);
        out.field("Avg word length", stats.average_word_length);
        out.field("Avg sentence length", stats.average_sentence_length);
        out.field("Reading time (min)", stats.reading_time);
    }

    if let Some(keywords) = &report.keywords {
        out.section("Keywords");
        if keywords.is_empty() {
            out.info("No keywords found");
        }
        for kw in keywords {
            out.item(&format!("{} ({}, {}%)", kw.term, kw.frequency, kw.relevance));
        }
    }

    if let Some(summary) = &report.summary {
        out.section("Summary");
        println!("{}", summary);
    }

    if let Some(links) = &report.links {
        out.section("Links");
        if links.is_empty() {
            out.info("No links found");
        }
        for link in links {
            out.item(&format!("{} [{}] x{}", link.url, link.domain, link.occurrence_count));
        }
    }

    if let Some(language) = report.language {
        out.section("Language");
        out.field("Detected", language);
    }

    let structure = &report.structure;
    out.section("Structure");
    if !structure.has_structure {
        out.info("No headings or list items detected");
    }
    for heading in &structure.headings {
        out.item(&format!(
            "line {}: {} {}",
            heading.position + 1,
            "#".repeat(heading.level as usize),
            heading.text
        ));
    }
    for item in &structure.list_items {
        let marker = match item.kind {
            ListKind::Bullet => "-",
            ListKind::Numbered => "1.",
        };
        out.item(&format!("line {}: {} {}", item.position + 1, marker, item.text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_enable_steps() {
        let opts = AnalyzeRunOptions {
            keywords: true,
            links: true,
            top: Some(3),
            ..Default::default()
        };
        let options = opts.resolve(AnalysisOptions::default()).unwrap();
        assert!(options.word_count);
        assert!(options.extract_keywords);
        assert!(options.extract_links);
        assert!(!options.summarize);
        assert_eq!(options.top_keywords, 3);
    }

    #[test]
    fn test_all_keeps_configured_limits() {
        let base = AnalysisOptions {
            top_keywords: 7,
            ..AnalysisOptions::default()
        };
        let opts = AnalyzeRunOptions {
            all: true,
            no_stats: true,
            ..Default::default()
        };
        let options = opts.resolve(base).unwrap();
        assert!(options.summarize && options.detect_language);
        assert!(!options.word_count);
        assert_eq!(options.top_keywords, 7);
    }

    #[test]
    fn test_zero_limits_rejected() {
        let opts = AnalyzeRunOptions {
            sentences: Some(0),
            ..Default::default()
        };
        let err = opts.resolve(AnalysisOptions::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
