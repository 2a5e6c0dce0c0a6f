//! Search Command
//!
//! Case-insensitive search inside a text file or saved document tree.

use std::path::Path;

use console::style;

use crate::cli::ui::Output;
use crate::cli::util::{OutputFormat, print_structured, read_text};
use crate::document::search;
use crate::types::Result;

pub fn run(file: &Path, query: &str, format: OutputFormat) -> Result<()> {
    let text = read_text(file)?;
    let matches = search(&text, query)?;

    match format {
        OutputFormat::Json | OutputFormat::Yaml => print_structured(
            &serde_json::json!({
                "query": query,
                "count": matches.len(),
                "matches": matches,
            }),
            format,
        ),
        OutputFormat::Text => {
            let out = Output::new();
            if matches.is_empty() {
                out.info(&format!("No matches for '{}'", query));
                return Ok(());
            }
            out.success(&format!("{} match(es) for '{}'", matches.len(), query));
            for m in &matches {
                let context = m.context.replace('\n', " ");
                println!("  {} {}", style(format!("@{}", m.position)).dim(), context);
            }
            Ok(())
        }
    }
}
