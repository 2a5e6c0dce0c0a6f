//! Tables Command
//!
//! Extracts every table from a saved document tree.

use std::path::Path;

use crate::cli::ui::Output;
use crate::cli::util::{OutputFormat, print_structured, read_json};
use crate::document::extract_tables;
use crate::types::{Result, Table};

pub fn run(tree_path: &Path, format: OutputFormat) -> Result<()> {
    let tree = read_json(Some(tree_path))?;
    let tables = extract_tables(&tree)?;

    match format {
        OutputFormat::Json | OutputFormat::Yaml => print_structured(
            &serde_json::json!({
                "count": tables.len(),
                "tables": tables,
            }),
            format,
        ),
        OutputFormat::Text => {
            let out = Output::new();
            if tables.is_empty() {
                out.info("No tables found");
            }
            for (i, table) in tables.iter().enumerate() {
                out.section(&format!(
                    "Table {} ({} x {})",
                    i + 1,
                    table.row_count,
                    table.column_count
                ));
                print!("{}", render_grid(table));
            }
            Ok(())
        }
    }
}

/// Pipe-separated grid with columns padded to their widest cell. Rows may
/// be ragged; missing cells render empty.
fn render_grid(table: &Table) -> String {
    let columns = table.cells.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &table.cells {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let mut grid = String::new();
    for row in &table.cells {
        let line: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = *width)
            })
            .collect();
        grid.push_str("| ");
        grid.push_str(&line.join(" | "));
        grid.push_str(" |\n");
    }
    grid
}
