//! CLI Common Utilities
//!
//! Shared input handling and context for CLI commands.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::config::{Config, ConfigLoader};
use crate::document::{LocalDocumentStore, extract_text};
use crate::types::{DocsightError, Result};

/// Command execution context
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
}

impl CommandContext {
    /// Load configuration from an explicit file, or the full resolution chain
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    /// Document store rooted at the configured directory
    pub fn store(&self) -> LocalDocumentStore {
        LocalDocumentStore::new(&self.config.store.root)
    }
}

/// Output format shared by commands that print reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Read a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            DocsightError::invalid_input(format!("cannot read {}: {}", path.display(), e))
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse a JSON document from a file or stdin
pub fn read_json(path: Option<&Path>) -> Result<Value> {
    let raw = read_input(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Text of a file: `.json` files are read as document trees, anything else as plain text
pub fn read_text(path: &Path) -> Result<String> {
    if is_json(path) {
        extract_text(&read_json(Some(path))?)
    } else {
        read_input(Some(path))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a value in a machine-readable format. `Text` falls back to JSON.
pub fn print_structured<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value)?);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Text => print_json(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_plain_and_tree() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("notes.txt");
        fs::write(&plain, "hello world").unwrap();
        assert_eq!(read_text(&plain).unwrap(), "hello world");

        let tree = dir.path().join("doc.JSON");
        fs::write(
            &tree,
            r#"{"body":{"content":[{"paragraph":{"elements":[{"textRun":{"content":"from tree"}}]}}]}}"#,
        )
        .unwrap();
        assert_eq!(read_text(&tree).unwrap(), "from tree");
    }

    #[test]
    fn test_missing_file_is_invalid_input() {
        let err = read_input(Some(Path::new("/nonexistent/input.txt"))).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{oops").unwrap();
        assert!(matches!(read_json(Some(path.as_path())), Err(DocsightError::Json(_))));
    }
}
