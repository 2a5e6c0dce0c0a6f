//! Document Source
//!
//! The analyzer never fetches documents itself. A `DocumentSource` supplies
//! document trees by id; its failures are passed to callers verbatim as
//! `DocsightError::Source` and are never retried here.
//!
//! `LocalDocumentStore` serves trees saved as `<id>.json` under a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::tree::{document_title, extract_tables, extract_text};
use crate::types::{
    DocsightError, DocumentId, Result, ValidationError, ValidationErrorKind, json_string,
};

/// One entry of a document listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: DocumentId,
    pub name: String,
    pub modified_time: Option<DateTime<Utc>>,
}

/// Descriptive metadata for a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub document_id: DocumentId,
    pub title: Option<String>,
    pub revision_id: String,
    pub modified_time: Option<DateTime<Utc>>,
    pub size_bytes: u64,
    pub table_count: usize,
}

/// Supplier of document trees
pub trait DocumentSource {
    /// Source name for logging
    fn name(&self) -> &str;

    /// The raw document tree
    fn read_document(&self, id: &DocumentId) -> Result<Value>;

    /// Up to `limit` documents, most recently modified first
    fn list_documents(&self, limit: usize) -> Result<Vec<DocumentSummary>>;

    fn document_metadata(&self, id: &DocumentId) -> Result<DocumentMetadata>;

    /// Plain text of the document
    fn document_text(&self, id: &DocumentId) -> Result<String> {
        extract_text(&self.read_document(id)?)
    }
}

// =============================================================================
// Local Store
// =============================================================================

/// Filesystem-backed document source
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &DocumentId) -> Result<PathBuf> {
        let raw = id.as_str();
        if raw.is_empty() || raw.contains(['/', '\\']) || raw.starts_with('.') {
            return Err(ValidationError::new(
                ValidationErrorKind::General,
                format!("'{}' is not a valid document id", raw),
            )
            .with_field("document_id")
            .into());
        }
        Ok(self.root.join(format!("{}.json", raw)))
    }

    fn read_bytes(&self, id: &DocumentId) -> Result<(PathBuf, Vec<u8>)> {
        let path = self.path_for(id)?;
        match fs::read(&path) {
            Ok(bytes) => Ok((path, bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(DocsightError::DocumentNotFound(id.to_string()))
            }
            Err(e) => Err(DocsightError::from_source(e)),
        }
    }

    fn modified_time(path: &Path) -> Option<DateTime<Utc>> {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from)
    }
}

impl DocumentSource for LocalDocumentStore {
    fn name(&self) -> &str {
        "local"
    }

    fn read_document(&self, id: &DocumentId) -> Result<Value> {
        let (path, bytes) = self.read_bytes(id)?;
        debug!("Reading document from: {}", path.display());
        serde_json::from_slice(&bytes).map_err(DocsightError::from_source)
    }

    fn list_documents(&self, limit: usize) -> Result<Vec<DocumentSummary>> {
        // Root is matched literally; only the file name is a wildcard.
        let root = glob::Pattern::escape(&self.root.to_string_lossy());
        let pattern = Path::new(&root).join("*.json");
        let paths =
            glob::glob(&pattern.to_string_lossy()).map_err(DocsightError::from_source)?;

        let mut documents: Vec<DocumentSummary> = Vec::new();
        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!("Skipping unreadable store entry: {}", e);
                    continue;
                }
            };
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let id = DocumentId::new(stem);
            let name = self
                .read_document(&id)
                .ok()
                .and_then(|tree| document_title(&tree))
                .unwrap_or_else(|| stem.to_string());
            documents.push(DocumentSummary {
                modified_time: Self::modified_time(&path),
                id,
                name,
            });
        }

        documents.sort_by(|a, b| {
            b.modified_time
                .cmp(&a.modified_time)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        documents.truncate(limit);
        Ok(documents)
    }

    fn document_metadata(&self, id: &DocumentId) -> Result<DocumentMetadata> {
        let (path, bytes) = self.read_bytes(id)?;
        let tree: Value = serde_json::from_slice(&bytes).map_err(DocsightError::from_source)?;

        let revision_id = json_string(&tree, "revisionId")
            .unwrap_or_else(|| format!("{:x}", Sha256::digest(&bytes)));

        Ok(DocumentMetadata {
            document_id: id.clone(),
            title: document_title(&tree),
            revision_id,
            modified_time: Self::modified_time(&path),
            size_bytes: bytes.len() as u64,
            table_count: extract_tables(&tree)?.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_with(docs: &[(&str, Value)]) -> (TempDir, LocalDocumentStore) {
        let dir = TempDir::new().unwrap();
        for (id, tree) in docs {
            fs::write(dir.path().join(format!("{id}.json")), tree.to_string()).unwrap();
        }
        let store = LocalDocumentStore::new(dir.path());
        (dir, store)
    }

    fn doc(title: &str, text: &str) -> Value {
        json!({
            "title": title,
            "body": {"content": [{"paragraph": {"elements": [{"textRun": {"content": text}}]}}]}
        })
    }

    #[test]
    fn test_read_document_and_text() {
        let (_dir, store) = store_with(&[("abc", doc("Plan", "Hello there\n"))]);
        let id = DocumentId::new("abc");
        let tree = store.read_document(&id).unwrap();
        assert_eq!(tree["title"], "Plan");
        assert_eq!(store.document_text(&id).unwrap(), "Hello there\n");
    }

    #[test]
    fn test_missing_document() {
        let (_dir, store) = store_with(&[]);
        let err = store.read_document(&DocumentId::new("nope")).unwrap_err();
        assert!(matches!(err, DocsightError::DocumentNotFound(ref id) if id == "nope"));
    }

    #[test]
    fn test_malformed_document_is_source_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let store = LocalDocumentStore::new(dir.path());
        let err = store.read_document(&DocumentId::new("bad")).unwrap_err();
        assert!(matches!(err, DocsightError::Source(_)));
    }

    #[test]
    fn test_rejects_path_like_ids() {
        let (_dir, store) = store_with(&[]);
        for bad in ["", "../etc/passwd", "a/b", ".hidden"] {
            let err = store.read_document(&DocumentId::new(bad)).unwrap_err();
            assert!(err.is_invalid_input(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_list_documents() {
        let (_dir, store) = store_with(&[
            ("one", doc("First", "a")),
            ("two", doc("Second", "b")),
            ("three", json!({})),
        ]);
        let docs = store.list_documents(10).unwrap();
        assert_eq!(docs.len(), 3);
        let untitled = docs.iter().find(|d| d.id.as_str() == "three").unwrap();
        assert_eq!(untitled.name, "three");
        assert!(docs.iter().any(|d| d.name == "Second"));

        assert_eq!(store.list_documents(2).unwrap().len(), 2);
    }

    #[test]
    fn test_list_documents_root_with_glob_characters() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("docs [v1] *?");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("one.json"), doc("First", "a").to_string()).unwrap();
        fs::write(root.join("two.json"), doc("Second", "b").to_string()).unwrap();
        // Would match an unescaped `[v1]` class
        let decoy = dir.path().join("docs v *?");
        fs::create_dir_all(&decoy).unwrap();
        fs::write(decoy.join("decoy.json"), doc("Decoy", "c").to_string()).unwrap();

        let store = LocalDocumentStore::new(&root);
        let docs = store.list_documents(10).unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d.name != "Decoy"));
    }

    #[test]
    fn test_metadata() {
        let mut tree = doc("Plan", "text");
        tree["revisionId"] = json!("rev-7");
        let (_dir, store) = store_with(&[("abc", tree), ("hashed", doc("H", "x"))]);

        let meta = store.document_metadata(&DocumentId::new("abc")).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Plan"));
        assert_eq!(meta.revision_id, "rev-7");
        assert_eq!(meta.table_count, 0);
        assert!(meta.size_bytes > 0);
        assert!(meta.modified_time.is_some());

        let meta = store.document_metadata(&DocumentId::new("hashed")).unwrap();
        assert_eq!(meta.revision_id.len(), 64);
    }
}
