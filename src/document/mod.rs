//! Document Module
//!
//! Everything that works on a document rather than on bare text:
//! - Tree walking (tables, plain text, title)
//! - Case-insensitive search
//! - The document source seam and a filesystem implementation

pub mod search;
pub mod source;
pub mod tree;

pub use search::search;
pub use source::{DocumentMetadata, DocumentSource, DocumentSummary, LocalDocumentStore};
pub use tree::{document_title, extract_tables, extract_text};
