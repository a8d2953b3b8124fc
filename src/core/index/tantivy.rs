//! Tantivy-backed index engine.
//!
//! Wraps Tantivy index lifecycle and write operations behind the
//! `IndexEngine` capability. Replace-by-path is implemented as a
//! delete-term on the path key followed by an add, which is how Tantivy
//! expresses update-document semantics.

use std::path::Path;

use tantivy::directory::MmapDirectory;
use tantivy::schema::*;
use tantivy::{doc, Index, IndexReader, IndexWriter, Term};

use crate::core::error::{Result, SitedexError};
use crate::core::index::IndexEngine;
use crate::core::types::{IndexedDocument, IngestMode};

/// Default writer heap budget in MB
pub const DEFAULT_WRITER_HEAP_MB: usize = 50;

/// Create the Tantivy schema for document indexing
///
/// Fields:
/// - path: Source file path, the exact-match key (STRING | STORED)
/// - modified: Last-modified epoch milliseconds (i64, INDEXED | FAST |
///   STORED, range-filterable)
/// - contents: Searchable text, title + newline + body (TEXT | STORED)
pub fn create_schema() -> Schema {
    let mut builder = Schema::builder();

    // Exact-match document key
    builder.add_text_field("path", STRING | STORED);

    // Range-filterable modification timestamp
    builder.add_i64_field("modified", INDEXED | FAST | STORED);

    // Searchable text content
    builder.add_text_field("contents", TEXT | STORED);

    builder.build()
}

/// Tantivy index engine
pub struct TantivyEngine {
    /// Tantivy index instance
    index: Index,

    /// Index writer (for submitting documents)
    writer: IndexWriter,

    /// Schema fields, resolved once at open
    path_field: Field,
    modified_field: Field,
    contents_field: Field,
}

impl std::fmt::Debug for TantivyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TantivyEngine")
            .field("schema", &"<schema>")
            .finish()
    }
}

impl TantivyEngine {
    /// Open the engine at the given location with the default writer heap
    pub fn open(index_dir: &Path, mode: IngestMode) -> Result<Self> {
        Self::open_with_heap(index_dir, mode, DEFAULT_WRITER_HEAP_MB)
    }

    /// Open the engine at the given location
    ///
    /// In `Create` mode any documents from a previous index at the same
    /// location are cleared, so a rebuild truly starts empty. In
    /// `CreateOrUpdate` mode existing documents are kept and later
    /// submissions replace by path.
    pub fn open_with_heap(index_dir: &Path, mode: IngestMode, heap_mb: usize) -> Result<Self> {
        std::fs::create_dir_all(index_dir)?;

        let dir = MmapDirectory::open(index_dir)
            .map_err(|e| SitedexError::StorageError(format!("Failed to open index dir: {e}")))?;

        let schema = create_schema();
        let index = Index::open_or_create(dir, schema.clone())
            .map_err(|e| SitedexError::StorageError(format!("Failed to open index: {e}")))?;

        let writer = index
            .writer(heap_mb * 1_000_000)
            .map_err(|e| SitedexError::StorageError(format!("Failed to create writer: {e}")))?;

        if mode == IngestMode::Create {
            // Rebuild semantics: clear any prior documents
            writer.delete_all_documents().map_err(|e| {
                SitedexError::StorageError(format!("Failed to clear index for rebuild: {e}"))
            })?;
        }

        let path_field = schema
            .get_field("path")
            .map_err(|e| SitedexError::StorageError(format!("Missing path field: {e}")))?;
        let modified_field = schema
            .get_field("modified")
            .map_err(|e| SitedexError::StorageError(format!("Missing modified field: {e}")))?;
        let contents_field = schema
            .get_field("contents")
            .map_err(|e| SitedexError::StorageError(format!("Missing contents field: {e}")))?;

        Ok(Self {
            index,
            writer,
            path_field,
            modified_field,
            contents_field,
        })
    }

    /// Get an index reader for searching
    pub fn reader(&self) -> Result<IndexReader> {
        self.index
            .reader()
            .map_err(|e| SitedexError::StorageError(format!("Failed to create reader: {e}")))
    }

    /// Number of committed documents in the index
    pub fn num_docs(&self) -> Result<u64> {
        Ok(self.reader()?.searcher().num_docs())
    }

    /// Get a reference to the underlying Tantivy index
    pub fn index(&self) -> &Index {
        &self.index
    }

    fn submit(&mut self, doc: &IndexedDocument) -> Result<()> {
        self.writer
            .add_document(doc!(
                self.path_field => doc.path.as_str(),
                self.modified_field => doc.modified,
                self.contents_field => doc.contents.as_str(),
            ))
            .map_err(|e| SitedexError::StorageError(format!("Failed to add document: {e}")))?;
        Ok(())
    }
}

impl IndexEngine for TantivyEngine {
    fn add_document(&mut self, doc: &IndexedDocument) -> Result<()> {
        self.submit(doc)
    }

    fn replace_document(&mut self, doc: &IndexedDocument) -> Result<()> {
        // Remove any prior entry with the same path key, then insert.
        // Both operations land in the same commit, so readers never see
        // the document missing.
        self.writer
            .delete_term(Term::from_field_text(self.path_field, &doc.path));
        self.submit(doc)
    }

    fn close(&mut self) -> Result<()> {
        self.writer
            .commit()
            .map_err(|e| SitedexError::StorageError(format!("Failed to commit: {e}")))?;
        Ok(())
    }
}
