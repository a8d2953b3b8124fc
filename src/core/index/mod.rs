//! Index engine capability interface and implementations.
//!
//! The ingest pipeline treats the full-text engine as an opaque
//! capability: it submits schema-mapped documents and flushes them on
//! close. Storage format, tokenization, segment merging and scoring all
//! live behind this seam, so any concrete engine can satisfy it (the
//! crate ships a Tantivy implementation; tests use a recording mock).

pub mod tantivy;

pub use self::tantivy::{create_schema, TantivyEngine};

use crate::core::error::Result;
use crate::core::types::IndexedDocument;

/// Write-side capability of a full-text index engine
///
/// Opening (and mode selection) belongs to the concrete engine's
/// constructor; a handle is only usable for one run.
pub trait IndexEngine {
    /// Submit a document with pure insert semantics
    ///
    /// Used in `Create` mode, where the target index is being rebuilt
    /// and no prior entry for the path can exist.
    fn add_document(&mut self, doc: &IndexedDocument) -> Result<()>;

    /// Submit a document with replace-by-path semantics
    ///
    /// Used in `CreateOrUpdate` mode: any prior entry with the same
    /// path key is removed, never duplicated.
    fn replace_document(&mut self, doc: &IndexedDocument) -> Result<()>;

    /// Flush all submitted documents durably
    ///
    /// Called exactly once per run, unconditionally after ingesting
    /// completes (including completion with partial failures).
    fn close(&mut self) -> Result<()>;
}
