//! Core data types for sitedex.
//!
//! This module defines the data structures that flow through the ingest
//! pipeline: extracted records, schema-mapped documents, ingest modes,
//! and run statistics.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How documents are submitted to the index engine for one run
///
/// The mode is fixed for the lifetime of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestMode {
    /// Rebuild semantics: the target index starts empty, submissions
    /// use pure insert
    Create,

    /// Incremental semantics: the index may already contain documents
    /// with the same path keys, submissions replace by path
    CreateOrUpdate,
}

impl IngestMode {
    /// Progress verb for per-document output
    pub fn verb(&self) -> &'static str {
        match self {
            IngestMode::Create => "adding",
            IngestMode::CreateOrUpdate => "updating",
        }
    }
}

/// Title/body text extracted from one HTML document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Document title (empty if the document has none)
    pub title: String,

    /// Body text with whitespace collapsed
    pub body: String,

    /// Source last-modified timestamp, epoch milliseconds
    pub timestamp: i64,
}

/// The schema-mapped record submitted to the index engine
///
/// `path` uniquely identifies a logical document across runs: under
/// `CreateOrUpdate` a new document with the same path replaces any
/// prior entry rather than duplicating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// Absolute source path, the exact-match key
    pub path: String,

    /// Last-modified timestamp, epoch milliseconds (range-filterable)
    pub modified: i64,

    /// Searchable text, composed as title + newline + body
    pub contents: String,
}

/// A per-document failure recorded during an ingest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestFailure {
    /// Source file that failed
    pub path: PathBuf,

    /// Human-readable failure reason
    pub reason: String,
}

/// Statistics from one ingest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestStats {
    /// Number of documents successfully submitted
    pub docs_indexed: usize,

    /// Number of documents that failed and were skipped
    pub docs_failed: usize,

    /// The failed documents, in traversal order
    pub failures: Vec<IngestFailure>,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}
