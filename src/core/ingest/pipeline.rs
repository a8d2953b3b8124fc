//! Ingest pipeline driver.
//!
//! Coordinates one ingest run end to end:
//! 1. Validate the docs root (fatal precondition, checked before any
//!    engine call)
//! 2. Walk the tree
//! 3. Per document: read mtime and bytes, extract title/body, build the
//!    record, submit to the engine (add or replace, depending on mode)
//!
//! Per-document failures are recorded and skipped; the batch always runs
//! to completion. Engine open/close belongs to the caller so the close
//! can happen unconditionally, whatever the run outcome.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::core::error::{Result, SitedexError};
use crate::core::extract::HtmlExtractor;
use crate::core::index::IndexEngine;
use crate::core::ingest::{build_document, IngestWalker};
use crate::core::types::{IngestFailure, IngestMode, IngestStats};

/// Orchestrates one ingest run
pub struct IngestPipeline {
    walker: IngestWalker,
    extractor: HtmlExtractor,
    mode: IngestMode,
    show_progress: bool,
}

impl IngestPipeline {
    /// Create a new pipeline
    ///
    /// The mode is fixed for the lifetime of the pipeline; a fresh
    /// pipeline is constructed per invocation.
    pub fn new(
        mode: IngestMode,
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let walker = IngestWalker::new(include_patterns, exclude_patterns, max_file_size_mb)?;
        let extractor = HtmlExtractor::new()?;

        Ok(Self {
            walker,
            extractor,
            mode,
            show_progress: false,
        })
    }

    /// Print a per-document `adding <path>` / `updating <path>` line to
    /// stdout during the run
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// The mode this pipeline submits with
    pub fn mode(&self) -> IngestMode {
        self.mode
    }

    /// Run the ingest against an open engine
    ///
    /// Fails fast (before touching the engine) if the docs root is
    /// missing or unreadable. Individual document failures never
    /// propagate past the document being processed; they are collected
    /// into the returned stats.
    pub fn run<E: IndexEngine>(&self, docs_root: &Path, engine: &mut E) -> Result<IngestStats> {
        let start = Instant::now();

        // Fatal precondition: the root must exist and be readable
        let root = docs_root.canonicalize().map_err(|e| {
            SitedexError::InvalidPath(format!(
                "'{}' does not exist or is not readable: {e}",
                docs_root.display()
            ))
        })?;

        tracing::info!("Collecting documents from {:?}", root);
        let files = self.walker.collect_documents(&root)?;
        tracing::info!("Found {} documents to ingest", files.len());

        let mut docs_indexed = 0;
        let mut failures = Vec::new();

        for file in &files {
            match self.ingest_document(file, engine) {
                Ok(()) => {
                    docs_indexed += 1;
                    tracing::debug!("Ingested {:?}", file);
                }
                Err(e) => {
                    tracing::warn!("Failed to ingest {:?}: {}", file, e);
                    failures.push(IngestFailure {
                        path: file.clone(),
                        reason: e.to_string(),
                    });
                    // Continue processing other documents
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Ingest complete: {} documents indexed, {} failed in {}ms",
            docs_indexed,
            failures.len(),
            duration_ms
        );

        Ok(IngestStats {
            docs_indexed,
            docs_failed: failures.len(),
            failures,
            duration_ms,
        })
    }

    /// Process a single document: read, extract, build, submit
    fn ingest_document<E: IndexEngine>(&self, path: &Path, engine: &mut E) -> Result<()> {
        let metadata = fs::metadata(path)?;
        let modified = DateTime::<Utc>::from(metadata.modified()?).timestamp_millis();

        let html = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                SitedexError::ExtractionFailed(format!("not valid UTF-8: {path:?}"))
            } else {
                SitedexError::ExtractionFailed(format!("failed to read {path:?}: {e}"))
            }
        })?;

        let record = self.extractor.extract(&html, modified)?;
        let doc = build_document(path, modified, &record);

        if self.show_progress {
            println!("{} {}", self.mode.verb(), path.display());
        }

        match self.mode {
            IngestMode::Create => engine.add_document(&doc),
            IngestMode::CreateOrUpdate => engine.replace_document(&doc),
        }
    }
}
