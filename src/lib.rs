//! Sitedex - HTML Full-Text Indexing Tool
//!
//! Walks a file or directory of HTML documents, extracts title and body
//! text, and feeds each document into a Tantivy full-text index. Supports
//! full rebuilds and incremental updates that replace documents by path.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - extract (HTML title/body extraction)
//!   - ingest (file walking, document building, pipeline driver)
//!   - index (engine capability trait, Tantivy implementation)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Key Features
//!
//! - Rebuild (`Create`) and incremental (`CreateOrUpdate`) ingest modes
//! - Replace-by-path semantics: re-ingesting a document never duplicates it
//! - Per-document failure isolation: one bad file never aborts the batch
//! - Deterministic traversal (sorted, deduplicated walk order)

// Core domain logic (protocol-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, SitedexError};
pub use core::extract::HtmlExtractor;
pub use core::index::{IndexEngine, TantivyEngine};
pub use core::ingest::IngestPipeline;
pub use core::types::*;
