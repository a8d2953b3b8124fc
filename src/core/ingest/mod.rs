//! Document ingest module.
//!
//! Handles the path from source files to submitted index records:
//!
//! - File system walking with pattern matching
//! - Pure document construction (path + mtime + extracted record)
//! - Pipeline orchestration with per-document failure isolation
//!
//! # Failure isolation
//!
//! Partial success is the expected steady state of a bulk ingest. A single
//! unreadable or malformed document is recorded and skipped; it never
//! aborts the batch. Only an unreadable docs root or an engine open/commit
//! failure is fatal to a run.

pub mod builder;
pub mod pipeline;
pub mod walker;

pub use builder::build_document;
pub use pipeline::IngestPipeline;
pub use walker::IngestWalker;
