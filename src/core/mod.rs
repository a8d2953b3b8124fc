//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the command-line adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **extract**: HTML title/body extraction
//! - **ingest**: File walking, document building, pipeline driver
//! - **index**: Engine capability trait and Tantivy implementation

pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod ingest;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SitedexError};
