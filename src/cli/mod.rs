//! CLI adapter for sitedex
//!
//! Single-command interface: parse flags, select the ingest mode, open
//! the engine, drive the pipeline, close unconditionally, report.
//! All fatal diagnostics go to stderr with a non-zero exit code;
//! per-document progress and results go to stdout.

pub mod output;

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{colors, format_duration};
use crate::core::config::Config;
use crate::core::index::{IndexEngine, TantivyEngine};
use crate::core::ingest::IngestPipeline;
use crate::core::types::{IngestFailure, IngestMode};

/// Sitedex - HTML full-text indexer
///
/// Indexes the HTML documents under DOCS into a Tantivy index, either
/// rebuilding from scratch (default) or incrementally replacing documents
/// by path (--update).
#[derive(Parser, Debug)]
#[command(name = "sitedex")]
#[command(version)]
#[command(about = "HTML full-text indexer", long_about = None)]
pub struct Cli {
    /// Root file or directory of documents to ingest
    #[arg(long, short = 'd')]
    pub docs: PathBuf,

    /// Index directory (defaults to config index_dir, then "index")
    #[arg(long, short = 'i')]
    pub index: Option<PathBuf>,

    /// Open the existing index and replace documents by path instead of
    /// rebuilding
    #[arg(long, short = 'u')]
    pub update: bool,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long)]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Suppress per-document progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Ingest result response
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub docs_path: String,
    pub index_path: String,
    pub mode: IngestMode,
    pub docs_indexed: usize,
    pub docs_failed: usize,
    pub failures: Vec<IngestFailure>,
    pub total_docs: u64,
    pub duration_ms: u64,
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    config.log_config();

    execute(cli, &config)
}

/// Execute the ingest command
pub fn execute(args: Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if args.update {
        IngestMode::CreateOrUpdate
    } else {
        IngestMode::Create
    };

    // Fatal precondition, checked before the engine is opened: a bad
    // docs path must not touch the index
    let docs = args.docs.canonicalize().map_err(|e| {
        format!(
            "Invalid docs path '{}': {}. Make sure the path exists and is readable.",
            args.docs.display(),
            e
        )
    })?;

    let index_path = args
        .index
        .unwrap_or_else(|| config.storage.index_dir.clone());

    let include_patterns = if args.include.is_empty() {
        config.indexing.include_patterns.clone()
    } else {
        args.include
    };

    let exclude_patterns = if args.exclude.is_empty() {
        config.indexing.exclude_patterns.clone()
    } else {
        args.exclude
    };

    let show_progress = !args.quiet && args.format == OutputFormat::Human;

    let pipeline = IngestPipeline::new(
        mode,
        include_patterns,
        exclude_patterns,
        config.indexing.max_file_size_mb,
    )?
    .with_progress(show_progress);

    if show_progress {
        eprintln!(
            "Indexing {} into '{}'...",
            colors::file_path(&docs.display().to_string()),
            colors::file_path(&index_path.display().to_string())
        );
    }

    let mut engine =
        TantivyEngine::open_with_heap(&index_path, mode, config.storage.writer_heap_mb)?;

    // Close is unconditional: even a run that completed with partial
    // failures flushes what it submitted
    let run_result = pipeline.run(&docs, &mut engine);
    let close_result = engine.close();

    let stats = run_result?;
    close_result?;

    let response = IngestResponse {
        docs_path: docs.to_string_lossy().into_owned(),
        index_path: index_path.to_string_lossy().into_owned(),
        mode,
        docs_indexed: stats.docs_indexed,
        docs_failed: stats.docs_failed,
        failures: stats.failures,
        total_docs: engine.num_docs()?,
        duration_ms: stats.duration_ms,
    };

    match args.format {
        OutputFormat::Human => {
            println!(
                "{} {} documents ({} in index) in {}",
                colors::success("Indexed"),
                colors::number(&response.docs_indexed.to_string()),
                colors::number(&response.total_docs.to_string()),
                colors::number(&format_duration(response.duration_ms as f64 / 1000.0))
            );

            if response.docs_failed > 0 {
                output::print_warning(&format!(
                    "{} document(s) failed and were skipped:",
                    response.docs_failed
                ));
                for failure in &response.failures {
                    eprintln!("  {}: {}", failure.path.display(), failure.reason);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
