//! Sitedex CLI - index HTML documents into a Tantivy full-text index
//!
//! # Examples
//!
//! ```bash
//! # Rebuild the index from a directory of HTML files
//! sitedex --docs ./site --index ./index
//!
//! # Incrementally update, replacing changed documents by path
//! sitedex --docs ./site --index ./index --update
//! ```

use clap::Parser;
use sitedex::cli::{output, run, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
