//! Configuration management for sitedex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SitedexError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Index directory (used when the CLI does not pass --index)
    #[serde(default = "default_index_dir")]
    pub index_dir: PathBuf,

    /// Writer heap budget in MB
    #[serde(default = "default_writer_heap")]
    pub writer_heap_mb: usize,
}

// Default value functions
fn default_max_file_size() -> usize {
    10
}

fn default_index_dir() -> PathBuf {
    PathBuf::from("index")
}

fn default_writer_heap() -> usize {
    50
}

fn default_include_patterns() -> Vec<String> {
    vec![
        "*.html".to_string(),
        "*.htm".to_string(),
        "*.xhtml".to_string(),
    ]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
    ]
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            index_dir: default_index_dir(),
            writer_heap_mb: default_writer_heap(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SitedexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// Priority order for the TOML file:
    /// 1. SITEDEX_CONFIG env var
    /// 2. ./sitedex.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SITEDEX_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("sitedex.toml").exists() {
            Self::from_file("sitedex.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(max_size) = env::var("SITEDEX_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.indexing.max_file_size_mb = size;
            }
        }

        if let Ok(index_dir) = env::var("SITEDEX_INDEX_DIR") {
            self.storage.index_dir = PathBuf::from(index_dir);
        }

        if let Ok(heap) = env::var("SITEDEX_WRITER_HEAP_MB") {
            if let Ok(mb) = heap.parse() {
                self.storage.writer_heap_mb = mb;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.max_file_size_mb == 0 {
            return Err(SitedexError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.storage.writer_heap_mb < 15 {
            // Tantivy rejects writer heaps below ~15MB
            return Err(SitedexError::ConfigError(
                "Writer heap must be at least 15 MB".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max file size: {} MB", self.indexing.max_file_size_mb);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.indexing.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::info!("  Index dir: {:?}", self.storage.index_dir);
        tracing::info!("  Writer heap: {} MB", self.storage.writer_heap_mb);
    }
}
