//! File system walker with pattern-based filtering.
//!
//! Enumerates the source documents of one ingest run. A single-file root
//! yields exactly that file; a directory root is traversed recursively
//! with glob include/exclude filtering and a file-size cap. Walk errors
//! (permission denied, etc.) are logged and skipped without crashing.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{Result, SitedexError};

/// File system walker with pattern-based filtering
pub struct IngestWalker {
    /// Patterns to include (e.g., "*.html", "*.htm")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/.git/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl IngestWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    /// * `exclude_patterns` - Glob patterns for files to exclude
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let include = include_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    SitedexError::ConfigError(format!("Invalid include pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let exclude = exclude_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    SitedexError::ConfigError(format!("Invalid exclude pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            include_patterns: include,
            exclude_patterns: exclude,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect the source documents under a root path
    ///
    /// A file root returns exactly that file, bypassing pattern filtering
    /// (an explicitly named document is always ingested). A directory root
    /// is traversed recursively; matches are sorted and deduplicated so
    /// traversal order is deterministic and no path appears twice in a run.
    pub fn collect_documents(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    // Check file size
                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::debug!(
                                "Skipping large file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    // Check patterns
                    if self.matches_patterns(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }

        files.sort();
        files.dedup();

        Ok(files)
    }

    /// Determine if a directory entry should be processed
    ///
    /// Filters out hidden directories and excluded patterns.
    /// Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        // Never filter the root directory
        if path == root {
            return true;
        }

        // Skip hidden directories (starting with '.')
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') && entry.file_type().is_dir() {
                return false;
            }
        }

        // Check exclude patterns for directories
        // (skip entire directory trees early)
        if entry.file_type().is_dir() {
            for pattern in &self.exclude_patterns {
                if pattern.matches_path(path) {
                    tracing::debug!("Skipping excluded directory: {:?}", path);
                    return false;
                }
            }
        }

        true
    }

    /// Check if a file path matches the include/exclude patterns
    fn matches_patterns(&self, path: &Path) -> bool {
        let path_str = match path.to_str() {
            Some(s) => s,
            None => return false,
        };

        // If no include patterns, include all
        let matches_include = self.include_patterns.is_empty()
            || self.include_patterns.iter().any(|p| {
                // Match against both full path and filename
                p.matches(path_str)
                    || path
                        .file_name()
                        .and_then(|f| f.to_str())
                        .map(|f| p.matches(f))
                        .unwrap_or(false)
            });

        if !matches_include {
            return false;
        }

        !self
            .exclude_patterns
            .iter()
            .any(|p| p.matches(path_str) || p.matches_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_files(files: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for file in files {
            let path = temp_dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "<html><body>x</body></html>").unwrap();
        }
        temp_dir
    }

    fn html_walker() -> IngestWalker {
        IngestWalker::new(vec!["*.html".to_string(), "*.htm".to_string()], vec![], 10).unwrap()
    }

    #[test]
    fn test_walker_single_file_root() {
        let temp_dir = create_test_files(&["page.html"]);
        let file = temp_dir.path().join("page.html");

        let files = html_walker().collect_documents(&file).unwrap();

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_walker_single_file_bypasses_patterns() {
        // An explicitly named root file is ingested even if patterns
        // would not match it
        let temp_dir = create_test_files(&["notes.txt"]);
        let file = temp_dir.path().join("notes.txt");

        let files = html_walker().collect_documents(&file).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_walker_include_patterns() {
        let temp_dir = create_test_files(&["a.html", "b.htm", "c.txt"]);

        let files = html_walker().collect_documents(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_walker_no_patterns_includes_all() {
        let temp_dir = create_test_files(&["a.html", "b.txt"]);

        let walker = IngestWalker::new(vec![], vec![], 10).unwrap();
        let files = walker.collect_documents(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_walker_exclude_patterns() {
        let temp_dir = create_test_files(&["docs/a.html", "drafts/b.html"]);

        let walker = IngestWalker::new(
            vec!["*.html".to_string()],
            vec!["**/drafts/**".to_string()],
            10,
        )
        .unwrap();
        let files = walker.collect_documents(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].to_str().unwrap().ends_with("a.html"));
    }

    #[test]
    fn test_walker_nested_directories_sorted() {
        let temp_dir = create_test_files(&["z/late.html", "a/early.html", "mid.html"]);

        let files = html_walker().collect_documents(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 3);
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_walker_hidden_directories() {
        let temp_dir = create_test_files(&["visible.html", ".cache/hidden.html"]);

        let files = html_walker().collect_documents(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].to_str().unwrap().ends_with("visible.html"));
    }

    #[test]
    fn test_walker_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let files = html_walker().collect_documents(temp_dir.path()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_walker_invalid_pattern() {
        let result = IngestWalker::new(vec!["[invalid".to_string()], vec![], 10);

        assert!(result.is_err());
    }
}
