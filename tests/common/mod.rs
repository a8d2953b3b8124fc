//! Shared fixtures and index assertions for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use tantivy::collector::TopDocs;
use tantivy::query::AllQuery;
use tantivy::schema::Value;
use tantivy::{Index, TantivyDocument};
use tempfile::TempDir;

/// Write an HTML document with the given title and body text
pub fn write_html(dir: &Path, name: &str, title: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(
        &path,
        format!("<html><head><title>{title}</title></head><body>{body}</body></html>"),
    )
    .unwrap();
    path
}

/// Create a docs directory populated with (name, title, body) documents
pub fn create_docs_dir(docs: &[(&str, &str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, title, body) in docs {
        write_html(temp_dir.path(), name, title, body);
    }
    temp_dir
}

/// Read every committed (path, contents) pair from an index, sorted by path
#[allow(dead_code)] // Used in the pipeline integration tests
pub fn read_all_docs(index_dir: &Path) -> Vec<(String, String)> {
    let index = Index::open_in_dir(index_dir).unwrap();
    let reader = index.reader().unwrap();
    let searcher = reader.searcher();
    let schema = index.schema();

    let path_field = schema.get_field("path").unwrap();
    let contents_field = schema.get_field("contents").unwrap();

    let top_docs = searcher
        .search(&AllQuery, &TopDocs::with_limit(1_000))
        .unwrap();

    let mut docs: Vec<(String, String)> = top_docs
        .iter()
        .map(|(_, addr)| {
            let doc: TantivyDocument = searcher.doc(*addr).unwrap();
            let field_str = |field| {
                doc.get_first(field)
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string()
            };
            (field_str(path_field), field_str(contents_field))
        })
        .collect();

    docs.sort();
    docs
}

/// Number of committed documents in an index
pub fn num_docs(index_dir: &Path) -> u64 {
    let index = Index::open_in_dir(index_dir).unwrap();
    index.reader().unwrap().searcher().num_docs()
}

/// Contents of the document whose path ends with the given suffix
pub fn contents_for(index_dir: &Path, path_suffix: &str) -> Option<String> {
    read_all_docs(index_dir)
        .into_iter()
        .find(|(path, _)| path.ends_with(path_suffix))
        .map(|(_, contents)| contents)
}
