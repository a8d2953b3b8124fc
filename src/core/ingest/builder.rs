//! Document construction.
//!
//! Maps an extracted record plus file identity into the engine's record
//! schema. Pure, no side effects.

use std::path::Path;

use crate::core::types::{ExtractedRecord, IndexedDocument};

/// Build the schema-mapped document for one source file
///
/// The searchable contents field is composed as title, a single newline,
/// then body. The ordering is an external contract (it affects relevance
/// scoring in the engine) and must not change.
pub fn build_document(path: &Path, modified: i64, record: &ExtractedRecord) -> IndexedDocument {
    IndexedDocument {
        path: path.to_string_lossy().into_owned(),
        modified,
        contents: format!("{}\n{}", record.title, record.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(title: &str, body: &str) -> ExtractedRecord {
        ExtractedRecord {
            title: title.to_string(),
            body: body.to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn test_contents_composition() {
        let doc = build_document(
            &PathBuf::from("/docs/hello.html"),
            1_700_000_000_000,
            &record("Hello", "World"),
        );

        assert_eq!(doc.contents, "Hello\nWorld");
        assert_eq!(doc.path, "/docs/hello.html");
        assert_eq!(doc.modified, 1_700_000_000_000);
    }

    #[test]
    fn test_empty_title() {
        let doc = build_document(&PathBuf::from("/d/a.html"), 0, &record("", "body only"));

        assert_eq!(doc.contents, "\nbody only");
    }

    #[test]
    fn test_empty_body() {
        let doc = build_document(&PathBuf::from("/d/a.html"), 0, &record("title only", ""));

        assert_eq!(doc.contents, "title only\n");
    }

    #[test]
    fn test_builder_is_deterministic() {
        let path = PathBuf::from("/d/page.html");
        let rec = record("T", "B");

        assert_eq!(
            build_document(&path, 42, &rec),
            build_document(&path, 42, &rec)
        );
    }
}
