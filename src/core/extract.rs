//! HTML content extraction.
//!
//! Produces a structured `ExtractedRecord` (title, body text, timestamp)
//! from raw HTML. Extraction is per-document fallible: documents with no
//! extractable text are rejected so the pipeline can record and skip them.

use scraper::{Html, Selector};

use crate::core::error::{Result, SitedexError};
use crate::core::types::ExtractedRecord;

/// HTML title/body extractor
pub struct HtmlExtractor {
    title_selector: Selector,
    body_selector: Selector,
}

impl HtmlExtractor {
    /// Create a new extractor
    pub fn new() -> Result<Self> {
        let title_selector = Selector::parse("title")
            .map_err(|e| SitedexError::ConfigError(format!("Invalid title selector: {e}")))?;
        let body_selector = Selector::parse("body")
            .map_err(|e| SitedexError::ConfigError(format!("Invalid body selector: {e}")))?;

        Ok(Self {
            title_selector,
            body_selector,
        })
    }

    /// Extract title and body text from an HTML document
    ///
    /// The title is the text of the first `<title>` element, or empty if
    /// the document has none. The body is every text node under `<body>`,
    /// trimmed and joined with single spaces.
    ///
    /// Fails with `ExtractionFailed` when the document yields neither a
    /// title nor any body text.
    pub fn extract(&self, html: &str, timestamp: i64) -> Result<ExtractedRecord> {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title_selector)
            .next()
            .map(|el| collapse_whitespace(el.text()))
            .unwrap_or_default();

        let body = document
            .select(&self.body_selector)
            .next()
            .map(|el| collapse_whitespace(el.text()))
            .unwrap_or_default();

        if title.is_empty() && body.is_empty() {
            return Err(SitedexError::ExtractionFailed(
                "document has no extractable text".to_string(),
            ));
        }

        Ok(ExtractedRecord {
            title,
            body,
            timestamp,
        })
    }
}

/// Join text node fragments, trimming each and collapsing runs of
/// whitespace into single spaces
fn collapse_whitespace<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for fragment in fragments {
        for word in fragment.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> HtmlExtractor {
        HtmlExtractor::new().unwrap()
    }

    #[test]
    fn test_extract_title_and_body() {
        let html = r#"
            <html>
            <head><title>Hello</title></head>
            <body>World</body>
            </html>
        "#;

        let record = extractor().extract(html, 1000).unwrap();
        assert_eq!(record.title, "Hello");
        assert_eq!(record.body, "World");
        assert_eq!(record.timestamp, 1000);
    }

    #[test]
    fn test_extract_missing_title() {
        let html = "<html><body>Only body text here</body></html>";

        let record = extractor().extract(html, 0).unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.body, "Only body text here");
    }

    #[test]
    fn test_extract_nested_markup() {
        let html = r#"
            <html>
            <head><title>Guide</title></head>
            <body>
                <h1>Intro</h1>
                <p>First <em>paragraph</em> text.</p>
                <p>Second paragraph.</p>
            </body>
            </html>
        "#;

        let record = extractor().extract(html, 0).unwrap();
        assert_eq!(record.title, "Guide");
        assert_eq!(record.body, "Intro First paragraph text. Second paragraph.");
    }

    #[test]
    fn test_extract_collapses_whitespace() {
        let html = "<html><head><title>  A \n  Title </title></head><body> spaced   out </body></html>";

        let record = extractor().extract(html, 0).unwrap();
        assert_eq!(record.title, "A Title");
        assert_eq!(record.body, "spaced out");
    }

    #[test]
    fn test_extract_empty_document_fails() {
        let result = extractor().extract("<html><body></body></html>", 0);

        assert!(matches!(result, Err(SitedexError::ExtractionFailed(_))));
    }

    #[test]
    fn test_extract_title_only() {
        let html = "<html><head><title>Bare title</title></head><body></body></html>";

        let record = extractor().extract(html, 0).unwrap();
        assert_eq!(record.title, "Bare title");
        assert_eq!(record.body, "");
    }

    #[test]
    fn test_extract_utf8_content() {
        let html = "<html><head><title>中文标题</title></head><body>Körper 🔥 text</body></html>";

        let record = extractor().extract(html, 0).unwrap();
        assert_eq!(record.title, "中文标题");
        assert_eq!(record.body, "Körper 🔥 text");
    }
}
