//! Image reference scanner.
//!
//! Finds Markdown `![alt](url)` images and HTML `<img src="...">` tags in a
//! single left-to-right pass. Both forms live in one regex, so matches come
//! out interleaved in document order and consumed text is never re-scanned.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Markdown alternative captures group 1, HTML alternative captures group 2.
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[.*?\]\((.*?)\)|<img[^>]*src=["'](.*?)["'][^>]*>"#)
        .expect("image reference pattern is valid")
});

/// Which syntax produced a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Markdown,
    Html,
}

/// One image reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// The whole matched text (`![alt](url)` or the full `<img ...>` tag).
    pub full_match: String,
    /// Extracted target, verbatim. May be empty.
    pub url: String,
    /// Byte offset of `full_match` in the scanned text.
    pub start: usize,
    /// Byte offset one past the end of `full_match`.
    pub end: usize,
    /// Byte span of `url` in the scanned text (inside `start..end`).
    pub url_span: Range<usize>,
    pub kind: ReferenceKind,
}

impl ImageReference {
    /// `full_match` with the captured url replaced by `hosted`.
    ///
    /// The url is replaced where the pattern captured it, so alt text that
    /// happens to contain the same string is left alone.
    pub fn rewritten(&self, hosted: &str) -> String {
        let from = self.url_span.start - self.start;
        let to = self.url_span.end - self.start;
        let mut out = String::with_capacity(self.full_match.len() + hosted.len());
        out.push_str(&self.full_match[..from]);
        out.push_str(hosted);
        out.push_str(&self.full_match[to..]);
        out
    }
}

/// Scans `content` and returns every image reference in document order.
pub fn scan_references(content: &str) -> Vec<ImageReference> {
    IMAGE_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let (url, kind) = match (caps.get(1), caps.get(2)) {
                (Some(m), _) => (m, ReferenceKind::Markdown),
                (None, Some(m)) => (m, ReferenceKind::Html),
                (None, None) => return None,
            };
            Some(ImageReference {
                full_match: whole.as_str().to_string(),
                url: url.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
                url_span: url.range(),
                kind,
            })
        })
        .collect()
}
