//! Working-copy rewriting.
//!
//! Replacements are recorded against each reference's own byte span and the
//! output is built once, so identical references are each rewritten at their
//! own position and text outside matched spans is copied untouched.

use crate::scan::ImageReference;

/// Collects per-reference replacements over one original text.
#[derive(Debug)]
pub struct Rewriter<'a> {
    original: &'a str,
    /// (start, end, replacement fragment), in the order applied.
    edits: Vec<(usize, usize, String)>,
}

impl<'a> Rewriter<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            edits: Vec::new(),
        }
    }

    /// Replace `reference`'s url with `hosted` inside its matched span.
    ///
    /// References must come from scanning the same text this rewriter wraps.
    pub fn replace(&mut self, reference: &ImageReference, hosted: &str) {
        debug_assert_eq!(
            self.original.get(reference.start..reference.end),
            Some(reference.full_match.as_str())
        );
        self.edits
            .push((reference.start, reference.end, reference.rewritten(hosted)));
    }

    /// Number of replacements recorded so far.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Build the rewritten text.
    pub fn finish(mut self) -> String {
        if self.edits.is_empty() {
            return self.original.to_string();
        }
        // Scanner spans never overlap; sort in case callers apply out of order.
        self.edits.sort_by_key(|(start, _, _)| *start);

        let extra: usize = self.edits.iter().map(|(_, _, r)| r.len()).sum();
        let mut out = String::with_capacity(self.original.len() + extra);
        let mut cursor = 0;
        for (start, end, fragment) in &self.edits {
            out.push_str(&self.original[cursor..*start]);
            out.push_str(fragment);
            cursor = *end;
        }
        out.push_str(&self.original[cursor..]);
        out
    }
}
