//! Split text into matched and unmatched segments for display.
//!
//! Segments borrow from the input, so concatenating their texts in order always reproduces
//! the original string byte for byte.

use crate::search::matcher::LiteralMatcher;

/// A contiguous slice of highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    pub matched: bool,
    pub text: &'t str,
}

impl<'t> Segment<'t> {
    pub fn plain(text: &'t str) -> Self {
        Self {
            matched: false,
            text,
        }
    }

    pub fn matched(text: &'t str) -> Self {
        Self {
            matched: true,
            text,
        }
    }
}

/// Reusable highlighter for one query, compiled once and applied to many fields.
#[derive(Debug, Clone)]
pub struct Highlighter {
    matcher: Option<LiteralMatcher>,
}

impl Highlighter {
    /// A blank (all-whitespace) query produces an identity highlighter.
    pub fn new(query: &str) -> Self {
        let matcher = if query.trim().is_empty() {
            None
        } else {
            LiteralMatcher::new(query)
                .map_err(|err| log::warn!("highlighting disabled: {err}"))
                .ok()
        };
        Self { matcher }
    }

    pub fn is_active(&self) -> bool {
        self.matcher.is_some()
    }

    /// Segments of `text`. Never empty: unmatched text comes back as one plain segment.
    pub fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        let Some(matcher) = &self.matcher else {
            return vec![Segment::plain(text)];
        };

        let spans = matcher.find_spans(text);
        if spans.is_empty() {
            return vec![Segment::plain(text)];
        }

        let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
        let mut last_end = 0;
        for (start, end) in spans {
            if start > last_end {
                segments.push(Segment::plain(&text[last_end..start]));
            }
            segments.push(Segment::matched(&text[start..end]));
            last_end = end;
        }
        if last_end < text.len() {
            segments.push(Segment::plain(&text[last_end..]));
        }
        segments
    }
}

/// Highlight every case-insensitive literal occurrence of `query` in `text`.
pub fn highlight<'t>(text: &'t str, query: &str) -> Vec<Segment<'t>> {
    Highlighter::new(query).segments(text)
}
