//! Case-insensitive literal matching on top of ripgrep's matcher.
//!
//! Queries are compiled as fixed strings, so `.`, `*`, `(` and friends only ever match
//! themselves.

use crate::error::{PrizelineError, Result};
use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};

/// A compiled, non-empty literal needle.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    needle: String,
    matcher: RegexMatcher,
}

impl LiteralMatcher {
    /// Compile `needle` as a case-insensitive literal. Empty needles are rejected.
    pub fn new(needle: &str) -> Result<Self> {
        if needle.is_empty() {
            return Err(PrizelineError::invalid_argument("search needle is empty"));
        }

        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(true)
            .fixed_strings(true)
            .build(needle)
            .map_err(|e| PrizelineError::other(format!("cannot compile `{needle}`: {e}")))?;

        Ok(Self {
            needle: needle.to_string(),
            matcher,
        })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether `haystack` contains the needle anywhere.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.matcher
            .is_match(haystack.as_bytes())
            .unwrap_or(false)
    }

    /// Byte ranges of all non-overlapping matches, leftmost first.
    pub fn find_spans(&self, haystack: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let _ = self.matcher.find_iter(haystack.as_bytes(), |m| {
            spans.push((m.start(), m.end()));
            true
        });
        spans
    }
}
