//! Record search: category/text filtering and match highlighting.
//!
//! Both halves share [`LiteralMatcher`], a case-insensitive fixed-string matcher built on
//! ripgrep's matcher crates.

pub mod filter;
pub mod highlight;
pub mod matcher;

pub use filter::{filter, filter_indices, RecordFilter};
pub use highlight::{highlight, Highlighter, Segment};
pub use matcher::LiteralMatcher;
