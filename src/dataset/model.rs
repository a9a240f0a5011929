//! Prize records as they appear in the dataset document.
//!
//! Field names follow the on-disk document (`year`, `laureates`, `firstname`, ...) through
//! serde renames; the Rust side uses the domain names.

use crate::error::{PrizelineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six award domains, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Physics,
    Chemistry,
    Medicine,
    Literature,
    Peace,
    Economics,
}

impl Category {
    /// Every category in canonical order.
    pub const ALL: [Category; 6] = [
        Category::Physics,
        Category::Chemistry,
        Category::Medicine,
        Category::Literature,
        Category::Peace,
        Category::Economics,
    ];

    /// Value used for this category in the dataset document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Physics => "physics",
            Self::Chemistry => "chemistry",
            Self::Medicine => "medicine",
            Self::Literature => "literature",
            Self::Peace => "peace",
            Self::Economics => "economics",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Medicine => "Medicine",
            Self::Literature => "Literature",
            Self::Peace => "Peace",
            Self::Economics => "Economics",
        }
    }

    /// Display color as a `#RRGGBB` string.
    pub fn color(self) -> &'static str {
        match self {
            Self::Physics => "#2196F3",
            Self::Chemistry => "#4CAF50",
            Self::Medicine => "#F44336",
            Self::Literature => "#9C27B0",
            Self::Peace => "#FF9800",
            Self::Economics => "#009688",
        }
    }

    /// Display color as RGB components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Physics => (0x21, 0x96, 0xF3),
            Self::Chemistry => (0x4C, 0xAF, 0x50),
            Self::Medicine => (0xF4, 0x43, 0x36),
            Self::Literature => (0x9C, 0x27, 0xB0),
            Self::Peace => (0xFF, 0x98, 0x00),
            Self::Economics => (0x00, 0x96, 0x88),
        }
    }

    /// Position in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Category at a canonical position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a dataset value. Anything outside the enumeration yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PrizelineError;

    /// Lenient parse used for CLI and config input: case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::parse(&normalized).ok_or_else(|| {
            PrizelineError::invalid_argument(format!(
                "unknown category `{}` (expected one of: {})",
                s,
                Self::ALL.map(Category::as_str).join(", ")
            ))
        })
    }
}

/// One honoree within a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "surname", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub motivation: String,
    /// Denominator of an equal split, string-encoded. `"1"` means sole credit.
    #[serde(rename = "share")]
    pub share_fraction: String,
}

impl Recipient {
    /// `first_name last_name`, or just the first name when there is no last name.
    pub fn full_name(&self) -> String {
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", self.first_name, last).trim_end().to_string()
    }

    pub fn is_sole_recipient(&self) -> bool {
        self.share_fraction == "1"
    }

    /// Parsed share denominator; `None` when the value is not a positive integer.
    pub fn share_denominator(&self) -> Option<u32> {
        self.share_fraction
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|denominator| *denominator > 0)
    }
}

/// One award instance for a period and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Four-digit year, string-typed at the source.
    #[serde(rename = "year")]
    pub period: String,
    /// Raw category value. Use [`Record::known_category`] for the typed form.
    pub category: String,
    #[serde(
        rename = "overallMotivation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shared_motivation: Option<String>,
    #[serde(rename = "laureates", default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<Recipient>>,
}

impl Record {
    /// Typed category, or `None` for values outside the enumeration.
    pub fn known_category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    /// Period parsed as an integer year.
    pub fn year(&self) -> Option<i32> {
        self.period.trim().parse().ok()
    }

    /// Recipients in source order; empty for organization awards.
    pub fn recipients(&self) -> &[Recipient] {
        self.recipients.as_deref().unwrap_or(&[])
    }

    /// A record without recipients is displayed as an organization award.
    pub fn is_organization_award(&self) -> bool {
        self.recipients().is_empty()
    }

    pub fn recipient_names(&self) -> Vec<String> {
        self.recipients().iter().map(Recipient::full_name).collect()
    }

    /// Label for the record's category, falling back to the raw value.
    pub fn category_label(&self) -> &str {
        match self.known_category() {
            Some(category) => category.label(),
            None => &self.category,
        }
    }
}

/// Ordered, immutable collection of records for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "prizes")]
    records: Vec<Record>,
}

impl Dataset {
    /// Dataset used while loading and after a failed load.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Decode a dataset document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
