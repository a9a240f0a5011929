//! Year axis and year-grouped ordering for the timeline view.
//!
//! Records are grouped by parsed year, ascending. Records whose period does not parse as a
//! plausible year are left off the axis and listed after the dated groups, grouped by their
//! period text. Positions are indices into the sequence the model was built from.

use crate::dataset::Record;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Years placed on the axis; anything else is treated as undated.
const AXIS_YEARS: RangeInclusive<i32> = 1000..=9999;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineModel {
    by_year: BTreeMap<i32, Vec<usize>>,
    /// Undated records grouped by period text, in order of first appearance.
    undated: Vec<(String, Vec<usize>)>,
}

impl TimelineModel {
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        let mut undated: Vec<(String, Vec<usize>)> = Vec::new();
        for (position, record) in records.into_iter().enumerate() {
            match record.year().filter(|year| AXIS_YEARS.contains(year)) {
                Some(year) => by_year.entry(year).or_default().push(position),
                None => {
                    log::trace!("period `{}` is not on the axis", record.period);
                    let period = record.period.trim();
                    match undated.iter_mut().find(|(label, _)| label == period) {
                        Some((_, positions)) => positions.push(position),
                        None => undated.push((period.to_string(), vec![position])),
                    }
                }
            }
        }
        Self { by_year, undated }
    }

    /// Whether no record made it onto the axis.
    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    /// Earliest and latest year present.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = *self.by_year.keys().next()?;
        let last = *self.by_year.keys().next_back()?;
        Some((first, last))
    }

    /// Years that get an axis label: both ends of the range first, then every decade between.
    pub fn labelled_years(&self) -> Vec<i32> {
        let Some((first, last)) = self.year_range() else {
            return Vec::new();
        };
        let mut years = vec![first];
        if last != first {
            years.push(last);
        }
        let first_decade = first - first.rem_euclid(10) + 10;
        years.extend((first_decade..last).step_by(10));
        years
    }

    /// Positions of the records awarded in `year`, in input order.
    pub fn records_in(&self, year: i32) -> &[usize] {
        self.by_year.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Years that have records, ascending, with their record positions.
    pub fn groups(&self) -> impl Iterator<Item = (i32, &[usize])> + '_ {
        self.by_year
            .iter()
            .map(|(year, positions)| (*year, positions.as_slice()))
    }

    /// List sections: one heading per year, then one per undated period.
    pub fn sections(&self) -> Vec<(String, &[usize])> {
        self.groups()
            .map(|(year, positions)| (year.to_string(), positions))
            .chain(
                self.undated
                    .iter()
                    .map(|(period, positions)| (period.clone(), positions.as_slice())),
            )
            .collect()
    }

    /// Every position, in the order the list shows them.
    pub fn display_order(&self) -> Vec<usize> {
        self.by_year
            .values()
            .chain(self.undated.iter().map(|(_, positions)| positions))
            .flatten()
            .copied()
            .collect()
    }

    /// Relative position of `year` along the axis in percent.
    ///
    /// A single-year axis places its only year at 0. Years outside the range yield `None`.
    pub fn position_for_year(&self, year: i32) -> Option<f64> {
        let (first, last) = self.year_range()?;
        if year < first || year > last {
            return None;
        }
        if first == last {
            return Some(0.0);
        }
        let offset = i64::from(year) - i64::from(first);
        let span = i64::from(last) - i64::from(first);
        Some(offset as f64 / span as f64 * 100.0)
    }
}

/// One-line description used in lists and tooltips: `"1921 Physics: Albert Einstein"`.
pub fn summary_line(record: &Record) -> String {
    let names = if record.is_organization_award() {
        "Organization".to_string()
    } else {
        record.recipient_names().join(", ")
    };
    format!("{} {}: {}", record.period, record.category_label(), names)
}
