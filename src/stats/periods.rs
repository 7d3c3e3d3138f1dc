//! Selectable reporting periods derived from the dates present in the data.
//!
//! A year with data always offers a full-year bucket; its quarters are only
//! offered when at least one item falls inside them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Anything that happened on a calendar day
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for NaiveDate {
    fn date(&self) -> NaiveDate {
        *self
    }
}

/// Inclusive calendar range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// (start month, start day, end month, end day) of Q1..Q4
const QUARTER_BOUNDS: [(u32, u32, u32, u32); 4] = [
    (1, 1, 3, 31),
    (4, 1, 6, 30),
    (7, 1, 9, 30),
    (10, 1, 12, 31),
];

const QUARTER_MONTHS: [&str; 4] = ["Jan-Mar", "Apr-Jun", "Jul-Sep", "Oct-Dec"];

/// A full year or one of its quarters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterPeriod {
    /// `"{year}-total"` or `"{year}-q{n}"`; stable for the same data
    pub id: String,
    pub label: String,
    pub year: i32,
    pub quarter: Option<u8>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub is_year_total: bool,
}

impl QuarterPeriod {
    pub fn year_total(year: i32) -> Option<Self> {
        Some(Self {
            id: format!("{}-total", year),
            label: format!("Total {}", year),
            year,
            quarter: None,
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
            is_year_total: true,
        })
    }

    /// `quarter` is 1-based; anything outside 1..=4 yields `None`
    pub fn quarter(year: i32, quarter: u8) -> Option<Self> {
        let index = usize::from(quarter).checked_sub(1)?;
        let (start_month, start_day, end_month, end_day) = *QUARTER_BOUNDS.get(index)?;
        let months = QUARTER_MONTHS.get(index)?;

        Some(Self {
            id: format!("{}-q{}", year, quarter),
            label: format!("Q{} {} ({})", quarter, year, months),
            year,
            quarter: Some(quarter),
            start: NaiveDate::from_ymd_opt(year, start_month, start_day)?,
            end: NaiveDate::from_ymd_opt(year, end_month, end_day)?,
            is_year_total: false,
        })
    }

    /// Rebuilds a period from its id, `None` when the id is malformed or
    /// not in canonical form (`"+2024-total"`, `"02024-q1"`)
    pub fn from_id(id: &str) -> Option<Self> {
        let (year, suffix) = id.rsplit_once('-')?;
        let year: i32 = year.parse().ok()?;

        let period = match suffix {
            "total" => Self::year_total(year),
            _ => {
                let quarter: u8 = suffix.strip_prefix('q')?.parse().ok()?;
                Self::quarter(year, quarter)
            }
        }?;
        (period.id == id).then_some(period)
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range().contains(date)
    }
}

/// 1-based quarter a date falls in
pub fn quarter_of(date: NaiveDate) -> u8 {
    (date.month0() / 3 + 1) as u8
}

/// Lists the periods worth offering for `items`: years descending, each
/// year's total first, then its populated quarters from Q4 down to Q1.
pub fn generate_periods<T: Dated>(items: &[T]) -> Vec<QuarterPeriod> {
    let mut quarters_by_year: BTreeMap<i32, BTreeSet<u8>> = BTreeMap::new();
    for item in items {
        let date = item.date();
        quarters_by_year
            .entry(date.year())
            .or_default()
            .insert(quarter_of(date));
    }

    let mut periods = Vec::new();
    for (year, quarters) in quarters_by_year.iter().rev() {
        periods.extend(QuarterPeriod::year_total(*year));
        periods.extend(
            quarters
                .iter()
                .rev()
                .filter_map(|quarter| QuarterPeriod::quarter(*year, *quarter)),
        );
    }
    periods
}
