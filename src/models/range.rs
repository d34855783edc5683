//! Date range and calendar month representation
//!
//! `DateRange` is the user-selected purchase-date filter; `YearMonth` keys the
//! monthly trend series.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{InsightsError, InsightsResult};

/// Inclusive calendar-date range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// A step used to move one edge of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Days(i64),
    Months(i32),
}

impl Step {
    /// Apply this step to a date, returning None on calendar overflow
    pub fn apply(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Step::Days(n) => date.checked_add_signed(Duration::days(n)),
            Step::Months(n) if n >= 0 => date.checked_add_months(Months::new(n.unsigned_abs())),
            Step::Months(n) => date.checked_sub_months(Months::new(n.unsigned_abs())),
        }
    }
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> InsightsResult<Self> {
        if start > end {
            return Err(InsightsError::Validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Range covering a single day
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Parse a range from two `YYYY-MM-DD` strings
    pub fn parse(start: &str, end: &str) -> InsightsResult<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered (inclusive)
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Check if a timestamp's calendar date falls within this range
    pub fn contains_timestamp(&self, timestamp: &NaiveDateTime) -> bool {
        self.contains(timestamp.date())
    }

    /// Check whether the two ranges share at least one day
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Clamp both edges into `bounds`
    pub fn clamp_to(&self, bounds: &DateRange) -> Self {
        Self {
            start: self.start.clamp(bounds.start, bounds.end),
            end: self.end.clamp(bounds.start, bounds.end),
        }
    }

    /// Replace the start date, keeping `start <= end`
    pub fn with_start(&self, start: NaiveDate) -> InsightsResult<Self> {
        Self::new(start, self.end)
    }

    /// Replace the end date, keeping `start <= end`
    pub fn with_end(&self, end: NaiveDate) -> InsightsResult<Self> {
        Self::new(self.start, end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Parse a `YYYY-MM-DD` date, reporting a validation error on failure
pub fn parse_date(s: &str) -> InsightsResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        InsightsError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> InsightsResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(InsightsError::Validation(format!(
                "Invalid month: {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Month containing the given date or timestamp
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InsightsError::Validation(format!("Invalid month format: {}. Use YYYY-MM", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = InsightsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let err = DateRange::new(date(2018, 2, 1), date(2018, 1, 1)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_contains_whole_end_day() {
        let range = DateRange::new(date(2018, 1, 1), date(2018, 1, 31)).unwrap();
        let late = date(2018, 1, 31).and_hms_opt(23, 59, 59).unwrap();
        let next = date(2018, 2, 1).and_hms_opt(0, 0, 0).unwrap();
        assert!(range.contains_timestamp(&late));
        assert!(!range.contains_timestamp(&next));
        assert_eq!(range.days(), 31);
    }

    #[test]
    fn test_clamp_to_bounds() {
        let bounds = DateRange::new(date(2017, 1, 1), date(2018, 8, 31)).unwrap();
        let wide = DateRange::new(date(2016, 5, 1), date(2019, 1, 1)).unwrap();
        assert_eq!(wide.clamp_to(&bounds), bounds);

        let outside = DateRange::new(date(2019, 1, 1), date(2019, 2, 1)).unwrap();
        let clamped = outside.clamp_to(&bounds);
        assert_eq!(clamped.start(), date(2018, 8, 31));
        assert_eq!(clamped.end(), date(2018, 8, 31));
    }

    #[test]
    fn test_step_apply() {
        assert_eq!(Step::Days(-1).apply(date(2018, 3, 1)), Some(date(2018, 2, 28)));
        assert_eq!(Step::Months(1).apply(date(2018, 1, 31)), Some(date(2018, 2, 28)));
        assert_eq!(Step::Months(-2).apply(date(2018, 1, 15)), Some(date(2017, 11, 15)));
    }

    #[test]
    fn test_parse_range() {
        let range = DateRange::parse("2017-01-01", "2017-12-31").unwrap();
        assert_eq!(range.to_string(), "2017-01-01 to 2017-12-31");
        assert!(DateRange::parse("01/01/2017", "2017-12-31").is_err());
    }

    #[test]
    fn test_year_month_next_and_display() {
        let dec = YearMonth::new(2017, 12).unwrap();
        assert_eq!(dec.next(), YearMonth::new(2018, 1).unwrap());
        assert_eq!(dec.to_string(), "2017-12");
        assert_eq!("2018-03".parse::<YearMonth>().unwrap().month, 3);
        assert!(YearMonth::new(2018, 13).is_err());
    }

    #[test]
    fn test_year_month_serializes_as_label() {
        let ym = YearMonth::new(2018, 5).unwrap();
        assert_eq!(serde_json::to_string(&ym).unwrap(), "\"2018-05\"");
    }
}
