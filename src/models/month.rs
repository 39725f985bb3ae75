use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonthDateError {
    #[error("Invalid month/year string: {input}")]
    InvalidInput { input: String },

    #[error("Month out of range: {month}")]
    MonthOutOfRange { month: u32 },
}

/// A calendar month.
///
/// All date arithmetic in this crate happens at month granularity; no day
/// component is ever carried. Ordering is by (year, month).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthDate {
    year: i32,
    month: u32,
}

impl MonthDate {
    /// The first month the calculator has redemption data for.
    pub const EARLIEST: MonthDate = MonthDate {
        year: 1996,
        month: 1,
    };

    pub fn new(year: i32, month: u32) -> Result<Self, MonthDateError> {
        if !(1..=12).contains(&month) {
            return Err(MonthDateError::MonthOutOfRange { month });
        }
        Ok(Self { year, month })
    }

    /// The current calendar month, from the local clock.
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month.
    pub fn succ(&self) -> Self {
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

    /// Parses the calculator's `mm/yyyy` date format.
    pub fn parse_mm_yyyy(s: &str) -> Result<Self, MonthDateError> {
        let invalid = || MonthDateError::InvalidInput {
            input: s.to_string(),
        };
        let (m, y) = s.trim().split_once('/').ok_or_else(|| invalid())?;
        let month: u32 = m.trim().parse().map_err(|_| invalid())?;
        let year: i32 = y.trim().parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl From<NaiveDate> for MonthDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succ_within_year() {
        let m = MonthDate::new(2025, 7).unwrap();
        assert_eq!(m.succ(), MonthDate::new(2025, 8).unwrap());
    }

    #[test]
    fn test_succ_rolls_the_year() {
        let m = MonthDate::new(1999, 12).unwrap();
        assert_eq!(m.succ(), MonthDate::new(2000, 1).unwrap());
    }

    #[test]
    fn test_ordering_is_year_then_month() {
        let a = MonthDate::new(1996, 12).unwrap();
        let b = MonthDate::new(1997, 1).unwrap();
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_display_as_mm_yyyy() {
        let m = MonthDate::new(1996, 1).unwrap();
        assert_eq!(m.to_string(), "01/1996");
    }

    #[test]
    fn test_parse_mm_yyyy() {
        let m = MonthDate::parse_mm_yyyy("07/1990").unwrap();
        assert_eq!(m.year(), 1990);
        assert_eq!(m.month(), 7);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(MonthDate::parse_mm_yyyy("").is_err());
        assert!(MonthDate::parse_mm_yyyy("July 1990").is_err());
        assert!(MonthDate::parse_mm_yyyy("13/1990").is_err());
    }

    #[test]
    fn test_from_naive_date_drops_the_day() {
        let date = NaiveDate::from_ymd_opt(1990, 7, 15).unwrap();
        assert_eq!(MonthDate::from(date), MonthDate::new(1990, 7).unwrap());
    }
}
