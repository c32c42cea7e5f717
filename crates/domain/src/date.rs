use chrono::{Datelike, NaiveDate};
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidYearMonthError {
    #[error("Month: {0} is not between 1 and 12")]
    InvalidMonth(u32),
    #[error("Year: {0} is out of range")]
    InvalidYear(i32),
}

/// A calendar month of a specific year, e.g. January 2023.
///
/// Rendered as `YYYY-MM`, which is also the key income summaries are stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidYearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(InvalidYearMonthError::InvalidMonth(month));
        }
        // Both ends of the month must be representable
        if NaiveDate::from_ymd_opt(year, month, 1).is_none()
            || NaiveDate::from_ymd_opt(year + 1, 1, 1).is_none()
        {
            return Err(InvalidYearMonthError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: &NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Exclusive upper bound of the month
    pub fn first_day_of_next_month(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
