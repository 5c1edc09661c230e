//! Sunday-to-Saturday weeks shown by the schedule views.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{FamboardError, FamboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    /// Always a Sunday.
    pub start: NaiveDate,
}

impl Week {
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_sunday() as i64;
        Week {
            start: date - Duration::days(offset),
        }
    }

    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Week containing the given YYYY-MM-DD date, or the current week for `None`.
    pub fn from_arg(date: Option<&str>) -> FamboardResult<Self> {
        match date {
            Some(s) => Ok(Self::containing(parse_date(s)?)),
            None => Ok(Self::current()),
        }
    }

    /// The Saturday closing this week.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| self.start + Duration::days(i as i64))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end()
    }

    pub fn next(&self) -> Self {
        Week {
            start: self.start + Duration::weeks(1),
        }
    }

    pub fn previous(&self) -> Self {
        Week {
            start: self.start - Duration::weeks(1),
        }
    }

    /// e.g. "Mar 2 - Mar 8, 2025"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %-d"),
            self.end().format("%b %-d, %Y")
        )
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> FamboardResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        FamboardError::Validation(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}
