use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display form of every logged date, e.g. `Mon Jan 01 2024`.
pub const NORMALIZED_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    NORMALIZED_FORMAT,
    "%b %d %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid date: {0}")]
pub struct InvalidDate(pub String);

/// A calendar date with no time-of-day component.
///
/// Ordering follows the calendar, so range filters compare values directly
/// instead of comparing display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn normalized(&self) -> String {
        self.0.format(NORMALIZED_FORMAT).to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = InvalidDate;

    /// Accepts ISO and US-style dates, written-out month names, date-times
    /// with or without an offset, and the normalized display form. Any time-of-day is dropped and the date is
    /// taken as written.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidDate(raw.to_string()));
        }

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(with_offset.date_naive()));
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                DATE_TIME_FORMATS.iter().find_map(|format| {
                    NaiveDateTime::parse_from_str(trimmed, format)
                        .ok()
                        .map(|date_time| date_time.date())
                })
            })
            .map(Self)
            .ok_or_else(|| InvalidDate(raw.to_string()))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(NORMALIZED_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
