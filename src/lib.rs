//! Validated Gregorian calendar dates with day arithmetic.
//!
//! A [`CustomDate`] always holds a real date of the proleptic Gregorian
//! calendar between 01/01/0001 and 31/12/9999. Arithmetic returns new values
//! and reports dates past either end as [`DateError::OutOfRange`].

mod consts;
mod error;
mod prelude;
mod types;

pub use consts::*;
pub use error::DateError;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use types::{from_ordinal, to_ordinal};

use crate::prelude::*;
use std::str::FromStr;
use tracing::debug;

/// A calendar date (day, month, year) that is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "day.get()", "month.get()", "year.get()")]
pub struct CustomDate {
    day: Day,
    month: Month,
    year: Year,
}

/// Long rendering of a [`CustomDate`], e.g. `07 December 2022`.
///
/// Returned by [`CustomDate::long`]; formats lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{:02} {} {:04}", "_0.day.get()", "_0.month.name()", "_0.year.get()")]
pub struct LongDate(CustomDate);

impl CustomDate {
    /// Creates a date from day, month and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the triple is not a real calendar
    /// date: month outside 1-12, year outside 1-9999, or day past the end of
    /// the month (February 29 only exists in leap years).
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, DateError> {
        Self::validate(day, month, year).ok_or_else(|| {
            debug!(day, month, year, "rejected invalid date");
            DateError::InvalidDate { day, month, year }
        })
    }

    fn validate(day: i32, month: i32, year: i32) -> Option<Self> {
        let year = Year::new(u16::try_from(year).ok()?)?;
        let month = Month::new(u8::try_from(month).ok()?)?;
        let day = Day::new(u8::try_from(day).ok()?, year, month)?;
        Some(Self { day, month, year })
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns `(day, month, year)`
    pub const fn parts(&self) -> (u8, u8, u16) {
        (self.day(), self.month(), self.year())
    }

    /// Days elapsed since 01/01/0001
    pub const fn ordinal(&self) -> i64 {
        to_ordinal(self.year, self.month, self.day)
    }

    /// Returns the date `days` days later (earlier if negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result would fall before
    /// 01/01/0001 or after 31/12/9999.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let (year, month, day) = self
            .ordinal()
            .checked_add(days)
            .and_then(from_ordinal)
            .ok_or_else(|| self.out_of_range(days))?;
        Ok(Self { day, month, year })
    }

    /// Returns the date `days` days earlier (later if negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result would fall before
    /// 01/01/0001 or after 31/12/9999.
    pub fn sub_days(self, days: i64) -> Result<Self, DateError> {
        match days.checked_neg() {
            Some(negated) => self.add_days(negated),
            None => Err(self.out_of_range(days.saturating_neg())),
        }
    }

    fn out_of_range(self, days: i64) -> DateError {
        debug!(date = %self, days, "day arithmetic out of range");
        DateError::OutOfRange { date: self, days }
    }

    /// Long rendering adapter: `DD <MonthName> YYYY`
    pub const fn long(self) -> LongDate {
        LongDate(self)
    }

    /// Renders the date as `DD <MonthName> YYYY`, e.g. `07 December 2022`
    pub fn to_long_date_string(&self) -> String {
        self.long().to_string()
    }

    /// Helper to parse one numeric component of the short form
    fn parse_component(s: &str) -> Option<i32> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    }
}

impl FromStr for CustomDate {
    type Err = DateError;

    /// Parses the short rendering `DD/MM/YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid_format = || DateError::InvalidFormat(trimmed.to_owned());

        let mut parts = trimmed.split(DATE_SEPARATOR);
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid_format());
        };

        let day = Self::parse_component(day).ok_or_else(invalid_format)?;
        let month = Self::parse_component(month).ok_or_else(invalid_format)?;
        let year = Self::parse_component(year).ok_or_else(invalid_format)?;

        Self::new(day, month, year)
    }
}

impl TryFrom<(i32, i32, i32)> for CustomDate {
    type Error = DateError;

    /// Converts from `(day, month, year)`
    fn try_from((day, month, year): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(day, month, year)
    }
}

impl From<CustomDate> for (u8, u8, u16) {
    fn from(date: CustomDate) -> Self {
        date.parts()
    }
}

impl serde::Serialize for CustomDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CustomDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
