use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_ERA, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_ORDINAL, MAX_YEAR, MIN_ORDINAL, MONTH_NAMES,
    ORDINAL_EPOCH_SHIFT, YEARS_PER_ERA,
};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, returning `None` if the value is 0 or > `MAX_YEAR`.
    pub const fn new(value: u16) -> Option<Self> {
        match NonZeroU16::new(value) {
            Some(non_zero) if value <= MAX_YEAR => Some(Self(non_zero)),
            _ => None,
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a February 29
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, returning `None` if the value is 0 or > `MAX_MONTH`.
    pub const fn new(value: u8) -> Option<Self> {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Some(Self(non_zero)),
            _ => None,
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full English name of the month, e.g. "December"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.get() as usize]
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for the year and month it was created with
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, returning `None` if the value is 0 or past the end of
    /// the given month.
    pub const fn new(value: u8, year: Year, month: Month) -> Option<Self> {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= days_in_month(year, month) => {
                Some(Self(non_zero))
            }
            _ => None,
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, leap-year aware
pub const fn days_in_month(year: Year, month: Month) -> u8 {
    if month.get() == FEBRUARY && year.is_leap() {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Number of days between 01/01/0001 and the given date.
///
/// The year is shifted to start on March 1st so the leap day is the last day
/// of the shifted year, then counted in whole 400-year eras.
pub(crate) const fn to_ordinal(year: Year, month: Month, day: Day) -> i64 {
    let month = month.get() as i64;
    let y = if month <= FEBRUARY as i64 {
        year.get() as i64 - 1
    } else {
        year.get() as i64
    };
    let era = y.div_euclid(YEARS_PER_ERA);
    let year_of_era = y - era * YEARS_PER_ERA;
    let shifted_month = if month > FEBRUARY as i64 {
        month - 3
    } else {
        month + 9
    };
    let day_of_year = (153 * shifted_month + 2) / 5 + day.get() as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - ORDINAL_EPOCH_SHIFT
}

/// Inverse of [`to_ordinal`].
/// Returns `None` outside `MIN_ORDINAL..=MAX_ORDINAL`.
pub(crate) fn from_ordinal(ordinal: i64) -> Option<(Year, Month, Day)> {
    if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
        return None;
    }

    let z = ordinal + ORDINAL_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA; // [0, 146096]
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153; // [0, 11]
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * YEARS_PER_ERA + i64::from(month <= i64::from(FEBRUARY));

    let year = Year::new(u16::try_from(year).ok()?)?;
    let month = Month::new(u8::try_from(month).ok()?)?;
    let day = Day::new(u8::try_from(day).ok()?, year, month)?;
    Some((year, month, day))
}
