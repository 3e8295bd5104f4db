/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Full English month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Years in one full Gregorian cycle, as used by the day-count conversion
pub(crate) const YEARS_PER_ERA: i64 = 400;

/// Ordinal of 01/01/0001, the first representable date
pub const MIN_ORDINAL: i64 = 0;
/// Ordinal of 31/12/9999, the last representable date
pub const MAX_ORDINAL: i64 = 3_652_058;

/// Separator between day, month and year in the short rendering
pub const DATE_SEPARATOR: char = '/';

/// Days from 01/03/0000 (start of the shifted civil year) to 01/01/0001
pub(crate) const ORDINAL_EPOCH_SHIFT: i64 = 306;
