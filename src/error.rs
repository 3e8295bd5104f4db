use crate::CustomDate;

/// Error type for all fallible `CustomDate` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Day, month and year do not form a real calendar date.
    #[error("Invalid date: {day}/{month}/{year}")]
    InvalidDate { day: i32, month: i32, year: i32 },

    /// Day arithmetic left the representable range (01/01/0001..=31/12/9999).
    #[error("Date out of range: {date} {days:+} days")]
    OutOfRange { date: CustomDate, days: i64 },

    /// Text is not in `DD/MM/YYYY` form.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = DateError::InvalidDate {
            day: 31,
            month: 4,
            year: 2023,
        };
        assert_eq!(err.to_string(), "Invalid date: 31/4/2023");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = DateError::OutOfRange {
            date: CustomDate::new(31, 12, 9999).unwrap(),
            days: 1,
        };
        assert_eq!(err.to_string(), "Date out of range: 31/12/9999 +1 days");

        let err = DateError::OutOfRange {
            date: CustomDate::new(1, 1, 1).unwrap(),
            days: -1,
        };
        assert_eq!(err.to_string(), "Date out of range: 01/01/0001 -1 days");
    }

    #[test]
    fn test_invalid_format_message() {
        let err = DateError::InvalidFormat("2022-12-07".to_owned());
        assert_eq!(err.to_string(), "Invalid date format: 2022-12-07");
    }

    #[test]
    fn test_error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DateError>();
    }
}
