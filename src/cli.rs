use clap::Parser;

/// Builds a date, shifts it by an offset, and prints both renderings.
#[derive(Debug, Parser)]
#[command(
    name = "custom-date",
    version,
    about = "Validated calendar dates with day arithmetic"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Day of the month of the starting date.
    #[arg(short, long, default_value_t = 7, allow_negative_numbers = true)]
    pub day: i32,

    /// Month (1-12) of the starting date.
    #[arg(short, long, default_value_t = 12, allow_negative_numbers = true)]
    pub month: i32,

    /// Year of the starting date.
    #[arg(short, long, default_value_t = 2022, allow_negative_numbers = true)]
    pub year: i32,

    /// Number of days to add; negative values go backwards.
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    pub offset: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["custom-date"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!((cli.day, cli.month, cli.year), (7, 12, 2022));
        assert_eq!(cli.offset, 5);
    }

    #[test]
    fn cli_negative_offset_and_verbosity() {
        let cli = Cli::try_parse_from([
            "custom-date",
            "-vv",
            "--day",
            "1",
            "--month",
            "3",
            "--year",
            "2024",
            "--offset",
            "-1",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!((cli.day, cli.month, cli.year), (1, 3, 2024));
        assert_eq!(cli.offset, -1);
    }

    #[test]
    fn cli_rejects_non_numeric_day() {
        assert!(Cli::try_parse_from(["custom-date", "--day", "seventh"]).is_err());
    }
}
