use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use humanly_core::{DeltaUnit, FloatFormat, MinimumUnit};

use crate::input::parse_instant;

fn parse_now(input: &str) -> Result<NaiveDateTime, String> {
    parse_instant(input).ok_or_else(|| {
        format!("invalid instant '{input}' (expected e.g. 2024-03-10T12:00:00 or 2024-03-10 12:00:00)")
    })
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Just the humanized text.
    HumanReadable,
    /// One JSON object per line with the function, input and output.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "humanly",
    author,
    version,
    about = "Turn durations, byte counts and large numbers into readable text",
    long_about = "humanly turns raw numbers and times into short English phrases.\n\nDefaults for each command can be kept in a YAML file passed with `--config` (or HUMANLY_CONFIG); flags given on the command line win over the file.\n\nInputs that a command cannot represent are printed back unchanged.",
    after_help = "Examples:\n  humanly time 2024-03-10T11:00:00 --now 2024-03-10T12:00:00\n  humanly delta 90m\n  humanly precise '2days 3633s'\n  humanly size 1500 --binary\n  humanly word 1200000 --output json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::HumanReadable)]
    pub output: OutputFormat,

    /// YAML file with default options per command
    #[arg(long, global = true, env = "HUMANLY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level (otherwise RUST_LOG decides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Relative time: "3 minutes ago", "an hour from now"
    #[command(
        long_about = "Describe an instant relative to a reference instant, or a duration as time elapsed.\n\nVALUE is an instant (RFC 3339 or YYYY-MM-DD HH:MM:SS, read as UTC), a duration such as 90m or -2h, or a number of seconds."
    )]
    Time(TimeArgs),

    /// Approximate duration without a direction: "2 hours"
    Delta(DeltaArgs),

    /// Exact duration across days, hours, minutes and seconds
    Precise(PreciseArgs),

    /// File size: "1.5 KB", "1.0 KiB", "1.5K"
    Size(SizeArgs),

    /// Large number in words: "1.2 million"
    Word(WordArgs),

    /// Number with thousands separators: "1,234,567"
    Comma(CommaArgs),

    /// Ordinal number: "1st", "22nd"
    Ordinal(ValueArgs),

    /// Digits 0-9 as words
    Apnumber(ValueArgs),

    /// Number as a fraction: "1 1/2"
    Fractional(ValueArgs),

    /// Number in scientific notation: "5.00 x 10²"
    Scientific(ScientificArgs),

    /// "today", "yesterday", "tomorrow" or a formatted date
    Day(DayArgs),

    /// Like `day`, adding the year outside the current one
    Date(DateArgs),
}

#[derive(Debug, Args)]
pub struct ValueArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct DurationFlags {
    /// Count whole days instead of months and years past 4.35 weeks
    #[arg(long)]
    pub no_months: bool,

    /// Finest unit reported below one second
    #[arg(long, value_name = "UNIT")]
    pub minimum_unit: Option<MinimumUnit>,
}

#[derive(Debug, Args)]
pub struct TimeArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Read a bare duration as lying in the future
    #[arg(long)]
    pub future: bool,

    /// Reference instant (defaults to the current UTC time)
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,

    #[command(flatten)]
    pub duration: DurationFlags,
}

#[derive(Debug, Args)]
pub struct DeltaArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    #[command(flatten)]
    pub duration: DurationFlags,
}

#[derive(Debug, Args)]
pub struct PreciseArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Finest unit of the decomposition
    #[arg(long, value_name = "UNIT")]
    pub minimum_unit: Option<MinimumUnit>,

    /// Units to leave out (repeatable or comma-separated: days,hours,minutes,seconds)
    #[arg(long, value_delimiter = ',', value_name = "UNIT")]
    pub suppress: Vec<DeltaUnit>,

    /// Precision of the seconds component (e.g. %.2f, %d)
    #[arg(long)]
    pub format: Option<FloatFormat>,
}

#[derive(Debug, Args)]
pub struct SizeArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Powers of 1024 (KiB, MiB, ...)
    #[arg(long)]
    pub binary: bool,

    /// Single-letter suffixes without a space (1.5K)
    #[arg(long)]
    pub gnu: bool,

    /// Precision of the scaled quantity (e.g. %.1f)
    #[arg(long)]
    pub format: Option<FloatFormat>,
}

#[derive(Debug, Args)]
pub struct WordArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Precision of the scaled quantity (e.g. %.1f)
    #[arg(long)]
    pub format: Option<FloatFormat>,
}

#[derive(Debug, Args)]
pub struct CommaArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Round to this many fractional digits first
    #[arg(long)]
    pub ndigits: Option<u32>,
}

#[derive(Debug, Args)]
pub struct ScientificArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Digits after the decimal point of the mantissa
    #[arg(long, default_value_t = 2)]
    pub precision: usize,
}

#[derive(Debug, Args)]
pub struct DayArgs {
    pub value: String,

    /// Reference date (defaults to the current UTC date)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// strftime pattern for dates other than today/yesterday/tomorrow
    #[arg(long, default_value = humanly_core::DEFAULT_DAY_FORMAT)]
    pub format: String,
}

#[derive(Debug, Args)]
pub struct DateArgs {
    pub value: String,

    /// Reference date (defaults to the current UTC date)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["humanly"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv) {
            Ok(v) => v,
            Err(err) => panic!("failed to parse args: {err}"),
        }
    }

    #[test]
    fn time_accepts_negative_values_and_flags() {
        let cli = parse(&[
            "time",
            "-90m",
            "--future",
            "--no-months",
            "--minimum-unit",
            "milliseconds",
            "--now",
            "2024-03-10 12:00:00",
        ]);
        match cli.command {
            Command::Time(args) => {
                assert_eq!(args.value, "-90m");
                assert!(args.future);
                assert!(args.duration.no_months);
                assert_eq!(args.duration.minimum_unit, Some(MinimumUnit::Milliseconds));
                assert_eq!(args.now, parse_instant("2024-03-10T12:00:00"));
            }
            other => panic!("expected time command, got {other:?}"),
        }
    }

    #[test]
    fn precise_collects_suppressed_units() {
        let cli = parse(&[
            "precise",
            "1d",
            "--suppress",
            "days,minutes",
            "--suppress",
            "seconds",
            "--format",
            "%.3f",
        ]);
        match cli.command {
            Command::Precise(args) => {
                assert_eq!(
                    args.suppress,
                    vec![DeltaUnit::Days, DeltaUnit::Minutes, DeltaUnit::Seconds]
                );
                assert_eq!(args.format, Some(FloatFormat::with_precision(3)));
                assert_eq!(args.minimum_unit, None);
            }
            other => panic!("expected precise command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["size", "1500", "--binary", "--output", "json", "-v"]);
        assert!(matches!(cli.output, OutputFormat::Json));
        assert!(cli.verbose);
        match cli.command {
            Command::Size(args) => {
                assert!(args.binary);
                assert!(!args.gnu);
                assert_eq!(args.format, None);
            }
            other => panic!("expected size command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_flag_values() {
        assert!(Cli::try_parse_from(["humanly", "word", "1", "--format", "%s"]).is_err());
        assert!(Cli::try_parse_from(["humanly", "delta", "1", "--minimum-unit", "weeks"]).is_err());
        assert!(Cli::try_parse_from(["humanly", "time", "1", "--now", "noon"]).is_err());
        assert!(Cli::try_parse_from(["humanly", "precise", "1", "--suppress", "years"]).is_err());
    }

    #[test]
    fn day_defaults() {
        let cli = parse(&["day", "2024-03-01"]);
        match cli.command {
            Command::Day(args) => {
                assert_eq!(args.format, "%b %d");
                assert_eq!(args.today, None);
            }
            other => panic!("expected day command, got {other:?}"),
        }
    }
}
