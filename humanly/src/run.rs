use chrono::{NaiveDate, Utc};
use humanly_core::{PreciseOptions, SizeOptions, SuppressSet, TimeOptions};

use crate::cli::{Cli, Command, DurationFlags, PreciseArgs, SizeArgs, TimeArgs};
use crate::config::FileConfig;
use crate::input::{date_value, number_value, time_value};
use crate::output::{self, Rendered};
use crate::run_error::RunError;

pub(crate) fn run(cli: Cli) -> Result<(), RunError> {
    let cfg = FileConfig::load(cli.config.as_deref())?;
    let rendered = render(cli.command, &cfg);
    log::debug!("{}({:?}) -> {:?}", rendered.function, rendered.input, rendered.output);
    output::formatter(cli.output)
        .print(&rendered)
        .map_err(RunError::RuntimeError)
}

/// Applies command-line flags over the config file and humanizes the value.
pub(crate) fn render(command: Command, cfg: &FileConfig) -> Rendered {
    let (function, input, output) = match command {
        Command::Time(args) => {
            let opts = time_flags(cfg.time, &args);
            let output = time_value(&args.value).naturaltime(&opts);
            ("naturaltime", args.value, output)
        }
        Command::Delta(args) => {
            let opts = duration_flags(cfg.time, &args.duration);
            let output = time_value(&args.value).naturaldelta(&opts);
            ("naturaldelta", args.value, output)
        }
        Command::Precise(args) => {
            let opts = precise_flags(cfg.precise, &args);
            let output = time_value(&args.value).precisedelta(&opts);
            ("precisedelta", args.value, output)
        }
        Command::Size(args) => {
            let opts = size_flags(cfg.size, &args);
            let output = number_value(&args.value).naturalsize(&opts);
            ("naturalsize", args.value, output)
        }
        Command::Word(args) => {
            let format = args.format.unwrap_or(cfg.word.format);
            let output = number_value(&args.value).intword(&format);
            ("intword", args.value, output)
        }
        Command::Comma(args) => {
            let output = number_value(&args.value).intcomma(args.ndigits);
            ("intcomma", args.value, output)
        }
        Command::Ordinal(args) => {
            let output = number_value(&args.value).ordinal();
            ("ordinal", args.value, output)
        }
        Command::Apnumber(args) => {
            let output = number_value(&args.value).apnumber();
            ("apnumber", args.value, output)
        }
        Command::Fractional(args) => {
            let output = number_value(&args.value).fractional();
            ("fractional", args.value, output)
        }
        Command::Scientific(args) => {
            let output = number_value(&args.value).scientific(args.precision);
            ("scientific", args.value, output)
        }
        Command::Day(args) => {
            let today = args.today.unwrap_or_else(utc_today);
            let output = date_value(&args.value).naturalday(today, &args.format);
            ("naturalday", args.value, output)
        }
        Command::Date(args) => {
            let today = args.today.unwrap_or_else(utc_today);
            let output = date_value(&args.value).naturaldate(today);
            ("naturaldate", args.value, output)
        }
    };

    Rendered {
        function,
        input,
        output,
    }
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

fn duration_flags(mut opts: TimeOptions, flags: &DurationFlags) -> TimeOptions {
    if flags.no_months {
        opts.months = false;
    }
    if let Some(unit) = flags.minimum_unit {
        opts.minimum_unit = unit;
    }
    opts
}

fn time_flags(base: TimeOptions, args: &TimeArgs) -> TimeOptions {
    let mut opts = duration_flags(base, &args.duration);
    if args.future {
        opts.future = true;
    }
    if let Some(now) = args.now {
        opts.when = Some(now);
    }
    opts
}

fn precise_flags(mut opts: PreciseOptions, args: &PreciseArgs) -> PreciseOptions {
    if let Some(unit) = args.minimum_unit {
        opts.minimum_unit = unit;
    }
    if !args.suppress.is_empty() {
        opts.suppress = args.suppress.iter().copied().collect::<SuppressSet>();
    }
    if let Some(format) = args.format {
        opts.format = format;
    }
    opts
}

fn size_flags(mut opts: SizeOptions, args: &SizeArgs) -> SizeOptions {
    opts.binary |= args.binary;
    opts.gnu |= args.gnu;
    if let Some(format) = args.format {
        opts.format = format;
    }
    opts
}
