//! Single-unit approximations of a duration: `naturaltime` and `naturaldelta`.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::scale::{Label, Ladder, Rung, scale};
use crate::unit::MinimumUnit;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = 30.5 * DAY;
const YEAR: f64 = 12.0 * MONTH;
/// Weeks stop at 4.35 of them; the next rung takes over from there.
const PAST_WEEKS: f64 = 4.35 * WEEK;

const SECOND: Label = Label::new("second", "seconds");
const MINUTE_RUNG: Rung = Rung::new(MINUTE, Label::new("minute", "minutes"));
const HOUR_RUNG: Rung = Rung::new(HOUR, Label::new("hour", "hours").with_article("an"));
const DAY_LABEL: Label = Label::new("day", "days");
const DAY_RUNG: Rung = Rung::new(DAY, DAY_LABEL);
const WEEK_RUNG: Rung = Rung::new(WEEK, Label::new("week", "weeks"));

const WITH_MONTHS: [Rung; 6] = [
    MINUTE_RUNG,
    HOUR_RUNG,
    DAY_RUNG,
    WEEK_RUNG,
    Rung::with_divisor(PAST_WEEKS, MONTH, Label::new("month", "months")),
    Rung::new(YEAR, Label::new("year", "years")),
];

const WITHOUT_MONTHS: [Rung; 5] = [
    MINUTE_RUNG,
    HOUR_RUNG,
    DAY_RUNG,
    WEEK_RUNG,
    Rung::with_divisor(PAST_WEEKS, DAY, DAY_LABEL),
];

/// A duration, or an instant to be compared against a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    Delta(TimeDelta),
    /// Naive instants are taken to be UTC.
    Instant(NaiveDateTime),
}

impl From<TimeDelta> for Moment {
    fn from(value: TimeDelta) -> Self {
        Self::Delta(value)
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(value: NaiveDateTime) -> Self {
        Self::Instant(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Moment {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Instant(value.naive_utc())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeOptions {
    /// Read a bare duration as lying in the future rather than the past.
    pub future: bool,

    /// Use months and years past 4.35 weeks; otherwise count whole days.
    pub months: bool,

    pub minimum_unit: MinimumUnit,

    /// Reference instant for [`Moment::Instant`] values (UTC). Defaults to the current time.
    #[serde(skip)]
    pub when: Option<NaiveDateTime>,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            future: false,
            months: true,
            minimum_unit: MinimumUnit::Seconds,
            when: None,
        }
    }
}

impl TimeOptions {
    #[must_use]
    pub fn with_future(mut self, future: bool) -> Self {
        self.future = future;
        self
    }

    #[must_use]
    pub fn with_months(mut self, months: bool) -> Self {
        self.months = months;
        self
    }

    #[must_use]
    pub fn with_minimum_unit(mut self, minimum_unit: MinimumUnit) -> Self {
        self.minimum_unit = minimum_unit;
        self
    }

    #[must_use]
    pub fn with_when(mut self, when: NaiveDateTime) -> Self {
        self.when = Some(when);
        self
    }

    fn reference(&self) -> NaiveDateTime {
        self.when.unwrap_or_else(|| Utc::now().naive_utc())
    }
}

/// Relative phrase for a duration or instant: "3 minutes ago", "an hour from now", "now".
///
/// Instants are measured as `when - value`. Bare durations count as past unless
/// `future` is set, in which case they are negated before the direction is chosen.
#[must_use]
pub fn naturaltime(value: impl Into<Moment>, opts: &TimeOptions) -> String {
    let delta = match value.into() {
        Moment::Delta(delta) if opts.future => -delta,
        Moment::Delta(delta) => delta,
        Moment::Instant(instant) => opts.reference().signed_duration_since(instant),
    };
    let suffix = if delta < TimeDelta::zero() {
        "from now"
    } else {
        "ago"
    };

    match approximate(delta.abs(), opts) {
        Some(phrase) => format!("{phrase} {suffix}"),
        None => "now".to_string(),
    }
}

/// Suffix-less phrase for the magnitude of a duration: "2 seconds", "a month".
#[must_use]
pub fn naturaldelta(value: TimeDelta, opts: &TimeOptions) -> String {
    approximate(value.abs(), opts).unwrap_or_else(|| "a moment".to_string())
}

/// Whole seconds plus the fractional part, keeping the sign of `delta`.
pub(crate) fn total_seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

/// `None` when the magnitude is under a second and finer units are not permitted
/// (or round down to zero).
fn approximate(magnitude: TimeDelta, opts: &TimeOptions) -> Option<String> {
    let seconds = total_seconds(magnitude);
    if seconds < 1.0 {
        return sub_second(magnitude, opts.minimum_unit);
    }

    let rungs: &[Rung] = if opts.months {
        &WITH_MONTHS
    } else {
        &WITHOUT_MONTHS
    };
    Some(scale(seconds, &Ladder::new(SECOND, rungs)).word_phrase())
}

fn sub_second(magnitude: TimeDelta, minimum_unit: MinimumUnit) -> Option<String> {
    if !minimum_unit.allows_milliseconds() {
        return None;
    }
    let millis = magnitude.num_milliseconds();
    if millis >= 1 {
        return Some(count_phrase(millis, "millisecond", "milliseconds"));
    }

    // Below a millisecond both granularities report microseconds.
    let micros = magnitude.num_microseconds().unwrap_or(0);
    if micros >= 1 {
        return Some(count_phrase(micros, "microsecond", "microseconds"));
    }

    None
}

fn count_phrase(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}
