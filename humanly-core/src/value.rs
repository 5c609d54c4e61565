//! Loosely typed input for callers that do not know up front what they hold
//! (command-line arguments, form fields, script values).
//!
//! Every humanizer here degrades to the plain text of the value when it has no
//! representation for the requested operation.

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::{Error, Result};
use crate::format::{FloatFormat, group_thousands};
use crate::precise::PreciseOptions;
use crate::size::SizeOptions;
use crate::time::{Moment, TimeOptions};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Arc<str>),
    Delta(TimeDelta),
    Instant(NaiveDateTime),
    Date(NaiveDate),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Delta(v) => write!(f, "{v}"),
            Self::Instant(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
        }
    }
}

impl Value {
    pub fn to_moment(&self) -> Result<Moment> {
        match self {
            Self::Delta(v) => Ok(Moment::Delta(*v)),
            Self::Instant(v) => Ok(Moment::Instant(*v)),
            _ => Err(Error::unrepresentable(self, "a duration or instant")),
        }
    }

    /// Durations as-is; numbers (and numeric strings) as seconds.
    pub fn to_delta(&self) -> Result<TimeDelta> {
        if let Self::Delta(v) = self {
            return Ok(*v);
        }
        self.to_float()
            .ok()
            .and_then(delta_from_seconds)
            .ok_or_else(|| Error::unrepresentable(self, "a duration"))
    }

    /// Integers as-is, finite floats truncated, integer strings parsed.
    pub fn to_integer(&self) -> Result<i128> {
        match self {
            Self::I64(v) => Ok(i128::from(*v)),
            Self::U64(v) => Ok(i128::from(*v)),
            Self::F64(v) if v.is_finite() && v.abs() < 1e38 => Ok(v.trunc() as i128),
            Self::String(v) => v
                .trim()
                .parse()
                .map_err(|_| Error::unrepresentable(self, "an integer")),
            _ => Err(Error::unrepresentable(self, "an integer")),
        }
    }

    pub fn to_float(&self) -> Result<f64> {
        match self {
            Self::I64(v) => Ok(*v as f64),
            Self::U64(v) => Ok(*v as f64),
            Self::F64(v) => Ok(*v),
            Self::String(v) => v
                .trim()
                .parse()
                .map_err(|_| Error::unrepresentable(self, "a number")),
            _ => Err(Error::unrepresentable(self, "a number")),
        }
    }

    pub fn to_date(&self) -> Result<NaiveDate> {
        match self {
            Self::Date(v) => Ok(*v),
            Self::Instant(v) => Ok(v.date()),
            _ => Err(Error::unrepresentable(self, "a date")),
        }
    }

    #[must_use]
    pub fn naturaltime(&self, opts: &TimeOptions) -> String {
        self.humanize(self.to_moment(), |m| crate::naturaltime(m, opts))
    }

    #[must_use]
    pub fn naturaldelta(&self, opts: &TimeOptions) -> String {
        self.humanize(self.to_delta(), |d| crate::naturaldelta(d, opts))
    }

    /// Only real durations decompose; numbers are not taken as seconds here.
    #[must_use]
    pub fn precisedelta(&self, opts: &PreciseOptions) -> String {
        let delta = match self {
            Self::Delta(v) => Ok(*v),
            _ => Err(Error::unrepresentable(self, "a duration")),
        };
        self.humanize(delta, |d| crate::precisedelta(d, opts))
    }

    #[must_use]
    pub fn naturalsize(&self, opts: &SizeOptions) -> String {
        self.humanize(self.to_integer(), |v| crate::naturalsize(v, opts))
    }

    #[must_use]
    pub fn intword(&self, format: &FloatFormat) -> String {
        self.humanize(self.to_integer(), |v| crate::intword(v, format))
    }

    /// Groups digits; numeric strings keep their original digits.
    #[must_use]
    pub fn intcomma(&self, ndigits: Option<u32>) -> String {
        match (self, ndigits) {
            (Self::I64(v), _) => crate::intcomma(v),
            (Self::U64(v), _) => crate::intcomma(v),
            (Self::String(v), None) if self.to_float().is_ok() => group_thousands(v.trim()),
            _ => self.humanize(self.to_float(), |v| {
                crate::intcomma_float(v, ndigits.unwrap_or(0))
            }),
        }
    }

    #[must_use]
    pub fn ordinal(&self) -> String {
        self.humanize(self.small_integer(), crate::ordinal)
    }

    #[must_use]
    pub fn apnumber(&self) -> String {
        self.humanize(self.small_integer(), crate::apnumber)
    }

    #[must_use]
    pub fn fractional(&self) -> String {
        self.humanize(self.to_float(), crate::fractional)
    }

    #[must_use]
    pub fn scientific(&self, precision: usize) -> String {
        self.humanize(self.to_float(), |v| crate::scientific(v, precision))
    }

    #[must_use]
    pub fn naturalday(&self, today: NaiveDate, format: &str) -> String {
        self.humanize(self.to_date(), |d| crate::naturalday(d, today, format))
    }

    #[must_use]
    pub fn naturaldate(&self, today: NaiveDate) -> String {
        self.humanize(self.to_date(), |d| crate::naturaldate(d, today))
    }

    fn small_integer(&self) -> Result<i64> {
        self.to_integer()
            .and_then(|v| i64::try_from(v).map_err(|_| Error::unrepresentable(self, "an integer")))
    }

    fn humanize<T>(&self, input: Result<T>, render: impl FnOnce(T) -> String) -> String {
        match input {
            Ok(v) => render(v),
            Err(err) => {
                log::debug!("{err}; returning it unchanged");
                self.to_string()
            }
        }
    }
}

/// `None` for non-finite input or magnitudes past the `TimeDelta` range.
fn delta_from_seconds(seconds: f64) -> Option<TimeDelta> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * 1e9).round();
    TimeDelta::try_seconds(whole as i64)?.checked_add(&TimeDelta::nanoseconds(nanos as i64))
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    i32 => I64,
    i64 => I64,
    u32 => U64,
    u64 => U64,
    f64 => F64,
    &str => String,
    String => String,
    TimeDelta => Delta,
    NaiveDateTime => Instant,
    NaiveDate => Date,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_else(|| panic!("valid date"))
    }

    #[test]
    fn non_time_values_fall_back_to_text() {
        let opts = TimeOptions::default();
        assert_eq!(Value::from("soon").naturaltime(&opts), "soon");
        assert_eq!(Value::from(12_i64).naturaltime(&opts), "12");
        assert_eq!(Value::Null.naturaltime(&opts), "null");
        assert_eq!(Value::from("abc").naturaldelta(&opts), "abc");
        assert_eq!(
            Value::from(3_633_i64).precisedelta(&PreciseOptions::default()),
            "3633"
        );
    }

    #[test]
    fn numbers_are_seconds_for_naturaldelta() {
        let opts = TimeOptions::default();
        assert_eq!(Value::from(2_i64).naturaldelta(&opts), "2 seconds");
        assert_eq!(Value::from(3_600.5).naturaldelta(&opts), "an hour");
        assert_eq!(Value::from("120").naturaldelta(&opts), "2 minutes");
        assert_eq!(Value::from(f64::NAN).naturaldelta(&opts), "NaN");
    }

    #[test]
    fn durations_flow_through() {
        let opts = TimeOptions::default();
        let value = Value::from(TimeDelta::days(2) + TimeDelta::seconds(3_633));
        assert_eq!(value.naturaltime(&opts), "2 days ago");
        assert_eq!(
            value.precisedelta(&PreciseOptions::default()),
            "2 days, 1 hour and 33.00 seconds"
        );
    }

    #[test]
    fn integer_operations_accept_numeric_text() {
        assert_eq!(Value::from("1000000").intword(&FloatFormat::ONE_DECIMAL), "1.0 million");
        assert_eq!(Value::from(1.5e6).intword(&FloatFormat::ONE_DECIMAL), "1.5 million");
        assert_eq!(Value::from("1.5e6").intword(&FloatFormat::ONE_DECIMAL), "1.5e6");
        assert_eq!(
            Value::from(1_500_u64).naturalsize(&SizeOptions::default()),
            "1.5 KB"
        );
        assert_eq!(Value::from("big").naturalsize(&SizeOptions::default()), "big");
        assert_eq!(Value::from("3").ordinal(), "3rd");
        assert_eq!(Value::from(4.7).apnumber(), "four");
        assert_eq!(Value::from(true).ordinal(), "true");
    }

    #[test]
    fn intcomma_variants() {
        assert_eq!(Value::from(1_234_567_i64).intcomma(None), "1,234,567");
        assert_eq!(Value::from("1234.50").intcomma(None), "1,234.50");
        assert_eq!(Value::from(1_234.5678).intcomma(Some(2)), "1,234.57");
        assert_eq!(Value::from("x1234").intcomma(None), "x1234");
    }

    #[test]
    fn float_operations() {
        assert_eq!(Value::from(0.5).fractional(), "1/2");
        assert_eq!(Value::from("500").scientific(2), "5.00 x 10²");
        assert_eq!(Value::from("n/a").fractional(), "n/a");
    }

    #[test]
    fn dates_and_instants() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap_or_else(|| panic!("valid date"));
        assert_eq!(Value::from(date).naturalday(today(), "%b %d"), "yesterday");
        let instant = date
            .and_hms_opt(8, 30, 0)
            .unwrap_or_else(|| panic!("valid time"));
        assert_eq!(Value::from(instant).naturaldate(today()), "yesterday");
        assert_eq!(Value::from(7_i64).naturaldate(today()), "7");
    }

    #[test]
    fn delta_from_seconds_limits() {
        assert_eq!(delta_from_seconds(1.5), Some(TimeDelta::milliseconds(1_500)));
        assert_eq!(delta_from_seconds(-0.25), Some(TimeDelta::milliseconds(-250)));
        assert_eq!(delta_from_seconds(f64::INFINITY), None);
        assert_eq!(delta_from_seconds(1e300), None);
    }
}
