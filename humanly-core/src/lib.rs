//! Turns durations, byte counts and large integers into short English phrases.
//!
//! Every humanizer is a pure function of its arguments. They share one pattern:
//! pick the coarsest unit on a ladder whose threshold the magnitude clears
//! ([`scale`]), then render the scaled quantity.

pub mod day;
pub mod error;
pub mod format;
pub mod number;
pub mod precise;
pub mod scale;
pub mod size;
pub mod time;
pub mod unit;
pub mod value;

pub use day::{DEFAULT_DAY_FORMAT, naturaldate, naturalday};
pub use error::{Error, Result};
pub use format::{FloatFormat, group_thousands};
pub use number::{apnumber, fractional, intcomma, intcomma_float, intword, ordinal, scientific};
pub use precise::{PreciseOptions, precisedelta};
pub use size::{SizeOptions, naturalsize};
pub use time::{Moment, TimeOptions, naturaldelta, naturaltime};
pub use unit::{DeltaUnit, MinimumUnit, SuppressSet};
pub use value::Value;
