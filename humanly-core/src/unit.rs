use std::fmt;

use crate::error::Error;

/// Finest unit a duration humanizer may report below one second.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MinimumUnit {
    #[default]
    Seconds,
    Milliseconds,
    Microseconds,
}

impl MinimumUnit {
    #[must_use]
    pub fn allows_milliseconds(self) -> bool {
        matches!(self, Self::Milliseconds | Self::Microseconds)
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        s.trim()
            .parse::<Self>()
            .map_err(|_| Error::UnknownUnit(s.trim().to_string()))
    }
}

/// Units `precisedelta` decomposes into, coarsest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeltaUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl DeltaUnit {
    #[must_use]
    pub fn seconds(self) -> f64 {
        match self {
            Self::Days => 86_400.0,
            Self::Hours => 3_600.0,
            Self::Minutes => 60.0,
            Self::Seconds => 1.0,
        }
    }

    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Days => "day",
            Self::Hours => "hour",
            Self::Minutes => "minute",
            Self::Seconds => "second",
        }
    }

    pub fn parse(s: &str) -> Result<Self, Error> {
        s.trim()
            .parse::<Self>()
            .map_err(|_| Error::UnknownUnit(s.trim().to_string()))
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Units excluded from a `precisedelta` decomposition.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<DeltaUnit>", into = "Vec<DeltaUnit>")]
pub struct SuppressSet(u8);

impl SuppressSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, unit: DeltaUnit) {
        self.0 |= unit.bit();
    }

    #[must_use]
    pub fn with(mut self, unit: DeltaUnit) -> Self {
        self.insert(unit);
        self
    }

    #[must_use]
    pub fn contains(self, unit: DeltaUnit) -> bool {
        self.0 & unit.bit() != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = DeltaUnit> {
        use strum::IntoEnumIterator as _;
        DeltaUnit::iter().filter(move |u| self.contains(*u))
    }
}

impl FromIterator<DeltaUnit> for SuppressSet {
    fn from_iter<I: IntoIterator<Item = DeltaUnit>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<Vec<DeltaUnit>> for SuppressSet {
    fn from(value: Vec<DeltaUnit>) -> Self {
        value.into_iter().collect()
    }
}

impl From<SuppressSet> for Vec<DeltaUnit> {
    fn from(value: SuppressSet) -> Self {
        value.iter().collect()
    }
}

impl fmt::Debug for SuppressSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
