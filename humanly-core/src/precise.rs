//! Multi-unit decomposition of a duration: `precisedelta`.

use chrono::TimeDelta;

use crate::format::FloatFormat;
use crate::unit::{DeltaUnit, MinimumUnit, SuppressSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreciseOptions {
    pub minimum_unit: MinimumUnit,
    pub suppress: SuppressSet,
    /// Precision of the seconds component, the only one that carries a fraction.
    pub format: FloatFormat,
}

impl Default for PreciseOptions {
    fn default() -> Self {
        Self {
            minimum_unit: MinimumUnit::Seconds,
            suppress: SuppressSet::empty(),
            format: FloatFormat::TWO_DECIMALS,
        }
    }
}

impl PreciseOptions {
    #[must_use]
    pub fn with_minimum_unit(mut self, minimum_unit: MinimumUnit) -> Self {
        self.minimum_unit = minimum_unit;
        self
    }

    #[must_use]
    pub fn with_suppress(mut self, suppress: SuppressSet) -> Self {
        self.suppress = suppress;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: FloatFormat) -> Self {
        self.format = format;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Component {
    pub unit: DeltaUnit,
    pub amount: f64,
}

/// Exact phrase listing days, hours, minutes and seconds:
/// "2 days, 1 hour and 33.00 seconds".
///
/// The sign is discarded. A suppressed unit is neither shown nor subtracted, so its
/// magnitude is counted by the next finer unit that is not suppressed. Suppressing
/// seconds drops whatever is left below a minute.
#[must_use]
pub fn precisedelta(value: TimeDelta, opts: &PreciseOptions) -> String {
    let parts: Vec<String> = decompose(value, opts.suppress)
        .into_iter()
        .map(|c| render(c, opts))
        .collect();

    match parts.as_slice() {
        [] => "0 seconds".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

pub(crate) fn decompose(value: TimeDelta, suppress: SuppressSet) -> Vec<Component> {
    let magnitude = value.abs();
    let mut whole = magnitude.num_seconds().unsigned_abs();
    let nanos = magnitude.subsec_nanos().unsigned_abs();
    let mut components = Vec::with_capacity(4);

    for unit in [DeltaUnit::Days, DeltaUnit::Hours, DeltaUnit::Minutes] {
        if suppress.contains(unit) {
            continue;
        }
        let size = unit.seconds() as u64;
        let count = whole / size;
        if count > 0 {
            components.push(Component {
                unit,
                amount: count as f64,
            });
            whole -= count * size;
        }
    }

    if !suppress.contains(DeltaUnit::Seconds) && (whole > 0 || nanos > 0 || components.is_empty())
    {
        components.push(Component {
            unit: DeltaUnit::Seconds,
            amount: whole as f64 + f64::from(nanos) / 1e9,
        });
    }

    components
}

fn render(component: Component, opts: &PreciseOptions) -> String {
    let Component { unit, amount } = component;
    if unit != DeltaUnit::Seconds {
        let count = amount as u64;
        return if count == 1 {
            format!("1 {}", unit.singular())
        } else {
            format!("{count} {unit}")
        };
    }

    let rendered = opts.format.render(amount);
    // Sub-second minimum units always read as a plural quantity of seconds.
    if rendered == "1" && opts.minimum_unit == MinimumUnit::Seconds {
        format!("{rendered} second")
    } else {
        format!("{rendered} seconds")
    }
}
