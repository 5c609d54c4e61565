use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Fixed-point precision used when rendering a scaled quantity.
///
/// Parsed from printf-style specs (`%.1f`, `%.2f`, `%f`, `%d`). A precision of zero
/// truncates toward zero instead of rounding. Precision never exceeds
/// [`FloatFormat::MAX_PRECISION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FloatFormat {
    precision: usize,
}

impl FloatFormat {
    pub const INTEGER: Self = Self::with_precision(0);
    pub const ONE_DECIMAL: Self = Self::with_precision(1);
    pub const TWO_DECIMALS: Self = Self::with_precision(2);

    pub const MAX_PRECISION: usize = 100;

    /// Precisions above [`Self::MAX_PRECISION`] are clamped to it.
    #[must_use]
    pub const fn with_precision(precision: usize) -> Self {
        let precision = if precision > Self::MAX_PRECISION {
            Self::MAX_PRECISION
        } else {
            precision
        };
        Self { precision }
    }

    #[must_use]
    pub const fn precision(self) -> usize {
        self.precision
    }

    #[must_use]
    pub fn render(self, value: f64) -> String {
        if self.precision == 0 {
            let whole = value.trunc();
            if whole == 0.0 {
                return "0".to_string();
            }
            return format!("{whole:.0}");
        }
        format!("{value:.prec$}", prec = self.precision)
    }
}

impl Default for FloatFormat {
    fn default() -> Self {
        Self::ONE_DECIMAL
    }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.precision == 0 {
            f.write_str("%d")
        } else {
            write!(f, "%.{}f", self.precision)
        }
    }
}

impl FromStr for FloatFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFormat(s.to_string());
        let spec = s.trim();
        let spec = spec.strip_prefix('%').unwrap_or(spec);

        match spec {
            "d" | "i" => return Ok(Self::INTEGER),
            "f" => return Ok(Self::with_precision(6)),
            _ => {}
        }

        let digits = spec
            .strip_prefix('.')
            .and_then(|rest| rest.strip_suffix('f'))
            .ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let precision: usize = digits.parse().map_err(|_| invalid())?;
        if precision > Self::MAX_PRECISION {
            return Err(invalid());
        }
        Ok(Self::with_precision(precision))
    }
}

impl TryFrom<String> for FloatFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FloatFormat> for String {
    fn from(value: FloatFormat) -> Self {
        value.to_string()
    }
}

/// Inserts `,` between every group of three digits of the integer part.
///
/// A leading `-` and any fractional part (after the first `.`) are kept as-is.
#[must_use]
pub fn group_thousands(decimal: &str) -> String {
    let (sign, unsigned) = match decimal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", decimal),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(decimal.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
