use std::fmt::Display;

use crate::format::{FloatFormat, group_thousands};
use crate::scale::{Label, Ladder, Rung, scale};

const POWERS: [Rung; 4] = [
    Rung::new(1e3, Label::fixed("thousand")),
    Rung::new(1e6, Label::fixed("million")),
    Rung::new(1e9, Label::fixed("billion")),
    Rung::new(1e12, Label::fixed("trillion")),
];

/// Past the trillions there is no word form; such values print as plain digits.
const NO_WORD_FROM: f64 = 1e15;

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const MAX_DENOMINATOR: i128 = 1_000;

/// Large integer in words: `1_000_000` -> "1.0 million".
///
/// Values under a thousand, and from 10^15 up, print as plain digits.
#[must_use]
pub fn intword(value: impl Into<i128>, format: &FloatFormat) -> String {
    let value: i128 = value.into();
    let sign = if value < 0 { "-" } else { "" };
    let ladder = Ladder::new(Label::fixed(""), &POWERS).with_ceiling(NO_WORD_FROM);
    let scaled = scale(value.unsigned_abs() as f64, &ladder);

    if scaled.is_base() {
        return value.to_string();
    }
    format!(
        "{sign}{} {}",
        format.render(scaled.quantity),
        scaled.label.plural
    )
}

/// Digit grouping for anything that displays as a decimal number: `1234567` -> "1,234,567".
#[must_use]
pub fn intcomma(value: impl Display) -> String {
    group_thousands(&value.to_string())
}

/// Rounds to `ndigits` fractional digits, then groups: `(1234.5678, 2)` -> "1,234.57".
#[must_use]
pub fn intcomma_float(value: f64, ndigits: u32) -> String {
    if ndigits == 0 || !value.is_finite() {
        return intcomma(value);
    }
    let factor = 10f64.powi(i32::try_from(ndigits).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return intcomma(value);
    }
    intcomma(scaled.round() / factor)
}

/// `1` -> "1st", `12` -> "12th", `23` -> "23rd".
#[must_use]
pub fn ordinal(value: i64) -> String {
    let suffix = if (10..=20).contains(&value.rem_euclid(100)) {
        "th"
    } else {
        match value.rem_euclid(10) {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{value}{suffix}")
}

/// Digits 0-9 as words; anything else as digits.
#[must_use]
pub fn apnumber(value: i64) -> String {
    usize::try_from(value)
        .ok()
        .and_then(|idx| DIGIT_WORDS.get(idx))
        .map_or_else(|| value.to_string(), |word| (*word).to_string())
}

/// Closest fraction with a denominator of at most 1000: `0.5` -> "1/2", `1.5` -> "1 1/2".
///
/// Only positive improper fractions become mixed numbers; negatives stay improper
/// (`-1.25` -> "-5/4").
#[must_use]
pub fn fractional(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == value.trunc() {
        return whole_number(value);
    }

    let (numerator, denominator) = limit_denominator(value.abs());
    if numerator == 0 {
        return "0/1".to_string();
    }
    if value < 0.0 {
        return format!("-{numerator}/{denominator}");
    }
    if numerator <= denominator {
        return format!("{numerator}/{denominator}");
    }

    let whole = numerator / denominator;
    match numerator % denominator {
        0 => whole.to_string(),
        remainder => format!("{whole} {remainder}/{denominator}"),
    }
}

/// Scientific notation with a superscript exponent: `500` -> "5.00 x 10²".
///
/// A precision of zero truncates the mantissa.
#[must_use]
pub fn scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{} x 10⁰", FloatFormat::with_precision(precision).render(0.0));
    }

    let exponent = value.abs().log10().floor() as i32;
    let mantissa = value / 10f64.powi(exponent);
    let exponent: String = exponent.to_string().chars().map(superscript).collect();

    format!(
        "{} x 10{exponent}",
        FloatFormat::with_precision(precision).render(mantissa)
    )
}

fn superscript(ch: char) -> char {
    match ch {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '-' => '⁻',
        other => other,
    }
}

fn whole_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value:.0}")
    }
}

/// Exact `numerator / denominator` of a finite, positive float, or `None` when the
/// denominator would not fit.
fn exact_ratio(value: f64) -> Option<(i128, i128)> {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mut mantissa, mut exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), biased - 1075)
    };
    while exponent < 0 && mantissa % 2 == 0 {
        mantissa /= 2;
        exponent += 1;
    }

    if exponent >= 0 {
        let shifted = i128::from(mantissa).checked_shl(exponent as u32)?;
        return Some((shifted, 1));
    }
    if -exponent > 120 {
        return None;
    }
    Some((i128::from(mantissa), 1_i128 << -exponent))
}

/// Best rational approximation with a bounded denominator (continued fractions).
fn limit_denominator(value: f64) -> (i128, i128) {
    let Some((num, den)) = exact_ratio(value) else {
        return (0, 1);
    };
    if den <= MAX_DENOMINATOR {
        return (num, den);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0_i128, 1_i128, 1_i128, 0_i128);
    let (mut n, mut d) = (num, den);
    loop {
        let a = n / d;
        let q2 = q0.saturating_add(a.saturating_mul(q1));
        if q2 > MAX_DENOMINATOR {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (n, d) = (d, n - a * d);
        if d == 0 {
            break;
        }
    }

    let k = (MAX_DENOMINATOR - q0) / q1;
    let lower = (p0 + k * p1, q0 + k * q1);
    let upper = (p1, q1);
    let distance = |(p, q): (i128, i128)| (p as f64 / q as f64 - value).abs();
    if distance(upper) <= distance(lower) {
        upper
    } else {
        lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: i128) -> String {
        intword(value, &FloatFormat::ONE_DECIMAL)
    }

    #[test]
    fn intword_ladder() {
        assert_eq!(word(999), "999");
        assert_eq!(word(1_000), "1.0 thousand");
        assert_eq!(word(1_000_000), "1.0 million");
        assert_eq!(word(1_500_000), "1.5 million");
        assert_eq!(word(2_300_000_000), "2.3 billion");
        assert_eq!(word(7_000_000_000_000), "7.0 trillion");
        assert_eq!(word(999_000_000_000_000), "999.0 trillion");
    }

    #[test]
    fn intword_plain_digits_outside_the_ladder() {
        assert_eq!(word(0), "0");
        assert_eq!(word(-999), "-999");
        assert_eq!(word(1_000_000_000_000_000), "1000000000000000");
        assert_eq!(word(-5_000_000_000_000_000), "-5000000000000000");
    }

    #[test]
    fn intword_sign_and_precision() {
        assert_eq!(word(-1_200_000), "-1.2 million");
        assert_eq!(intword(1_900_000_i64, &FloatFormat::INTEGER), "1 million");
        assert_eq!(
            intword(1_234_567_u32, &FloatFormat::with_precision(3)),
            "1.235 million"
        );
    }

    #[test]
    fn intcomma_groups_digits() {
        assert_eq!(intcomma(100), "100");
        assert_eq!(intcomma(1_000), "1,000");
        assert_eq!(intcomma(-1_234_567), "-1,234,567");
        assert_eq!(intcomma(1_234.5), "1,234.5");
        assert_eq!(intcomma("10123"), "10,123");
        assert_eq!(intcomma_float(1_234.5678, 2), "1,234.57");
        assert_eq!(intcomma_float(14_308.4, 1), "14,308.4");
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (0, "0th"),
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (20, "20th"),
            (21, "21st"),
            (101, "101st"),
            (111, "111th"),
            (1_002, "1002nd"),
        ];
        for (value, expected) in cases {
            assert_eq!(ordinal(value), expected);
        }
    }

    #[test]
    fn apnumber_words() {
        assert_eq!(apnumber(0), "zero");
        assert_eq!(apnumber(4), "four");
        assert_eq!(apnumber(9), "nine");
        assert_eq!(apnumber(10), "10");
        assert_eq!(apnumber(-1), "-1");
    }

    #[test]
    fn fractional_forms() {
        assert_eq!(fractional(0.5), "1/2");
        assert_eq!(fractional(0.3), "3/10");
        assert_eq!(fractional(1.5), "1 1/2");
        assert_eq!(fractional(1.0 / 3.0), "1/3");
        assert_eq!(fractional(2.0), "2");
        assert_eq!(fractional(-1.25), "-5/4");
        assert_eq!(fractional(-0.75), "-3/4");
        assert_eq!(fractional(std::f64::consts::PI), "3 16/113");
        assert_eq!(fractional(0.00001), "0/1");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(scientific(500.0, 2), "5.00 x 10²");
        assert_eq!(scientific(0.3, 2), "3.00 x 10⁻¹");
        assert_eq!(scientific(-1_234_567.0, 3), "-1.235 x 10⁶");
        assert_eq!(scientific(5_781.0, 0), "5 x 10³");
        assert_eq!(scientific(0.0, 2), "0.00 x 10⁰");
        assert_eq!(scientific(1e100, 1), "1.0 x 10¹⁰⁰");
    }

    #[test]
    fn huge_precisions_do_not_panic() {
        let fmt = FloatFormat::with_precision(70_000);
        assert!(intword(1_500_000_i64, &fmt).starts_with("1.5000"));
        assert!(scientific(500.0, 70_000).starts_with("5.000"));
        assert!(scientific(0.0, 70_000).ends_with(" x 10⁰"));
        assert_eq!(intcomma_float(1_234.5, u32::MAX), "1,234.5");
        assert_eq!(intcomma_float(1e300, 20), intcomma(1e300));
    }
}
