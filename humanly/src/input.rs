use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use humanly_core::Value;

const INSTANT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// RFC 3339 (converted to UTC) or a naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]`.
pub(crate) fn parse_instant(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    INSTANT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// `humantime` durations ("90m", "2days 3633s") with an optional leading `-`.
pub(crate) fn parse_signed_duration(input: &str) -> Option<TimeDelta> {
    let s = input.trim();
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let delta = humantime::parse_duration(unsigned)
        .ok()
        .and_then(|d| TimeDelta::from_std(d).ok())?;
    Some(if negative { -delta } else { delta })
}

/// Instants, then durations, then plain seconds.
pub(crate) fn time_value(raw: &str) -> Value {
    if let Some(instant) = parse_instant(raw) {
        return Value::Instant(instant);
    }
    if let Some(delta) = parse_signed_duration(raw) {
        return Value::Delta(delta);
    }
    if let Some(delta) = raw
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Value::F64(secs).to_delta().ok())
    {
        return Value::Delta(delta);
    }
    Value::from(raw)
}

pub(crate) fn number_value(raw: &str) -> Value {
    let s = raw.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Value::I64(v);
    }
    if let Ok(v) = s.parse::<u64>() {
        return Value::U64(v);
    }
    // Integers wider than 64 bits stay textual so no digits are lost.
    if s.parse::<i128>().is_ok() {
        return Value::from(s);
    }
    match s.parse::<f64>() {
        Ok(v) => Value::F64(v),
        Err(_) => Value::from(raw),
    }
}

pub(crate) fn date_value(raw: &str) -> Value {
    if let Ok(date) = raw.trim().parse::<NaiveDate>() {
        return Value::Date(date);
    }
    match parse_instant(raw) {
        Some(instant) => Value::Instant(instant),
        None => Value::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instants_in_common_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 10).and_then(|d| d.and_hms_opt(12, 0, 0));
        assert_eq!(parse_instant("2024-03-10T12:00:00"), expected);
        assert_eq!(parse_instant("2024-03-10 12:00:00"), expected);
        assert_eq!(parse_instant("2024-03-10T14:00:00+02:00"), expected);
        assert_eq!(parse_instant("2024-03-10T12:00:00Z"), expected);
        assert_eq!(parse_instant("yesterday"), None);
    }

    #[test]
    fn signed_durations() {
        assert_eq!(parse_signed_duration("90m"), Some(TimeDelta::minutes(90)));
        assert_eq!(parse_signed_duration("-2h"), Some(TimeDelta::hours(-2)));
        assert_eq!(parse_signed_duration("+1s"), Some(TimeDelta::seconds(1)));
        assert_eq!(
            parse_signed_duration("2days 3633s"),
            Some(TimeDelta::days(2) + TimeDelta::seconds(3_633))
        );
        assert_eq!(parse_signed_duration("12"), None);
    }

    #[test]
    fn time_values() {
        assert!(matches!(time_value("2024-03-10T12:00:00"), Value::Instant(_)));
        assert_eq!(time_value("1500ms"), Value::Delta(TimeDelta::milliseconds(1_500)));
        assert_eq!(time_value("-1.5"), Value::Delta(TimeDelta::milliseconds(-1_500)));
        assert_eq!(time_value("later"), Value::from("later"));
    }

    #[test]
    fn number_values() {
        assert_eq!(number_value("42"), Value::I64(42));
        assert_eq!(number_value("-7"), Value::I64(-7));
        assert_eq!(number_value("18446744073709551615"), Value::U64(u64::MAX));
        assert_eq!(
            number_value("100000000000000000000000"),
            Value::from("100000000000000000000000")
        );
        assert_eq!(number_value("2.5"), Value::F64(2.5));
        assert_eq!(number_value("many"), Value::from("many"));
    }

    #[test]
    fn date_values() {
        assert!(matches!(date_value("2024-03-01"), Value::Date(_)));
        assert!(matches!(date_value("2024-03-01 08:00:00"), Value::Instant(_)));
        assert_eq!(date_value("soon"), Value::from("soon"));
    }
}
