//! Defensive parsing of individual raw fields. Nothing here fails; bad data becomes `Malformed`.

use crate::models::{Diagnostics, RawValue, Section};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Outcome of parsing one field.
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed<T> {
    Value(T),
    /// Missing, null or blank.
    Absent,
    /// Present but not parseable; carries the raw text for diagnostics.
    Malformed(String),
}

impl<T> Parsed<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Parsed::Value(v) => Some(v),
            Parsed::Absent | Parsed::Malformed(_) => None,
        }
    }

    /// Like [`Parsed::value`], but records a warning for malformed input.
    pub fn report(self, diagnostics: &mut Diagnostics, section: Section, field: &str) -> Option<T> {
        match self {
            Parsed::Value(v) => Some(v),
            Parsed::Absent => None,
            Parsed::Malformed(raw) => {
                diagnostics.field(section, field, raw);
                None
            }
        }
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Non-negative integer. Numbers are truncated; strings must start with digits (`"12 "`, `"12a"`).
pub fn parse_uint(value: Option<&RawValue>) -> Parsed<u32> {
    match value {
        None => Parsed::Absent,
        Some(RawValue::Number(n)) => {
            if n.is_finite() && *n >= 0.0 && *n <= f64::from(u32::MAX) {
                Parsed::Value(n.trunc() as u32)
            } else {
                Parsed::Malformed(n.to_string())
            }
        }
        Some(RawValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Parsed::Absent;
            }
            let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
            match digits.parse::<u32>() {
                Ok(n) => Parsed::Value(n),
                Err(_) => Parsed::Malformed(s.clone()),
            }
        }
        Some(RawValue::Other(v)) => other(v),
    }
}

/// Decimal number; accepts `,` as decimal separator.
pub fn parse_decimal(value: Option<&RawValue>) -> Parsed<f64> {
    match value {
        None => Parsed::Absent,
        Some(RawValue::Number(n)) if n.is_finite() => Parsed::Value(*n),
        Some(RawValue::Number(n)) => Parsed::Malformed(n.to_string()),
        Some(RawValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Parsed::Absent;
            }
            match trimmed.replace(',', ".").parse::<f64>() {
                Ok(n) if n.is_finite() => Parsed::Value(n),
                _ => Parsed::Malformed(s.clone()),
            }
        }
        Some(RawValue::Other(v)) => other(v),
    }
}

/// Calendar date, time of day dropped. Numbers are milliseconds since the Unix epoch.
pub fn parse_date(value: Option<&RawValue>) -> Parsed<NaiveDate> {
    match value {
        None => Parsed::Absent,
        Some(RawValue::Number(ms)) => match DateTime::from_timestamp_millis(*ms as i64) {
            Some(dt) if ms.is_finite() => Parsed::Value(dt.date_naive()),
            _ => Parsed::Malformed(ms.to_string()),
        },
        Some(RawValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Parsed::Absent;
            }
            parse_date_text(trimmed).map_or_else(|| Parsed::Malformed(s.clone()), Parsed::Value)
        }
        Some(RawValue::Other(v)) => other(v),
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn other<T>(v: &serde_json::Value) -> Parsed<T> {
    if v.is_null() {
        Parsed::Absent
    } else {
        Parsed::Malformed(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.to_string())
    }

    #[test]
    fn uint_accepts_numbers_and_leading_digits() {
        assert_eq!(parse_uint(Some(&RawValue::Number(1850.0))), Parsed::Value(1850));
        assert_eq!(parse_uint(Some(&RawValue::Number(12.7))), Parsed::Value(12));
        assert_eq!(parse_uint(Some(&text(" 12 "))), Parsed::Value(12));
        assert_eq!(parse_uint(Some(&text("7a"))), Parsed::Value(7));
    }

    #[test]
    fn uint_absent_and_malformed() {
        assert_eq!(parse_uint(None), Parsed::Absent);
        assert_eq!(parse_uint(Some(&text("  "))), Parsed::Absent);
        assert_eq!(parse_uint(Some(&RawValue::Other(serde_json::Value::Null))), Parsed::Absent);
        assert_eq!(parse_uint(Some(&text("abc"))), Parsed::Malformed("abc".to_string()));
        assert!(matches!(parse_uint(Some(&text("-5"))), Parsed::Malformed(_)));
        assert!(matches!(parse_uint(Some(&RawValue::Number(-1.0))), Parsed::Malformed(_)));
    }

    #[test]
    fn decimal_accepts_comma_separator() {
        assert_eq!(parse_decimal(Some(&text("3,5"))), Parsed::Value(3.5));
        assert_eq!(parse_decimal(Some(&text("4.5"))), Parsed::Value(4.5));
        assert_eq!(parse_decimal(Some(&RawValue::Number(2.0))), Parsed::Value(2.0));
        assert!(matches!(parse_decimal(Some(&text("n/a"))), Parsed::Malformed(_)));
    }

    #[test]
    fn date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        for s in [
            "2024-05-17",
            "17.05.2024",
            "05/17/2024",
            "2024-05-17 09:30:00",
            "2024-05-17T09:30:00Z",
        ] {
            assert_eq!(parse_date(Some(&text(s))), Parsed::Value(expected), "{s}");
        }
        // 2024-05-17T00:00:00Z
        assert_eq!(
            parse_date(Some(&RawValue::Number(1_715_904_000_000.0))),
            Parsed::Value(expected)
        );
    }

    #[test]
    fn rfc3339_is_normalized_to_utc() {
        let parsed = parse_date(Some(&text("2024-05-17T01:00:00+02:00")));
        assert_eq!(parsed, Parsed::Value(NaiveDate::from_ymd_opt(2024, 5, 16).unwrap()));
    }

    #[test]
    fn report_records_only_malformed() {
        let mut diagnostics = Diagnostics::default();
        assert_eq!(Parsed::<u32>::Absent.report(&mut diagnostics, Section::Players, "2003"), None);
        assert!(diagnostics.is_empty());
        assert_eq!(
            Parsed::<u32>::Malformed("x".into()).report(&mut diagnostics, Section::Players, "2003"),
            None
        );
        assert_eq!(diagnostics.into_warnings().len(), 1);
    }
}
