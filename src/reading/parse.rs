//! Parsing of a single `<resource type> <yyyy.MM.dd> <value>` line.

use std::str::FromStr;

use chrono::NaiveDate;

use super::{MeterReading, ParseError};

const FIELD_COUNT: usize = 3;

/// Parses one line of the readings file.
///
/// Fields are separated by any run of whitespace. The resource type may be
/// wrapped in double quotes, the date must be exactly `yyyy.MM.dd` and the
/// value uses `.` as the decimal separator regardless of the host locale.
/// Field syntax is checked before the reading's own invariants.
pub fn parse_line(line: &str) -> Result<MeterReading, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() != FIELD_COUNT {
        return Err(ParseError::MalformedLine {
            fields: fields.len(),
        });
    }

    let resource_type = fields[0].trim_matches('"');
    let date = parse_date(fields[1]).ok_or_else(|| ParseError::InvalidDate(fields[1].into()))?;
    let value = parse_value(fields[2]).ok_or_else(|| ParseError::InvalidValue(fields[2].into()))?;

    Ok(MeterReading::new(resource_type, date, value)?)
}

impl FromStr for MeterReading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

/// Strict `yyyy.MM.dd`: zero padded, dot separated, and a real calendar day.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'.',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;

    if year == 0 {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_value(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

// -- Tests ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::reading::ValidationError;

    #[test]
    fn should_parse_quoted_line() {
        let reading = parse_line(r#""Electricity" 2024.01.15 123.45"#).unwrap();

        assert_eq!(reading.resource_type(), "Electricity");
        assert_eq!(reading.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(reading.value(), 123.45);
        assert_eq!(
            reading.to_string(),
            "Resource type: Electricity, Date: 2024.01.15, Value: 123.45"
        );
    }

    #[test]
    fn should_parse_unquoted_line() {
        let reading = parse_line("Water 2023.12.31 7").unwrap();

        assert_eq!(reading.resource_type(), "Water");
        assert_eq!(reading.value(), 7.0);
    }

    #[test]
    fn should_collapse_whitespace() {
        let reading: MeterReading = "  Gas \t  2024.02.29    0.5  ".parse().unwrap();

        assert_eq!(
            reading.to_string(),
            "Resource type: Gas, Date: 2024.02.29, Value: 0.5"
        );
    }

    #[test]
    fn should_reject_wrong_field_count() {
        assert_eq!(
            parse_line("Gas 2024.01.01"),
            Err(ParseError::MalformedLine { fields: 2 })
        );
        assert_eq!(
            parse_line(r#""Hot water" 2024.01.01 3"#),
            Err(ParseError::MalformedLine { fields: 4 })
        );
        assert_eq!(parse_line(""), Err(ParseError::MalformedLine { fields: 0 }));
    }

    #[test]
    fn should_reject_invalid_dates() {
        for date in [
            "2024.13.01",
            "2024.02.30",
            "2023.02.29",
            "2024-01-15",
            "2024.1.15",
            "24.01.15",
            "2024.01.015",
            "20a4.01.15",
            "0000.01.01",
            "+024.01.15",
        ] {
            let line = format!("Water {date} 10");
            assert_eq!(
                parse_line(&line),
                Err(ParseError::InvalidDate(date.to_string())),
                "{line}"
            );
        }
    }

    #[test]
    fn should_reject_invalid_values() {
        for value in ["abc", "1,5", "12.3.4", "1e", "--1", "0x10"] {
            let line = format!("Water 2024.01.01 {value}");
            assert_eq!(
                parse_line(&line),
                Err(ParseError::InvalidValue(value.to_string())),
                "{line}"
            );
        }
    }

    #[test]
    fn should_accept_sign_and_exponent() {
        assert_eq!(parse_line("Gas 2024.01.01 +2.5").unwrap().value(), 2.5);
        assert_eq!(parse_line("Gas 2024.01.01 1.5e2").unwrap().value(), 150.0);
        assert_eq!(parse_line("Gas 2024.01.01 .25").unwrap().value(), 0.25);
    }

    #[test]
    fn should_reject_non_finite_values_after_parsing() {
        for value in ["inf", "-inf", "infinity", "NaN"] {
            let line = format!("Gas 2024.01.01 {value}");
            let err = parse_line(&line).unwrap_err();

            assert_eq!(
                err,
                ParseError::Validation(ValidationError::NonFiniteValue),
                "{line}"
            );
            assert_eq!(err.to_string(), "value must be a finite number");
        }
    }

    #[test]
    fn should_report_negative_value_after_parsing() {
        let err = parse_line("Gas 2024.01.01 -5").unwrap_err();

        assert_eq!(err, ParseError::Validation(ValidationError::NegativeValue));
        assert_eq!(err.to_string(), "value must not be negative");
    }

    #[test]
    fn should_report_blank_resource_type_after_trimming_quotes() {
        let err = parse_line(r#""" 2024.01.01 5"#).unwrap_err();

        assert_eq!(
            err,
            ParseError::Validation(ValidationError::EmptyResourceType)
        );
        assert_eq!(err.to_string(), "resource type must not be empty");
    }

    #[test]
    fn should_check_date_before_value() {
        assert_eq!(
            parse_line("Gas 2024.99.01 abc"),
            Err(ParseError::InvalidDate("2024.99.01".to_string()))
        );
    }

    #[test]
    fn should_check_syntax_before_validation() {
        assert_eq!(
            parse_line(r#""" 2024.01.01 abc"#),
            Err(ParseError::InvalidValue("abc".to_string()))
        );
    }
}
