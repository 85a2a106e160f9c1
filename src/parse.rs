use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::chronos::{ChronosTime, Precision, days_in_month};

// Covers ISO dates ("1945-09-02"), Wikidata timestamps with a leading
// sign and zero-padded components ("+1945-09-02T00:00:00Z",
// "-0044-03-15T00:00:00Z"), and bare years. Wikidata encodes unknown
// month/day as 00.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^
        (?P<sign>[+-]?)(?P<year>\d{1,9})
        (?:-(?P<month>\d{1,2})
            (?:-(?P<day>\d{1,2}))?
        )?
        (?:[T\ ](?P<hour>\d{1,2}):(?P<minute>\d{1,2})
            (?::(?P<second>\d{1,2})(?:\.(?P<millis>\d{1,3}))?)?
        Z?)?
        $",
    )
    .unwrap()
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("empty date string")]
    Empty,
    #[error("unrecognized date format: {0:?}")]
    Format(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
    #[error("year zero has no historical meaning")]
    YearZero,
}

fn capture_u32(caps: &regex::Captures<'_>, name: &'static str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

/// Parses a raw date string into a [`ChronosTime`], inferring precision
/// from the deepest populated component. A leading `-` marks a BC year
/// (`-0044` is 44 BC); zero month or day components count as absent.
pub fn parse_chronos_date(input: &str) -> Result<ChronosTime, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    let caps = DATE_RE
        .captures(trimmed)
        .ok_or_else(|| TimeParseError::Format(trimmed.to_string()))?;

    let year_abs: i32 = caps["year"]
        .parse()
        .map_err(|_| TimeParseError::Format(trimmed.to_string()))?;
    if year_abs == 0 {
        return Err(TimeParseError::YearZero);
    }
    let year = if &caps["sign"] == "-" { -year_abs } else { year_abs };

    let month = capture_u32(&caps, "month").filter(|&m| m > 0);
    let day = match month {
        Some(_) => capture_u32(&caps, "day").filter(|&d| d > 0),
        None => None,
    };

    if let Some(m) = month {
        if m > 12 {
            return Err(TimeParseError::OutOfRange {
                field: "month",
                value: m,
            });
        }
    }
    if let (Some(m), Some(d)) = (month, day) {
        let max_day = days_in_month(crate::chronos::astronomical_year(year), m);
        if d > max_day {
            return Err(TimeParseError::OutOfRange {
                field: "day",
                value: d,
            });
        }
    }

    let hour = capture_u32(&caps, "hour");
    let minute = capture_u32(&caps, "minute");
    let second = capture_u32(&caps, "second");
    let millisecond = capture_u32(&caps, "millis");
    for (field, value, max) in [
        ("hour", hour, 23),
        ("minute", minute, 59),
        ("second", second, 59),
    ] {
        if let Some(v) = value {
            if v > max {
                return Err(TimeParseError::OutOfRange { field, value: v });
            }
        }
    }

    // Wikidata pads unknown dates with midnight timestamps, so a
    // time-of-day only refines precision when the date itself is fully
    // specified and the clock is not all zeros.
    let clock_set = hour.unwrap_or(0) + minute.unwrap_or(0) + second.unwrap_or(0) > 0
        || millisecond.unwrap_or(0) > 0;
    let precision = if day.is_some() && clock_set {
        if millisecond.is_some() {
            Precision::Millisecond
        } else if second.is_some() {
            Precision::Second
        } else {
            Precision::Minute
        }
    } else if day.is_some() {
        Precision::Day
    } else if month.is_some() {
        Precision::Month
    } else {
        Precision::Year
    };

    Ok(ChronosTime {
        year,
        month,
        day,
        hour: if clock_set { hour } else { None },
        minute: if clock_set { minute } else { None },
        second: if clock_set { second } else { None },
        millisecond: if clock_set { millisecond } else { None },
        precision,
    })
}
