//! Literal conversions between text tokens and typed field values.
//!
//! The text codec hands every non-null token to one of these parsers.
//! Integers and doubles go straight through the standard library; booleans
//! and timestamps have their own grammar, defined here.

use crate::types::{days_in_month, Timestamp};

/// Parses a boolean literal. Total: unrecognized input is `false`, never an
/// error.
///
/// True spellings are `true`, `t`, `on`, `yes`, and `y` in any case, plus
/// exactly `1`. Everything else, the empty string included, is false.
pub fn parse_bool(token: &str) -> bool {
    token == "1"
        || token.eq_ignore_ascii_case("true")
        || token.eq_ignore_ascii_case("t")
        || token.eq_ignore_ascii_case("on")
        || token.eq_ignore_ascii_case("yes")
        || token.eq_ignore_ascii_case("y")
}

/// A timestamp literal that did not match the expected layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp literal '{literal}': {reason}")]
pub struct TimestampParseError {
    /// The rejected input, verbatim.
    pub literal: String,
    /// Which part of the layout failed.
    pub reason: &'static str,
}

/// Parses a `yyyy-[M]M-[d]d [H]H:mm:ss[.f]` literal.
///
/// Month, day, and hour accept one or two digits; the year takes any number
/// of digits, so instants past year 9999 parse back the way they print. The
/// optional fraction takes one to nine digits and is right-padded to
/// nanoseconds, so `.5` is half a second and `.000000001` a single
/// nanosecond. Components are range-checked against the real calendar:
/// `2016-02-30` or a minute of `60` is an error, not a rollover into the
/// next unit. Surrounding whitespace is not trimmed.
///
/// ```
/// use accident_record::parse_timestamp;
///
/// let ts = parse_timestamp("2016-02-08 00:37:08").unwrap();
/// assert_eq!(ts.secs(), 1_454_891_828);
///
/// assert_eq!(parse_timestamp("2016-2-8 0:37:08"), Ok(ts));
/// assert!(parse_timestamp("2016-02-30 00:00:00").is_err());
/// ```
pub fn parse_timestamp(literal: &str) -> Result<Timestamp, TimestampParseError> {
    let (date, time) = literal
        .split_once(' ')
        .ok_or("expected a single space between date and time")
        .map_err(|reason| reject(literal, reason))?;
    let (year, month, day) = parse_date(date).map_err(|reason| reject(literal, reason))?;
    let (hour, minute, second, nanos) =
        parse_time(time).map_err(|reason| reject(literal, reason))?;
    Timestamp::from_civil(year, month, day, hour, minute, second, nanos)
        .ok_or_else(|| reject(literal, "timestamp out of range"))
}

fn reject(literal: &str, reason: &'static str) -> TimestampParseError {
    TimestampParseError {
        literal: literal.to_string(),
        reason,
    }
}

fn parse_date(date: &str) -> Result<(i64, u32, u32), &'static str> {
    let (year, month, day) = split3(date, '-').ok_or("date must be yyyy-MM-dd")?;

    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err("year is not a number");
    }
    let year: i64 = year.parse().map_err(|_| "year out of range")?;

    let month = parse_component(month).ok_or("month is not a number")?;
    if !(1..=12).contains(&month) {
        return Err("month out of range");
    }

    let day = parse_component(day).ok_or("day is not a number")?;
    if day < 1 || day > days_in_month(year, month) {
        return Err("day out of range for the month");
    }

    Ok((year, month, day))
}

fn parse_time(time: &str) -> Result<(u32, u32, u32, u32), &'static str> {
    let (hour, minute, second) = split3(time, ':').ok_or("time must be HH:mm:ss")?;

    let hour = parse_component(hour).ok_or("hour is not a number")?;
    if hour > 23 {
        return Err("hour out of range");
    }

    let minute = parse_component(minute).ok_or("minute is not a number")?;
    if minute > 59 {
        return Err("minute out of range");
    }

    let (second, nanos) = match second.split_once('.') {
        Some((whole, frac)) => (whole, parse_fraction(frac)?),
        None => (second, 0),
    };
    let second = parse_component(second).ok_or("second is not a number")?;
    if second > 59 {
        return Err("second out of range");
    }

    Ok((hour, minute, second, nanos))
}

/// Right-pads a 1-9 digit fraction to nanoseconds.
fn parse_fraction(frac: &str) -> Result<u32, &'static str> {
    let digits = parse_component(frac).ok_or("fraction must be one to nine digits")?;
    if frac.len() > 9 {
        return Err("fraction must be one to nine digits");
    }
    Ok(digits * 10u32.pow(9 - frac.len() as u32))
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn split3(s: &str, sep: char) -> Option<(&str, &str, &str)> {
    let (first, rest) = s.split_once(sep)?;
    let (second, third) = rest.split_once(sep)?;
    if third.contains(sep) {
        return None;
    }
    Some((first, second, third))
}
