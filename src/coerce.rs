//! Fallback coercions for strings the literal grammar rejects
//!
//! Request payloads carry semantically richer types (timestamps,
//! durations, unique identifiers) over a text channel that only supports
//! literal syntax natively. When a string is not parseable as a literal
//! expression at all, this chain is tried in order and the first coercion
//! producing a value wins: datetime, time, date, duration, UUID.
//!
//! A coercion that matches structurally but denotes an invalid value
//! (month 13, minute 60) counts as "not applicable" and the chain
//! continues. A parsed zero-length duration also counts as not applicable,
//! preserving the truthiness rule of the system this crate serves.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::value::LiteralValue;

/// A single fallback coercion: typed value or "not applicable"
pub type Caster = fn(&str) -> Option<LiteralValue>;

/// The coercion chain, tried in order; first hit wins
pub const CASTERS: &[Caster] = &[cast_datetime, cast_time, cast_date, cast_duration, cast_uuid];

/// Run the chain on a string the grammar rejected
pub fn cast(text: &str) -> Option<LiteralValue> {
    CASTERS.iter().find_map(|caster| caster(text))
}

static DATETIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^
        (?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})
        [T\ ]
        (?P<hour>\d{1,2}):(?P<minute>\d{1,2})
        (?::(?P<second>\d{1,2})(?:[.,](?P<fraction>\d{1,6})\d*)?)?
        (?P<tz>Z|[+-]\d{2}(?::?\d{2})?)?
        $",
    )
    .expect("datetime pattern compiles")
});

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^
        (?P<hour>\d{1,2}):(?P<minute>\d{1,2})
        (?::(?P<second>\d{1,2})(?:[.,](?P<fraction>\d{1,6})\d*)?)?
        $",
    )
    .expect("time pattern compiles")
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})$")
        .expect("date pattern compiles")
});

static STANDARD_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^
        (?:(?P<days>-?\d+)\ (?:days?,?\ )?)?
        (?P<sign>-?)
        (?:(?:(?P<hours>\d+):)?(?P<minutes>\d+):)?
        (?P<seconds>\d+)
        (?:[.,](?P<fraction>\d{1,6})\d*)?
        $",
    )
    .expect("standard duration pattern compiles")
});

static ISO8601_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^
        (?P<sign>[-+]?)P
        (?:(?P<weeks>\d+)W)?
        (?:(?P<days>\d+)D)?
        (?:T
            (?:(?P<hours>\d+)H)?
            (?:(?P<minutes>\d+)M)?
            (?:(?P<seconds>\d+)(?:[.,](?P<fraction>\d{1,6})\d*)?S)?
        )?
        $",
    )
    .expect("iso8601 duration pattern compiles")
});

fn capture_i64(captures: &Captures<'_>, name: &str) -> Option<i64> {
    captures.name(name).and_then(|m| m.as_str().parse().ok())
}

fn capture_u32(captures: &Captures<'_>, name: &str) -> Option<u32> {
    captures.name(name).and_then(|m| m.as_str().parse().ok())
}

/// Fractional-second capture, right-padded to microseconds
fn capture_micros(captures: &Captures<'_>) -> u32 {
    captures
        .name("fraction")
        .map(|m| {
            let mut digits = m.as_str().to_string();
            while digits.len() < 6 {
                digits.push('0');
            }
            digits.parse().unwrap_or(0)
        })
        .unwrap_or(0)
}

fn date_from(captures: &Captures<'_>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        capture_i64(captures, "year")? as i32,
        capture_u32(captures, "month")?,
        capture_u32(captures, "day")?,
    )
}

fn time_from(captures: &Captures<'_>) -> Option<NaiveTime> {
    NaiveTime::from_hms_micro_opt(
        capture_u32(captures, "hour")?,
        capture_u32(captures, "minute")?,
        capture_u32(captures, "second").unwrap_or(0),
        capture_micros(captures),
    )
}

/// Parse an explicit UTC offset (`Z`, `+02:00`, `-0530`) into seconds
fn offset_seconds(tz: &str) -> Option<i64> {
    if tz == "Z" {
        return Some(0);
    }
    let (sign, rest) = match tz.split_at(1) {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let rest = rest.replace(':', "");
    let hours: i64 = rest.get(0..2)?.parse().ok()?;
    let minutes: i64 = match rest.get(2..4) {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    Some(sign * (hours * 3600 + minutes * 60))
}

/// `YYYY-MM-DD[T ]HH:MM[:SS[.ffffff]][Z|±HH[:]MM]` — an explicit offset is
/// normalized to UTC and dropped
pub fn cast_datetime(text: &str) -> Option<LiteralValue> {
    let captures = DATETIME_RE.captures(text)?;
    let naive = NaiveDateTime::new(date_from(&captures)?, time_from(&captures)?);
    let naive = match captures.name("tz") {
        Some(tz) => naive - TimeDelta::new(offset_seconds(tz.as_str())?, 0)?,
        None => naive,
    };
    Some(LiteralValue::DateTime(naive))
}

/// `HH:MM[:SS[.ffffff]]`
pub fn cast_time(text: &str) -> Option<LiteralValue> {
    let captures = TIME_RE.captures(text)?;
    Some(LiteralValue::Time(time_from(&captures)?))
}

/// `YYYY-MM-DD`
pub fn cast_date(text: &str) -> Option<LiteralValue> {
    let captures = DATE_RE.captures(text)?;
    Some(LiteralValue::Date(date_from(&captures)?))
}

/// `[-][DD ][[HH:]MM:]SS[.ffffff]` or ISO-8601 `[-]P[nW][nD][T[nH][nM][nS]]`
pub fn cast_duration(text: &str) -> Option<LiteralValue> {
    let delta = standard_duration(text).or_else(|| iso8601_duration(text))?;
    // A zero delta is falsy upstream: skip it so the chain continues
    if delta == TimeDelta::zero() {
        return None;
    }
    Some(LiteralValue::Duration(delta))
}

fn standard_duration(text: &str) -> Option<TimeDelta> {
    let captures = STANDARD_DURATION_RE.captures(text)?;
    let sign = if captures.name("sign").map(|m| m.as_str()) == Some("-") {
        -1
    } else {
        1
    };
    let days = capture_i64(&captures, "days").unwrap_or(0);
    let seconds = sign
        * (capture_i64(&captures, "hours").unwrap_or(0) * 3600
            + capture_i64(&captures, "minutes").unwrap_or(0) * 60
            + capture_i64(&captures, "seconds")?);
    let micros = sign * i64::from(capture_micros(&captures));
    TimeDelta::new(days * 86_400 + seconds, 0)?
        .checked_add(&TimeDelta::microseconds(micros))
}

fn iso8601_duration(text: &str) -> Option<TimeDelta> {
    let captures = ISO8601_DURATION_RE.captures(text)?;
    // Reject a bare "P" with no components
    if ["weeks", "days", "hours", "minutes", "seconds"]
        .iter()
        .all(|name| captures.name(name).is_none())
    {
        return None;
    }
    let sign = if captures.name("sign").map(|m| m.as_str()) == Some("-") {
        -1
    } else {
        1
    };
    let seconds = capture_i64(&captures, "weeks").unwrap_or(0) * 7 * 86_400
        + capture_i64(&captures, "days").unwrap_or(0) * 86_400
        + capture_i64(&captures, "hours").unwrap_or(0) * 3600
        + capture_i64(&captures, "minutes").unwrap_or(0) * 60
        + capture_i64(&captures, "seconds").unwrap_or(0);
    let micros = i64::from(capture_micros(&captures));
    TimeDelta::new(sign * seconds, 0)?
        .checked_add(&TimeDelta::microseconds(sign * micros))
}

/// Hyphenated (or bare-hex) UUID
pub fn cast_uuid(text: &str) -> Option<LiteralValue> {
    uuid::Uuid::parse_str(text).ok().map(LiteralValue::UniqueId)
}
