// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Tolerant timestamp parsing shared by the date helpers.
//!
//! Accepts the ISO-like shapes the backend emits: a bare date, a date with
//! minutes, or a date with seconds and an optional fractional part of any
//! length. A trailing `Z` or `±HH:MM` offset is honored; offset-less values
//! are taken as local wall-clock time.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc,
};

use crate::error::{Result, TimestampError};

/// Earliest year accepted by [`parse_timestamp_in_range`].
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted by [`parse_timestamp_in_range`].
pub const MAX_YEAR: i32 = 2100;

const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Timestamp with or without an explicit offset.
enum Stamp {
    Naive(NaiveDateTime),
    Fixed(DateTime<FixedOffset>),
}

/// Parse a timestamp string into local wall-clock time.
///
/// Inputs carrying an explicit offset are converted into the host time zone;
/// inputs without one are returned as written. A bare date maps to midnight.
///
/// # Errors
///
/// Returns [`TimestampError::Empty`] for blank input and
/// [`TimestampError::Unparseable`] when no supported layout matches.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    match parse_stamp(value)? {
        Stamp::Naive(naive) => Ok(naive),
        Stamp::Fixed(fixed) => Ok(fixed.with_timezone(&Local).naive_local()),
    }
}

/// Parse a timestamp and reject years outside `1900..=2100`.
///
/// # Errors
///
/// Everything [`parse_timestamp`] reports, plus
/// [`TimestampError::YearOutOfRange`].
pub fn parse_timestamp_in_range(value: &str) -> Result<NaiveDateTime> {
    let parsed = parse_timestamp(value)?;
    let year = parsed.year();
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimestampError::YearOutOfRange(year));
    }
    Ok(parsed)
}

/// Parse a timestamp into an absolute instant.
///
/// Offset-less values are resolved against the host time zone; when a local
/// time is ambiguous the earlier instant wins.
///
/// # Errors
///
/// Everything [`parse_timestamp`] reports, plus
/// [`TimestampError::NonexistentLocalTime`] for wall-clock times skipped by
/// an offset change.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    match parse_stamp(value)? {
        Stamp::Naive(naive) => local_to_utc(naive),
        Stamp::Fixed(fixed) => Ok(fixed.with_timezone(&Utc)),
    }
}

fn parse_stamp(value: &str) -> Result<Stamp> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TimestampError::Empty);
    }

    let unparseable = || TimestampError::Unparseable(value.to_string());
    let (body, offset) = split_offset(value);
    let naive = parse_naive(body).ok_or_else(unparseable)?;
    match offset {
        None => Ok(Stamp::Naive(naive)),
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(Stamp::Fixed)
            .ok_or_else(unparseable),
    }
}

fn parse_naive(body: &str) -> Option<NaiveDateTime> {
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(body, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(body, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Split a trailing `Z` or `±HH:MM` offset off the timestamp body.
fn split_offset(value: &str) -> (&str, Option<FixedOffset>) {
    if let Some(body) = value.strip_suffix('Z') {
        return (body, FixedOffset::east_opt(0));
    }

    let Some(split) = value.len().checked_sub(6) else {
        return (value, None);
    };
    if !value.is_char_boundary(split) {
        return (value, None);
    }
    let (body, tail) = value.split_at(split);
    match parse_offset(tail) {
        Some(offset) => (body, Some(offset)),
        None => (value, None),
    }
}

/// Parse `+HH:MM` / `-HH:MM`.
fn parse_offset(tail: &str) -> Option<FixedOffset> {
    let sign = match tail.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let (hours, minutes) = tail.get(1..)?.split_once(':')?;
    let two_digits = |field: &str| field.len() == 2 && field.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Resolve a local wall-clock time to UTC.
pub(crate) fn local_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| TimestampError::NonexistentLocalTime(naive.to_string()))
}
