// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Remaining time until a grade expires, rendered as a Korean message.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use super::parse::{local_to_utc, parse_instant};
use crate::error::Result;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Values that can be resolved to an absolute deadline.
///
/// Strings go through the tolerant timestamp parser; naive date-times are
/// read as local wall-clock time.
pub trait Deadline {
    /// Resolve to a UTC instant.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be parsed or names a local time
    /// that does not exist.
    fn to_instant(&self) -> Result<DateTime<Utc>>;
}

impl Deadline for str {
    fn to_instant(&self) -> Result<DateTime<Utc>> {
        parse_instant(self)
    }
}

impl Deadline for String {
    fn to_instant(&self) -> Result<DateTime<Utc>> {
        parse_instant(self)
    }
}

impl Deadline for NaiveDateTime {
    fn to_instant(&self) -> Result<DateTime<Utc>> {
        local_to_utc(*self)
    }
}

impl<Tz: TimeZone> Deadline for DateTime<Tz> {
    fn to_instant(&self) -> Result<DateTime<Utc>> {
        Ok(self.with_timezone(&Utc))
    }
}

impl<T: Deadline + ?Sized> Deadline for &T {
    fn to_instant(&self) -> Result<DateTime<Utc>> {
        (**self).to_instant()
    }
}

/// Time left before a deadline, bucketed the way the message reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Remaining {
    /// Deadline is now or in the past.
    Expired,
    /// At least 24 hours left, rounded to the nearest day (half a day rounds up).
    Days(i64),
    /// Between one and 24 hours left.
    HoursMinutes { hours: i64, minutes: i64 },
    /// Between one minute and one hour left.
    Minutes(i64),
    /// Less than a minute left.
    UnderOneMinute,
}

impl Remaining {
    /// Bucket the time between `now` and `end` with millisecond precision.
    pub fn between(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = (end - now).num_milliseconds();
        if diff_ms <= 0 {
            return Self::Expired;
        }
        if diff_ms >= DAY_MS {
            return Self::Days((diff_ms + DAY_MS / 2) / DAY_MS);
        }

        let hours = diff_ms / HOUR_MS;
        let minutes = (diff_ms % HOUR_MS) / MINUTE_MS;
        if hours > 0 {
            Self::HoursMinutes { hours, minutes }
        } else if minutes > 0 {
            Self::Minutes(minutes)
        } else {
            Self::UnderOneMinute
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired => f.write_str("등급이 만료되었습니다."),
            Self::Days(days) => write!(f, "등급 만료까지 {days}일 남았습니다."),
            Self::HoursMinutes { hours, minutes: 0 } => {
                write!(f, "등급 만료까지 {hours}시간 남았습니다.")
            }
            Self::HoursMinutes { hours, minutes } => {
                write!(f, "등급 만료까지 {hours}시간 {minutes}분 남았습니다.")
            }
            Self::Minutes(minutes) => write!(f, "등급 만료까지 {minutes}분 남았습니다."),
            Self::UnderOneMinute => f.write_str("등급 만료까지 1분 미만 남았습니다."),
        }
    }
}

/// Describe how long until the grade expires, measured from the system clock.
///
/// Returns an empty string when `end` cannot be resolved to an instant.
///
/// # Examples
///
/// ```
/// use kiwooso_utils::grade_expiration_remaining_time;
///
/// assert_eq!(grade_expiration_remaining_time("2000-01-01T00:00:00"), "등급이 만료되었습니다.");
/// assert_eq!(grade_expiration_remaining_time("invalid-date"), "");
/// ```
pub fn grade_expiration_remaining_time<D: Deadline + ?Sized>(end: &D) -> String {
    grade_expiration_remaining_time_at(end, Utc::now())
}

/// Same as [`grade_expiration_remaining_time`] with an explicit "now".
pub fn grade_expiration_remaining_time_at<D, Tz>(end: &D, now: DateTime<Tz>) -> String
where
    D: Deadline + ?Sized,
    Tz: TimeZone,
{
    match end.to_instant() {
        Ok(end) => Remaining::between(end, now.with_timezone(&Utc)).to_string(),
        Err(err) => {
            tracing::debug!(error = %err, "Cannot compute remaining time");
            String::new()
        }
    }
}
