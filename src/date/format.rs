// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Fixed-layout date formatting.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

use super::parse::parse_timestamp_in_range;

/// Output layouts supported by [`format_date`].
///
/// Every numeric field is zero-padded to two digits except the four-digit
/// year; `YY` is the last two digits of the year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `YYYY년 MM월 DD일`
    KoreanDate,
    /// `YY년 MM월 DD일`
    KoreanShortDate,
    /// `YYYY년 MM월 DD일 HH시 MM분`
    #[default]
    KoreanDateTime,
    /// `YYYY년 MM월 DD일 HH시 MM분 SS초`
    KoreanDateTimeSeconds,
    /// `YYYY년 MM월 DD일 HH:MM`
    KoreanDateClock,
    /// `YYYY-MM-DD`
    IsoDate,
    /// `YYYY-MM-DD HH:MM`
    IsoDateTime,
    /// `YYYY-MM-DD HH:MM:SS`
    IsoDateTimeSeconds,
    /// `YYYY.MM.DD`
    DottedDate,
    /// `YY.MM.DD`
    DottedShortDate,
    /// `MM/DD/YYYY`
    MonthFirstSlash,
    /// `DD/MM/YYYY`
    DayFirstSlash,
}

impl DateFormat {
    /// All supported layouts, in declaration order.
    pub const ALL: [DateFormat; 12] = [
        Self::KoreanDate,
        Self::KoreanShortDate,
        Self::KoreanDateTime,
        Self::KoreanDateTimeSeconds,
        Self::KoreanDateClock,
        Self::IsoDate,
        Self::IsoDateTime,
        Self::IsoDateTimeSeconds,
        Self::DottedDate,
        Self::DottedShortDate,
        Self::MonthFirstSlash,
        Self::DayFirstSlash,
    ];

    /// Pattern token as written by callers, e.g. `"YYYY-MM-DD"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KoreanDate => "YYYY년 MM월 DD일",
            Self::KoreanShortDate => "YY년 MM월 DD일",
            Self::KoreanDateTime => "YYYY년 MM월 DD일 HH시 MM분",
            Self::KoreanDateTimeSeconds => "YYYY년 MM월 DD일 HH시 MM분 SS초",
            Self::KoreanDateClock => "YYYY년 MM월 DD일 HH:MM",
            Self::IsoDate => "YYYY-MM-DD",
            Self::IsoDateTime => "YYYY-MM-DD HH:MM",
            Self::IsoDateTimeSeconds => "YYYY-MM-DD HH:MM:SS",
            Self::DottedDate => "YYYY.MM.DD",
            Self::DottedShortDate => "YY.MM.DD",
            Self::MonthFirstSlash => "MM/DD/YYYY",
            Self::DayFirstSlash => "DD/MM/YYYY",
        }
    }

    /// Equivalent chrono `strftime` layout.
    fn strftime(self) -> &'static str {
        match self {
            Self::KoreanDate => "%Y년 %m월 %d일",
            Self::KoreanShortDate => "%y년 %m월 %d일",
            Self::KoreanDateTime => "%Y년 %m월 %d일 %H시 %M분",
            Self::KoreanDateTimeSeconds => "%Y년 %m월 %d일 %H시 %M분 %S초",
            Self::KoreanDateClock => "%Y년 %m월 %d일 %H:%M",
            Self::IsoDate => "%Y-%m-%d",
            Self::IsoDateTime => "%Y-%m-%d %H:%M",
            Self::IsoDateTimeSeconds => "%Y-%m-%d %H:%M:%S",
            Self::DottedDate => "%Y.%m.%d",
            Self::DottedShortDate => "%y.%m.%d",
            Self::MonthFirstSlash => "%m/%d/%Y",
            Self::DayFirstSlash => "%d/%m/%Y",
        }
    }

    /// Render an already-parsed wall-clock time.
    pub fn render(self, datetime: &NaiveDateTime) -> String {
        datetime.format(self.strftime()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that does not name any [`DateFormat`].
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Unknown date format token: {0:?}")]
pub struct UnknownDateFormat(pub String);

impl FromStr for DateFormat {
    type Err = UnknownDateFormat;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == token)
            .ok_or_else(|| UnknownDateFormat(token.to_string()))
    }
}

/// Format a timestamp string using one of the fixed layouts.
///
/// Returns an empty string when the input is empty, cannot be parsed, or its
/// year lies outside `1900..=2100`.
///
/// # Examples
///
/// ```
/// use kiwooso_utils::{DateFormat, format_date};
///
/// assert_eq!(format_date("2024-01-15T14:30:00", DateFormat::KoreanDate), "2024년 01월 15일");
/// assert_eq!(format_date("2024-01-15", DateFormat::DottedShortDate), "24.01.15");
/// assert_eq!(format_date("", DateFormat::IsoDate), "");
/// ```
pub fn format_date(date_string: &str, format: DateFormat) -> String {
    match parse_timestamp_in_range(date_string) {
        Ok(datetime) => format.render(&datetime),
        Err(err) => {
            tracing::debug!(input = date_string, error = %err, "Skipping date formatting");
            String::new()
        }
    }
}

/// Format a timestamp string using a pattern token given as text.
///
/// Unknown tokens fall back to [`DateFormat::default`]
/// (`YYYY년 MM월 DD일 HH시 MM분`).
pub fn format_date_with_token(date_string: &str, token: &str) -> String {
    let format = token.parse::<DateFormat>().unwrap_or_else(|err| {
        tracing::trace!(%err, "Falling back to default date layout");
        DateFormat::default()
    });
    format_date(date_string, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2025-01-15T14:30:45";

    // Each Korean-suffixed layout renders its literal unit markers.
    #[test]
    fn format_date_renders_korean_layouts() {
        assert_eq!(format_date(SAMPLE, DateFormat::KoreanDate), "2025년 01월 15일");
        assert_eq!(
            format_date(SAMPLE, DateFormat::KoreanShortDate),
            "25년 01월 15일"
        );
        assert_eq!(
            format_date(SAMPLE, DateFormat::KoreanDateTime),
            "2025년 01월 15일 14시 30분"
        );
        assert_eq!(
            format_date(SAMPLE, DateFormat::KoreanDateTimeSeconds),
            "2025년 01월 15일 14시 30분 45초"
        );
        assert_eq!(
            format_date(SAMPLE, DateFormat::KoreanDateClock),
            "2025년 01월 15일 14:30"
        );
    }

    // Hyphen, dot and slash layouts including both slash orders.
    #[test]
    fn format_date_renders_delimited_layouts() {
        assert_eq!(format_date(SAMPLE, DateFormat::IsoDate), "2025-01-15");
        assert_eq!(format_date(SAMPLE, DateFormat::IsoDateTime), "2025-01-15 14:30");
        assert_eq!(
            format_date(SAMPLE, DateFormat::IsoDateTimeSeconds),
            "2025-01-15 14:30:45"
        );
        assert_eq!(format_date(SAMPLE, DateFormat::DottedDate), "2025.01.15");
        assert_eq!(format_date(SAMPLE, DateFormat::DottedShortDate), "25.01.15");
        assert_eq!(format_date(SAMPLE, DateFormat::MonthFirstSlash), "01/15/2025");
        assert_eq!(format_date(SAMPLE, DateFormat::DayFirstSlash), "15/01/2025");
    }

    // Single-digit fields are padded to two digits.
    #[test]
    fn format_date_zero_pads_fields() {
        let input = "2025-01-05T09:08:07";
        assert_eq!(
            format_date(input, DateFormat::IsoDateTimeSeconds),
            "2025-01-05 09:08:07"
        );
        assert_eq!(format_date(input, DateFormat::KoreanShortDate), "25년 01월 05일");
    }

    // Empty, garbage and out-of-range inputs all yield an empty string.
    #[test]
    fn format_date_returns_empty_for_invalid_input() {
        assert_eq!(format_date("", DateFormat::IsoDate), "");
        assert_eq!(format_date("invalid-date", DateFormat::IsoDate), "");
        assert_eq!(format_date("12345-01-01", DateFormat::IsoDate), "");
        assert_eq!(format_date("1800-01-01", DateFormat::IsoDate), "");
        assert_eq!(format_date("2200-01-01", DateFormat::IsoDate), "");
    }

    // The year window is inclusive at both ends.
    #[test]
    fn format_date_accepts_boundary_years() {
        assert_eq!(format_date("1900-01-01", DateFormat::IsoDate), "1900-01-01");
        assert_eq!(format_date("2100-12-31", DateFormat::IsoDate), "2100-12-31");
    }

    // Offset-bearing inputs without seconds are shown in local time.
    #[test]
    fn format_date_accepts_minute_precision_offsets() {
        use chrono::{Local, TimeZone, Utc};

        let local = Utc
            .with_ymd_and_hms(2025, 6, 1, 1, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        let expected = DateFormat::IsoDateTime.render(&local);
        assert_eq!(
            format_date("2025-06-01T10:00+09:00", DateFormat::IsoDateTime),
            expected
        );
        assert_eq!(format_date("2025-06-01T01:00Z", DateFormat::IsoDateTime), expected);
        assert!(!format_date("2025-06-01Z", DateFormat::IsoDate).is_empty());
    }

    // Server timestamps with long fractional parts format normally.
    #[test]
    fn format_date_ignores_fractional_seconds() {
        let server = "2025-11-30T23:59:59.999999999";
        assert_eq!(format_date(server, DateFormat::IsoDate), "2025-11-30");
        assert_eq!(
            format_date(server, DateFormat::IsoDateTimeSeconds),
            "2025-11-30 23:59:59"
        );
        assert_eq!(
            format_date("2025-01-15T14:30:45.123", DateFormat::IsoDateTimeSeconds),
            "2025-01-15 14:30:45"
        );
    }

    // Tokens parse from and render back to their pattern text.
    #[test]
    fn date_format_tokens_parse_from_pattern_text() {
        for format in DateFormat::ALL {
            assert_eq!(format.as_str().parse::<DateFormat>(), Ok(format));
            assert_eq!(format.to_string(), format.as_str());
        }
        assert!("YYYY/MM/DD".parse::<DateFormat>().is_err());
    }

    // Unknown tokens use the Korean date-time fallback layout.
    #[test]
    fn format_date_with_token_falls_back_for_unknown_token() {
        assert_eq!(
            format_date_with_token(SAMPLE, "not-a-format"),
            "2025년 01월 15일 14시 30분"
        );
        assert_eq!(format_date_with_token(SAMPLE, "DD/MM/YYYY"), "15/01/2025");
        assert_eq!(format_date_with_token("", "not-a-format"), "");
    }
}
