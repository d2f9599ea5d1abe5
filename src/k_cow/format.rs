// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Cattle ear-tag number formatting.
//!
//! A tag number has 12 characters: a 3-character prefix (2-digit extension
//! code plus 1-digit code class), an 8-digit serial number shown as two
//! groups of four, and a 1-digit anti-forgery check digit.

use std::fmt;

/// Character length of an unformatted ear-tag number.
pub const EAR_TAG_LENGTH: usize = 12;

/// Borrowed view over the four fixed-width fields of an ear-tag number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EarTag<'a> {
    pub prefix: &'a str,
    pub serial_front: &'a str,
    pub serial_back: &'a str,
    pub check_digit: &'a str,
}

impl<'a> EarTag<'a> {
    /// Split a 12-character code into its fields; `None` for any other length.
    ///
    /// Field contents are not checked, only positions.
    pub fn parse(code: &'a str) -> Option<Self> {
        if code.chars().count() != EAR_TAG_LENGTH {
            return None;
        }
        let offset = |nth: usize| code.char_indices().nth(nth).map_or(code.len(), |(idx, _)| idx);
        let (serial_start, back_start, check_start) = (offset(3), offset(7), offset(11));
        Some(Self {
            prefix: &code[..serial_start],
            serial_front: &code[serial_start..back_start],
            serial_back: &code[back_start..check_start],
            check_digit: &code[check_start..],
        })
    }

    /// Serial number and check digit, e.g. `1234 5678 9`.
    pub fn serial_with_check(&self) -> String {
        format!(
            "{} {} {}",
            self.serial_front, self.serial_back, self.check_digit
        )
    }

    pub fn part(&self, part: EarTagPart) -> String {
        match part {
            EarTagPart::Prefix => self.prefix.to_string(),
            EarTagPart::SerialFront => self.serial_front.to_string(),
            EarTagPart::SerialBack => self.serial_back.to_string(),
            EarTagPart::CheckDigit => self.check_digit.to_string(),
            EarTagPart::SerialWithCheck => self.serial_with_check(),
        }
    }
}

impl fmt::Display for EarTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.prefix, self.serial_front, self.serial_back, self.check_digit
        )
    }
}

/// Field selector for [`format_ear_tag_number`], numbered 1 through 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EarTagPart {
    /// 1: extension code and code class (3 characters).
    Prefix,
    /// 2: first four serial digits.
    SerialFront,
    /// 3: last four serial digits.
    SerialBack,
    /// 4: check digit.
    CheckDigit,
    /// 5: serial number and check digit, space separated.
    SerialWithCheck,
}

impl TryFrom<u8> for EarTagPart {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Prefix),
            2 => Ok(Self::SerialFront),
            3 => Ok(Self::SerialBack),
            4 => Ok(Self::CheckDigit),
            5 => Ok(Self::SerialWithCheck),
            other => Err(other),
        }
    }
}

/// Format an ear-tag number, or extract one of its parts.
///
/// Codes that are not exactly 12 characters come back unchanged. Without a
/// selector (or with `0`) all four fields are joined with spaces; selectors
/// 1 to 5 pick a part (see [`EarTagPart`]); any other selector returns the
/// input unchanged.
///
/// ```
/// use kiwooso_utils::format_ear_tag_number;
///
/// assert_eq!(format_ear_tag_number("002123456789", None), "002 1234 5678 9");
/// assert_eq!(format_ear_tag_number("002123456789", Some(1)), "002");
/// assert_eq!(format_ear_tag_number("002123456789", Some(5)), "1234 5678 9");
/// assert_eq!(format_ear_tag_number("invalid", None), "invalid");
/// ```
pub fn format_ear_tag_number(code: &str, part: Option<u8>) -> String {
    let Some(tag) = EarTag::parse(code) else {
        return code.to_string();
    };

    match part {
        None | Some(0) => tag.to_string(),
        Some(selector) => match EarTagPart::try_from(selector) {
            Ok(part) => tag.part(part),
            Err(_) => code.to_string(),
        },
    }
}

/// Remove all whitespace from a formatted ear-tag number.
pub fn normalize_ear_tag_number(formatted: &str) -> String {
    formatted.chars().filter(|c| !c.is_whitespace()).collect()
}
