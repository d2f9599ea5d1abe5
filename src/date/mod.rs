// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Date helpers: tolerant parsing, fixed-layout formatting, and
//! remaining-time messages.

pub mod format;
pub mod parse;
pub mod remaining;

/// Fixed output layouts for [`format_date`].
pub use format::{DateFormat, UnknownDateFormat, format_date, format_date_with_token};
/// Timestamp parsing shared by the date helpers.
pub use parse::{parse_instant, parse_timestamp, parse_timestamp_in_range};
/// Remaining-time computation and rendering.
pub use remaining::{
    Deadline, Remaining, grade_expiration_remaining_time, grade_expiration_remaining_time_at,
};
