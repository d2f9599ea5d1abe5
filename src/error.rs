// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error types for timestamp handling.

use thiserror::Error;

/// Result type alias using [`TimestampError`].
pub type Result<T> = std::result::Result<T, TimestampError>;

/// Reasons a timestamp string could not be turned into a usable date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// Input was empty or whitespace only
    #[error("Timestamp is empty")]
    Empty,

    /// Input did not match any supported layout
    #[error("Unrecognized timestamp: {0:?}")]
    Unparseable(String),

    /// Parsed year lies outside the supported 1900..=2100 window
    #[error("Year {0} is outside the supported range 1900-2100")]
    YearOutOfRange(i32),

    /// Local wall-clock time does not exist (skipped by an offset change)
    #[error("Local time {0} does not exist in the host time zone")]
    NonexistentLocalTime(String),
}
