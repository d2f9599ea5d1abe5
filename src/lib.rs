// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared frontend helpers for the Kiwooso livestock grading service.
//!
//! - [`date`]: timestamp parsing, fixed-layout formatting, and grade
//!   expiration messages.
//! - [`file`]: chainable validation of upload candidates.
//! - [`k_cow`]: ear-tag number formatting and semen code validation.
//!
//! Every helper is a pure function of its inputs. Failures surface as
//! sentinel values (`""`, `None`, `false`); the file validator additionally
//! reports user-facing messages through optional callbacks.

pub mod date;
pub mod error;
pub mod file;
pub mod k_cow;

pub use date::{
    DateFormat, Deadline, Remaining, format_date, format_date_with_token,
    grade_expiration_remaining_time, grade_expiration_remaining_time_at, parse_timestamp,
};
pub use error::TimestampError;
pub use file::{
    CandidateFile, FilePolicy, FileValidator, MessageCallback, Validation,
    validate_document_file, validate_image_file,
};
pub use k_cow::{
    EarTag, EarTagPart, format_ear_tag_number, is_valid_k_cow_semen, normalize_ear_tag_number,
};
