// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Korean cattle (Hanwoo) identifiers: ear-tag numbers and semen codes.

pub mod format;
pub mod validation;

/// Ear-tag number formatting.
pub use format::{EarTag, EarTagPart, format_ear_tag_number, normalize_ear_tag_number};
/// Semen code validation.
pub use validation::{is_valid_k_cow_semen, is_valid_k_cow_semen_opt};
