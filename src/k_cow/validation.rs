// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Hanwoo semen code validation.

use std::sync::LazyLock;

use regex::Regex;

/// Known institutional prefixes followed by a 3- or 4-digit number.
static SEMEN_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(KPN|GPN|JBPN|JYG|YKG)[0-9]{3,4}$").expect("Invalid semen code regex")
});

/// Check whether `code` is a valid Hanwoo semen code such as `KPN950`.
///
/// Surrounding whitespace and letter case are ignored.
///
/// ```
/// use kiwooso_utils::is_valid_k_cow_semen;
///
/// assert!(is_valid_k_cow_semen("KPN950"));
/// assert!(is_valid_k_cow_semen("GPN0100"));
/// assert!(!is_valid_k_cow_semen("KPN12"));
/// assert!(!is_valid_k_cow_semen("ABC123"));
/// ```
pub fn is_valid_k_cow_semen(code: &str) -> bool {
    let normalized = code.trim().to_uppercase();
    !normalized.is_empty() && SEMEN_CODE.is_match(&normalized)
}

/// [`is_valid_k_cow_semen`] for optional input; `None` is never valid.
pub fn is_valid_k_cow_semen_opt(code: Option<&str>) -> bool {
    code.is_some_and(is_valid_k_cow_semen)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every known prefix accepts three or four digits.
    #[test]
    fn accepts_known_prefixes() {
        for code in [
            "KPN950", "KPN1234", "GPN0100", "JBPN123", "JYG4567", "YKG001",
        ] {
            assert!(is_valid_k_cow_semen(code), "{code}");
        }
    }

    // Lowercase and padded input is normalized first.
    #[test]
    fn ignores_case_and_surrounding_whitespace() {
        assert!(is_valid_k_cow_semen("kpn950"));
        assert!(is_valid_k_cow_semen("  Gpn0100\t"));
    }

    // Digit count must be exactly three or four.
    #[test]
    fn rejects_wrong_digit_count() {
        assert!(!is_valid_k_cow_semen("KPN12"));
        assert!(!is_valid_k_cow_semen("KPN12345"));
        assert!(!is_valid_k_cow_semen("KPN"));
    }

    // Unknown prefixes, inner garbage and empty input fail.
    #[test]
    fn rejects_other_input() {
        assert!(!is_valid_k_cow_semen(""));
        assert!(!is_valid_k_cow_semen("   "));
        assert!(!is_valid_k_cow_semen("ABC123"));
        assert!(!is_valid_k_cow_semen("KPN 950"));
        assert!(!is_valid_k_cow_semen("XKPN950"));
        assert!(!is_valid_k_cow_semen("KPN９５０"));
    }

    // Absent input is invalid.
    #[test]
    fn optional_input() {
        assert!(!is_valid_k_cow_semen_opt(None));
        assert!(is_valid_k_cow_semen_opt(Some("YKG777")));
    }
}
