//! Brazilian address validators
//!
//! These are the authoritative format rules for the address form. The masks
//! and "looks complete" heuristics in [`crate::mask`] and [`crate::field`]
//! only shape what the user types; a value is valid only if it passes the
//! validator here.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

/// Minimum number of characters a trimmed street name must have.
pub const STREET_MIN_CHARS: usize = 5;

// `\d` in `regex` matches any Unicode digit; only ASCII digits are accepted.
static POSTAL_CODE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]{5}-[0-9]{3}$").unwrap());

static STATE_CODE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Z]{2}$").unwrap());

static DIGITS_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]+$").unwrap());

// ============================================================================
// REQUIRED
// ============================================================================

crate::validator! {
    /// Validates that a value has non-whitespace content.
    pub Required for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::required("") }
    fn required();
}

// ============================================================================
// POSTAL CODE (CEP)
// ============================================================================

crate::validator! {
    /// Validates a CEP in its canonical `00000-000` form.
    pub PostalCode for str;
    rule(input) { POSTAL_CODE_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("postal_code", "Postal code must match 00000-000")
            .with_param("expected", "00000-000")
    }
    fn postal_code();
}

// ============================================================================
// STREET (LOGRADOURO)
// ============================================================================

crate::validator! {
    /// Validates that a trimmed street name has a minimum number of characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Street { min: usize } for str;
    rule(self, input) { input.trim().chars().count() >= self.min }
    error(self, input) {
        ValidationError::min_length("", self.min, input.trim().chars().count())
    }
    new() { Self { min: STREET_MIN_CHARS } }
    fn street();
}

impl Default for Street {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// NUMBER (NÚMERO)
// ============================================================================

crate::validator! {
    /// Validates a house number: one or more ASCII digits and nothing else.
    pub HouseNumber for str;
    rule(input) { DIGITS_REGEX.is_match(input) }
    error(input) { ValidationError::new("digits_only", "Number must contain only digits") }
    fn house_number();
}

// ============================================================================
// STATE (UF)
// ============================================================================

crate::validator! {
    /// Validates a federative unit code: exactly two uppercase ASCII letters.
    pub StateCode for str;
    rule(input) { STATE_CODE_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("state_code", "State must be exactly 2 uppercase letters")
            .with_param("examples", "SP, RJ, MG")
    }
    fn state_code();
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Returns `true` iff `value` is exactly `DDDDD-DDD`.
pub fn validate_postal_code(value: &str) -> bool {
    postal_code().is_valid(value)
}

/// Returns `true` iff `value` has at least five characters once trimmed.
pub fn validate_street(value: &str) -> bool {
    street().is_valid(value)
}

/// Returns `true` iff `value` is a non-empty string of digits.
pub fn validate_number(value: &str) -> bool {
    house_number().is_valid(value)
}

/// Returns `true` iff `value` is exactly two uppercase ASCII letters.
pub fn validate_state(value: &str) -> bool {
    state_code().is_valid(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_code() {
        assert!(validate_postal_code("01310-100"));
        assert!(!validate_postal_code("01310100"));
        assert!(!validate_postal_code("01310-10"));
        assert!(!validate_postal_code("01310-1000"));
        assert!(!validate_postal_code(" 01310-100"));
        assert!(!validate_postal_code("٠١٣١٠-١٠٠"));
    }

    #[test]
    fn test_postal_code_error() {
        let error = postal_code().validate("0131").unwrap_err();
        assert_eq!(error.code, "postal_code");
        assert_eq!(error.param("expected"), Some("00000-000"));
    }

    #[test]
    fn test_street() {
        assert!(validate_street("Av Paulista"));
        assert!(validate_street("Rua A"));
        assert!(!validate_street("Rua"));
        assert!(!validate_street("  Rua   "));
        // counted in characters, not bytes
        assert!(!validate_street("Açaí"));
        assert!(validate_street("Praça"));
    }

    #[test]
    fn test_street_error_reports_trimmed_length() {
        let error = street().validate("  Rua  ").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
    }

    #[test]
    fn test_street_constructor_and_fields() {
        assert_eq!(Street::new(), Street::default());
        assert_eq!(street().min, STREET_MIN_CHARS);

        let relaxed = Street { min: 3 };
        assert!(relaxed.validate("Rua").is_ok());
        assert!(relaxed.validate(" Ru ").is_err());
    }

    #[test]
    fn test_required_error_code() {
        let error = required().validate("").unwrap_err();
        assert_eq!(error.code, "required");
        assert_eq!(error.message, "This field is required");
    }

    #[test]
    fn test_number() {
        assert!(validate_number("123"));
        assert!(validate_number("0"));
        assert!(!validate_number(""));
        assert!(!validate_number("12a"));
        assert!(!validate_number("12 "));
        assert!(!validate_number("-1"));
    }

    #[test]
    fn test_state() {
        assert!(validate_state("SP"));
        assert!(validate_state("RJ"));
        assert!(!validate_state("sp"));
        assert!(!validate_state("S"));
        assert!(!validate_state("SPX"));
        assert!(!validate_state("S1"));
        assert!(!validate_state("ÇA"));
    }

    #[test]
    fn test_required() {
        assert!(required().validate("x").is_ok());
        assert!(required().validate("").is_err());
        assert!(required().validate("   ").unwrap_err().is_required());
    }
}
