//! Input masks
//!
//! Masks normalise raw keystroke input into the canonical display form of
//! each field. They never decide validity.

use serde::{Deserialize, Serialize};

/// Digits in a complete CEP.
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Digits before the CEP separator.
pub const POSTAL_CODE_PREFIX: usize = 5;

/// Length of a fully masked CEP (`00000-000`).
pub const POSTAL_CODE_MASKED_LEN: usize = POSTAL_CODE_DIGITS + 1;

/// What the postal code mask does with digits past the eighth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostalCodeOverflow {
    /// Drop everything after the eighth digit.
    #[default]
    Truncate,
    /// Keep extra digits, appended unformatted after the last group.
    Preserve,
}

/// Tunables for the input masks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskOptions {
    /// Overflow policy for the CEP mask.
    pub postal_code_overflow: PostalCodeOverflow,
    /// Optional cap on the number of letters kept by the UF mask.
    pub state_max_letters: Option<usize>,
}

/// Masks a CEP: keeps ASCII digits and inserts `-` after the fifth digit
/// when more digits follow.
///
/// # Examples
///
/// ```rust
/// use endereco_validator::mask::{MaskOptions, mask_postal_code};
///
/// let options = MaskOptions::default();
/// assert_eq!(mask_postal_code("01310", &options), "01310");
/// assert_eq!(mask_postal_code("013101", &options), "01310-1");
/// assert_eq!(mask_postal_code("01.310-100", &options), "01310-100");
/// ```
pub fn mask_postal_code(raw: &str, options: &MaskOptions) -> String {
    let mut digits = digits_only(raw);
    if options.postal_code_overflow == PostalCodeOverflow::Truncate {
        digits.truncate(POSTAL_CODE_DIGITS);
    }

    if digits.len() <= POSTAL_CODE_PREFIX {
        return digits;
    }

    let mut masked = String::with_capacity(digits.len() + 1);
    masked.push_str(&digits[..POSTAL_CODE_PREFIX]);
    masked.push('-');
    masked.push_str(&digits[POSTAL_CODE_PREFIX..]);
    masked
}

/// Masks a UF: uppercases, then keeps only `A-Z`.
pub fn mask_state(raw: &str, options: &MaskOptions) -> String {
    let upper = raw.to_uppercase();
    let letters = upper.chars().filter(char::is_ascii_uppercase);

    match options.state_max_letters {
        Some(max) => letters.take(max).collect(),
        None => letters.collect(),
    }
}

/// Masks a house number: keeps only ASCII digits.
pub fn mask_number(raw: &str) -> String {
    digits_only(raw)
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preserve() -> MaskOptions {
        MaskOptions {
            postal_code_overflow: PostalCodeOverflow::Preserve,
            ..MaskOptions::default()
        }
    }

    #[test]
    fn test_postal_code_partial_input() {
        let options = MaskOptions::default();
        assert_eq!(mask_postal_code("", &options), "");
        assert_eq!(mask_postal_code("0", &options), "0");
        assert_eq!(mask_postal_code("01310", &options), "01310");
        assert_eq!(mask_postal_code("0131010", &options), "01310-10");
    }

    #[test]
    fn test_postal_code_strips_non_digits() {
        let options = MaskOptions::default();
        assert_eq!(mask_postal_code("ab01310--1x00", &options), "01310-100");
        assert_eq!(mask_postal_code("-----", &options), "");
    }

    #[test]
    fn test_postal_code_remask_is_stable() {
        let options = MaskOptions::default();
        let once = mask_postal_code("01310100", &options);
        assert_eq!(mask_postal_code(&once, &options), once);
    }

    #[test]
    fn test_postal_code_truncates_by_default() {
        assert_eq!(
            mask_postal_code("0131010099", &MaskOptions::default()),
            "01310-100"
        );
    }

    #[test]
    fn test_postal_code_preserve_keeps_overflow() {
        assert_eq!(mask_postal_code("0131010099", &preserve()), "01310-10099");
    }

    #[test]
    fn test_state() {
        let options = MaskOptions::default();
        assert_eq!(mask_state("sp", &options), "SP");
        assert_eq!(mask_state("s1p!", &options), "SP");
        assert_eq!(mask_state("são", &options), "SO");
        assert_eq!(mask_state("rjx", &options), "RJX");
    }

    #[test]
    fn test_state_cap() {
        let options = MaskOptions {
            state_max_letters: Some(2),
            ..MaskOptions::default()
        };
        assert_eq!(mask_state("rjx", &options), "RJ");
        assert_eq!(mask_state("1r2", &options), "R");
    }

    #[test]
    fn test_state_lowercase_with_noise() {
        assert_eq!(mask_state(" m-g ", &MaskOptions::default()), "MG");
    }

    #[test]
    fn test_number() {
        assert_eq!(mask_number("12a3"), "123");
        assert_eq!(mask_number("s/n"), "");
        assert_eq!(mask_number("1.578"), "1578");
    }
}
