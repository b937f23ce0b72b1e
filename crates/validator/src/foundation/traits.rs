//! Core traits for the validation system

use crate::combinators::And;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type so a validator only accepts what it can
/// check. Validators return `Result<(), ValidationError>` for a consistent
/// API; [`Validate::is_valid`] collapses that to a predicate.
///
/// # Examples
///
/// ```rust
/// use endereco_validator::foundation::{Validate, ValidationError};
///
/// struct Digits;
///
/// impl Validate for Digits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("digits", "digits only"))
///         }
///     }
/// }
///
/// assert!(Digits.is_valid("123"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`Validate::validate`] succeeds.
    #[inline]
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure, so the reported error always
    /// belongs to the leftmost failing validator.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_is_valid_follows_validate() {
        assert!(AlwaysValid.is_valid("anything"));
    }
}
