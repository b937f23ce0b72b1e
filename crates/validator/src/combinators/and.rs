//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Examples
///
/// ```rust
/// use endereco_validator::prelude::*;
///
/// let validator = required().and(postal_code());
/// assert!(validator.validate("01310-100").is_ok());
/// assert_eq!(validator.validate("").unwrap_err().code, "required");
/// assert_eq!(validator.validate("0131").unwrap_err().code, "postal_code");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
