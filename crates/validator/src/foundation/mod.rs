//! Core validation types and traits
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
