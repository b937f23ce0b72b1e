//! # endereco-validator
//!
//! Format rules, input masks and typing heuristics for a Brazilian
//! address form (CEP, Logradouro, Número, UF, Complemento).
//!
//! ## Quick Start
//!
//! ```rust
//! use endereco_validator::prelude::*;
//!
//! assert!(validate_postal_code("01310-100"));
//! assert!(!validate_state("sp"));
//!
//! let options = MaskOptions::default();
//! assert_eq!(FieldId::PostalCode.mask("01310100", &options), "01310-100");
//! assert_eq!(FieldId::Street.validate("Rua").unwrap_err().code, "min_length");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually.

pub mod combinators;
pub mod field;
pub mod foundation;
mod macros;
pub mod mask;
pub mod prelude;
pub mod validators;

pub use field::FieldId;
pub use foundation::{Validate, ValidateExt, ValidationError, ValidationResult};
pub use mask::{MaskOptions, PostalCodeOverflow};
