//! Prelude module for convenient imports.
//!
//! ```rust
//! use endereco_validator::prelude::*;
//!
//! let cep = required().and(postal_code());
//! assert!(cep.validate("01310-100").is_ok());
//! ```

pub use crate::combinators::{And, and};
pub use crate::field::FieldId;
pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};
pub use crate::mask::{MaskOptions, PostalCodeOverflow, mask_number, mask_postal_code, mask_state};
pub use crate::validators::*;
