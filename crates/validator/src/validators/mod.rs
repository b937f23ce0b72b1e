//! Built-in validators
//!
//! # Examples
//!
//! ```rust
//! use endereco_validator::prelude::*;
//!
//! let cep = required().and(postal_code());
//! assert!(cep.validate("01310-100").is_ok());
//! assert!(validate_state("SP"));
//! ```

pub mod address;

pub use address::{
    HouseNumber, PostalCode, Required, STREET_MIN_CHARS, StateCode, Street, house_number,
    postal_code, required, state_code, street, validate_number, validate_postal_code,
    validate_state, validate_street,
};
