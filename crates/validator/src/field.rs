//! The fields of the address form
//!
//! Each [`FieldId`] knows its label, its host element id, whether it is
//! required, how its input is masked, its "looks complete" heuristic and its
//! strict validator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidateExt, ValidationResult};
use crate::mask::{self, MaskOptions, POSTAL_CODE_MASKED_LEN};
use crate::validators::{STREET_MIN_CHARS, house_number, postal_code, required, state_code, street};

/// A field of the address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// CEP.
    PostalCode,
    /// Logradouro.
    Street,
    /// Número.
    Number,
    /// UF.
    State,
    /// Complemento.
    Complement,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 5] = [
        FieldId::PostalCode,
        FieldId::Street,
        FieldId::Number,
        FieldId::State,
        FieldId::Complement,
    ];

    /// Required fields in the order submission checks them.
    pub const REQUIRED: [FieldId; 4] = [
        FieldId::PostalCode,
        FieldId::Street,
        FieldId::Number,
        FieldId::State,
    ];

    /// Label shown to the user.
    pub const fn label(self) -> &'static str {
        match self {
            FieldId::PostalCode => "CEP",
            FieldId::Street => "Logradouro",
            FieldId::Number => "Número",
            FieldId::State => "UF",
            FieldId::Complement => "Complemento",
        }
    }

    /// Id of the host element bound to this field.
    pub const fn element_id(self) -> &'static str {
        match self {
            FieldId::PostalCode => "cep",
            FieldId::Street => "logradouro",
            FieldId::Number => "numero",
            FieldId::State => "uf",
            FieldId::Complement => "complemento",
        }
    }

    /// Looks a field up by its host element id.
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.element_id() == id)
    }

    /// Whether submission requires a value.
    pub const fn is_required(self) -> bool {
        !matches!(self, FieldId::Complement)
    }

    /// Applies the field's input mask.
    pub fn mask(self, raw: &str, options: &MaskOptions) -> String {
        match self {
            FieldId::PostalCode => mask::mask_postal_code(raw, options),
            FieldId::State => mask::mask_state(raw, options),
            FieldId::Number => mask::mask_number(raw),
            FieldId::Street | FieldId::Complement => raw.to_owned(),
        }
    }

    /// Lightweight typing heuristic. Advisory only, never a validity check.
    pub fn looks_complete(self, value: &str) -> bool {
        match self {
            FieldId::PostalCode => value.chars().count() == POSTAL_CODE_MASKED_LEN,
            FieldId::State => value.chars().count() == 2,
            FieldId::Number => !value.is_empty(),
            FieldId::Street => value.trim().chars().count() >= STREET_MIN_CHARS,
            FieldId::Complement => false,
        }
    }

    /// Runs the strict format validator, without the required check.
    ///
    /// The complement is free text and always passes.
    pub fn validate_format(self, value: &str) -> ValidationResult<()> {
        let result = match self {
            FieldId::PostalCode => postal_code().validate(value),
            FieldId::Street => street().validate(value),
            FieldId::Number => house_number().validate(value),
            FieldId::State => state_code().validate(value),
            FieldId::Complement => Ok(()),
        };
        result.map_err(|e| e.with_field(self.element_id()))
    }

    /// Runs the required check followed by the strict format validator.
    pub fn validate(self, value: &str) -> ValidationResult<()> {
        let result = match self {
            FieldId::PostalCode => required().and(postal_code()).validate(value),
            FieldId::Street => required().and(street()).validate(value),
            FieldId::Number => required().and(house_number()).validate(value),
            FieldId::State => required().and(state_code()).validate(value),
            FieldId::Complement => Ok(()),
        };
        result.map_err(|e| e.with_field(self.element_id()))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
