//! Accepted submissions

use serde::{Deserialize, Serialize};

/// Trimmed values of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// CEP, `00000-000`.
    #[serde(rename = "cep")]
    pub postal_code: String,
    /// Logradouro.
    #[serde(rename = "logradouro")]
    pub street: String,
    /// Número.
    #[serde(rename = "numero")]
    pub number: String,
    /// UF.
    #[serde(rename = "uf")]
    pub state: String,
    /// Complemento, or the configured placeholder when left blank.
    #[serde(rename = "complemento")]
    pub complement: String,
}
