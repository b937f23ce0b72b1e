//! Error types

use endereco_validator::{FieldId, ValidationError};

/// Why a submission was rejected.
///
/// `Display` renders the exact text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A required field is blank.
    #[error("Erro: O campo {field} é obrigatório!")]
    Missing {
        /// The blank field
        field: FieldId,
    },

    /// A field failed its strict format check.
    #[error("{}", invalid_format_message(.field, .source))]
    InvalidFormat {
        /// The offending field
        field: FieldId,
        /// The validator failure
        #[source]
        source: ValidationError,
    },
}

impl SubmitError {
    /// The field that stopped the submission.
    pub fn field(&self) -> FieldId {
        match self {
            SubmitError::Missing { field } | SubmitError::InvalidFormat { field, .. } => *field,
        }
    }
}

fn invalid_format_message<'a>(field: &FieldId, source: &'a ValidationError) -> &'a str {
    match field {
        FieldId::PostalCode => "Erro: CEP deve estar no formato 00000-000!",
        FieldId::Street => "Erro: Logradouro deve ter no mínimo 5 caracteres!",
        FieldId::Number => "Erro: O campo Número deve conter apenas dígitos!",
        FieldId::State => "Erro: UF deve conter exatamente 2 letras maiúsculas (ex: SP, RJ, MG)!",
        // free text, submission never rejects it
        FieldId::Complement => &source.message,
    }
}

/// Faults while wiring a form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// No tokio runtime to schedule deferred feedback on.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    /// A field has no handle.
    #[error("no handle registered for field {0:?}")]
    MissingField(FieldId),

    /// No notifier was registered.
    #[error("no notifier registered")]
    MissingNotifier,

    /// Configuration document could not be read.
    #[error("invalid form configuration: {0}")]
    Config(#[from] serde_json::Error),
}
