//! Error types for validation failures
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// The `code` is stable and meant for programmatic handling; the `message`
/// is a short English description. User-facing text is produced by the
/// form layer from the field and the code, not from this message.
///
/// # Examples
///
/// ```rust
/// use endereco_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_field("logradouro")
///     .with_param("min", "5");
///
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "postal_code", "min_length"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field the error belongs to (the host element id).
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-2 params).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this is a missing-value error.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.code == "required"
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", "This field is required").with_field(field)
    }

    /// Creates a "min_length" error.
    pub fn min_length(field: impl Into<Cow<'static, str>>, min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_field(field)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }
}
