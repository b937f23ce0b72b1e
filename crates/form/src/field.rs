//! Field handle capability and visual state
//!
//! The validator never owns a rendering surface. The host hands it one
//! [`FieldHandle`] per input and styles the [`Marker`] class names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual state marker toggled on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    /// Field passed its check.
    Success,
    /// Field failed its check.
    Error,
    /// Transient error animation.
    Shake,
    /// Transient success animation.
    PulseSuccess,
}

impl Marker {
    /// CSS class the host styles for this marker.
    pub const fn class_name(self) -> &'static str {
        match self {
            Marker::Success => "success",
            Marker::Error => "error",
            Marker::Shake => "shake",
            Marker::PulseSuccess => "pulse-success",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Feedback shown on a field, derived from its markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackState {
    /// No success or error marker.
    #[default]
    Neutral,
    /// Success marker without an error marker.
    Success,
    /// Error marker present.
    Error,
}

/// Validity of a field as seen by the strict validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// No input, blur, focus or submit has involved the field yet.
    #[default]
    Untouched,
    /// Current value passes the required and format checks.
    Valid,
    /// Current value fails the required or format check.
    Invalid,
}

/// Capability over one input element of the host page.
///
/// Implementations must be cheap and non-blocking. `focus` must not feed a
/// focus event back into the validator: the validator calls it after an
/// error and would otherwise clear the error marker it just set.
pub trait FieldHandle: Send + Sync {
    /// Current text of the input.
    fn value(&self) -> String;

    /// Replaces the text of the input.
    fn set_value(&self, value: &str);

    /// Adds a marker; adding a present marker is a no-op.
    fn add_marker(&self, marker: Marker);

    /// Removes a marker; removing an absent marker is a no-op.
    fn remove_marker(&self, marker: Marker);

    /// Whether the marker is present.
    fn has_marker(&self, marker: Marker) -> bool;

    /// Moves input focus to the element.
    fn focus(&self);

    /// Whether the element still exists on the page.
    ///
    /// Deferred callbacks skip handles that report `false`.
    fn is_attached(&self) -> bool {
        true
    }

    /// Feedback derived from the markers.
    fn feedback(&self) -> FeedbackState {
        if self.has_marker(Marker::Error) {
            FeedbackState::Error
        } else if self.has_marker(Marker::Success) {
            FeedbackState::Success
        } else {
            FeedbackState::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(Marker::Success.class_name(), "success");
        assert_eq!(Marker::Error.class_name(), "error");
        assert_eq!(Marker::Shake.class_name(), "shake");
        assert_eq!(Marker::PulseSuccess.to_string(), "pulse-success");
    }

    #[test]
    fn test_marker_serializes_as_class_name() {
        assert_eq!(
            serde_json::to_string(&Marker::PulseSuccess).unwrap(),
            "\"pulse-success\""
        );
    }
}
