//! In-memory adapters for headless hosts and tests

use std::collections::BTreeSet;
use std::sync::Arc;

use endereco_validator::FieldId;
use parking_lot::Mutex;

use crate::config::FormConfig;
use crate::error::FormError;
use crate::field::{FieldHandle, Marker};
use crate::form::FormValidator;
use crate::notify::Notifier;

// ============================================================================
// FIELD
// ============================================================================

/// A [`FieldHandle`] backed by plain memory.
#[derive(Debug, Default)]
pub struct MemoryField {
    state: Mutex<MemoryFieldState>,
}

#[derive(Debug, Default)]
struct MemoryFieldState {
    value: String,
    markers: BTreeSet<Marker>,
    focus_count: usize,
    detached: bool,
}

impl MemoryField {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field holding `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        let field = Self::new();
        field.state.lock().value = value.into();
        field
    }

    /// Markers currently present, in a stable order.
    pub fn markers(&self) -> Vec<Marker> {
        self.state.lock().markers.iter().copied().collect()
    }

    /// How many times the validator moved focus here.
    pub fn focus_count(&self) -> usize {
        self.state.lock().focus_count
    }

    /// Simulates removal of the element from the page.
    pub fn detach(&self) {
        self.state.lock().detached = true;
    }
}

impl FieldHandle for MemoryField {
    fn value(&self) -> String {
        self.state.lock().value.clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.state.lock().value);
    }

    fn add_marker(&self, marker: Marker) {
        self.state.lock().markers.insert(marker);
    }

    fn remove_marker(&self, marker: Marker) {
        self.state.lock().markers.remove(&marker);
    }

    fn has_marker(&self, marker: Marker) -> bool {
        self.state.lock().markers.contains(&marker)
    }

    fn focus(&self) {
        self.state.lock().focus_count += 1;
    }

    fn is_attached(&self) -> bool {
        !self.state.lock().detached
    }
}

// ============================================================================
// NOTIFIER
// ============================================================================

/// A notification captured by [`CapturingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Reported through [`Notifier::error`].
    Error(String),
    /// Reported through [`Notifier::success`].
    Success(String),
}

/// A [`Notifier`] that records every message.
#[derive(Debug, Default)]
pub struct CapturingNotifier {
    captured: Mutex<Vec<Notification>>,
}

impl CapturingNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.captured.lock().clone()
    }

    /// Error messages so far.
    pub fn errors(&self) -> Vec<String> {
        self.captured
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Error(message) => Some(message.clone()),
                Notification::Success(_) => None,
            })
            .collect()
    }

    /// Success messages so far.
    pub fn successes(&self) -> Vec<String> {
        self.captured
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Success(message) => Some(message.clone()),
                Notification::Error(_) => None,
            })
            .collect()
    }

    /// Forgets everything captured.
    pub fn clear(&self) {
        self.captured.lock().clear();
    }
}

impl Notifier for CapturingNotifier {
    fn error(&self, message: &str) {
        self.captured
            .lock()
            .push(Notification::Error(message.to_owned()));
    }

    fn success(&self, message: &str) {
        self.captured
            .lock()
            .push(Notification::Success(message.to_owned()));
    }
}

// ============================================================================
// FORM
// ============================================================================

/// A complete form wired to in-memory fields and a capturing notifier.
pub struct MemoryForm {
    /// The validator under control.
    pub validator: Arc<FormValidator>,
    /// Captured notifications.
    pub notifier: Arc<CapturingNotifier>,
    fields: [Arc<MemoryField>; 5],
}

impl MemoryForm {
    /// Builds a form with default configuration on the current runtime.
    pub fn new() -> Result<Self, FormError> {
        Self::with_config(FormConfig::default())
    }

    /// Builds a form with `config` on the current runtime.
    pub fn with_config(config: FormConfig) -> Result<Self, FormError> {
        let fields: [Arc<MemoryField>; 5] = std::array::from_fn(|_| Arc::new(MemoryField::new()));
        let notifier = Arc::new(CapturingNotifier::new());

        let mut builder = FormValidator::builder()
            .config(config)
            .notifier(Arc::clone(&notifier) as Arc<dyn Notifier>);
        for (id, field) in FieldId::ALL.into_iter().zip(&fields) {
            builder = builder.field(id, Arc::clone(field) as Arc<dyn FieldHandle>);
        }

        Ok(Self {
            validator: Arc::new(builder.build()?),
            notifier,
            fields,
        })
    }

    /// The in-memory handle of `field`.
    pub fn field(&self, field: FieldId) -> &Arc<MemoryField> {
        &self.fields[field as usize]
    }

    /// Replaces the raw text of `field` and fires an input event, the way a
    /// keystroke would.
    pub fn type_into(&self, field: FieldId, raw: &str) {
        self.field(field).set_value(raw);
        self.validator.on_input(field);
    }

    /// Fills the four required fields and the complement without firing
    /// events.
    pub fn fill(&self, values: [&str; 5]) {
        for (field, value) in FieldId::ALL.into_iter().zip(values) {
            self.field(field).set_value(value);
        }
    }
}

impl std::fmt::Debug for MemoryForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryForm")
            .field("notifier", &self.notifier)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
