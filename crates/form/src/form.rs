//! The form validator
//!
//! [`FormValidator`] owns the wiring between field handles, the notifier and
//! the deferred task scheduler. Hosts call [`FormValidator::on_input`],
//! [`FormValidator::on_blur`], [`FormValidator::on_focus`] and
//! [`FormValidator::submit`] from their element listeners, or push
//! [`FormEvent`](crate::FormEvent)s into [`FormValidator::run`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use endereco_validator::FieldId;
use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::config::FormConfig;
use crate::error::{FormError, SubmitError};
use crate::field::{FeedbackState, FieldHandle, FieldStatus, Marker};
use crate::notify::{Notifier, SUCCESS_MESSAGE};
use crate::record::AddressRecord;
use crate::schedule::{Scheduler, TaskScope};

/// One handle per form field.
struct FieldHandles {
    postal_code: Arc<dyn FieldHandle>,
    street: Arc<dyn FieldHandle>,
    number: Arc<dyn FieldHandle>,
    state: Arc<dyn FieldHandle>,
    complement: Arc<dyn FieldHandle>,
}

impl FieldHandles {
    fn get(&self, field: FieldId) -> &Arc<dyn FieldHandle> {
        match field {
            FieldId::PostalCode => &self.postal_code,
            FieldId::Street => &self.street,
            FieldId::Number => &self.number,
            FieldId::State => &self.state,
            FieldId::Complement => &self.complement,
        }
    }
}

/// Masks, live feedback and submit validation for the address form.
pub struct FormValidator {
    fields: FieldHandles,
    notifier: Arc<dyn Notifier>,
    config: FormConfig,
    scheduler: Scheduler,
    touched: Mutex<HashSet<FieldId>>,
}

/// Builder for [`FormValidator`].
#[derive(Default)]
pub struct FormValidatorBuilder {
    handles: HashMap<FieldId, Arc<dyn FieldHandle>>,
    notifier: Option<Arc<dyn Notifier>>,
    config: FormConfig,
    runtime: Option<Handle>,
}

impl FormValidatorBuilder {
    /// Registers the handle of `field`, replacing any earlier one.
    pub fn field(mut self, field: FieldId, handle: Arc<dyn FieldHandle>) -> Self {
        self.handles.insert(field, handle);
        self
    }

    /// Sets the notifier.
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Sets the configuration.
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Runtime for deferred tasks; defaults to the current one.
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Builds the validator.
    ///
    /// # Errors
    ///
    /// - [`FormError::MissingField`] if any of the five fields has no handle
    /// - [`FormError::MissingNotifier`] if no notifier was set
    /// - [`FormError::NoRuntime`] if no runtime was given and none is current
    pub fn build(mut self) -> Result<FormValidator, FormError> {
        let mut take = |field: FieldId| {
            self.handles
                .remove(&field)
                .ok_or(FormError::MissingField(field))
        };

        let fields = FieldHandles {
            postal_code: take(FieldId::PostalCode)?,
            street: take(FieldId::Street)?,
            number: take(FieldId::Number)?,
            state: take(FieldId::State)?,
            complement: take(FieldId::Complement)?,
        };
        let notifier = self.notifier.ok_or(FormError::MissingNotifier)?;
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current()?,
        };

        Ok(FormValidator {
            fields,
            notifier,
            config: self.config,
            scheduler: Scheduler::new(runtime),
            touched: Mutex::new(HashSet::new()),
        })
    }
}

impl FormValidator {
    /// Starts building a validator.
    pub fn builder() -> FormValidatorBuilder {
        FormValidatorBuilder::default()
    }

    /// Active configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The handle registered for `field`.
    pub fn handle(&self, field: FieldId) -> &Arc<dyn FieldHandle> {
        self.fields.get(field)
    }

    /// Feedback currently shown on `field`.
    pub fn feedback(&self, field: FieldId) -> FeedbackState {
        self.fields.get(field).feedback()
    }

    /// Validity of `field` against its strict validator.
    pub fn status(&self, field: FieldId) -> FieldStatus {
        if !self.touched.lock().contains(&field) {
            return FieldStatus::Untouched;
        }

        let value = self.fields.get(field).value();
        if field.validate(value.trim()).is_ok() {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    // ========================================================================
    // LIVE FEEDBACK
    // ========================================================================

    /// Handles an input event: masks the value, then shows success while
    /// the value looks complete and nothing otherwise.
    pub fn on_input(&self, field: FieldId) {
        if !field.is_required() {
            return;
        }
        self.touch(field);

        let handle = self.fields.get(field);
        let raw = handle.value();
        let masked = field.mask(&raw, &self.config.mask);
        if masked != raw {
            tracing::debug!(field = field.element_id(), %raw, %masked, "input masked");
            handle.set_value(&masked);
        }

        if field.looks_complete(&masked) {
            handle.add_marker(Marker::Success);
            handle.remove_marker(Marker::Error);
        } else {
            handle.remove_marker(Marker::Success);
            handle.remove_marker(Marker::Error);
        }
    }

    /// Handles focus loss: a non-blank value failing its strict validator
    /// is marked as error. Success is never set here.
    pub fn on_blur(&self, field: FieldId) {
        if !field.is_required() {
            return;
        }
        self.touch(field);

        let handle = self.fields.get(field);
        let value = handle.value();
        let value = value.trim();
        if !value.is_empty() && field.validate_format(value).is_err() {
            tracing::trace!(field = field.element_id(), "blur left an invalid value");
            handle.add_marker(Marker::Error);
        }
    }

    /// Handles focus gain: clears the error marker, keeps success.
    pub fn on_focus(&self, field: FieldId) {
        if !field.is_required() {
            return;
        }
        self.touch(field);
        self.fields.get(field).remove_marker(Marker::Error);
    }

    // ========================================================================
    // SUBMISSION
    // ========================================================================

    /// Validates the required fields in order and stops at the first failure.
    ///
    /// On failure only the failing field is marked and the notifier gets its
    /// message. On success all four required fields are marked and the
    /// success notification follows after [`FormConfig::success_delay`].
    pub fn submit(&self) -> Result<AddressRecord, SubmitError> {
        self.touched.lock().extend(FieldId::ALL);

        let value = |field: FieldId| self.fields.get(field).value().trim().to_owned();
        let mut record = AddressRecord {
            postal_code: value(FieldId::PostalCode),
            street: value(FieldId::Street),
            number: value(FieldId::Number),
            state: value(FieldId::State),
            complement: value(FieldId::Complement),
        };

        let checks = [
            (FieldId::PostalCode, &record.postal_code),
            (FieldId::Street, &record.street),
            (FieldId::Number, &record.number),
            (FieldId::State, &record.state),
        ];
        for (field, value) in checks {
            if let Err(err) = Self::check(field, value) {
                tracing::debug!(field = field.element_id(), error = %err, "submission rejected");
                self.show_error(field, &err.to_string());
                return Err(err);
            }
        }

        for field in FieldId::REQUIRED {
            self.show_success(field);
        }

        if record.complement.is_empty() {
            record.complement.clone_from(&self.config.complement_placeholder);
        }
        self.announce_success(record.clone());

        Ok(record)
    }

    fn check(field: FieldId, value: &str) -> Result<(), SubmitError> {
        field.validate(value).map_err(|source| {
            if source.is_required() {
                SubmitError::Missing { field }
            } else {
                SubmitError::InvalidFormat { field, source }
            }
        })
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Cancels pending callbacks of `field`, e.g. before its element is
    /// removed from the page.
    pub fn detach(&self, field: FieldId) {
        self.scheduler.release(field);
    }

    /// Cancels every pending callback; later ones never run.
    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }

    /// Whether [`FormValidator::shutdown`] has been called.
    pub fn is_shutdown(&self) -> bool {
        self.scheduler.is_shutdown()
    }

    pub(crate) fn shutdown_token(&self) -> tokio_util::sync::CancellationToken {
        self.scheduler.token(TaskScope::Form)
    }

    pub(crate) fn runtime(&self) -> &Handle {
        self.scheduler.runtime()
    }

    // ========================================================================
    // SIDE EFFECTS
    // ========================================================================

    fn touch(&self, field: FieldId) {
        self.touched.lock().insert(field);
    }

    fn show_error(&self, field: FieldId, message: &str) {
        let handle = self.fields.get(field);
        handle.add_marker(Marker::Error);
        handle.add_marker(Marker::Shake);
        handle.remove_marker(Marker::Success);

        self.notifier.error(message);

        self.clear_marker_later(field, Marker::Shake, self.config.shake_duration);
        handle.focus();
    }

    fn show_success(&self, field: FieldId) {
        let handle = self.fields.get(field);
        handle.add_marker(Marker::Success);
        handle.add_marker(Marker::PulseSuccess);
        handle.remove_marker(Marker::Error);

        self.clear_marker_later(field, Marker::PulseSuccess, self.config.pulse_duration);
    }

    fn clear_marker_later(&self, field: FieldId, marker: Marker, delay: Duration) {
        let handle = Arc::clone(self.fields.get(field));
        self.scheduler
            .defer(TaskScope::Field(field), delay, move || {
                if handle.is_attached() {
                    handle.remove_marker(marker);
                } else {
                    tracing::warn!(
                        field = field.element_id(),
                        %marker,
                        "skipping marker removal on detached field"
                    );
                }
            });
    }

    fn announce_success(&self, record: AddressRecord) {
        let notifier = Arc::clone(&self.notifier);
        self.scheduler
            .defer(TaskScope::Form, self.config.success_delay, move || {
                notifier.success(SUCCESS_MESSAGE);

                match serde_json::to_string(&record) {
                    Ok(json) => tracing::info!(record = %json, "address registered"),
                    Err(e) => tracing::warn!(error = %e, "address registered but not serializable"),
                }
            });
    }
}

impl Drop for FormValidator {
    fn drop(&mut self) {
        self.scheduler.shutdown();
    }
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("config", &self.config)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
