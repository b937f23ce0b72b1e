//! Deferred feedback tasks
//!
//! Timed effects (clearing `shake` and `pulse-success`, the delayed success
//! notification) run as tokio tasks that race their delay against a
//! [`CancellationToken`]. Every form owns a root token; every field gets a
//! child token that is cancelled when the field is detached, so a callback
//! never outlives the element it was scheduled for.

use std::collections::HashMap;
use std::time::Duration;

use endereco_validator::FieldId;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Lifetime a deferred task is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskScope {
    /// Cancelled when the field is detached or the form shuts down.
    Field(FieldId),
    /// Cancelled when the form shuts down.
    Form,
}

/// Spawns deferred tasks with scoped cancellation.
#[derive(Debug)]
pub struct Scheduler {
    runtime: Handle,
    root: CancellationToken,
    fields: Mutex<HashMap<FieldId, CancellationToken>>,
}

impl Scheduler {
    /// Creates a scheduler spawning onto `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            root: CancellationToken::new(),
            fields: Mutex::new(HashMap::new()),
        }
    }

    /// Runtime the tasks are spawned onto.
    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    /// Token governing tasks in `scope`.
    pub fn token(&self, scope: TaskScope) -> CancellationToken {
        match scope {
            TaskScope::Form => self.root.clone(),
            TaskScope::Field(field) => self
                .fields
                .lock()
                .entry(field)
                .or_insert_with(|| self.root.child_token())
                .clone(),
        }
    }

    /// Runs `task` after `delay` unless `scope` is cancelled first.
    ///
    /// The returned handle resolves to `true` if the task ran. Dropping it
    /// detaches the task.
    pub fn defer<F>(&self, scope: TaskScope, delay: Duration, task: F) -> JoinHandle<bool>
    where
        F: FnOnce() + Send + 'static,
    {
        let cancel = self.token(scope);

        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    tracing::trace!(?scope, "deferred task cancelled");
                    false
                }
                () = tokio::time::sleep(delay) => {
                    task();
                    true
                }
            }
        })
    }

    /// Cancels every pending task of `field`.
    ///
    /// Tasks scheduled afterwards get a fresh token.
    pub fn release(&self, field: FieldId) {
        if let Some(token) = self.fields.lock().remove(&field) {
            token.cancel();
            tracing::debug!(field = field.element_id(), "released pending field tasks");
        }
    }

    /// Cancels every pending and future task.
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    /// Whether [`Scheduler::shutdown`] has been called.
    pub fn is_shutdown(&self) -> bool {
        self.root.is_cancelled()
    }
}
