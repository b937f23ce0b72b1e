//! Host events and the dispatch loop

use std::sync::Arc;

use endereco_validator::FieldId;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::form::FormValidator;

/// An element event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "field", rename_all = "snake_case")]
pub enum FormEvent {
    /// The text of a field changed.
    Input(FieldId),
    /// A field lost focus.
    Blur(FieldId),
    /// A field gained focus.
    Focus(FieldId),
    /// The form was submitted.
    Submit,
}

impl FormEvent {
    /// The field the event targets, if any.
    pub const fn field(self) -> Option<FieldId> {
        match self {
            FormEvent::Input(field) | FormEvent::Blur(field) | FormEvent::Focus(field) => {
                Some(field)
            }
            FormEvent::Submit => None,
        }
    }
}

/// Sending half of a form's event queue.
pub type EventSender = mpsc::UnboundedSender<FormEvent>;

impl FormValidator {
    /// Routes one event to its handler.
    ///
    /// A rejected submission has already been reported through the notifier.
    pub fn dispatch(&self, event: FormEvent) {
        tracing::trace!(?event, "dispatching form event");

        match event {
            FormEvent::Input(field) => self.on_input(field),
            FormEvent::Blur(field) => self.on_blur(field),
            FormEvent::Focus(field) => self.on_focus(field),
            FormEvent::Submit => {
                // the notifier has already shown the rejection
                if let Err(err) = self.submit() {
                    tracing::trace!(field = err.field().element_id(), %err, "queued submission rejected");
                }
            }
        }
    }

    /// Dispatches events until the queue closes or the form shuts down.
    pub async fn run(&self, mut events: mpsc::UnboundedReceiver<FormEvent>) {
        let shutdown = self.shutdown_token();

        loop {
            tokio::select! {
                biased;
                () = shutdown.cancelled() => {
                    tracing::debug!("form shut down, leaving event loop");
                    break;
                }
                event = events.recv() => match event {
                    Some(event) => self.dispatch(event),
                    None => {
                        tracing::debug!("event queue closed");
                        break;
                    }
                },
            }
        }
    }

    /// Spawns [`FormValidator::run`] and returns the queue feeding it.
    ///
    /// The loop keeps the validator alive until every sender is dropped or
    /// [`FormValidator::shutdown`] is called.
    pub fn events(self: &Arc<Self>) -> (EventSender, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let form = Arc::clone(self);
        let task = self
            .runtime()
            .spawn(async move { form.run(rx).await });
        (tx, task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_field() {
        assert_eq!(FormEvent::Blur(FieldId::State).field(), Some(FieldId::State));
        assert_eq!(FormEvent::Submit.field(), None);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&FormEvent::Input(FieldId::PostalCode)).unwrap();
        assert_eq!(json, r#"{"type":"input","field":"postal_code"}"#);

        let submit: FormEvent = serde_json::from_str(r#"{"type":"submit"}"#).unwrap();
        assert_eq!(submit, FormEvent::Submit);
    }
}
