//! Headless form session
//!
//! Drives the address form from a scripted sequence of events, the way a
//! terminal or test host would, and prints every notification.

use std::sync::Arc;
use std::time::Duration;

use endereco_form::{
    FieldHandle, FieldId, FormConfig, FormEvent, FormValidator, MemoryField, Notifier,
};

/// Prints notifications instead of showing an alert.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        println!("   ✗ {message}");
    }

    fn success(&self, message: &str) {
        println!("   ✓ {message}");
    }
}

fn dump(fields: &[(FieldId, Arc<MemoryField>)]) {
    for (id, field) in fields {
        let classes: Vec<_> = field.markers().iter().map(|m| m.class_name()).collect();
        println!("   {:<12} {:<20} {classes:?}", id.label(), field.value());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _log = endereco_log::auto_init()?;

    println!("=== Address Form: Headless Session ===\n");

    let fields: Vec<_> = FieldId::ALL
        .into_iter()
        .map(|id| (id, Arc::new(MemoryField::new())))
        .collect();

    let mut builder = FormValidator::builder()
        .config(FormConfig::from_json(r#"{"success_delay": "200ms"}"#)?)
        .notifier(Arc::new(ConsoleNotifier));
    for (id, field) in &fields {
        builder = builder.field(*id, Arc::clone(field) as Arc<dyn FieldHandle>);
    }
    let form = Arc::new(builder.build()?);
    let (events, task) = form.events();

    let type_into = |id: FieldId, raw: &str| -> Result<(), Box<dyn std::error::Error>> {
        fields[id as usize].1.set_value(raw);
        events.send(FormEvent::Focus(id))?;
        events.send(FormEvent::Input(id))?;
        events.send(FormEvent::Blur(id))?;
        Ok(())
    };

    // 1. Submit with a short street
    println!("1. Submitting with a short street...");
    type_into(FieldId::PostalCode, "01310100")?;
    type_into(FieldId::Street, "Av")?;
    type_into(FieldId::Number, "1578")?;
    type_into(FieldId::State, "sp")?;
    events.send(FormEvent::Submit)?;
    tokio::time::sleep(Duration::from_millis(50)).await;
    dump(&fields);
    println!();

    // 2. Fix it and submit again
    println!("2. Fixing the street and resubmitting...");
    type_into(FieldId::Street, "Avenida Paulista")?;
    events.send(FormEvent::Submit)?;
    tokio::time::sleep(Duration::from_millis(600)).await;
    dump(&fields);
    println!();

    drop(events);
    task.await?;

    println!("=== Session finished ===");
    Ok(())
}
