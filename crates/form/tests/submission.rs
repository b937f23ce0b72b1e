//! Submission validation and timed feedback

use std::time::Duration;

use endereco_form::{
    AddressRecord, FeedbackState, FieldHandle, FieldId, FieldStatus, FormConfig, Marker,
    MemoryForm, Notification, SUCCESS_MESSAGE, SubmitError,
};
use pretty_assertions::assert_eq;

const VALID: [&str; 5] = ["01310-100", "Avenida Paulista", "1578", "SP", ""];

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

// ============================================================================
// REJECTION
// ============================================================================

#[tokio::test(start_paused = true)]
async fn blank_postal_code_stops_submission() {
    let form = MemoryForm::new().unwrap();
    form.fill(["", "Avenida Paulista", "1578", "SP", ""]);

    let err = form.validator.submit().unwrap_err();

    assert_eq!(
        err,
        SubmitError::Missing {
            field: FieldId::PostalCode
        }
    );
    assert_eq!(form.notifier.errors(), vec!["Erro: O campo CEP é obrigatório!"]);

    let cep = form.field(FieldId::PostalCode);
    assert_eq!(cep.markers(), vec![Marker::Error, Marker::Shake]);
    assert_eq!(cep.focus_count(), 1);
    for field in [FieldId::Street, FieldId::Number, FieldId::State] {
        assert!(form.field(field).markers().is_empty(), "{field} was marked");
        assert_eq!(form.field(field).focus_count(), 0);
    }

    advance(2_000).await;
    assert!(form.notifier.successes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn first_failure_in_form_order_wins() {
    let form = MemoryForm::new().unwrap();
    form.fill(["01310-100", "Rua", "12a", "sp", ""]);

    let err = form.validator.submit().unwrap_err();

    assert_eq!(err.field(), FieldId::Street);
    assert_eq!(
        form.notifier.errors(),
        vec!["Erro: Logradouro deve ter no mínimo 5 caracteres!"]
    );
    assert_eq!(form.field(FieldId::Street).feedback(), FeedbackState::Error);
    assert_eq!(form.field(FieldId::Number).feedback(), FeedbackState::Neutral);
    assert_eq!(form.field(FieldId::State).feedback(), FeedbackState::Neutral);
}

#[tokio::test(start_paused = true)]
async fn each_format_message() {
    let cases = [
        (
            ["0131", "Avenida Paulista", "1578", "SP", ""],
            "Erro: CEP deve estar no formato 00000-000!",
        ),
        (
            ["01310-100", "Avenida Paulista", "1 578", "SP", ""],
            "Erro: O campo Número deve conter apenas dígitos!",
        ),
        (
            ["01310-100", "Avenida Paulista", "1578", "S", ""],
            "Erro: UF deve conter exatamente 2 letras maiúsculas (ex: SP, RJ, MG)!",
        ),
    ];

    for (values, message) in cases {
        let form = MemoryForm::new().unwrap();
        form.fill(values);
        assert!(form.validator.submit().is_err());
        assert_eq!(form.notifier.errors(), vec![message]);
    }
}

#[tokio::test(start_paused = true)]
async fn whitespace_only_counts_as_missing() {
    let form = MemoryForm::new().unwrap();
    form.fill(["01310-100", "Avenida Paulista", "   ", "SP", ""]);

    assert_eq!(
        form.validator.submit(),
        Err(SubmitError::Missing {
            field: FieldId::Number
        })
    );
}

#[tokio::test(start_paused = true)]
async fn error_replaces_success_marker() {
    let form = MemoryForm::new().unwrap();
    form.type_into(FieldId::State, "s");
    form.field(FieldId::State).add_marker(Marker::Success);
    form.fill(["01310-100", "Avenida Paulista", "1578", "S", ""]);

    assert!(form.validator.submit().is_err());
    assert!(!form.field(FieldId::State).has_marker(Marker::Success));
}

#[tokio::test(start_paused = true)]
async fn shake_is_cleared_after_its_duration() {
    let form = MemoryForm::new().unwrap();
    form.fill(["", "", "", "", ""]);
    assert!(form.validator.submit().is_err());

    let cep = form.field(FieldId::PostalCode);
    advance(499).await;
    assert!(cep.has_marker(Marker::Shake));

    advance(2).await;
    assert!(!cep.has_marker(Marker::Shake));
    assert!(cep.has_marker(Marker::Error));
}

#[tokio::test(start_paused = true)]
async fn submit_marks_every_field_touched() {
    let form = MemoryForm::new().unwrap();
    form.fill(["", "Avenida Paulista", "1578", "SP", ""]);
    assert!(form.validator.submit().is_err());

    assert_eq!(form.validator.status(FieldId::PostalCode), FieldStatus::Invalid);
    assert_eq!(form.validator.status(FieldId::State), FieldStatus::Valid);
    assert_eq!(form.validator.status(FieldId::Complement), FieldStatus::Valid);
}

// ============================================================================
// ACCEPTANCE
// ============================================================================

#[tokio::test(start_paused = true)]
async fn valid_form_is_accepted() {
    let form = MemoryForm::new().unwrap();
    form.fill(VALID);

    let record = form.validator.submit().unwrap();

    assert_eq!(
        record,
        AddressRecord {
            postal_code: "01310-100".into(),
            street: "Avenida Paulista".into(),
            number: "1578".into(),
            state: "SP".into(),
            complement: "Não informado".into(),
        }
    );
    for field in FieldId::REQUIRED {
        assert_eq!(
            form.field(field).markers(),
            vec![Marker::Success, Marker::PulseSuccess],
            "{field}"
        );
    }
    assert!(form.field(FieldId::Complement).markers().is_empty());
    assert!(form.notifier.errors().is_empty());
}

#[tokio::test(start_paused = true)]
async fn success_notification_is_delayed() {
    let form = MemoryForm::new().unwrap();
    form.fill(VALID);
    form.validator.submit().unwrap();

    advance(499).await;
    assert!(form.notifier.successes().is_empty());

    advance(2).await;
    assert_eq!(
        form.notifier.notifications(),
        vec![Notification::Success(SUCCESS_MESSAGE.to_owned())]
    );
}

#[tokio::test(start_paused = true)]
async fn pulse_is_cleared_after_its_duration() {
    let form = MemoryForm::new().unwrap();
    form.fill(VALID);
    form.validator.submit().unwrap();

    advance(299).await;
    assert!(form.field(FieldId::State).has_marker(Marker::PulseSuccess));

    advance(2).await;
    for field in FieldId::REQUIRED {
        assert_eq!(form.field(field).markers(), vec![Marker::Success], "{field}");
    }
}

#[tokio::test(start_paused = true)]
async fn values_are_trimmed_and_complement_kept() {
    let form = MemoryForm::new().unwrap();
    form.fill([" 01310-100 ", "  Avenida Paulista", "1578 ", " SP", " Apto 12 "]);

    let record = form.validator.submit().unwrap();
    assert_eq!(record.postal_code, "01310-100");
    assert_eq!(record.street, "Avenida Paulista");
    assert_eq!(record.state, "SP");
    assert_eq!(record.complement, "Apto 12");
}

#[tokio::test(start_paused = true)]
async fn custom_timings_and_placeholder() {
    let config = FormConfig {
        success_delay: Duration::from_millis(50),
        complement_placeholder: "-".into(),
        ..FormConfig::default()
    };
    let form = MemoryForm::with_config(config).unwrap();
    form.fill(VALID);

    assert_eq!(form.validator.submit().unwrap().complement, "-");

    advance(51).await;
    assert_eq!(form.notifier.successes(), vec![SUCCESS_MESSAGE]);
}

#[tokio::test(start_paused = true)]
async fn resubmission_after_fix() {
    let form = MemoryForm::new().unwrap();
    form.fill(["01310-100", "Avenida Paulista", "1578", "", ""]);
    assert!(form.validator.submit().is_err());

    form.type_into(FieldId::State, "rj");
    form.validator.submit().unwrap();

    advance(1_000).await;
    assert_eq!(
        form.notifier.notifications(),
        vec![
            Notification::Error("Erro: O campo UF é obrigatório!".to_owned()),
            Notification::Success(SUCCESS_MESSAGE.to_owned()),
        ]
    );
    assert_eq!(form.field(FieldId::State).markers(), vec![Marker::Success]);
}

// ============================================================================
// CANCELLATION
// ============================================================================

#[tokio::test(start_paused = true)]
async fn detach_cancels_field_callbacks() {
    let form = MemoryForm::new().unwrap();
    form.fill(VALID);
    form.validator.submit().unwrap();

    form.validator.detach(FieldId::Street);
    advance(1_000).await;

    assert!(form.field(FieldId::Street).has_marker(Marker::PulseSuccess));
    assert!(!form.field(FieldId::Number).has_marker(Marker::PulseSuccess));
    assert_eq!(form.notifier.successes(), vec![SUCCESS_MESSAGE]);
}

#[tokio::test(start_paused = true)]
async fn detached_handle_is_left_alone() {
    let form = MemoryForm::new().unwrap();
    form.fill(["", "", "", "", ""]);
    assert!(form.validator.submit().is_err());

    form.field(FieldId::PostalCode).detach();
    advance(1_000).await;

    assert!(form.field(FieldId::PostalCode).has_marker(Marker::Shake));
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_success_notification() {
    let form = MemoryForm::new().unwrap();
    form.fill(VALID);
    form.validator.submit().unwrap();

    form.validator.shutdown();
    advance(1_000).await;

    assert!(form.validator.is_shutdown());
    assert!(form.notifier.successes().is_empty());
    assert!(form.field(FieldId::PostalCode).has_marker(Marker::PulseSuccess));
}

#[tokio::test(start_paused = true)]
async fn dropping_the_form_cancels_callbacks() {
    let form = MemoryForm::new().unwrap();
    form.fill(VALID);
    form.validator.submit().unwrap();

    let notifier = std::sync::Arc::clone(&form.notifier);
    let cep = std::sync::Arc::clone(form.field(FieldId::PostalCode));
    drop(form);
    advance(1_000).await;

    assert!(notifier.successes().is_empty());
    assert!(cep.has_marker(Marker::PulseSuccess));
}
