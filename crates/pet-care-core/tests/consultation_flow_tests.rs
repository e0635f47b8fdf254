//! End-to-end consultation form tests.

use pet_care_core::db::Database;
use pet_care_core::form::{
    ConsultationFormState, Field, FormPhase, LoggingSink, SubmitError, SUBMITTED_NOTICE,
    SYMPTOMS_TOO_SHORT,
};
use pet_care_core::models::{ConsultPetType, ConsultationForm, Urgency};

fn fill(form: &mut ConsultationFormState, symptoms: &str) {
    form.change(Field::OwnerName, "Alex Doe");
    form.change(Field::Email, "alex@example.com");
    form.change(Field::Phone, "+1 555-1234");
    form.change(Field::PetType, "Cat");
    form.change(Field::PetAge, "3");
    form.change(Field::Symptoms, symptoms);
    form.change(Field::Urgency, "Soon");
}

#[test]
fn test_valid_submit_emits_request_and_resets() {
    let mut form = ConsultationFormState::new();
    fill(&mut form, "Sneezing and watery eyes for three days");

    let mut sink = LoggingSink::new();
    let submitted = form.submit(&mut sink).unwrap();

    assert_eq!(submitted.notice.title, "Consultation request sent");
    assert_eq!(submitted.notice, SUBMITTED_NOTICE);

    let request = submitted.request;
    assert_eq!(request.owner_name, "Alex Doe");
    assert_eq!(request.email, "alex@example.com");
    assert_eq!(request.pet_type, ConsultPetType::Cat);
    assert_eq!(request.urgency, Urgency::Soon);
    assert!(!request.request_id.is_empty());
    assert!(chrono::DateTime::parse_from_rfc3339(&request.submitted_at).is_ok());

    assert_eq!(sink.submitted(), 1);
    assert_eq!(form.values(), &ConsultationForm::default());
    assert_eq!(form.phase(), FormPhase::Submitted);
}

#[test]
fn test_short_symptoms_block_submit_and_keep_values() {
    let mut form = ConsultationFormState::new();
    fill(&mut form, "sick");

    let mut sink = LoggingSink::new();
    match form.submit(&mut sink) {
        Err(SubmitError::Invalid(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(Field::Symptoms), Some(SYMPTOMS_TOO_SHORT));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }

    assert_eq!(sink.submitted(), 0);
    assert_eq!(form.values().owner_name, "Alex Doe");
    assert_eq!(form.values().symptoms, "sick");
    assert_eq!(form.error(Field::Symptoms), Some(SYMPTOMS_TOO_SHORT));
    assert_eq!(form.phase(), FormPhase::Invalid);
}

#[test]
fn test_default_form_reports_every_required_field() {
    let mut form = ConsultationFormState::new();
    let err = form.submit(&mut LoggingSink::new()).unwrap_err();

    let SubmitError::Invalid(errors) = err else {
        panic!("expected validation failure");
    };
    let failed: Vec<Field> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        failed,
        vec![
            Field::OwnerName,
            Field::Email,
            Field::Phone,
            Field::PetAge,
            Field::Symptoms,
        ]
    );
}

#[test]
fn test_outbox_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outbox.db");

    let request_id = {
        let mut db = Database::open(&path).unwrap();
        let mut form = ConsultationFormState::new();
        fill(&mut form, "Limping on the front left paw");
        form.submit(&mut db).unwrap().request.request_id
    };

    let db = Database::open(&path).unwrap();
    assert_eq!(db.count_consultations().unwrap(), 1);
    let stored = db.get_consultation(&request_id).unwrap().unwrap();
    assert_eq!(stored.symptoms, "Limping on the front left paw");
    assert_eq!(stored.pet_type, ConsultPetType::Cat);
}

#[test]
fn test_ffi_core_round_trip() {
    let core = pet_care_core::open_pet_care_in_memory().unwrap();
    assert!(!core.form_values().unwrap().dirty);

    let panels = core.select_pet("Dog".to_string()).unwrap();
    assert_eq!(panels.titles[0], "Dog Feeding Guide");
    assert!(panels.feeding.is_some());

    for (field, value) in [
        ("ownerName", "Alex Doe"),
        ("email", "alex@example.com"),
        ("phone", "555-1234"),
        ("petType", "Dog"),
        ("petAge", "2 years"),
        ("symptoms", "Vomiting since yesterday morning"),
        ("urgency", "Urgent"),
    ] {
        core.form_change(field.to_string(), value.to_string()).unwrap();
    }
    assert!(core.form_values().unwrap().dirty);
    let notice = core.form_submit().unwrap();
    assert_eq!(notice.title, "Consultation request sent");
    assert!(!core.form_values().unwrap().dirty);

    let stored = core.list_consultations(10).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].request_id, notice.request_id);
    assert_eq!(stored[0].urgency, "Urgent");

    let cleared = core.clear_selection().unwrap();
    assert!(cleared.selected.is_none());
    assert!(cleared.feeding.is_none());
}
