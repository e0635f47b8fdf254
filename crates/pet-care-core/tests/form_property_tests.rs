//! Property tests for field validation.

use pet_care_core::form::{
    validate_field, Field, OWNER_NAME_TOO_SHORT, PET_AGE_MALFORMED, PET_AGE_MISSING,
    SYMPTOMS_TOO_SHORT,
};
use pet_care_core::models::ConsultationForm;
use proptest::prelude::*;

fn with(field: Field, value: &str) -> ConsultationForm {
    let mut form = ConsultationForm::default();
    match field {
        Field::OwnerName => form.owner_name = value.to_string(),
        Field::PetAge => form.pet_age = value.to_string(),
        Field::Symptoms => form.symptoms = value.to_string(),
        other => panic!("unsupported field {}", other),
    }
    form
}

fn message(field: Field, value: &str) -> Option<&'static str> {
    validate_field(&with(field, value), field)
        .err()
        .map(|e| e.message)
}

proptest! {
    #[test]
    fn owner_name_under_two_units_fails(name in "[\\x{20}-\\x{D7FF}]{0,1}") {
        prop_assert_eq!(message(Field::OwnerName, &name), Some(OWNER_NAME_TOO_SHORT));
    }

    #[test]
    fn owner_name_two_or_more_chars_passes(name in "\\PC{2,40}") {
        prop_assert_eq!(message(Field::OwnerName, &name), None);
    }

    #[test]
    fn owner_name_single_astral_char_passes(name in "[\\x{1F300}-\\x{1FAFF}]") {
        prop_assert_eq!(message(Field::OwnerName, &name), None);
    }

    #[test]
    fn pet_age_bare_number_passes(n in 0u32..1000) {
        prop_assert_eq!(message(Field::PetAge, &n.to_string()), None);
    }

    #[test]
    fn pet_age_with_unit_passes(
        n in 0u32..100,
        unit in prop::sample::select(vec!["month", "months", "year", "years"]),
        gap in " {0,3}",
    ) {
        let age = format!("{}{}{}", n, gap, unit);
        prop_assert_eq!(message(Field::PetAge, &age), None);
    }

    #[test]
    fn pet_age_without_leading_digits_is_malformed(age in "[a-zA-Z][a-zA-Z ]{0,12}") {
        prop_assert_eq!(message(Field::PetAge, &age), Some(PET_AGE_MALFORMED));
    }

    #[test]
    fn symptoms_length_threshold(text in "[a-z ]{0,30}") {
        let expected = if text.encode_utf16().count() < 10 {
            Some(SYMPTOMS_TOO_SHORT)
        } else {
            None
        };
        prop_assert_eq!(message(Field::Symptoms, &text), expected);
    }
}

#[test]
fn pet_age_empty_is_missing() {
    assert_eq!(message(Field::PetAge, ""), Some(PET_AGE_MISSING));
}

#[test]
fn pet_age_rejects_other_units() {
    for age in ["2 weeks", "two years", "2.5 years", "2 Years", " 3"] {
        assert_eq!(message(Field::PetAge, age), Some(PET_AGE_MALFORMED), "{}", age);
    }
}
