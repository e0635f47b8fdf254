//! Field validation rules for the consultation form.
//!
//! Each field has an ordered list of rules; the first failing rule supplies
//! the field's error message. Lengths count characters, not bytes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::models::{ConsultationForm, ConsultationRequest};

pub const OWNER_NAME_TOO_SHORT: &str = "Your name is too short";
pub const EMAIL_INVALID: &str = "Enter a valid email";
pub const PHONE_TOO_SHORT: &str = "Enter a valid phone";
pub const PHONE_TOO_LONG: &str = "Phone seems too long";
pub const PET_TYPE_MISSING: &str = "Select a pet type";
pub const PET_AGE_MISSING: &str = "Provide your pet's age";
pub const PET_AGE_MALFORMED: &str = "Examples: 6 months, 2 years, 3";
pub const SYMPTOMS_TOO_SHORT: &str = "Describe the symptoms (min 10 chars)";
pub const URGENCY_MISSING: &str = "Select urgency";

const OWNER_NAME_MIN: usize = 2;
const PHONE_MIN: usize = 7;
const PHONE_MAX: usize = 20;
const SYMPTOMS_MIN: usize = 10;

// Rust's regex crate has no lookaround, so the leading-dot and double-dot
// checks live in `is_valid_email`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern compiles")
});

static PET_AGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\s*(?:months?|years?))?$").expect("pet age pattern compiles")
});

/// A consultation form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    OwnerName,
    Email,
    Phone,
    PetType,
    PetAge,
    Symptoms,
    Urgency,
}

impl Field {
    /// Fields in form order.
    pub const ALL: [Field; 7] = [
        Field::OwnerName,
        Field::Email,
        Field::Phone,
        Field::PetType,
        Field::PetAge,
        Field::Symptoms,
        Field::Urgency,
    ];

    /// Form field name (camelCase, as submitted).
    pub fn name(self) -> &'static str {
        match self {
            Field::OwnerName => "ownerName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::PetType => "petType",
            Field::PetAge => "petAge",
            Field::Symptoms => "symptoms",
            Field::Urgency => "urgency",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::OwnerName => "Your Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::PetType => "Pet Type",
            Field::PetAge => "Pet Age",
            Field::Symptoms => "Describe Symptoms",
            Field::Urgency => "Urgency",
        }
    }

    /// Example value shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::OwnerName => "Alex Doe",
            Field::Email => "you@example.com",
            Field::Phone => "+1 555-1234",
            Field::PetType => "Select pet",
            Field::PetAge => "2 years",
            Field::Symptoms => "Vomiting, lethargy since yesterday...",
            Field::Urgency => "Select urgency",
        }
    }

    pub fn is_select(self) -> bool {
        matches!(self, Field::PetType | Field::Urgency)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the camelCase form name or its snake_case/kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Field::ALL
            .into_iter()
            .find(|f| f.name().to_lowercase() == squashed)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A field-scoped validation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every failing field of a form, in form order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field, error.message);
    }

    pub fn remove(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors
            .iter()
            .map(|(field, message)| FieldError {
                field: *field,
                message: *message,
            })
    }
}

/// Length in UTF-16 code units, as browser form inputs count it.
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Validate a single field, as done on blur.
pub fn validate_field(form: &ConsultationForm, field: Field) -> Result<(), FieldError> {
    let fail = |message: &'static str| -> Result<(), FieldError> {
        Err(FieldError { field, message })
    };

    match field {
        Field::OwnerName => {
            if input_len(&form.owner_name) < OWNER_NAME_MIN {
                return fail(OWNER_NAME_TOO_SHORT);
            }
        }
        Field::Email => {
            if !is_valid_email(&form.email) {
                return fail(EMAIL_INVALID);
            }
        }
        Field::Phone => {
            let len = input_len(&form.phone);
            if len < PHONE_MIN {
                return fail(PHONE_TOO_SHORT);
            }
            if len > PHONE_MAX {
                return fail(PHONE_TOO_LONG);
            }
        }
        Field::PetType => {
            if form.pet_type.is_none() {
                return fail(PET_TYPE_MISSING);
            }
        }
        Field::PetAge => {
            if form.pet_age.is_empty() {
                return fail(PET_AGE_MISSING);
            }
            if !PET_AGE_RE.is_match(&form.pet_age) {
                return fail(PET_AGE_MALFORMED);
            }
        }
        Field::Symptoms => {
            if input_len(&form.symptoms) < SYMPTOMS_MIN {
                return fail(SYMPTOMS_TOO_SHORT);
            }
        }
        Field::Urgency => {
            if form.urgency.is_none() {
                return fail(URGENCY_MISSING);
            }
        }
    }

    Ok(())
}

/// Validate every field, as done on submit.
pub fn validate_all(form: &ConsultationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in Field::ALL {
        if let Err(e) = validate_field(form, field) {
            errors.insert(e);
        }
    }
    errors
}

/// Validate a form and, if it passes, stamp it as a request.
pub fn validate(form: &ConsultationForm) -> Result<ConsultationRequest, ValidationErrors> {
    let errors = validate_all(form);
    match (form.pet_type, form.urgency) {
        (Some(pet_type), Some(urgency)) if errors.is_empty() => {
            Ok(ConsultationRequest::new(form, pet_type, urgency))
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConsultPetType, Urgency};

    fn valid_form() -> ConsultationForm {
        ConsultationForm {
            owner_name: "Alex Doe".into(),
            email: "a@b.com".into(),
            phone: "555-1234".into(),
            pet_type: Some(ConsultPetType::Dog),
            pet_age: "2 years".into(),
            symptoms: "Vomiting since yesterday morning".into(),
            urgency: Some(Urgency::Urgent),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_all(&valid_form()).is_empty());
        let request = validate(&valid_form()).unwrap();
        assert_eq!(request.pet_type, ConsultPetType::Dog);
        assert_eq!(request.urgency, Urgency::Urgent);
    }

    #[test]
    fn test_default_form_errors() {
        let errors = validate_all(&ConsultationForm::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::OwnerName,
                Field::Email,
                Field::Phone,
                Field::PetAge,
                Field::Symptoms
            ]
        );
        assert_eq!(errors.get(Field::PetAge), Some(PET_AGE_MISSING));
    }

    #[test]
    fn test_email_grammar() {
        for ok in ["a@b.com", "first.last+tag@mail.example.org", "o'brien@x.io"] {
            assert!(is_valid_email(ok), "{} should pass", ok);
        }
        for bad in [
            "",
            "plain",
            "@b.com",
            "a@b",
            "a@b.c",
            ".a@b.com",
            "a..b@c.com",
            "a.@b.com",
            "a@-b.com",
            "a b@c.com",
        ] {
            assert!(!is_valid_email(bad), "{} should fail", bad);
        }
    }

    #[test]
    fn test_phone_bounds() {
        let mut form = valid_form();
        form.phone = "123456".into();
        assert_eq!(
            validate_field(&form, Field::Phone).unwrap_err().message,
            PHONE_TOO_SHORT
        );
        form.phone = "1234567".into();
        assert!(validate_field(&form, Field::Phone).is_ok());
        form.phone = "1".repeat(20);
        assert!(validate_field(&form, Field::Phone).is_ok());
        form.phone = "1".repeat(21);
        assert_eq!(
            validate_field(&form, Field::Phone).unwrap_err().message,
            PHONE_TOO_LONG
        );
    }

    #[test]
    fn test_pet_age_patterns() {
        let mut form = valid_form();
        for ok in ["3", "6 months", "1 month", "2years", "10   years", "1 year"] {
            form.pet_age = ok.into();
            assert!(validate_field(&form, Field::PetAge).is_ok(), "{}", ok);
        }
        for bad in ["two", "2 weeks", "2 Years", " 2", "2 years old", "-1", "1.5"] {
            form.pet_age = bad.into();
            assert_eq!(
                validate_field(&form, Field::PetAge).unwrap_err().message,
                PET_AGE_MALFORMED,
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_select_fields_required() {
        let mut form = valid_form();
        form.pet_type = None;
        form.urgency = None;
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::PetType), Some(PET_TYPE_MISSING));
        assert_eq!(errors.get(Field::Urgency), Some(URGENCY_MISSING));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        let mut form = valid_form();
        form.owner_name = "Zoë".into();
        assert!(validate_field(&form, Field::OwnerName).is_ok());
        form.owner_name = "é".into();
        assert!(validate_field(&form, Field::OwnerName).is_err());

        // Astral characters take two units each
        form.owner_name = "😀".into();
        assert!(validate_field(&form, Field::OwnerName).is_ok());
        form.symptoms = "🤒🤒🤒🤒🤒".into();
        assert!(validate_field(&form, Field::Symptoms).is_ok());
        form.phone = "📞📞📞📞📞📞📞📞📞📞📞".into();
        assert_eq!(
            validate_field(&form, Field::Phone).map_err(|e| e.message),
            Err(PHONE_TOO_LONG)
        );
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("ownerName".parse::<Field>().unwrap(), Field::OwnerName);
        assert_eq!("owner_name".parse::<Field>().unwrap(), Field::OwnerName);
        assert_eq!("pet-age".parse::<Field>().unwrap(), Field::PetAge);
        assert!("age".parse::<Field>().is_err());
    }
}
