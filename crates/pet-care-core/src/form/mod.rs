//! Consultation form pipeline.
//!
//! ```text
//! Pristine → Editing → Validating → {Valid, Invalid} → Submitting → Submitted
//! ```
//!
//! Blur validates one field; submit validates all of them. A rejected submit
//! keeps every entered value. A successful submit hands the request to a
//! [`SubmissionSink`] and resets the form to its defaults.

mod rules;
mod sink;

pub use rules::*;
pub use sink::*;

use serde::Serialize;
use thiserror::Error;

use crate::models::{ConsultPetType, ConsultationForm, ConsultationRequest, Urgency};

/// Submit errors.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Form is invalid: {0}")]
    Invalid(ValidationErrors),

    #[error("Submission failed: {0}")]
    Sink(#[from] SinkError),
}

pub type SubmitResult<T> = Result<T, SubmitError>;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    /// Freshly mounted or reset, untouched
    Pristine,
    /// A field changed since the last validation
    Editing,
    Validating,
    /// No recorded field errors
    Valid,
    /// At least one recorded field error
    Invalid,
    Submitting,
    /// Last submit was accepted and the form was reset
    Submitted,
}

/// Outcome of an accepted submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub notice: Notice,
    pub request: ConsultationRequest,
}

/// A single consultation form instance.
#[derive(Debug, Clone)]
pub struct ConsultationFormState {
    values: ConsultationForm,
    errors: ValidationErrors,
    phase: FormPhase,
    submit_count: u32,
}

impl Default for ConsultationFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsultationFormState {
    /// Mount a form with default values.
    pub fn new() -> Self {
        Self {
            values: ConsultationForm::default(),
            errors: ValidationErrors::new(),
            phase: FormPhase::Pristine,
            submit_count: 0,
        }
    }

    pub fn values(&self) -> &ConsultationForm {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Current error message for a field.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Rejected submit attempts since the last reset.
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Whether any value differs from the defaults.
    pub fn is_dirty(&self) -> bool {
        self.values != ConsultationForm::default()
    }

    /// Set a field from its text representation.
    ///
    /// Select fields take their option label ("Dog", "Urgent"); anything else,
    /// including an empty string, leaves the select unset. After a rejected
    /// submit, the changed field is re-validated immediately.
    pub fn change(&mut self, field: Field, value: &str) {
        match field {
            Field::OwnerName => self.values.owner_name = value.to_string(),
            Field::Email => self.values.email = value.to_string(),
            Field::Phone => self.values.phone = value.to_string(),
            Field::PetType => self.values.pet_type = ConsultPetType::from_label(value),
            Field::PetAge => self.values.pet_age = value.to_string(),
            Field::Symptoms => self.values.symptoms = value.to_string(),
            Field::Urgency => self.values.urgency = Urgency::from_label(value),
        }
        self.phase = FormPhase::Editing;

        if self.submit_count > 0 {
            self.revalidate(field);
        }
    }

    /// Validate one field after it loses focus.
    pub fn blur(&mut self, field: Field) -> Option<FieldError> {
        self.revalidate(field)
    }

    fn revalidate(&mut self, field: Field) -> Option<FieldError> {
        self.phase = FormPhase::Validating;
        let result = validate_field(&self.values, field);
        match result {
            Ok(()) => self.errors.remove(field),
            Err(e) => self.errors.insert(e),
        }
        self.phase = if self.errors.is_empty() {
            FormPhase::Valid
        } else {
            FormPhase::Invalid
        };
        result.err()
    }

    /// Validate every field and, if all pass, hand the request to `sink`.
    pub fn submit<S>(&mut self, sink: &mut S) -> SubmitResult<Submitted>
    where
        S: SubmissionSink + ?Sized,
    {
        self.phase = FormPhase::Validating;

        let request = match validate(&self.values) {
            Ok(request) => request,
            Err(errors) => {
                tracing::debug!(failed = errors.len(), "consultation submit blocked");
                self.errors = errors.clone();
                self.submit_count += 1;
                self.phase = FormPhase::Invalid;
                return Err(SubmitError::Invalid(errors));
            }
        };

        self.errors.clear();
        self.phase = FormPhase::Submitting;

        if let Err(e) = sink.submit(&request) {
            tracing::warn!(error = %e, "consultation sink failed");
            self.phase = FormPhase::Valid;
            return Err(e.into());
        }

        self.reset();
        self.phase = FormPhase::Submitted;

        Ok(Submitted {
            notice: SUBMITTED_NOTICE,
            request,
        })
    }

    /// Restore defaults and clear errors.
    pub fn reset(&mut self) {
        self.values = ConsultationForm::default();
        self.errors.clear();
        self.submit_count = 0;
        self.phase = FormPhase::Pristine;
    }
}
