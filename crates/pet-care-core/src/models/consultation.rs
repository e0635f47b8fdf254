//! Consultation request models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pet type choices offered by the consultation form.
///
/// This is not [`super::PetType`]: the form has no fish option and adds
/// "Other" for animals the care guide does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultPetType {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl ConsultPetType {
    pub const ALL: [ConsultPetType; 5] = [
        ConsultPetType::Dog,
        ConsultPetType::Cat,
        ConsultPetType::Bird,
        ConsultPetType::Rabbit,
        ConsultPetType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConsultPetType::Dog => "Dog",
            ConsultPetType::Cat => "Cat",
            ConsultPetType::Bird => "Bird",
            ConsultPetType::Rabbit => "Rabbit",
            ConsultPetType::Other => "Other",
        }
    }

    /// Parse a select option label (exact match, as the select emits it).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for ConsultPetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How soon the owner wants to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Routine,
    Soon,
    Urgent,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Routine, Urgency::Soon, Urgency::Urgent];

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Routine => "Routine",
            Urgency::Soon => "Soon",
            Urgency::Urgent => "Urgent",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw consultation form values, as edited by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationForm {
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    /// `None` when nothing is selected
    pub pet_type: Option<ConsultPetType>,
    /// Free text such as "6 months" or "3"
    pub pet_age: String,
    pub symptoms: String,
    /// `None` when nothing is selected
    pub urgency: Option<Urgency>,
}

impl Default for ConsultationForm {
    fn default() -> Self {
        Self {
            owner_name: String::new(),
            email: String::new(),
            phone: String::new(),
            pet_type: Some(ConsultPetType::Dog),
            pet_age: String::new(),
            symptoms: String::new(),
            urgency: Some(Urgency::Routine),
        }
    }
}

/// A consultation that passed validation and is ready for a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    /// Locally generated request ID
    pub request_id: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub pet_type: ConsultPetType,
    pub pet_age: String,
    pub symptoms: String,
    pub urgency: Urgency,
    /// Submission timestamp (RFC 3339)
    pub submitted_at: String,
}

impl ConsultationRequest {
    /// Stamp validated values with a fresh ID and timestamp.
    ///
    /// Callers go through [`crate::form::validate`], which is the only place
    /// that proves the select fields are set.
    pub(crate) fn new(
        form: &ConsultationForm,
        pet_type: ConsultPetType,
        urgency: Urgency,
    ) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            owner_name: form.owner_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            pet_type,
            pet_age: form.pet_age.clone(),
            symptoms: form.symptoms.clone(),
            urgency,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.urgency == Urgency::Urgent
    }
}
