//! Pet Care Core Library
//!
//! Static pet care recommendations and the veterinary consultation form.
//!
//! # Architecture
//!
//! ```text
//!   PetSelector ──select──▶ CareGuide (owns Option<PetProfile>)
//!                                │
//!        ┌───────────────┬───────┴───────┬───────────────┐
//!        ▼               ▼               ▼               ▼
//!   FeedingPanel  TemperaturePanel   PlayPanel        ToyPanel
//!        │               │               │               │
//!        └───────────────┴─── catalog (static, per PetType) ┘
//!
//!   ConsultationFormState ──blur/submit──▶ rules ──valid──▶ SubmissionSink
//!                                                          (log | SQLite outbox)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (PetType, care records, consultation form)
//! - [`catalog`]: Static recommendation tables, content audit and digest
//! - [`panels`]: Panel view models and badge styles
//! - [`selector`]: Pet selector and the care guide coordinator
//! - [`form`]: Consultation form state machine, validation rules, sinks
//! - [`db`]: SQLite outbox for submitted consultations

pub mod catalog;
pub mod db;
pub mod form;
pub mod models;
pub mod panels;
pub mod selector;

// Re-export commonly used types
pub use db::Database;
pub use form::{
    ConsultationFormState, Field, FieldError, FormPhase, LoggingSink, Notice, SubmissionSink,
    SubmitError, ValidationErrors,
};
pub use models::{
    ConsultPetType, ConsultationForm, ConsultationRequest, Difficulty, FeedingRecord, PetIcon,
    PetProfile, PetType, PlayActivity, PlayActivityRecord, TemperatureRecord, Toy, ToyRecord,
    Urgency,
};
pub use panels::{BadgeStyle, CarePanel, CarePanels, PanelView};
pub use selector::{CareGuide, PetOption, PetSelector};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PetCareError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Content error: {0}")]
    ContentError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<db::DbError> for PetCareError {
    fn from(e: db::DbError) -> Self {
        PetCareError::DatabaseError(e.to_string())
    }
}

impl From<models::UnknownPetType> for PetCareError {
    fn from(e: models::UnknownPetType) -> Self {
        PetCareError::InvalidInput(e.to_string())
    }
}

impl From<form::UnknownField> for PetCareError {
    fn from(e: form::UnknownField) -> Self {
        PetCareError::InvalidInput(e.to_string())
    }
}

impl From<catalog::ContentError> for PetCareError {
    fn from(e: catalog::ContentError) -> Self {
        PetCareError::ContentError(e.to_string())
    }
}

impl From<SubmitError> for PetCareError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Invalid(errors) => PetCareError::ValidationFailed(errors.to_string()),
            SubmitError::Sink(sink) => PetCareError::DatabaseError(sink.to_string()),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for PetCareError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PetCareError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open the guide with a consultation outbox at the given path.
///
/// Without a path, submitted consultations are only logged.
#[uniffi::export]
pub fn open_pet_care(db_path: Option<String>) -> Result<Arc<PetCareCore>, PetCareError> {
    let outbox = db_path.map(Database::open).transpose()?;
    Ok(Arc::new(PetCareCore::new(outbox)))
}

/// Open the guide with an in-memory outbox (for testing).
#[uniffi::export]
pub fn open_pet_care_in_memory() -> Result<Arc<PetCareCore>, PetCareError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(PetCareCore::new(Some(db))))
}

/// Verify shipped care content; returns every defect found.
#[uniffi::export]
pub fn audit_content() -> Vec<String> {
    match catalog::audit() {
        Ok(()) => Vec::new(),
        Err(errors) => errors.iter().map(|e| e.to_string()).collect(),
    }
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe guide, form and outbox wrapper for FFI.
#[derive(uniffi::Object)]
pub struct PetCareCore {
    guide: Mutex<CareGuide>,
    form: Mutex<ConsultationFormState>,
    outbox: Option<Mutex<Database>>,
}

impl PetCareCore {
    fn new(outbox: Option<Database>) -> Self {
        Self {
            guide: Mutex::new(CareGuide::new()),
            form: Mutex::new(ConsultationFormState::new()),
            outbox: outbox.map(Mutex::new),
        }
    }
}

#[uniffi::export]
impl PetCareCore {
    // =========================================================================
    // Care Guide Operations
    // =========================================================================

    /// Selector options, flagging the current selection.
    pub fn pet_options(&self) -> Result<Vec<FfiPetOption>, PetCareError> {
        let guide = self.guide.lock()?;
        Ok(guide.options().into_iter().map(|o| o.into()).collect())
    }

    /// Select a pet by key ("dog", "cat", ...) and return the new panels.
    pub fn select_pet(&self, key: String) -> Result<FfiCarePanels, PetCareError> {
        let pet: PetType = key.parse()?;
        let mut guide = self.guide.lock()?;
        guide.select(pet);
        Ok(FfiCarePanels::from(&*guide))
    }

    /// Clear the selection and return placeholder panels.
    pub fn clear_selection(&self) -> Result<FfiCarePanels, PetCareError> {
        let mut guide = self.guide.lock()?;
        guide.clear();
        Ok(FfiCarePanels::from(&*guide))
    }

    /// Panels for the current selection.
    pub fn current_panels(&self) -> Result<FfiCarePanels, PetCareError> {
        let guide = self.guide.lock()?;
        Ok(FfiCarePanels::from(&*guide))
    }

    /// Hex SHA-256 of the shipped care content.
    pub fn content_digest(&self) -> Result<String, PetCareError> {
        Ok(catalog::content_digest()?)
    }

    // =========================================================================
    // Consultation Form Operations
    // =========================================================================

    /// Update one field. Field names are the form's camelCase names.
    pub fn form_change(&self, field: String, value: String) -> Result<(), PetCareError> {
        let field: Field = field.parse()?;
        let mut form = self.form.lock()?;
        form.change(field, &value);
        Ok(())
    }

    /// Validate one field; returns its error message, if any.
    pub fn form_blur(&self, field: String) -> Result<Option<String>, PetCareError> {
        let field: Field = field.parse()?;
        let mut form = self.form.lock()?;
        Ok(form.blur(field).map(|e| e.message.to_string()))
    }

    /// Validate and submit. On validation failure, read `form_errors`.
    pub fn form_submit(&self) -> Result<FfiNotice, PetCareError> {
        let mut form = self.form.lock()?;
        let submitted = match &self.outbox {
            Some(outbox) => {
                let mut db = outbox.lock()?;
                form.submit(&mut *db)?
            }
            None => form.submit(&mut LoggingSink::new())?,
        };
        Ok(FfiNotice {
            title: submitted.notice.title.to_string(),
            description: submitted.notice.description.to_string(),
            request_id: submitted.request.request_id,
        })
    }

    /// Current form values and phase.
    pub fn form_values(&self) -> Result<FfiConsultationForm, PetCareError> {
        let form = self.form.lock()?;
        Ok(FfiConsultationForm::from(&*form))
    }

    /// Current field errors, in form order.
    pub fn form_errors(&self) -> Result<Vec<FfiFieldError>, PetCareError> {
        let form = self.form.lock()?;
        Ok(form.errors().iter().map(|e| e.into()).collect())
    }

    /// Reset the form to its defaults.
    pub fn form_reset(&self) -> Result<(), PetCareError> {
        let mut form = self.form.lock()?;
        form.reset();
        Ok(())
    }

    // =========================================================================
    // Outbox Operations
    // =========================================================================

    /// Most recent stored consultations (empty without an outbox).
    pub fn list_consultations(&self, limit: u32) -> Result<Vec<FfiConsultation>, PetCareError> {
        let Some(outbox) = &self.outbox else {
            return Ok(Vec::new());
        };
        let db = outbox.lock()?;
        let requests = db.list_consultations(limit as usize)?;
        Ok(requests.into_iter().map(|r| r.into()).collect())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe pet profile.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPetProfile {
    pub key: String,
    pub display_name: String,
    pub icon: String,
}

impl From<&PetProfile> for FfiPetProfile {
    fn from(profile: &PetProfile) -> Self {
        Self {
            key: profile.pet_type.key().to_string(),
            display_name: profile.display_name.clone(),
            icon: profile.icon.asset_name().to_string(),
        }
    }
}

/// FFI-safe selector option.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPetOption {
    pub profile: FfiPetProfile,
    pub active: bool,
}

impl From<PetOption> for FfiPetOption {
    fn from(option: PetOption) -> Self {
        Self {
            profile: FfiPetProfile::from(&option.profile),
            active: option.active,
        }
    }
}

/// FFI-safe feeding guide.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFeedingRecord {
    pub daily_amount: String,
    pub frequency: String,
    pub recommended_foods: Vec<String>,
    pub avoid_foods: Vec<String>,
    pub tip: String,
}

impl From<&FeedingRecord> for FfiFeedingRecord {
    fn from(record: &FeedingRecord) -> Self {
        Self {
            daily_amount: record.daily_amount.to_string(),
            frequency: record.frequency.to_string(),
            recommended_foods: to_strings(record.recommended_foods),
            avoid_foods: to_strings(record.avoid_foods),
            tip: record.tip.to_string(),
        }
    }
}

/// FFI-safe temperature guide.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTemperatureRecord {
    pub ideal_range: String,
    pub cold_threshold: String,
    pub hot_threshold: String,
    pub tips: Vec<String>,
}

impl From<&TemperatureRecord> for FfiTemperatureRecord {
    fn from(record: &TemperatureRecord) -> Self {
        Self {
            ideal_range: record.ideal_range.to_string(),
            cold_threshold: record.cold_threshold.to_string(),
            hot_threshold: record.hot_threshold.to_string(),
            tips: to_strings(record.tips),
        }
    }
}

/// FFI-safe badge style.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBadgeStyle {
    pub tone: String,
    pub intensity: u8,
}

impl From<BadgeStyle> for FfiBadgeStyle {
    fn from(style: BadgeStyle) -> Self {
        let tone = match style.tone {
            panels::Tone::Primary => "primary",
            panels::Tone::Secondary => "secondary",
            panels::Tone::Accent => "accent",
            panels::Tone::Muted => "muted",
        };
        Self {
            tone: tone.to_string(),
            intensity: style.intensity,
        }
    }
}

/// FFI-safe play activity.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPlayActivity {
    pub name: String,
    pub duration: String,
    pub difficulty: String,
    pub difficulty_style: FfiBadgeStyle,
    pub benefits: String,
    pub description: String,
}

impl From<&PlayActivity> for FfiPlayActivity {
    fn from(activity: &PlayActivity) -> Self {
        Self {
            name: activity.name.to_string(),
            duration: activity.duration.to_string(),
            difficulty: activity.difficulty.label().to_string(),
            difficulty_style: BadgeStyle::for_difficulty(activity.difficulty.label()).into(),
            benefits: activity.benefits.to_string(),
            description: activity.description.to_string(),
        }
    }
}

/// FFI-safe toy recommendation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiToy {
    pub name: String,
    pub category: String,
    pub category_style: FfiBadgeStyle,
    pub price_range: String,
    pub rating: f64,
    pub benefits: Vec<String>,
    pub description: String,
}

impl From<&Toy> for FfiToy {
    fn from(toy: &Toy) -> Self {
        Self {
            name: toy.name.to_string(),
            category: toy.category.to_string(),
            category_style: BadgeStyle::for_category(toy.category).into(),
            price_range: toy.price_range.to_string(),
            rating: toy.rating,
            benefits: to_strings(toy.benefits),
            description: toy.description.to_string(),
        }
    }
}

/// FFI-safe set of panels. `None`/empty fields mean the placeholder is shown.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCarePanels {
    pub selected: Option<FfiPetProfile>,
    /// Panel titles in display order (heading or placeholder title)
    pub titles: Vec<String>,
    pub feeding: Option<FfiFeedingRecord>,
    pub temperature: Option<FfiTemperatureRecord>,
    pub activities: Vec<FfiPlayActivity>,
    pub toys: Vec<FfiToy>,
    pub shopping_tips: Vec<String>,
}

impl From<&CareGuide> for FfiCarePanels {
    fn from(guide: &CareGuide) -> Self {
        let panels = guide.panels();
        let play = panels.play.record();
        let toys = panels.toys.record();
        Self {
            selected: guide.selected().map(FfiPetProfile::from),
            titles: vec![
                panels.feeding.title().to_string(),
                panels.temperature.title().to_string(),
                panels.play.title().to_string(),
                panels.toys.title().to_string(),
            ],
            feeding: panels.feeding.record().map(|r| r.into()),
            temperature: panels.temperature.record().map(|r| r.into()),
            activities: play
                .map(|r| r.activities.iter().map(FfiPlayActivity::from).collect())
                .unwrap_or_default(),
            toys: toys
                .map(|r| r.toys.iter().map(FfiToy::from).collect())
                .unwrap_or_default(),
            shopping_tips: toys.map(|r| to_strings(r.shopping_tips)).unwrap_or_default(),
        }
    }
}

/// FFI-safe consultation form values.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConsultationForm {
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub pet_type: Option<String>,
    pub pet_age: String,
    pub symptoms: String,
    pub urgency: Option<String>,
    pub phase: String,
    /// Whether any value differs from the defaults
    pub dirty: bool,
}

impl From<&ConsultationFormState> for FfiConsultationForm {
    fn from(state: &ConsultationFormState) -> Self {
        let values = state.values();
        Self {
            owner_name: values.owner_name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            pet_type: values.pet_type.map(|p| p.label().to_string()),
            pet_age: values.pet_age.clone(),
            symptoms: values.symptoms.clone(),
            urgency: values.urgency.map(|u| u.label().to_string()),
            phase: format!("{:?}", state.phase()),
            dirty: state.is_dirty(),
        }
    }
}

/// FFI-safe field error.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFieldError {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FfiFieldError {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field.name().to_string(),
            message: error.message.to_string(),
        }
    }
}

/// FFI-safe post-submit notice.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNotice {
    pub title: String,
    pub description: String,
    pub request_id: String,
}

/// FFI-safe stored consultation.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConsultation {
    pub request_id: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub pet_type: String,
    pub pet_age: String,
    pub symptoms: String,
    pub urgency: String,
    pub submitted_at: String,
}

impl From<ConsultationRequest> for FfiConsultation {
    fn from(request: ConsultationRequest) -> Self {
        Self {
            request_id: request.request_id,
            owner_name: request.owner_name,
            email: request.email,
            phone: request.phone,
            pet_type: request.pet_type.label().to_string(),
            pet_age: request.pet_age,
            symptoms: request.symptoms,
            urgency: request.urgency.label().to_string(),
            submitted_at: request.submitted_at,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
