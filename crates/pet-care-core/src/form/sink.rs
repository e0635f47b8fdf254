//! Submission sinks for validated consultation requests.

use serde::Serialize;
use thiserror::Error;

use crate::models::ConsultationRequest;

/// Sink errors.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Storage error: {0}")]
    Storage(#[from] crate::db::DbError),

    #[error("Sink rejected request: {0}")]
    Rejected(String),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Receives validated consultation requests.
///
/// Submission is synchronous: `Ok(())` means the request was accepted.
pub trait SubmissionSink {
    fn submit(&mut self, request: &ConsultationRequest) -> SinkResult<()>;
}

/// Sink that only logs the request. No delivery takes place.
#[derive(Debug, Default, Clone)]
pub struct LoggingSink {
    submitted: usize,
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests accepted so far.
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl SubmissionSink for LoggingSink {
    fn submit(&mut self, request: &ConsultationRequest) -> SinkResult<()> {
        tracing::info!(
            request_id = %request.request_id,
            owner_name = %request.owner_name,
            email = %request.email,
            phone = %request.phone,
            pet_type = %request.pet_type,
            pet_age = %request.pet_age,
            urgency = %request.urgency,
            symptoms = %request.symptoms,
            "Consultation submitted"
        );
        self.submitted += 1;
        Ok(())
    }
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for &mut S {
    fn submit(&mut self, request: &ConsultationRequest) -> SinkResult<()> {
        (**self).submit(request)
    }
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn submit(&mut self, request: &ConsultationRequest) -> SinkResult<()> {
        (**self).submit(request)
    }
}

/// Confirmation shown after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SUBMITTED_NOTICE: Notice = Notice {
    title: "Consultation request sent",
    description: "A veterinarian will contact you shortly.",
};
