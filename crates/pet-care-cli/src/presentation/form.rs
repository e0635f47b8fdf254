//! Consultation form output.

use std::fmt::Write;

use console::style;
use pet_care_core::form::{Submitted, ValidationErrors};
use pet_care_core::models::ConsultationRequest;

/// One line per failing field, in form order.
pub fn render_field_errors(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for error in errors.iter() {
        let _ = writeln!(
            out,
            "  {} {}: {}",
            style("✗").red(),
            error.field.label(),
            error.message
        );
    }
    out
}

/// Confirmation for an accepted request.
pub fn render_notice(submitted: &Submitted) -> String {
    format!(
        "{} {}\n{}\nRequest ID: {}\n",
        style("✓").green(),
        style(submitted.notice.title).bold(),
        submitted.notice.description,
        submitted.request.request_id
    )
}

/// Summary block for a stored request.
pub fn render_consultation(request: &ConsultationRequest) -> String {
    let urgency = if request.is_urgent() {
        style(request.urgency.label()).red().bold()
    } else {
        style(request.urgency.label())
    };
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}  [{}]",
        style(&request.submitted_at).dim(),
        style(&request.owner_name).bold(),
        urgency
    );
    let _ = writeln!(
        out,
        "  {} ({}), {} / {}",
        request.pet_type, request.pet_age, request.email, request.phone
    );
    let _ = writeln!(out, "  {}", request.symptoms);
    out
}
