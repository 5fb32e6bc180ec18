// crates/rxlabel-web/src/license/submit.rs
// License request form submission

use rxlabel_types::{LicenseField, LicenseRequest};

use crate::api::LicenseApi;
use crate::form::{self, FILL_REQUIRED, FormSurface};
use crate::toast::Notice;

pub const SUBMIT_LABEL: &str = "Submit Request";
pub const SUBMITTING_LABEL: &str = "Submitting…";
pub const SUBMITTED: &str = "✓ License request submitted! We will be in touch soon.";
pub const SUBMIT_FAILED: &str = "Submission failed. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    /// Only an accepted request closes the modal
    pub close_modal: bool,
}

impl SubmitOutcome {
    fn stay(notice: Notice) -> Self {
        Self { notice, close_modal: false }
    }
}

pub async fn submit_request<A, F>(api: &A, surface: &F) -> SubmitOutcome
where
    A: LicenseApi + ?Sized,
    F: FormSurface<LicenseField>,
{
    form::clear_errors(surface, &LicenseField::ALL);

    let request = LicenseRequest::from_fields(|field| surface.value(field));
    if !form::mark_missing(surface, &LicenseField::ALL, &request.missing()) {
        return SubmitOutcome::stay(Notice::error(FILL_REQUIRED));
    }

    surface.set_busy(true, SUBMITTING_LABEL);

    let outcome = match api.request_license(&request).await {
        Ok(reply) if reply.success => {
            form::clear_values(surface, &LicenseField::ALL);
            log::info!("License request submitted for {}", request.facility_name);
            SubmitOutcome { notice: Notice::success(SUBMITTED), close_modal: true }
        }
        Ok(reply) => {
            log::warn!("License request rejected: {}", reply.message_or("no message"));
            SubmitOutcome::stay(Notice::error(reply.message_or(SUBMIT_FAILED)))
        }
        Err(e) => {
            log::warn!("License request failed: {}", e);
            SubmitOutcome::stay(Notice::error(NETWORK_ERROR))
        }
    };

    surface.set_busy(false, SUBMIT_LABEL);
    outcome
}
