//! Admission intake workflow.
//!
//! A form starts out `Editing`, moves to `Submitting` while the draft is being
//! sent to the backend, and ends either `Submitted` (terminal) or back in
//! `Editing` with the draft untouched and a one-shot failure notice.

use crate::api::ApiResult;
use crate::models::AdmissionApplication;
use serde_json::Value;

pub const SUBMISSION_FAILED: &str = "Submission failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct AdmissionForm {
    draft: AdmissionApplication,
    state: FormState,
    notice: Option<&'static str>,
}

impl AdmissionForm {
    pub fn new() -> Self {
        Self::with_draft(AdmissionApplication::default())
    }

    pub fn with_draft(draft: AdmissionApplication) -> Self {
        Self {
            draft,
            state: FormState::Editing,
            notice: None,
        }
    }

    pub fn draft(&self) -> &AdmissionApplication {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Failure notice to show with the next render, cleared once taken
    pub fn take_notice(&mut self) -> Option<&'static str> {
        self.notice.take()
    }

    /// Move to `Submitting` and hand out the body to send.
    ///
    /// Returns `None` unless the form is `Editing`, so a draft is never sent
    /// twice from the same form.
    pub fn begin_submit(&mut self) -> Option<AdmissionApplication> {
        if self.state != FormState::Editing {
            return None;
        }
        self.state = FormState::Submitting;
        self.notice = None;
        Some(self.draft.clone())
    }

    /// Record the backend's answer to the request started by `begin_submit`
    pub fn finish_submit(&mut self, result: ApiResult<Value>) {
        if self.state != FormState::Submitting {
            return;
        }
        match result {
            Ok(_) => {
                self.state = FormState::Submitted;
            }
            Err(e) => {
                tracing::error!("Admission submission failed: {}", e);
                self.state = FormState::Editing;
                self.notice = Some(SUBMISSION_FAILED);
            }
        }
    }
}

impl Default for AdmissionForm {
    fn default() -> Self {
        Self::new()
    }
}
