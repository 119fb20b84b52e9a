//! Contact form state for the lead capture in the footer.

use std::rc::Rc;

use yew::Reducible;

use crate::config::PHONE_COUNTRY_CODE;
use crate::models::LeadSubmission;
use crate::store::StoreError;

pub const SERVICE_INTERESTS: [&str; 5] = [
    "Full Brand Development",
    "Recipe & Menu Engineering",
    "Operations & Staffing",
    "Digital Strategy & AI",
    "Franchise Management",
];

/// How long the success banner stays up before the form unlocks again.
pub const SUCCESS_RESET_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    BrandName,
    Email,
    Phone,
    ServiceInterest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub brand_name: String,
    pub email: String,
    pub phone: String,
    pub service_interest: String,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand_name: String::new(),
            email: String::new(),
            phone: String::new(),
            service_interest: SERVICE_INTERESTS[0].to_string(),
        }
    }
}

impl LeadForm {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::BrandName => self.brand_name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
            LeadField::ServiceInterest => self.service_interest = value,
        }
    }

    /// Name and brand name are the only required fields.
    pub fn has_required(&self) -> bool {
        !self.name.trim().is_empty() && !self.brand_name.trim().is_empty()
    }

    pub fn submission(&self) -> LeadSubmission {
        LeadSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            brand_name: self.brand_name.clone(),
            service_interest: self.service_interest.clone(),
            phone: format!("{} {}", PHONE_COUNTRY_CODE, self.phone),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadFormState {
    pub form: LeadForm,
    pub status: SubmitStatus,
}

impl LeadFormState {
    pub fn is_locked(&self) -> bool {
        matches!(self.status, SubmitStatus::Loading | SubmitStatus::Success)
    }

    /// Marks the form as in flight and returns the payload to send, or
    /// `None` if a submission is already running or required fields are blank.
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        if self.is_locked() || !self.form.has_required() {
            return None;
        }
        self.status = SubmitStatus::Loading;
        Some(self.form.submission())
    }

    pub fn finish(&mut self, outcome: Result<(), StoreError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.form = LeadForm::default();
            }
            Err(err) => {
                self.status = SubmitStatus::Error(err.user_message());
            }
        }
    }

    /// Called when the success banner times out.
    pub fn clear_success(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}

pub enum LeadAction {
    Edit(LeadField, String),
    Begin,
    Finish(Result<(), StoreError>),
    ClearSuccess,
}

impl Reducible for LeadFormState {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadAction::Edit(field, value) => next.form.set(field, value),
            LeadAction::Begin => {
                next.begin_submit();
            }
            LeadAction::Finish(outcome) => next.finish(outcome),
            LeadAction::ClearSuccess => next.clear_success(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> LeadFormState {
        let mut state = LeadFormState::default();
        state.form.set(LeadField::Name, "Asha".into());
        state.form.set(LeadField::BrandName, "Masala Co".into());
        state.form.set(LeadField::Email, "asha@example.com".into());
        state.form.set(LeadField::Phone, "9876543210".into());
        state
    }

    #[test]
    fn phone_always_gets_country_code() {
        let state = filled();
        assert_eq!(state.form.submission().phone, "+91 9876543210");

        let empty = LeadForm::default();
        assert_eq!(empty.submission().phone, "+91 ");
    }

    #[test]
    fn default_interest_is_full_brand_development() {
        assert_eq!(LeadForm::default().service_interest, "Full Brand Development");
    }

    #[test]
    fn successful_submit_clears_form() {
        let mut state = filled();
        let payload = state.begin_submit().expect("payload");
        assert_eq!(payload.brand_name, "Masala Co");
        assert_eq!(state.status, SubmitStatus::Loading);
        assert!(state.is_locked());

        state.finish(Ok(()));
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.form, LeadForm::default());
        assert!(state.begin_submit().is_none());

        state.clear_success();
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn failed_submit_keeps_form_and_reports_message() {
        let mut state = filled();
        let before = state.form.clone();
        state.begin_submit().expect("payload");

        state.finish(Err(StoreError::Rejected {
            status: 401,
            body: json!({ "message": "Invalid API key" }),
        }));
        assert_eq!(state.status, SubmitStatus::Error("Invalid API key".into()));
        assert_eq!(state.form, before);

        // user can resubmit straight away
        assert!(!state.is_locked());
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn unreachable_store_gives_non_empty_error() {
        let mut state = filled();
        state.begin_submit();
        state.finish(Err(StoreError::Network(String::new())));
        match state.status {
            SubmitStatus::Error(msg) => assert!(!msg.is_empty()),
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[test]
    fn required_fields_gate_submission() {
        let mut state = LeadFormState::default();
        state.form.set(LeadField::Name, "Asha".into());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.status, SubmitStatus::Idle);

        state.form.set(LeadField::BrandName, "   ".into());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn edits_made_while_sending_survive_a_failure() {
        let state = Rc::new(filled());
        let state = state.reduce(LeadAction::Begin);
        let state = state.reduce(LeadAction::Edit(LeadField::Email, "fixed@example.com".into()));
        let state = state.reduce(LeadAction::Finish(Err(StoreError::Network("offline".into()))));
        assert_eq!(state.form.email, "fixed@example.com");
        assert_eq!(state.status, SubmitStatus::Error("offline".into()));
    }

    #[test]
    fn clear_success_does_not_touch_errors() {
        let mut state = filled();
        state.status = SubmitStatus::Error("boom".into());
        state.clear_success();
        assert_eq!(state.status, SubmitStatus::Error("boom".into()));
    }
}
