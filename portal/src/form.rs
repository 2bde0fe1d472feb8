//! The create-customer form: one draft, its errors, and the submission state.
//!
//! Validation only runs when a submit is triggered. A submit moves the form
//! through `idle -> validating -> submitting -> idle`; while submitting, further
//! submit triggers are ignored.

use serde_json::Value;

use crate::{
    client::{CustomerApi, SubmissionError},
    models::{CustomerDraft, CustomerRecord, DocumentRef, Field, FieldKindError},
    schema::{self, FieldErrors},
};

pub const SUCCESS_MESSAGE: &str = "Customer created successfully and synced to SAP!";
pub const FAILURE_FALLBACK: &str = "Failed to create customer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient toast shown once after a submission resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failure(err: &SubmissionError) -> Self {
        let message = err.to_string();
        Self {
            kind: NotificationKind::Error,
            message: if message.is_empty() {
                FAILURE_FALLBACK.to_string()
            } else {
                message
            },
        }
    }
}

/// What a submit trigger did before any network call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// A submission is already in flight; nothing happened.
    Busy,
    /// Validation failed; errors are on the form.
    Invalid,
    /// Validation passed and the form is now submitting this record.
    Ready(CustomerRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Busy,
    Invalid,
    Created(Value),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    draft: CustomerDraft,
    errors: FieldErrors,
    submitting: bool,
    notification: Option<Notification>,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Hands the pending toast to the caller; it is shown once.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> Result<(), FieldKindError> {
        self.draft.set_text(field, value)
    }

    pub fn set_flag(&mut self, field: Field, value: bool) -> Result<(), FieldKindError> {
        self.draft.set_flag(field, value)
    }

    pub fn attach_document(&mut self, field: Field, document: DocumentRef) -> Result<(), FieldKindError> {
        self.draft.attach_document(field, document)
    }

    /// Discards every edit and all errors. An in-flight submission keeps running.
    pub fn reset(&mut self) {
        self.draft = CustomerDraft::default();
        self.errors.clear();
        self.notification = None;
    }

    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.submitting {
            tracing::debug!("Submit ignored, submission already in progress");
            return SubmitStart::Busy;
        }

        match schema::validate(&self.draft) {
            Ok(record) => {
                self.errors.clear();
                self.notification = None;
                self.submitting = true;
                if record.has_documents() {
                    tracing::warn!(
                        name = %record.name,
                        "Attached documents are not transmitted with the customer payload"
                    );
                }
                SubmitStart::Ready(record)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), %errors, "Customer draft failed validation");
                self.errors = errors;
                SubmitStart::Invalid
            }
        }
    }

    /// Settles an in-flight submission with the backend's answer.
    pub fn complete(&mut self, result: Result<Value, SubmissionError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(body) => {
                tracing::info!("Customer created");
                self.reset();
                self.notification = Some(Notification::success());
                SubmitOutcome::Created(body)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Customer submission failed");
                self.notification = Some(Notification::failure(&e));
                SubmitOutcome::Failed
            }
        }
    }

    /// Validates and, when valid, submits through `api` in one step.
    pub async fn submit(&mut self, api: &dyn CustomerApi) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitStart::Busy => SubmitOutcome::Busy,
            SubmitStart::Invalid => SubmitOutcome::Invalid,
            SubmitStart::Ready(record) => {
                let result = api.create_customer(&record).await;
                self.complete(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;

    /// Records every call and answers with a canned result.
    struct StubApi {
        calls: Mutex<Vec<CustomerRecord>>,
        reject_with: Option<&'static str>,
    }

    impl StubApi {
        fn accepting() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reject_with: None,
            }
        }

        fn rejecting(message: &'static str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reject_with: Some(message),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CustomerApi for StubApi {
        async fn create_customer(&self, record: &CustomerRecord) -> Result<Value, SubmissionError> {
            self.calls.lock().unwrap().push(record.clone());
            match self.reject_with {
                None => Ok(json!({ "customer_id": "C-1001" })),
                Some(message) => Err(SubmissionError::Rejected {
                    status: StatusCode::CONFLICT,
                    message: Some(message.to_string()),
                }),
            }
        }
    }

    fn filled_form() -> CustomerForm {
        let mut form = CustomerForm::new();
        let values = [
            (Field::Name, "Acme"),
            (Field::GstNumber, "27AABCT1234G1Z0"),
            (Field::AddressLine1, "123 Main St"),
            (Field::Pincode, "700001"),
            (Field::City, "Kolkata"),
            (Field::State, "West Bengal"),
            (Field::ContactName, "J Doe"),
            (Field::MobileNumber, "9876543210"),
            (Field::Email, "j@acme.com"),
        ];
        for (field, value) in values {
            form.set_text(field, value).unwrap();
        }
        form
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_api() {
        let api = StubApi::accepting();
        let mut form = filled_form();
        form.set_text(Field::City, "").unwrap();
        form.set_text(Field::Email, "nope").unwrap();

        assert_eq!(form.submit(&api).await, SubmitOutcome::Invalid);
        assert_eq!(api.call_count(), 0);
        assert_eq!(form.error(Field::City), Some("City is required"));
        assert_eq!(form.error(Field::Email), Some("Valid email is required"));
        assert!(!form.is_submitting());
        assert_eq!(form.draft().email, "nope");
    }

    #[tokio::test]
    async fn success_resets_the_draft_and_notifies() {
        let api = StubApi::accepting();
        let mut form = filled_form();

        let outcome = form.submit(&api).await;

        assert_eq!(outcome, SubmitOutcome::Created(json!({ "customer_id": "C-1001" })));
        assert_eq!(api.call_count(), 1);
        assert_eq!(api.calls.lock().unwrap()[0].name, "Acme");
        assert_eq!(form.draft(), &CustomerDraft::default());
        assert_eq!(form.take_notification(), Some(Notification::success()));
        assert_eq!(form.notification(), None);
    }

    #[tokio::test]
    async fn failure_keeps_the_draft_and_shows_backend_message() {
        let api = StubApi::rejecting("GST already exists");
        let mut form = filled_form();
        let before = form.draft().clone();

        assert_eq!(form.submit(&api).await, SubmitOutcome::Failed);

        assert_eq!(form.draft(), &before);
        let toast = form.notification().unwrap();
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, "GST already exists");
        assert!(!form.is_submitting());
    }

    #[test]
    fn second_trigger_while_submitting_is_ignored() {
        let mut form = filled_form();

        let SubmitStart::Ready(_) = form.begin_submit() else {
            panic!("expected a ready submission");
        };
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), SubmitStart::Busy);
        assert_eq!(form.begin_submit(), SubmitStart::Busy);

        form.complete(Err(SubmissionError::Timeout(Duration::from_secs(15))));
        assert!(!form.is_submitting());
        assert!(matches!(form.begin_submit(), SubmitStart::Ready(_)));
    }

    #[test]
    fn reset_restores_defaults_after_any_edits() {
        let mut form = filled_form();
        form.set_text(Field::Country, "Nepal").unwrap();
        form.set_text(Field::CreditLimit, "5000").unwrap();
        form.set_flag(Field::DocPan, true).unwrap();
        form.attach_document(Field::GstDocument, DocumentRef::new("gst.pdf", 12))
            .unwrap();
        form.set_text(Field::Name, "").unwrap();
        assert_eq!(form.begin_submit(), SubmitStart::Invalid);

        form.reset();
        assert_eq!(form.draft(), &CustomerDraft::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.draft().country, "India");

        form.reset();
        assert_eq!(form.draft(), &CustomerDraft::default());
    }

    #[test]
    fn edits_do_not_revalidate() {
        let mut form = CustomerForm::new();
        assert_eq!(form.begin_submit(), SubmitStart::Invalid);
        form.set_text(Field::Name, "Acme").unwrap();
        assert_eq!(form.error(Field::Name), Some("Name is required"));
    }
}
