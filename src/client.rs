use reqwest::Client;

use crate::domain::validation::validate;
use crate::domain::validation::FieldErrors;
use crate::domain::ContactFormData;
use crate::domain::SERVICE_OPTIONS;

/// Fallback when the server rejects a submission without a readable `error`
/// field in the body.
const SUBMIT_FAILED: &str = "Failed to submit form";
/// Fallback when the request itself could not be made.
const TRANSPORT_FAILED: &str = "An error occurred";

/// Lifecycle of one form instance.
///
/// `Submitting` only exists while `submit` runs; because `submit` borrows
/// the form exclusively, a second submission cannot start while one is in
/// flight -- the ownership-level rendition of a disabled submit button. Two
/// separate instances (two tabs) are not coordinated; server-side dedup is
/// out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Programmatic counterpart of the quote form on the brochure page: field
/// state, the optimistic validation gate, and one POST per user-initiated
/// submission. No automatic retry anywhere.
pub struct ContactFormClient {
    http_client: Client,
    endpoint: String,
    state: FormState,
    field_errors: FieldErrors,
    name: String,
    phone: String,
    service: String,
}

impl ContactFormClient {
    /// `endpoint` is the absolute URL of the submission route, e.g.
    /// `http://localhost:8000/api/contact`.
    pub fn new(endpoint: String) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
            state: FormState::Idle,
            field_errors: FieldErrors::default(),
            name: String::new(),
            phone: String::new(),
            service: SERVICE_OPTIONS[0].to_string(),
        }
    }

    pub fn state(&self) -> &FormState { &self.state }

    /// Inline messages from the last `submit` attempt.
    pub fn field_errors(&self) -> &FieldErrors { &self.field_errors }

    pub fn name(&self) -> &str { &self.name }

    pub fn phone(&self) -> &str { &self.phone }

    pub fn service(&self) -> &str { &self.service }

    pub fn set_name(&mut self, name: impl Into<String>) { self.name = name.into(); }

    pub fn set_phone(&mut self, phone: impl Into<String>) { self.phone = phone.into(); }

    pub fn set_service(&mut self, service: impl Into<String>) { self.service = service.into(); }

    /// Submit the current fields.
    ///
    /// Invalid fields are reported through `field_errors` and never touch
    /// the network. A rejected or failed submission lands in
    /// `FormState::Error` with a human-readable message and the fields kept
    /// for correction; a successful one clears the fields.
    pub async fn submit(&mut self) -> &FormState {
        self.field_errors = validate(&self.name, &self.phone);
        if !self.field_errors.is_empty() {
            self.state = FormState::Idle;
            return &self.state;
        }

        self.state = FormState::Submitting;
        let body = ContactFormData {
            name: self.name.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await;

        self.state = match response {
            Ok(response) if response.status().is_success() => {
                self.clear_fields();
                FormState::Success
            }
            Ok(response) => FormState::Error(error_message(response).await),
            Err(_) => FormState::Error(TRANSPORT_FAILED.to_string()),
        };
        &self.state
    }

    /// Leave the `Success` confirmation and return to a blank, idle form,
    /// ready for another submission.
    pub fn acknowledge(&mut self) {
        if self.state == FormState::Success {
            self.state = FormState::Idle;
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.service = SERVICE_OPTIONS[0].to_string();
    }
}

/// Prefer the server's `error` field; fall back to a generic message when
/// the body is absent or unreadable.
async fn error_message(response: reqwest::Response) -> String {
    response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("error")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| SUBMIT_FAILED.to_string())
}
