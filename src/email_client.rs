use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;
use reqwest::Client;
use secrecy::ExposeSecret;
use secrecy::Secret;
use serde::Serialize;

use crate::domain::NotificationEmail;
use crate::domain::QuoteRequest;

/// What became of one notification attempt. `Skipped` (no provider
/// configured) counts as "nothing to do", not an error; `Failed` is logged
/// and swallowed by the caller, never surfaced to the customer.
#[derive(Debug)]
pub enum DispatchOutcome {
    Sent,
    Skipped,
    Failed(String),
}

impl DispatchOutcome {
    /// Stable label for log fields.
    pub fn label(&self) -> &'static str {
        match self {
            DispatchOutcome::Sent => "sent",
            DispatchOutcome::Skipped => "skipped",
            DispatchOutcome::Failed(_) => "failed",
        }
    }
}

// establishing a HTTP connection is expensive; the client is built once,
// shared across the app via `web::Data`, and reuses connections across
// submissions

/// Adapter for the transactional-email provider's send-mail endpoint.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: NotificationEmail,
    recipient: NotificationEmail,
    authorization_token: Option<Secret<String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: NotificationEmail,
        recipient: NotificationEmail,
        authorization_token: Option<Secret<String>>,
        timeout: Duration,
    ) -> Self {
        // a hung provider must not hold the submission open until the
        // caller's own HTTP timeout; cap it here
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            sender,
            recipient,
            authorization_token,
        }
    }

    /// Notify the operator about one validated quote request: a single POST,
    /// bearer-authenticated, plaintext body, no retry. Every failure mode is
    /// folded into the returned `DispatchOutcome`; this never errors.
    pub async fn send_quote_notification(
        &self,
        quote: &QuoteRequest,
        received_at: DateTime<Utc>,
    ) -> DispatchOutcome {
        let token = match &self.authorization_token {
            Some(token) => token,
            None => {
                tracing::info!("no email provider configured, skipping notification");
                return DispatchOutcome::Skipped;
            }
        };

        let subject = format!("New quote request from {}", quote.name.as_ref());
        let text_body = format!(
            "Name: {}\nPhone: {}\nService: {}\nReceived: {}",
            quote.name.as_ref(),
            quote.phone.as_ref(),
            quote.service.as_ref(),
            received_at.to_rfc3339(),
        );
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: self.recipient.as_ref(),
            subject: &subject,
            text_body: &text_body,
        };

        let response = self
            .http_client
            .post(format!("{}/email", self.base_url))
            .bearer_auth(token.expose_secret())
            .json(&request_body)
            .send()
            .await;

        match response.and_then(|r| r.error_for_status()) {
            Ok(_) => DispatchOutcome::Sent,
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "could not deliver quote notification"
                );
                DispatchOutcome::Failed(e.to_string())
            }
        }
    }
}
