use actix_web::http::header::ContentType;
use actix_web::http::Method;
use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpResponseBuilder;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::ContactFormData;
use crate::domain::QuoteRequest;
use crate::domain::QuoteRequestError;
use crate::email_client::EmailClient;

const SUCCESS_MESSAGE: &str = "Quote request submitted successfully. We will contact you shortly!";
const PARSE_FAILURE: &str = "Failed to process form submission";
const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Body of the single 200 response.
#[derive(Serialize)]
struct SubmissionAccepted {
    success: bool,
    message: &'static str,
}

/// Body of every non-2xx response. The message is specific enough to fix
/// the request; internals never leak here.
#[derive(Serialize)]
struct SubmissionRejected {
    error: String,
}

/// Every response from this endpoint, the preflight and the errors
/// included, carries permissive CORS headers: the form may be served from a
/// different origin than the function host (or from a local file during
/// development).
fn respond(status: StatusCode) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    builder
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"));
    builder
}

fn reject(
    status: StatusCode,
    error: String,
) -> HttpResponse {
    respond(status).json(SubmissionRejected { error })
}

/// `/api/contact`, any method.
///
/// Registered as a catch-all so the whole method table is handled here:
/// the framework's default 404/405 pages carry neither CORS headers nor a
/// JSON body. Order matters -- the preflight short-circuits before any
/// parsing, and validation finishes before the (best-effort) notification
/// goes out.
#[tracing::instrument(
    name = "Handling quote request submission",
    skip(request, body, email_client),
    fields(submission_id = %Uuid::new_v4()),
)]
pub async fn submit_contact_form(
    request: HttpRequest,
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
) -> HttpResponse {
    if request.method() == Method::OPTIONS {
        return respond(StatusCode::OK)
            .insert_header(ContentType::json())
            .finish();
    }
    if request.method() != Method::POST {
        return reject(
            StatusCode::METHOD_NOT_ALLOWED,
            METHOD_NOT_ALLOWED.to_string(),
        );
    }

    // an absent body decodes as `{}` so the missing-field check fires;
    // only broken JSON lands on the parse-failure path
    let data: ContactFormData = match body.is_empty() {
        true => ContactFormData::default(),
        false => match serde_json::from_slice(&body) {
            Ok(data) => data,
            // syntactically valid JSON of the wrong shape (an array, a
            // number where a string belongs) means the fields are missing
            // as far as the caller is concerned
            Err(e) if e.classify() == serde_json::error::Category::Data => {
                return reject(
                    StatusCode::BAD_REQUEST,
                    QuoteRequestError::MissingFields.to_string(),
                );
            }
            Err(e) => {
                tracing::error!(error.message = %e, "undecodable submission body");
                return reject(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PARSE_FAILURE.to_string(),
                );
            }
        },
    };

    let quote: QuoteRequest = match data.try_into() {
        Ok(quote) => quote,
        Err(e) => return reject(StatusCode::BAD_REQUEST, e.to_string()),
    };

    // best effort: the customer's 200 means "we recorded your request",
    // not "the operator inbox is reachable", so the outcome is logged and
    // never changes the response
    let received_at = Utc::now();
    let dispatch = email_client
        .send_quote_notification(&quote, received_at)
        .await;

    tracing::info!(
        customer_name = %quote.name.as_ref(),
        customer_phone = %quote.phone.as_ref(),
        service = %quote.service.as_ref(),
        notification = dispatch.label(),
        received_at = %received_at.to_rfc3339(),
        "recorded quote request"
    );

    respond(StatusCode::OK).json(SubmissionAccepted {
        success: true,
        message: SUCCESS_MESSAGE,
    })
}
