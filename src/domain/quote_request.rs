use serde::Deserialize;
use serde::Serialize;

use super::ContactName;
use super::PhoneNumber;
use super::ServiceRequested;

/// Contact form fields as they travel on the wire. Every field defaults so
/// that a partial (or empty) JSON object still decodes and fails the
/// required-fields check, instead of failing the decode itself; only
/// malformed JSON is a decode error.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
}

/// A fully validated quote request. Exists only for the lifetime of one
/// submission: consumed at most once by the notifier, logged, and dropped.
/// There is no store and no identity.
#[derive(Debug)]
pub struct QuoteRequest {
    pub name: ContactName,
    pub phone: PhoneNumber,
    pub service: ServiceRequested,
}

/// Why a decoded body failed validation. The `Display` strings are the wire
/// messages: specific enough to fix the request, nothing internal.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuoteRequestError {
    /// One of the three fields is absent or blank.
    #[error("Missing required fields")]
    MissingFields,
    /// Fewer than 10 digits survive stripping the formatting.
    #[error("Invalid phone number")]
    InvalidPhone,
}

impl TryFrom<ContactFormData> for QuoteRequest {
    type Error = QuoteRequestError;

    // presence is checked for all three fields before the digit-count rule,
    // so `{"name": "", "phone": "123"}` reports missing fields, not an
    // invalid phone
    fn try_from(data: ContactFormData) -> Result<Self, Self::Error> {
        let name = ContactName::parse(data.name).map_err(|_| QuoteRequestError::MissingFields)?;
        let service =
            ServiceRequested::parse(data.service).map_err(|_| QuoteRequestError::MissingFields)?;
        if data.phone.trim().is_empty() {
            return Err(QuoteRequestError::MissingFields);
        }
        let phone = PhoneNumber::parse(data.phone).map_err(|_| QuoteRequestError::InvalidPhone)?;

        Ok(Self {
            name,
            phone,
            service,
        })
    }
}
