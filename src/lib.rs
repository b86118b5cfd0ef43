//! Backend for the Sunrise Screening marketing site: serves the brochure
//! page and the quote-request submission endpoint, and forwards accepted
//! submissions to the operator inbox via a transactional-email provider.
//!
//! Submissions are never stored; each one lives for the duration of a single
//! request.

pub mod client;
pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
