mod contact_name;
mod notification_email;
mod phone_number;
mod quote_request;
mod service_requested;
pub mod validation;

// allow external `use` statements to skip the submodule names
pub use contact_name::ContactName;
pub use notification_email::NotificationEmail;
pub use phone_number::PhoneNumber;
pub use phone_number::MIN_PHONE_DIGITS;
pub use quote_request::ContactFormData;
pub use quote_request::QuoteRequest;
pub use quote_request::QuoteRequestError;
pub use service_requested::ServiceRequested;
pub use service_requested::SERVICE_OPTIONS;
