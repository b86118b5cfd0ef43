use super::ContactName;
use super::PhoneNumber;

/// Inline message for a blank name.
pub const NAME_REQUIRED: &str = "Please enter your name.";
/// Inline message for a phone number with fewer than 10 digits.
pub const PHONE_INVALID: &str = "Please enter a valid phone number.";

/// Per-field messages from one validation pass. `None` means the field
/// passed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool { self.name.is_none() && self.phone.is_none() }
}

/// The optimistic, client-side check, run before any network call. Built on
/// the same parse functions the server uses, so the two layers cannot
/// disagree on the digit-count rule.
///
/// `service` is deliberately not checked here: the form's select always
/// carries a value, and the server enforces it regardless.
pub fn validate(
    name: &str,
    phone: &str,
) -> FieldErrors {
    FieldErrors {
        name: ContactName::parse(name.to_owned())
            .err()
            .map(|_| NAME_REQUIRED),
        phone: PhoneNumber::parse(phone.to_owned())
            .err()
            .map(|_| PHONE_INVALID),
    }
}
