use validator::ValidateEmail;

/// A validated email address. Only configuration passes through here (the
/// notification sender and the operator recipient); customers never submit
/// an email address on the quote form.
#[derive(Debug)]
pub struct NotificationEmail(String);

impl NotificationEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        ValidateEmail::validate_email(&email)
            .then_some(Self(email.clone()))
            .ok_or(format!("Invalid email: {email:?}"))
    }
}

impl AsRef<str> for NotificationEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
