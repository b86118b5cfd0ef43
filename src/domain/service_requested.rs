/// Labels offered by the quote form's select; the first is the default
/// selection.
pub const SERVICE_OPTIONS: [&str; 4] = [
    "I have a torn screen",
    "I need a full rescreen",
    "Storm damage repair",
    "Just asking for a quote",
];

/// Service label from the quote form. The form offers `SERVICE_OPTIONS`,
/// but the server accepts any non-blank label so new options can ship in
/// the page without a backend release.
#[derive(Debug)]
pub struct ServiceRequested(String);

impl ServiceRequested {
    pub fn parse(service: String) -> Result<Self, String> {
        match service.trim().is_empty() {
            false => Ok(Self(service)),
            true => Err(format!("Invalid service: {service:?}")),
        }
    }
}

impl AsRef<str> for ServiceRequested {
    fn as_ref(&self) -> &str { &self.0 }
}
