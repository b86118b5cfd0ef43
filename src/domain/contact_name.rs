// basic tuple struct (single unnamed private field)
/// Customer name as typed into the quote form. The only constraint is being
/// non-empty after trimming: names are display-only, never parsed further,
/// and carry no length cap.
///
/// Must be instantiated with `ContactName::parse`. The field is left
/// private, to prevent bypassing of `parse`, and mutation of the value.
#[derive(Debug)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(name: String) -> Result<Self, String> {
        match name.trim().is_empty() {
            false => Ok(Self(name)),
            true => Err(format!("Invalid name: {name:?}")),
        }
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str { &self.0 }
}
