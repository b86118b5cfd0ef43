/// Minimum digits for a dialable US number (area code + subscriber number).
pub const MIN_PHONE_DIGITS: usize = 10;

/// Phone number as typed by the customer. Validity is defined by digit
/// count, not format: stripping every non-digit character must leave at
/// least `MIN_PHONE_DIGITS` digits. The original string is preserved for
/// display and for the operator notification; the stripped form is used for
/// validation only, never stored.
#[derive(Debug)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(phone: String) -> Result<Self, String> {
        match digit_count(&phone) >= MIN_PHONE_DIGITS {
            true => Ok(Self(phone)),
            false => Err(format!("Invalid phone number: {phone:?}")),
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str { &self.0 }
}

fn digit_count(phone: &str) -> usize { phone.chars().filter(char::is_ascii_digit).count() }
